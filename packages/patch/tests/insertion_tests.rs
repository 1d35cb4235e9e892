//! Insertion engine behaviour through the public API

use serde_json::{json, Value};
use workbench_patch::{apply, try_apply, InsertDirective, InsertMode, PatchError};

fn directive(pointer: &str, mode: InsertMode, template: &str) -> InsertDirective {
    InsertDirective::adhoc(pointer, mode, template)
}

fn parsed(text: &str) -> Value {
    serde_json::from_str(text).expect("engine output should be valid JSON")
}

const SAMPLE_DOCUMENTS: &[&str] = &[
    r#"{"code": "myblock"}"#,
    r#"{"code": "myblock", "enabled": false, "behaviors": [{"name": "Falling"}]}"#,
    r#"{"client": {"renderer": "Shape", "texture": {"base": "entity/x"}}, "server": null}"#,
    r#"{"attributes": {"attackPower": 10}, "drops": []}"#,
];

#[test]
fn test_overwrite_code_on_empty_document() {
    let outcome = apply("", &directive("/code", InsertMode::Overwrite, "\"myblock\""));
    assert_eq!(outcome.error, None);
    assert_eq!(outcome.text, "{\n  \"code\": \"myblock\"\n}");
}

#[test]
fn test_set_if_missing_is_noop_when_present() {
    let cases = [
        ("/code", SAMPLE_DOCUMENTS[0]),
        ("/enabled", SAMPLE_DOCUMENTS[1]),
        ("/client/renderer", SAMPLE_DOCUMENTS[2]),
        ("/server", SAMPLE_DOCUMENTS[2]),
        ("/attributes/attackPower", SAMPLE_DOCUMENTS[3]),
    ];

    for (pointer, doc) in cases {
        let outcome = apply(doc, &directive(pointer, InsertMode::SetIfMissing, "\"replacement\""));
        assert!(outcome.is_ok(), "{pointer}: {:?}", outcome.error);
        assert_eq!(parsed(&outcome.text), parsed(doc), "{pointer} should be untouched");
        assert_eq!(
            outcome.text,
            serde_json::to_string_pretty(&parsed(doc)).unwrap(),
            "{pointer} should be the re-serialized input"
        );
    }
}

#[test]
fn test_overwrite_is_idempotent() {
    let d = directive("/client/texture", InsertMode::Overwrite, r#"{"base": "entity/myentity"}"#);

    for doc in SAMPLE_DOCUMENTS {
        let once = apply(doc, &d);
        let twice = apply(&once.text, &d);
        assert!(once.is_ok() && twice.is_ok());
        assert_eq!(once.text, twice.text);
    }
}

#[test]
fn test_append_twice_yields_two_entries() {
    let d = directive("/behaviors", InsertMode::AppendToArray, r#"{"name":"Falling"}"#);

    let first = apply("{}", &d);
    let second = apply(&first.text, &d);

    assert!(second.is_ok());
    assert_eq!(
        parsed(&second.text),
        json!({"behaviors": [{"name": "Falling"}, {"name": "Falling"}]})
    );
}

#[test]
fn test_descending_into_scalar_is_structural_error() {
    let original = r#"{"a":1}"#;
    let outcome = apply(original, &directive("/a/b", InsertMode::Overwrite, "1"));

    assert_eq!(outcome.text, original);
    let message = outcome.error.expect("should fail");
    assert!(message.contains("non-object"), "{message}");

    let err = try_apply(original, &directive("/a/b", InsertMode::Overwrite, "1")).unwrap_err();
    assert!(!err.is_parse_error());
}

#[test]
fn test_merge_with_non_object_template_keeps_input() {
    let original = r#"{"attributes": {"a": 1}}"#;
    let outcome = apply(original, &directive("/attributes", InsertMode::MergeObject, "\"nope\""));

    assert_eq!(outcome.text, original);
    assert_eq!(
        outcome.error.as_deref(),
        Some(PatchError::TemplateNotObject.to_string().as_str())
    );
}

#[test]
fn test_escaped_pointer_segments() {
    let outcome = apply("{}", &directive("/a~1b/c~0d", InsertMode::Overwrite, "1"));
    assert_eq!(parsed(&outcome.text), json!({"a/b": {"c~d": 1}}));
}

#[test]
fn test_replace_root_with_grid_recipe() {
    let template = r#"{
  "ingredientPattern": "GS,S_",
  "width": 2,
  "height": 2
}"#;
    let outcome = apply(r#"{"code": "old"}"#, &directive("/", InsertMode::ReplaceRoot, template));
    assert!(outcome.is_ok());
    assert_eq!(outcome.text, template);
}

#[test]
fn test_replace_root_with_bad_template() {
    let outcome = apply("{}", &directive("/", InsertMode::ReplaceRoot, "{ \"width\": }"));
    assert_eq!(outcome.text, "{}");
    assert!(outcome.error.unwrap().starts_with("JSON parse error in template"));
}
