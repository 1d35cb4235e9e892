//! # Insertion Engine
//!
//! Pure `(document text, directive) → (document text, error?)` transform.
//!
//! ## Mode Semantics
//!
//! ### SetIfMissing
//! - Creates missing parent objects along the pointer
//! - Leaves the document untouched when the leaf key exists, even as `null`
//!
//! ### Overwrite
//! - Creates missing parent objects, then replaces the leaf
//!
//! ### MergeObject
//! - Template must be an object
//! - Target becomes an object if absent or of another kind
//! - Deep merge (see [`merge_into`](crate::merge_into))
//!
//! ### AppendToArray
//! - Target becomes an array if absent or of another kind
//! - Template is pushed as the last element
//!
//! ### ReplaceRoot
//! - Template becomes the whole document; pointer is ignored
//!
//! Every mode works on an owned tree parsed from the input, so a failed
//! directive never leaks a half-applied document.

use crate::directive::{InsertDirective, InsertMode};
use crate::errors::{PatchError, PatchResult};
use crate::merge::merge_into;
use crate::pointer::split_pointer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

/// Result of [`apply`]: the text to show plus an optional error message
///
/// On error `text` is the caller's input, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOutcome {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Apply a directive to a document. Never fails; errors come back as data.
#[instrument(skip_all, fields(pointer = %directive.pointer, mode = %directive.mode))]
pub fn apply(current: &str, directive: &InsertDirective) -> PatchOutcome {
    match try_apply(current, directive) {
        Ok(text) => PatchOutcome { text, error: None },
        Err(err) => {
            warn!(error = %err, "Directive rejected");
            PatchOutcome {
                text: current.to_string(),
                error: Some(err.to_string()),
            }
        }
    }
}

/// Apply a directive, returning the pretty-printed document or a typed error.
pub fn try_apply(current: &str, directive: &InsertDirective) -> PatchResult<String> {
    let mut root = parse_or_create_root(current)?;

    if directive.mode == InsertMode::ReplaceRoot {
        debug!("Replacing document root");
        let new_root = parse_template(&directive.template_json)?;
        return Ok(pretty(&new_root));
    }

    let template = parse_template(&directive.template_json)?;
    let segments = split_pointer(&directive.pointer);

    if segments.last().is_some_and(|leaf| leaf.is_empty()) {
        return Err(PatchError::invalid_pointer("leaf empty"));
    }

    match directive.mode {
        InsertMode::SetIfMissing => set_if_missing(&mut root, &segments, template)?,
        InsertMode::Overwrite => overwrite(&mut root, &segments, template)?,
        InsertMode::MergeObject => merge_object(&mut root, &segments, template)?,
        InsertMode::AppendToArray => append_to_array(&mut root, &segments, template)?,
        InsertMode::ReplaceRoot => {}
    }

    Ok(pretty(&root))
}

/// Parse the current document; blank or non-object roots become `{}`
fn parse_or_create_root(text: &str) -> PatchResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    // Untrimmed so error positions match the caller's text
    let parsed: Value = serde_json::from_str(text).map_err(|e| PatchError::document_parse(&e))?;

    if parsed.is_object() {
        Ok(parsed)
    } else {
        debug!("Document root is not an object, starting from an empty object");
        Ok(Value::Object(Map::new()))
    }
}

fn parse_template(text: &str) -> PatchResult<Value> {
    serde_json::from_str(text).map_err(|e| PatchError::template_parse(&e))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// What a missing leaf is created as while walking a pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafKind {
    Object,
    Array,
}

impl LeafKind {
    fn empty(self) -> Value {
        match self {
            LeafKind::Object => Value::Object(Map::new()),
            LeafKind::Array => Value::Array(Vec::new()),
        }
    }
}

/// Walk `segments` from `root`, creating missing keys along the way.
///
/// Intermediate keys are created as objects; a missing final key is created
/// as `leaf`. Descending through anything but an object fails.
fn ensure_path<'a>(
    root: &'a mut Value,
    segments: &[String],
    leaf: LeafKind,
) -> PatchResult<&'a mut Value> {
    let mut current = root;

    for (i, segment) in segments.iter().enumerate() {
        let is_leaf = i + 1 == segments.len();

        let Value::Object(map) = current else {
            let parent = if i == 0 { "" } else { segments[i - 1].as_str() };
            return Err(PatchError::non_object_parent(parent));
        };

        current = map.entry(segment.clone()).or_insert_with(|| {
            debug!(segment = %segment, is_leaf, "Creating missing key");
            if is_leaf {
                leaf.empty()
            } else {
                LeafKind::Object.empty()
            }
        });
    }

    Ok(current)
}

/// Resolve the object that owns the final segment
fn ensure_parent<'a>(
    root: &'a mut Value,
    segments: &'a [String],
) -> PatchResult<(&'a mut Map<String, Value>, &'a str)> {
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(PatchError::invalid_pointer("leaf empty"));
    };

    match ensure_path(root, parents, LeafKind::Object)? {
        Value::Object(parent) => Ok((parent, leaf.as_str())),
        _ => {
            let name = parents.last().map(String::as_str).unwrap_or("");
            Err(PatchError::non_object_parent(name))
        }
    }
}

fn set_if_missing(root: &mut Value, segments: &[String], template: Value) -> PatchResult<()> {
    let (parent, leaf) = ensure_parent(root, segments)?;

    if parent.contains_key(leaf) {
        debug!(leaf, "Key already present, leaving document unchanged");
        return Ok(());
    }

    parent.insert(leaf.to_string(), template);
    Ok(())
}

fn overwrite(root: &mut Value, segments: &[String], template: Value) -> PatchResult<()> {
    let (parent, leaf) = ensure_parent(root, segments)?;
    parent.insert(leaf.to_string(), template);
    Ok(())
}

fn merge_object(root: &mut Value, segments: &[String], template: Value) -> PatchResult<()> {
    let Value::Object(incoming) = template else {
        return Err(PatchError::TemplateNotObject);
    };

    let target = ensure_path(root, segments, LeafKind::Object)?;
    if !target.is_object() {
        debug!("Merge target is not an object, replacing it");
        *target = LeafKind::Object.empty();
    }

    if let Value::Object(existing) = target {
        merge_into(existing, &incoming);
    }
    Ok(())
}

fn append_to_array(root: &mut Value, segments: &[String], template: Value) -> PatchResult<()> {
    if segments.is_empty() {
        return Err(PatchError::RootTarget {
            mode: InsertMode::AppendToArray,
        });
    }

    let target = ensure_path(root, segments, LeafKind::Array)?;
    if !target.is_array() {
        debug!("Append target is not an array, replacing it");
        *target = LeafKind::Array.empty();
    }

    if let Value::Array(items) = target {
        items.push(template);
    }
    Ok(())
}
