use super::read_input;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use workbench_catalog::{find_option, DocumentKind};
use workbench_patch::{format_parse_report, try_apply, InsertDirective, InsertMode, PatchError};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON document to patch (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Catalog option to apply, by display name
    #[arg(short, long, conflicts_with_all = ["pointer", "mode", "template"])]
    pub option: Option<String>,

    /// Catalog to search for --option (defaults to config)
    #[arg(short, long)]
    pub kind: Option<DocumentKind>,

    /// Target location, e.g. /attributes/handbook
    #[arg(short, long, requires = "mode")]
    pub pointer: Option<String>,

    /// Insertion mode (SetIfMissing, Overwrite, MergeObject, AppendToArray, ReplaceRoot)
    #[arg(short, long, requires = "template")]
    pub mode: Option<InsertMode>,

    /// Template JSON value
    #[arg(short, long, requires = "mode")]
    pub template: Option<String>,

    /// Write the result back to FILE instead of printing it
    #[arg(short, long, requires = "file")]
    pub write: bool,
}

pub fn apply(args: ApplyArgs, config: &Config) -> Result<()> {
    let directive = resolve_directive(&args, config)?;
    let source = read_input(args.file.as_deref(), None)?;
    let source_name = args
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let patched = match try_apply(&source, &directive) {
        Ok(text) => text,
        Err(err) => {
            print_report(&err, &source, &source_name, &directive);
            return Err(err.into());
        }
    };

    info!(option = %directive.display_name, mode = %directive.mode, "Applied directive");

    match args.file.filter(|_| args.write) {
        Some(path) => {
            fs::write(&path, format!("{}\n", patched))?;
            println!(
                "  {} Added: {} → {}",
                "✓".green(),
                directive.display_name,
                path.display()
            );
        }
        None => println!("{}", patched),
    }

    Ok(())
}

fn resolve_directive(args: &ApplyArgs, config: &Config) -> Result<InsertDirective> {
    if let Some(name) = &args.option {
        let kind = args.kind.unwrap_or(config.default_kind);
        return find_option(kind, name).ok_or_else(|| {
            anyhow!(
                "No option named '{}' in the {} catalog (see: workbench catalog --kind {})",
                name,
                kind,
                kind.title().to_lowercase()
            )
        });
    }

    match (args.mode, &args.template) {
        (Some(mode), Some(template)) => Ok(InsertDirective::adhoc(
            args.pointer.clone().unwrap_or_default(),
            mode,
            template.clone(),
        )),
        _ => Err(anyhow!(
            "Nothing to apply. Use --option NAME, or --mode and --template with --pointer"
        )),
    }
}

fn print_report(err: &PatchError, source: &str, source_name: &str, directive: &InsertDirective) {
    let report = match err {
        PatchError::DocumentParse { .. } => format_parse_report(source, source_name, err),
        PatchError::TemplateParse { .. } => {
            format_parse_report(&directive.template_json, "template", err)
        }
        _ => None,
    };

    if let Some(report) = report {
        eprintln!("{}", report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ApplyArgs {
        ApplyArgs {
            file: None,
            option: None,
            kind: None,
            pointer: None,
            mode: None,
            template: None,
            write: false,
        }
    }

    #[test]
    fn test_resolve_catalog_option_uses_config_kind() {
        let config = Config {
            default_kind: DocumentKind::Block,
            ..Config::default()
        };
        let directive = resolve_directive(
            &ApplyArgs {
                option: Some("behaviors (append)".into()),
                ..args()
            },
            &config,
        )
        .unwrap();
        assert_eq!(directive.pointer, "/behaviors");
    }

    #[test]
    fn test_resolve_unknown_option() {
        let err = resolve_directive(
            &ApplyArgs {
                option: Some("teleport".into()),
                kind: Some(DocumentKind::Entity),
                ..args()
            },
            &Config::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Entity catalog"));
    }

    #[test]
    fn test_resolve_adhoc_directive() {
        let directive = resolve_directive(
            &ApplyArgs {
                pointer: Some("/attributes".into()),
                mode: Some(InsertMode::MergeObject),
                template: Some(r#"{"a": 1}"#.into()),
                ..args()
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(directive.mode, InsertMode::MergeObject);
        assert_eq!(directive.pointer, "/attributes");
    }

    #[test]
    fn test_nothing_to_apply() {
        assert!(resolve_directive(&args(), &Config::default()).is_err());
    }

    #[test]
    fn test_write_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("item.json");
        fs::write(&path, r#"{"code": "sword"}"#).unwrap();

        apply(
            ApplyArgs {
                file: Some(path.clone()),
                pointer: Some("/maxstacksize".into()),
                mode: Some(InsertMode::SetIfMissing),
                template: Some("64".into()),
                write: true,
                ..args()
            },
            &Config::default(),
        )
        .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"code\": \"sword\",\n  \"maxstacksize\": 64\n}\n");
    }

    #[test]
    fn test_structural_error_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("item.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        let result = apply(
            ApplyArgs {
                file: Some(path.clone()),
                pointer: Some("/a/b".into()),
                mode: Some(InsertMode::Overwrite),
                template: Some("1".into()),
                write: true,
                ..args()
            },
            &Config::default(),
        );

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"a": 1}"#);
    }
}
