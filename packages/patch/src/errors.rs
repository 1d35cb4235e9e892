//! Error types for the patch engine

use crate::directive::InsertMode;
use thiserror::Error;

pub type PatchResult<T> = Result<T, PatchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    #[error("JSON parse error in document: {message} at line {line} column {column}")]
    DocumentParse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("JSON parse error in template: {message} at line {line} column {column}")]
    TemplateParse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid pointer ({0}).")]
    InvalidPointer(String),

    #[error("Encountered non-object while walking pointer at '{segment}'.")]
    NonObjectParent { segment: String },

    #[error("Template must be an object for MergeObject.")]
    TemplateNotObject,

    #[error("Pointer must point to a property (not root) for {mode}.")]
    RootTarget { mode: InsertMode },
}

impl PatchError {
    pub fn document_parse(err: &serde_json::Error) -> Self {
        Self::DocumentParse {
            line: err.line(),
            column: err.column(),
            message: describe(err),
        }
    }

    pub fn template_parse(err: &serde_json::Error) -> Self {
        Self::TemplateParse {
            line: err.line(),
            column: err.column(),
            message: describe(err),
        }
    }

    pub fn invalid_pointer(reason: impl Into<String>) -> Self {
        Self::InvalidPointer(reason.into())
    }

    pub fn non_object_parent(segment: impl Into<String>) -> Self {
        Self::NonObjectParent {
            segment: segment.into(),
        }
    }

    /// Whether the failure came from malformed input text rather than the walk
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::DocumentParse { .. } | Self::TemplateParse { .. })
    }

    /// Line/column of a parse failure (both 1-based)
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::DocumentParse { line, column, .. } | Self::TemplateParse { line, column, .. } => {
                Some((*line, *column))
            }
            _ => None,
        }
    }
}

/// serde_json's Display appends " at line X column Y"; keep only the reason
fn describe(err: &serde_json::Error) -> String {
    let full = err.to_string();
    match full.rfind(" at line ") {
        Some(idx) => full[..idx].to_string(),
        None => full,
    }
}
