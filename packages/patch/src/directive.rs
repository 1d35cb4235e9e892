//! Insertion directives (what the catalog hands to the engine)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a directive's template lands at its pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertMode {
    /// Set the leaf only when the key is absent (an explicit `null` counts as present)
    SetIfMissing,

    /// Unconditionally set the leaf
    Overwrite,

    /// Deep-merge an object template into the target object
    MergeObject,

    /// Push the template onto the target array
    AppendToArray,

    /// Discard the whole document and use the template as the new root
    ReplaceRoot,
}

impl InsertMode {
    pub const ALL: [InsertMode; 5] = [
        InsertMode::SetIfMissing,
        InsertMode::Overwrite,
        InsertMode::MergeObject,
        InsertMode::AppendToArray,
        InsertMode::ReplaceRoot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsertMode::SetIfMissing => "SetIfMissing",
            InsertMode::Overwrite => "Overwrite",
            InsertMode::MergeObject => "MergeObject",
            InsertMode::AppendToArray => "AppendToArray",
            InsertMode::ReplaceRoot => "ReplaceRoot",
        }
    }
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown insert mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for InsertMode {
    type Err = ParseModeError;

    /// Accepts `SetIfMissing`, `setifmissing` and `set-if-missing` style spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        InsertMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// A catalog entry: where (pointer), how (mode) and what (template) to insert
///
/// `category`, `display_name` and `description` are labels for the
/// surrounding UI; the engine only reads `pointer`, `mode` and `template_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDirective {
    pub category: String,
    pub display_name: String,
    pub pointer: String,
    pub mode: InsertMode,
    pub template_json: String,
    #[serde(default)]
    pub description: String,
}

impl InsertDirective {
    pub fn new(
        category: impl Into<String>,
        display_name: impl Into<String>,
        pointer: impl Into<String>,
        mode: InsertMode,
        template_json: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            display_name: display_name.into(),
            pointer: pointer.into(),
            mode,
            template_json: template_json.into(),
            description: description.into(),
        }
    }

    /// Ad-hoc directive with empty labels
    pub fn adhoc(pointer: impl Into<String>, mode: InsertMode, template_json: impl Into<String>) -> Self {
        Self::new("", "", pointer, mode, template_json, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str_spellings() {
        assert_eq!("SetIfMissing".parse::<InsertMode>(), Ok(InsertMode::SetIfMissing));
        assert_eq!("set-if-missing".parse::<InsertMode>(), Ok(InsertMode::SetIfMissing));
        assert_eq!("append_to_array".parse::<InsertMode>(), Ok(InsertMode::AppendToArray));
        assert_eq!(" overwrite ".parse::<InsertMode>(), Ok(InsertMode::Overwrite));
        assert!("upsert".parse::<InsertMode>().is_err());
    }

    #[test]
    fn test_directive_serde_shape() {
        let json = r#"{
            "category": "Specific",
            "displayName": "behaviors (append)",
            "pointer": "/behaviors",
            "mode": "AppendToArray",
            "templateJson": "{ \"name\": \"Falling\" }"
        }"#;

        let directive: InsertDirective = serde_json::from_str(json).unwrap();
        assert_eq!(directive.mode, InsertMode::AppendToArray);
        assert_eq!(directive.display_name, "behaviors (append)");
        assert_eq!(directive.description, "");
    }
}
