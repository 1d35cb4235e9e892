use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which kind of asset file is being authored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Item,
    Block,
    Entity,
    Recipe,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Item,
        DocumentKind::Block,
        DocumentKind::Entity,
        DocumentKind::Recipe,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::Item => "Item",
            DocumentKind::Block => "Block",
            DocumentKind::Entity => "Entity",
            DocumentKind::Recipe => "Recipe",
        }
    }

    /// Starter document for a fresh tab
    pub fn initial_json(self) -> &'static str {
        match self {
            DocumentKind::Item => "{\n  \"code\": \"myitem\"\n}\n",
            DocumentKind::Block => "{\n  \"code\": \"myblock\"\n}\n",
            DocumentKind::Entity => "{\n  \"code\": \"myentity\"\n}\n",
            DocumentKind::Recipe => "{\n}\n",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown document kind: {0}. Use: item, block, entity, or recipe")]
pub struct UnknownKindError(pub String);

impl FromStr for DocumentKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.title().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("BLOCK".parse::<DocumentKind>(), Ok(DocumentKind::Block));
        assert!("plant".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_initial_documents_parse() {
        for kind in DocumentKind::ALL {
            let value: serde_json::Value = serde_json::from_str(kind.initial_json()).unwrap();
            assert!(value.is_object());
        }
    }
}
