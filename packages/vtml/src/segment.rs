use crate::style::VisualStyle;
use serde::{Deserialize, Serialize};

/// One piece of rendered output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Segment {
    /// Styled run of text (never empty, never contains a newline)
    Text { text: String, style: VisualStyle },

    /// Hard line break
    LineBreak,

    /// Stand-in for content only the game can draw (icons, item stacks)
    Placeholder { label: String, style: VisualStyle },
}

impl Segment {
    pub fn text(text: impl Into<String>, style: VisualStyle) -> Self {
        Segment::Text {
            text: text.into(),
            style,
        }
    }

    pub fn placeholder(label: impl Into<String>, style: VisualStyle) -> Self {
        Segment::Placeholder {
            label: label.into(),
            style,
        }
    }

    pub fn style(&self) -> Option<&VisualStyle> {
        match self {
            Segment::Text { style, .. } | Segment::Placeholder { style, .. } => Some(style),
            Segment::LineBreak => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text { text, .. } => text,
            Segment::Placeholder { label, .. } => label,
            Segment::LineBreak => "\n",
        }
    }
}

/// Flatten segments back into unstyled text
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::as_str).collect()
}
