//! Style state, the tag-frame stack and resolved visual styles

use crate::color::{Rgb, Rgba};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Link color used when a link carries no explicit color (DodgerBlue)
pub const LINK_COLOR: Rgb = Rgb::new(0x1E, 0x90, 0xFF);

/// Active markup attributes at one point in the stream
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleState {
    pub italic: bool,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub font_size: Option<f64>,
    /// Always within 0..=1
    pub opacity: Option<f64>,
    pub link: Option<String>,
    pub monospace: bool,
    /// Set inside `<hk>`; empty because key bindings only exist in-game
    pub hotkey_code: Option<String>,
}

impl StyleState {
    pub fn is_link(&self) -> bool {
        self.link.as_deref().is_some_and(|href| !href.trim().is_empty())
    }

    /// Turn markup attributes into what a text run should look like.
    ///
    /// Links get an underline and [`LINK_COLOR`] unless a color is set.
    /// Opacity scales the alpha of the resolved foreground; with no
    /// foreground it has nothing to act on.
    pub fn resolve(&self) -> VisualStyle {
        let underline = self.is_link();

        let mut foreground = self.color.map(Rgb::opaque);
        if underline && foreground.is_none() {
            foreground = Some(LINK_COLOR.opaque());
        }
        if let Some(opacity) = self.opacity {
            foreground = foreground.map(|c| c.with_opacity(opacity));
        }

        VisualStyle {
            italic: self.italic,
            bold: self.bold,
            monospace: self.monospace,
            underline,
            font_size: self.font_size,
            foreground,
            link: self.link.clone().filter(|_| underline),
        }
    }
}

/// Resolved look of a run, ready for a display surface
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualStyle {
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub monospace: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl VisualStyle {
    pub fn is_plain(&self) -> bool {
        *self == VisualStyle::default()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone)]
struct TagFrame {
    name: String,
    previous: StyleState,
}

/// Stack of open tags, each remembering the full state it replaced
///
/// Closing a tag restores the snapshot taken when it opened, so interleaved
/// attribute changes unwind exactly.
#[derive(Debug, Clone, Default)]
pub struct StyleStack {
    frames: Vec<TagFrame>,
    current: StyleState,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &StyleState {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open `name`, replacing the active state with `next`
    pub fn push(&mut self, name: &str, next: StyleState) {
        let previous = std::mem::replace(&mut self.current, next);
        self.frames.push(TagFrame {
            name: name.to_string(),
            previous,
        });
    }

    /// Drop the most recent frame, restoring its snapshot
    pub fn pop(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.current = frame.previous;
        }
    }

    /// Close `name`: pop frames until one with that name (case-insensitive)
    /// is found. With no match the stack empties and the bottom frame's
    /// snapshot wins.
    pub fn close(&mut self, name: &str) {
        while let Some(frame) = self.frames.pop() {
            self.current = frame.previous;
            if frame.name.eq_ignore_ascii_case(name) {
                return;
            }
            debug!(open = %frame.name, closing = %name, "Popping unmatched frame");
        }
    }
}
