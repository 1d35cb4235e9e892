//! Reference card for the supported tags

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagInfo {
    pub tag: &'static str,
    pub what_it_does: &'static str,
    pub example: &'static str,
}

const TAGS: &[TagInfo] = &[
    TagInfo {
        tag: "<br>",
        what_it_does: "Line break.",
        example: "First line<br>Second line",
    },
    TagInfo {
        tag: "<i>...</i>",
        what_it_does: "Italic text.",
        example: "<i>italic</i>",
    },
    TagInfo {
        tag: "<strong>...</strong>",
        what_it_does: "Bold text.",
        example: "<strong>bold</strong>",
    },
    TagInfo {
        tag: "<a href=\"...\">...</a>",
        what_it_does: "Clickable link (web, handbook://..., command://..., hotkey://..., etc.).",
        example: "<a href=\"http://example.com\">link</a>",
    },
    TagInfo {
        tag: "<font ...>...</font>",
        what_it_does: "Text styling: size, color, weight, opacity, align, lineheight.",
        example: "<font color=\"#ffcc00\" size=\"18\" weight=\"bold\">styled</font>",
    },
    TagInfo {
        tag: "<hk>...</hk>",
        what_it_does: "Hotkey display. In-game it resolves to the player's bound key.",
        example: "Press <hk>sprint</hk>",
    },
    TagInfo {
        tag: "<itemstack ...></itemstack>",
        what_it_does: "Renders an item/block stack (preview uses a placeholder).",
        example: "<itemstack type=\"block\" code=\"game:packeddirt\" rsize=\"1\"></itemstack>",
    },
    TagInfo {
        tag: "<icon ...></icon>",
        what_it_does: "Renders an icon (preview uses a placeholder).",
        example: "<icon path=\"icons/checkmark.svg\"></icon>",
    },
    TagInfo {
        tag: "<clear>",
        what_it_does: "Moves next line below floated elements.",
        example: "<clear>",
    },
];

pub fn tag_reference() -> &'static [TagInfo] {
    TAGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_every_example_renders_something() {
        for info in tag_reference() {
            assert!(!render(info.example).is_empty(), "{}", info.tag);
        }
    }
}
