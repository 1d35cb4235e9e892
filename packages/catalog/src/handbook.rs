//! # Handbook Snippets
//!
//! Helpers for writing handbook content: a VTML scratch text with live
//! preview, a color picker with hex readout, and two pastable JSON
//! snippets (item `handbook` section and a guide page file).

use serde::{Deserialize, Serialize};
use workbench_vtml::{escape_json_string, render, to_hex_rgb, Rgb, Segment};

pub const DEFAULT_MARKUP: &str = "Welcome to <strong>VTML</strong>!<br>\
Use <i>italics</i>, <font color=\"#ffcc00\" weight=\"bold\">color</font>, \
and <a href=\"handbook://survival\">links</a>.";

pub const DEFAULT_PICKED_COLOR: Rgb = Rgb::new(0xFF, 0xCC, 0x00);

/// `"handbook"` section pasted into an item or block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemHandbook {
    pub include: bool,
    /// Lang key
    pub title_key: String,
    /// Lang key
    pub text_key: String,
}

impl Default for ItemHandbook {
    fn default() -> Self {
        Self {
            include: true,
            title_key: "myitem-handbook-title".to_string(),
            text_key: "myitem-handbook-text".to_string(),
        }
    }
}

impl ItemHandbook {
    pub fn to_snippet(&self) -> String {
        format!(
            "\"handbook\": {{\n  \"include\": {},\n  \"extraSections\": [\n    {{ \"title\": \"{}\", \"text\": \"{}\" }}\n  ]\n}}",
            self.include,
            escape_json_string(&self.title_key),
            escape_json_string(&self.text_key),
        )
    }
}

/// File content for `assets/<modid>/config/handbook/<page>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuidePage {
    pub page_code: String,
    pub title_key: String,
    pub text_key: String,
    /// Omitted from the output when blank
    pub category_code: String,
}

impl Default for GuidePage {
    fn default() -> Self {
        Self {
            page_code: "mymod:introduction".to_string(),
            title_key: "mymod:introduction-title".to_string(),
            text_key: "mymod:introduction-text".to_string(),
            category_code: String::new(),
        }
    }
}

impl GuidePage {
    pub fn to_json(&self) -> String {
        let category = self.category_code.trim();
        let category_line = if category.is_empty() {
            String::new()
        } else {
            format!(",\n  \"categoryCode\": \"{}\"", escape_json_string(category))
        };

        format!(
            "{{\n  \"pageCode\": \"{}\",\n  \"title\": \"{}\",\n  \"text\": \"{}\"{}\n}}",
            escape_json_string(&self.page_code),
            escape_json_string(&self.title_key),
            escape_json_string(&self.text_key),
            category_line,
        )
    }
}

/// Handbook helper state
#[derive(Debug, Clone)]
pub struct HandbookSnippets {
    markup: String,
    picked: Rgb,
    pub item: ItemHandbook,
    pub guide: GuidePage,
}

impl Default for HandbookSnippets {
    fn default() -> Self {
        Self {
            markup: DEFAULT_MARKUP.to_string(),
            picked: DEFAULT_PICKED_COLOR,
            item: ItemHandbook::default(),
            guide: GuidePage::default(),
        }
    }
}

impl HandbookSnippets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn set_markup(&mut self, markup: impl Into<String>) {
        self.markup = markup.into();
    }

    /// Rendered preview of the current markup
    pub fn preview(&self) -> Vec<Segment> {
        render(&self.markup)
    }

    /// Markup as the body of a JSON string literal, quotes not included
    pub fn escaped_markup(&self) -> String {
        escape_json_string(&self.markup)
    }

    pub fn picked_color(&self) -> Rgb {
        self.picked
    }

    pub fn set_picked_color(&mut self, color: Rgb) {
        self.picked = color;
    }

    /// Channel setters clamp into 0..=255
    pub fn set_red(&mut self, value: i64) {
        self.picked = Rgb::from_clamped(value, self.picked.g.into(), self.picked.b.into());
    }

    pub fn set_green(&mut self, value: i64) {
        self.picked = Rgb::from_clamped(self.picked.r.into(), value, self.picked.b.into());
    }

    pub fn set_blue(&mut self, value: i64) {
        self.picked = Rgb::from_clamped(self.picked.r.into(), self.picked.g.into(), value);
    }

    pub fn picked_hex(&self) -> String {
        to_hex_rgb(self.picked)
    }

    pub fn item_snippet(&self) -> String {
        self.item.to_snippet()
    }

    pub fn guide_json(&self) -> String {
        self.guide.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workbench_vtml::plain_text;

    #[test]
    fn test_default_item_snippet() {
        let snippets = HandbookSnippets::new();
        assert_eq!(
            snippets.item_snippet(),
            "\"handbook\": {\n  \"include\": true,\n  \"extraSections\": [\n    { \"title\": \"myitem-handbook-title\", \"text\": \"myitem-handbook-text\" }\n  ]\n}"
        );
    }

    #[test]
    fn test_item_snippet_is_valid_json_when_wrapped() {
        let item = ItemHandbook {
            include: false,
            title_key: "quote\"d".into(),
            text_key: "back\\slash".into(),
        };
        let wrapped = format!("{{{}}}", item.to_snippet());
        let value: serde_json::Value = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(value["handbook"]["include"], false);
        assert_eq!(value["handbook"]["extraSections"][0]["title"], "quote\"d");
        assert_eq!(value["handbook"]["extraSections"][0]["text"], "back\\slash");
    }

    #[test]
    fn test_guide_page_without_category() {
        assert_eq!(
            GuidePage::default().to_json(),
            "{\n  \"pageCode\": \"mymod:introduction\",\n  \"title\": \"mymod:introduction-title\",\n  \"text\": \"mymod:introduction-text\"\n}"
        );
    }

    #[test]
    fn test_guide_page_with_category() {
        let page = GuidePage {
            category_code: "  mechanics ".into(),
            ..GuidePage::default()
        };
        let value: serde_json::Value = serde_json::from_str(&page.to_json()).unwrap();
        assert_eq!(value["categoryCode"], "mechanics");

        let blank = GuidePage {
            category_code: "   ".into(),
            ..GuidePage::default()
        };
        assert!(!blank.to_json().contains("categoryCode"));
    }

    #[test]
    fn test_color_channels_clamp() {
        let mut snippets = HandbookSnippets::new();
        assert_eq!(snippets.picked_hex(), "#FFCC00");

        snippets.set_red(-20);
        snippets.set_green(300);
        snippets.set_blue(16);
        assert_eq!(snippets.picked_color(), Rgb::new(0, 255, 16));
        assert_eq!(snippets.picked_hex(), "#00FF10");
    }

    #[test]
    fn test_preview_and_escape_follow_markup() {
        let mut snippets = HandbookSnippets::new();
        assert_eq!(
            plain_text(&snippets.preview()),
            "Welcome to VTML!\nUse italics, color, and links."
        );

        snippets.set_markup("a\n\"b\"");
        assert_eq!(snippets.escaped_markup(), "a\\n\\\"b\\\"");
    }

    #[test]
    fn test_item_handbook_deserializes_with_defaults() {
        let item: ItemHandbook = serde_json::from_str(r#"{"titleKey": "t"}"#).unwrap();
        assert!(item.include);
        assert_eq!(item.title_key, "t");
        assert_eq!(item.text_key, "myitem-handbook-text");
    }
}
