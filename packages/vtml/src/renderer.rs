//! # VTML Renderer
//!
//! Walks lexer tokens, keeps a [`StyleStack`] and emits [`Segment`]s.
//!
//! | Tag | Effect |
//! |---|---|
//! | `br` | line break |
//! | `clear` | two line breaks |
//! | `i`, `strong` | italic / bold |
//! | `a href` | link |
//! | `font weight color size opacity` | overrides only the attributes given |
//! | `hk`, `hotkey` | monospace |
//! | `icon`, `itemstack` | placeholder pill |
//! | anything else | inert frame, content kept |

use crate::color::parse_hex_color;
use crate::lexer::{tokenize, Token};
use crate::segment::Segment;
use crate::style::{StyleStack, StyleState};
use crate::tag::{parse_tag, RawTag};
use tracing::{debug, instrument};

/// Render markup into styled segments
#[instrument(skip_all, fields(len = markup.len()))]
pub fn render(markup: &str) -> Vec<Segment> {
    let segments = Renderer::new().render(markup);
    debug!(segments = segments.len(), "Rendered markup");
    segments
}

/// Single-use renderer state
#[derive(Debug, Default)]
pub struct Renderer {
    segments: Vec<Segment>,
    styles: StyleStack,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(mut self, markup: &str) -> Vec<Segment> {
        for token in tokenize(markup) {
            match token {
                Token::Text(text) => self.push_text(text),
                Token::Tag(_) => {
                    if let Some(tag) = token.tag_body().and_then(parse_tag) {
                        self.handle_tag(tag);
                    }
                }
            }
        }
        self.segments
    }

    fn handle_tag(&mut self, tag: RawTag) {
        if tag.closing {
            self.styles.close(&tag.name);
            return;
        }

        let current = self.styles.current().clone();

        match tag.name.as_str() {
            "br" => self.segments.push(Segment::LineBreak),

            "clear" => {
                self.segments.push(Segment::LineBreak);
                self.segments.push(Segment::LineBreak);
            }

            "i" => self.open(&tag, StyleState { italic: true, ..current }),

            "strong" => self.open(&tag, StyleState { bold: true, ..current }),

            "a" => {
                let link = tag.attr("href").map(str::to_string);
                self.open(&tag, StyleState { link, ..current });
            }

            "font" => {
                let next = font_state(&tag, current);
                self.open(&tag, next);
            }

            "hk" | "hotkey" => self.open(
                &tag,
                StyleState {
                    monospace: true,
                    hotkey_code: Some(String::new()),
                    ..current
                },
            ),

            "icon" => {
                let name = tag
                    .attr("name")
                    .or_else(|| tag.attr("path"))
                    .unwrap_or("icon");
                self.push_placeholder(format!("[icon: {name}]"));
            }

            "itemstack" => {
                let kind = tag.attr("type").unwrap_or("item");
                let code = tag.attr("code").unwrap_or("unknown");
                self.push_placeholder(format!("[{kind}: {code}]"));
            }

            _ if tag.self_closing => {
                debug!(tag = %tag.name, "Ignoring unknown self-closing tag");
            }

            _ => {
                debug!(tag = %tag.name, "Unknown tag, keeping content");
                self.styles.push(&tag.name, current);
            }
        }
    }

    /// Push a frame; a self-closing form is pushed and popped at once
    fn open(&mut self, tag: &RawTag, next: StyleState) {
        self.styles.push(&tag.name, next);
        if tag.self_closing {
            self.styles.pop();
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let style = self.styles.current().resolve();
        let normalized = text.replace("\r\n", "\n");

        for (idx, line) in normalized.split('\n').enumerate() {
            if idx > 0 {
                self.segments.push(Segment::LineBreak);
            }
            if !line.is_empty() {
                self.segments.push(Segment::text(line, style.clone()));
            }
        }
    }

    fn push_placeholder(&mut self, label: String) {
        let state = StyleState {
            monospace: true,
            bold: true,
            ..self.styles.current().clone()
        };
        self.segments.push(Segment::placeholder(label, state.resolve()));
    }
}

/// `<font>`: each attribute present overrides, the rest is inherited
fn font_state(tag: &RawTag, current: StyleState) -> StyleState {
    let mut next = current;

    if let Some(weight) = tag.attr("weight").filter(|w| !w.trim().is_empty()) {
        next.bold = weight.trim().eq_ignore_ascii_case("bold");
    }

    if let Some(color) = tag.attr("color").and_then(parse_hex_color) {
        next.color = Some(color);
    }

    if let Some(size) = tag.attr("size").and_then(parse_number) {
        next.font_size = Some(size);
    }

    if let Some(opacity) = tag.attr("opacity").and_then(parse_number) {
        next.opacity = Some(opacity.clamp(0.0, 1.0));
    }

    next
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::style::VisualStyle;

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(Segment::as_str).collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            render("hello"),
            vec![Segment::text("hello", VisualStyle::default())]
        );
    }

    #[test]
    fn test_empty_markup() {
        assert!(render("").is_empty());
    }

    #[test]
    fn test_newlines_become_breaks() {
        let segments = render("a\r\nb\n\nc");
        assert_eq!(texts(&segments), vec!["a", "\n", "b", "\n", "\n", "c"]);
    }

    #[test]
    fn test_clear_emits_two_breaks() {
        let segments = render("a<clear>b");
        assert_eq!(texts(&segments), vec!["a", "\n", "\n", "b"]);
    }

    #[test]
    fn test_self_closing_italic_is_noop() {
        let segments = render("a<i/>b");
        assert_eq!(texts(&segments), vec!["a", "b"]);
        assert!(segments.iter().all(|s| s.style().is_some_and(VisualStyle::is_plain)));
    }

    #[test]
    fn test_font_inherits_unset_attributes() {
        let segments = render(r##"<font color="#ff0000" size=20><font size="bogus">x</font></font>"##);
        let style = segments[0].style().unwrap();
        assert_eq!(style.foreground.map(|c| c.rgb()), Some(Rgb::new(0xFF, 0, 0)));
        assert_eq!(style.font_size, Some(20.0));
    }

    #[test]
    fn test_font_weight_normal_unbolds() {
        let segments = render("<strong>a<font weight=normal>b</font>c</strong>");
        let bold: Vec<bool> = segments.iter().map(|s| s.style().unwrap().bold).collect();
        assert_eq!(bold, vec![true, false, true]);
    }

    #[test]
    fn test_opacity_is_clamped() {
        let segments = render("<font color=#000 opacity=3>x</font>");
        assert_eq!(segments[0].style().unwrap().foreground.map(|c| c.a), Some(255));

        let segments = render("<font color=#000 opacity=-1>x</font>");
        assert_eq!(segments[0].style().unwrap().foreground.map(|c| c.a), Some(0));
    }

    #[test]
    fn test_hotkey_is_monospace() {
        let segments = render("Press <hk>sprint</hk> now");
        assert_eq!(texts(&segments), vec!["Press ", "sprint", " now"]);
        assert!(segments[1].style().unwrap().monospace);
        assert!(!segments[2].style().unwrap().monospace);
    }

    #[test]
    fn test_icon_placeholder_fallbacks() {
        assert_eq!(render("<icon name=heart/>")[0].as_str(), "[icon: heart]");
        assert_eq!(
            render(r#"<icon path="icons/checkmark.svg"></icon>"#)[0].as_str(),
            "[icon: icons/checkmark.svg]"
        );
        assert_eq!(render("<icon>")[0].as_str(), "[icon: icon]");
    }

    #[test]
    fn test_itemstack_placeholder() {
        let segments = render(r#"<itemstack type="block" code="game:packeddirt" rsize="1"></itemstack>"#);
        assert_eq!(segments.len(), 1);
        let Segment::Placeholder { label, style } = &segments[0] else {
            panic!("Expected placeholder");
        };
        assert_eq!(label, "[block: game:packeddirt]");
        assert!(style.bold && style.monospace);

        assert_eq!(render("<itemstack/>")[0].as_str(), "[item: unknown]");
    }

    #[test]
    fn test_placeholder_inherits_color() {
        let segments = render("<font color=#0f0><icon name=x/></font>");
        let style = segments[0].style().unwrap();
        assert_eq!(style.foreground.map(|c| c.rgb()), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_unknown_tags_are_inert() {
        let segments = render("<strong><para>a<deep><er>b</er></deep></para>c</strong><x/>d");
        assert_eq!(texts(&segments), vec!["a", "b", "c", "d"]);
        let bold: Vec<bool> = segments.iter().map(|s| s.style().unwrap().bold).collect();
        assert_eq!(bold, vec![true, true, true, false]);
    }

    #[test]
    fn test_interleaved_close_restores_exact_snapshot() {
        // </a> closes font and strong too, back to the state before <a>
        let segments = render(r#"<i><a href="x"><strong><font color=#fff>a</a>b</i>c"#);
        let a = segments[0].style().unwrap();
        assert!(a.italic && a.bold && a.underline);

        let b = segments[1].style().unwrap();
        assert!(b.italic && !b.bold && !b.underline);
        assert_eq!(b.foreground, None);

        assert!(segments[2].style().unwrap().is_plain());
    }

    #[test]
    fn test_stray_closing_tag() {
        let segments = render("</i>text");
        assert_eq!(segments, vec![Segment::text("text", VisualStyle::default())]);
    }

    #[test]
    fn test_empty_tag_is_skipped() {
        assert_eq!(texts(&render("a<>b< >c")), vec!["a", "b", "c"]);
    }
}
