//! # Workbench VTML
//!
//! Renders VTML (the handbook markup of the game) into a flat list of styled
//! segments for a preview pane.
//!
//! ```text
//! markup ──lexer──▶ Text / Tag tokens ──renderer + style stack──▶ Vec<Segment>
//! ```
//!
//! Rendering never fails: unterminated tags, unknown tags and unbalanced
//! closing tags all degrade to plain text under the inherited style.
//!
//! ```rust
//! use workbench_vtml::{render, Segment};
//!
//! let segments = render("line1<br>line2");
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1], Segment::LineBreak);
//! ```

pub mod color;
pub mod escape;
pub mod lexer;
pub mod reference;
pub mod renderer;
pub mod segment;
pub mod style;
pub mod tag;

pub use color::{parse_hex_color, to_hex_rgb, ColorParseError, Rgb, Rgba};
pub use escape::escape_json_string;
pub use reference::{tag_reference, TagInfo};
pub use renderer::{render, Renderer};
pub use segment::{plain_text, Segment};
pub use style::{StyleStack, StyleState, VisualStyle, LINK_COLOR};
pub use tag::{parse_tag, RawTag};
