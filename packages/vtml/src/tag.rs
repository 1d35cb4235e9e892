//! Tag body parsing: name, closing/self-closing flags and attributes

use std::collections::HashMap;

/// A parsed `<...>` body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTag {
    /// Lowercased tag name
    pub name: String,
    /// Lowercased attribute names to raw values
    pub attributes: HashMap<String, String>,
    /// `</name>`
    pub closing: bool,
    /// `<name/>` or `<name .../>`
    pub self_closing: bool,
}

impl RawTag {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Parse the text between `<` and `>`. Blank bodies yield `None`.
///
/// ```
/// use workbench_vtml::parse_tag;
///
/// let tag = parse_tag(r##"font color="#ffcc00" Weight=bold"##).unwrap();
/// assert_eq!(tag.name, "font");
/// assert_eq!(tag.attr("color"), Some("#ffcc00"));
/// assert_eq!(tag.attr("weight"), Some("bold"));
/// ```
pub fn parse_tag(body: &str) -> Option<RawTag> {
    let mut body = body.trim();
    if body.is_empty() {
        return None;
    }

    let self_closing = match body.strip_suffix('/') {
        Some(rest) => {
            body = rest.trim_end();
            true
        }
        None => false,
    };

    let closing = match body.strip_prefix('/') {
        Some(rest) => {
            body = rest.trim_start();
            true
        }
        None => false,
    };

    let (name, rest) = match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => (body, ""),
    };

    Some(RawTag {
        name: name.trim().to_lowercase(),
        attributes: parse_attributes(rest),
        closing,
        self_closing,
    })
}

/// `key="value"` or `key=value` pairs separated by whitespace.
///
/// Quoted values run to the next `"` (no escapes) or the end of input.
/// Bare values run to the next whitespace. Parsing stops at the first token
/// without `=`. Later duplicates win.
fn parse_attributes(input: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();
    let mut rest = input.trim();

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let Some(eq) = rest.find('=') else {
            break;
        };
        let key = rest[..eq].trim();
        rest = &rest[eq + 1..];
        if rest.is_empty() {
            break;
        }

        let value = if let Some(quoted) = rest.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => {
                    rest = &quoted[end + 1..];
                    &quoted[..end]
                }
                None => {
                    rest = "";
                    quoted
                }
            }
        } else {
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let value = &rest[..end];
            rest = &rest[end..];
            value
        };

        if !key.is_empty() {
            attributes.insert(key.to_lowercase(), value.to_string());
        }
    }

    attributes
}
