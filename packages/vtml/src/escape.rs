use std::fmt::Write;

/// Escape text as the body of a JSON string literal (no surrounding quotes).
///
/// Backslash, quote, `\n`, `\r` and `\t` get their short escapes; any other
/// control character below U+0020 becomes `\u00xx`.
///
/// ```
/// use workbench_vtml::escape_json_string;
///
/// assert_eq!(escape_json_string("Say \"hi\"\n"), "Say \\\"hi\\\"\\n");
/// ```
pub fn escape_json_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters() {
        assert_eq!(escape_json_string("a\u{1}b\u{1f}"), "a\\u0001b\\u001f");
    }

    #[test]
    fn test_backslash_and_markup() {
        assert_eq!(
            escape_json_string(r##"<font color="#fc0">C:\mods</font>"##),
            r##"<font color=\"#fc0\">C:\\mods</font>"##
        );
    }

    #[test]
    fn test_escaped_text_parses_back() {
        let original = "Welcome to <strong>VTML</strong>!\r\n\ttabbed \u{7} bell \u{e9}";
        let quoted = format!("\"{}\"", escape_json_string(original));
        let decoded: String = serde_json::from_str(&quoted).unwrap();
        assert_eq!(decoded, original);
    }
}
