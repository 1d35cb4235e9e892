use crate::errors::PatchError;

/// Pretty-print a parse error with source context using ariadne.
///
/// `source` must be the text that failed to parse (the document for
/// `DocumentParse`, the template for `TemplateParse`). Returns `None` for
/// errors that carry no location.
pub fn format_parse_report(source: &str, filename: &str, error: &PatchError) -> Option<String> {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let (line, column) = error.location()?;
    let reason = match error {
        PatchError::DocumentParse { message, .. } | PatchError::TemplateParse { message, .. } => {
            message.clone()
        }
        _ => return None,
    };

    let start = offset_of(source, line, column);
    let end = (start + 1).min(source.chars().count()).max(start);

    let report = Report::build(ReportKind::Error, filename, start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, start..end))
                .with_color(Color::Red)
                .with_message(reason),
        )
        .finish();

    let mut output = Vec::new();
    report
        .write((filename, Source::from(source)), &mut output)
        .ok()?;

    String::from_utf8(output).ok()
}

/// Char offset for a 1-based line/column pair, clamped to the source
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, text) in source.split('\n').enumerate() {
        let chars = text.chars().count();
        if idx + 1 == line {
            return offset + column.saturating_sub(1).min(chars);
        }
        offset += chars + 1;
    }
    source.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let source = "{\n  \"a\": x\n}";
        assert_eq!(offset_of(source, 1, 1), 0);
        assert_eq!(offset_of(source, 2, 8), 9);
        assert_eq!(offset_of(source, 9, 1), source.chars().count());
    }

    #[test]
    fn test_report_mentions_filename() {
        let source = "{\n  \"a\": x\n}";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let report = format_parse_report(source, "block.json", &PatchError::document_parse(&err)).unwrap();
        assert!(report.contains("block.json"));
    }

    #[test]
    fn test_structural_errors_have_no_report() {
        assert!(format_parse_report("{}", "x.json", &PatchError::TemplateNotObject).is_none());
    }
}
