//! Pointer (RFC 6901 style) helpers

/// Unescapes one pointer segment: `~1` becomes `/`, then `~0` becomes `~`.
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    segment.replace("~1", "/").replace("~0", "~")
}

/// Escapes one pointer segment.
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains('/') && !segment.contains('~') {
        return segment.to_string();
    }
    segment.replace('~', "~0").replace('/', "~1")
}

/// Splits a pointer into unescaped segments.
///
/// `""`, `"/"` and whitespace-only pointers address the root and yield no
/// segments. A pointer without a leading `/` is read as if it had one.
///
/// ```
/// use workbench_patch::split_pointer;
///
/// assert_eq!(split_pointer("/client/renderer"), vec!["client", "renderer"]);
/// assert_eq!(split_pointer("/a~1b/c~0d"), vec!["a/b", "c~d"]);
/// assert!(split_pointer("/").is_empty());
/// ```
pub fn split_pointer(pointer: &str) -> Vec<String> {
    if pointer.trim().is_empty() || pointer == "/" {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_segment).collect()
}

/// Joins segments back into a pointer string (root is `""`).
pub fn format_pointer<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(&escape_segment(segment.as_ref()));
    }
    out
}
