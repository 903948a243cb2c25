//! Textual diffs between original and rendered content

use similar::TextDiff;

/// Label for the original side of a diff
pub const BEFORE_LABEL: &str = "before";
/// Label for the rendered side of a diff
pub const AFTER_LABEL: &str = "after";

/// Number of unchanged lines shown around each hunk
const CONTEXT_RADIUS: usize = 3;

/// Compute a unified diff from `old` to `new`.
///
/// Returns `None` when the texts are identical.
pub fn unified_diff(old: &str, new: &str) -> Option<String> {
    if old == new {
        return None;
    }

    let text_diff = TextDiff::from_lines(old, new);
    let rendered = text_diff
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header(BEFORE_LABEL, AFTER_LABEL)
        .to_string();
    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_have_no_diff() {
        assert_eq!(unified_diff("a: 1\n", "a: 1\n"), None);
    }

    #[test]
    fn diff_has_headers_and_changes() {
        let diff = unified_diff("a: 1\nb: 2\n", "a: 1\nb: 3\n").unwrap();
        assert!(diff.starts_with("--- before\n+++ after\n"));
        assert!(diff.contains("-b: 2\n"));
        assert!(diff.contains("+b: 3\n"));
    }
}
