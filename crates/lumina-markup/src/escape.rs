//! Target-specific character escaping.

use std::borrow::Cow;

/// Escape the five HTML-reserved characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape the LaTeX-reserved set `\ & % $ # _ { } ~ ^`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
/// Single pass, so replacement text is never re-escaped.
#[must_use]
pub fn escape_tex(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '&', '%', '$', '#', '_', '{', '}', '~', '^']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html_reserved() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_tex_reserved() {
        assert_eq!(escape_tex("100% of $5 & #1"), "100\\% of \\$5 \\& \\#1");
        assert_eq!(escape_tex("a_b{c}"), "a\\_b\\{c\\}");
        assert_eq!(
            escape_tex("\\~^"),
            "\\textbackslash{}\\textasciitilde{}\\textasciicircum{}"
        );
    }

    #[test]
    fn test_escape_tex_no_double_escaping() {
        // A backslash in the input expands once; the inserted command's own
        // characters are not rewritten.
        assert_eq!(escape_tex("\\"), "\\textbackslash{}");
    }
}
