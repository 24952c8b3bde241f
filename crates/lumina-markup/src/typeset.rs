//! LaTeX typeset target.

use std::fmt::Write;

use crate::backend::RenderTarget;
use crate::escape::escape_tex;
use crate::token::Mark;

/// LaTeX render target.
///
/// Emits `\textbf`, `\textit`, `\underline`, and `\href`; CRLF has no
/// direct inline equivalent and collapses to a single space.
pub struct TypesetTarget;

impl RenderTarget for TypesetTarget {
    fn text(text: &str, out: &mut String) {
        out.push_str(&escape_tex(text));
    }

    fn mark_open(mark: &Mark, out: &mut String) {
        match mark {
            Mark::Bold => out.push_str("\\textbf{"),
            Mark::Italic => out.push_str("\\textit{"),
            Mark::Underline => out.push_str("\\underline{"),
            Mark::Link { url } => {
                write!(out, "\\href{{{}}}{{", escape_tex(url)).unwrap();
            }
        }
    }

    fn mark_close(_mark: &Mark, out: &mut String) {
        out.push('}');
    }

    fn line_break(out: &mut String) {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Target, render};

    #[test]
    fn test_marks() {
        assert_eq!(render("**b**", Target::Typeset), "\\textbf{b}");
        assert_eq!(render("*i*", Target::Typeset), "\\textit{i}");
        assert_eq!(render("__u__", Target::Typeset), "\\underline{u}");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[docs](https://example.com/a_b)", Target::Typeset),
            "\\href{https://example.com/a\\_b}{docs}"
        );
    }

    #[test]
    fn test_reserved_characters_escaped_inside_marks() {
        assert_eq!(
            render("**50% & $10**", Target::Typeset),
            "\\textbf{50\\% \\& \\$10}"
        );
    }

    #[test]
    fn test_crlf_becomes_space() {
        assert_eq!(render("a\r\nb", Target::Typeset), "a b");
    }
}
