//! HTML display target.

use std::fmt::Write;

use crate::backend::RenderTarget;
use crate::escape::escape_html;
use crate::token::Mark;

/// HTML render target for on-screen display.
///
/// Emits `<strong>`, `<em>`, `<u>`, and `<a target="_blank">`; CRLF
/// becomes `<br>`.
pub struct DisplayTarget;

impl RenderTarget for DisplayTarget {
    fn text(text: &str, out: &mut String) {
        out.push_str(&escape_html(text));
    }

    fn mark_open(mark: &Mark, out: &mut String) {
        match mark {
            Mark::Bold => out.push_str("<strong>"),
            Mark::Italic => out.push_str("<em>"),
            Mark::Underline => out.push_str("<u>"),
            Mark::Link { url } => {
                write!(out, r#"<a href="{}" target="_blank">"#, escape_html(url)).unwrap();
            }
        }
    }

    fn mark_close(mark: &Mark, out: &mut String) {
        match mark {
            Mark::Bold => out.push_str("</strong>"),
            Mark::Italic => out.push_str("</em>"),
            Mark::Underline => out.push_str("</u>"),
            Mark::Link { .. } => out.push_str("</a>"),
        }
    }

    fn line_break(out: &mut String) {
        out.push_str("<br>");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Target, render};

    #[test]
    fn test_marks() {
        assert_eq!(render("**b**", Target::Display), "<strong>b</strong>");
        assert_eq!(render("*i*", Target::Display), "<em>i</em>");
        assert_eq!(render("__u__", Target::Display), "<u>u</u>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[docs](https://example.com)", Target::Display),
            r#"<a href="https://example.com" target="_blank">docs</a>"#
        );
    }

    #[test]
    fn test_text_is_escaped_before_substitution() {
        assert_eq!(
            render("**a < b**", Target::Display),
            "<strong>a &lt; b</strong>"
        );
        // Raw angle brackets never survive outside inserted tags.
        assert_eq!(render("<script>", Target::Display), "&lt;script&gt;");
    }

    #[test]
    fn test_crlf_becomes_br() {
        assert_eq!(render("a\r\nb", Target::Display), "a<br>b");
    }

    #[test]
    fn test_nested_marks() {
        assert_eq!(
            render("**a *b* c**", Target::Display),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn test_marks_nested_inside_underline() {
        assert_eq!(
            render("__a *b*__", Target::Display),
            "<u>a <em>b</em></u>"
        );
        assert_eq!(
            render("__x **b** y__", Target::Display),
            "<u>x <strong>b</strong> y</u>"
        );
    }
}
