//! Plain-text target.

use crate::backend::RenderTarget;
use crate::token::Mark;

/// Plain-text render target: markers stripped, no escaping.
///
/// Used as the canonical "semantic text" extraction. A link renders its
/// text only; CRLF is preserved as a newline.
pub struct PlainTarget;

impl RenderTarget for PlainTarget {
    fn text(text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn mark_open(_mark: &Mark, _out: &mut String) {}

    fn mark_close(_mark: &Mark, _out: &mut String) {}

    fn line_break(out: &mut String) {
        out.push('\n');
    }
}
