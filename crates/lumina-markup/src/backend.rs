//! Render target abstraction.

use crate::token::{Mark, Segment, tokenize};

/// The three output renderings of markup text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Semantic HTML for on-screen display.
    Display,
    /// LaTeX emphasis commands for the typeset document.
    Typeset,
    /// Markers stripped; the canonical semantic text.
    Plain,
}

/// A markup render target.
///
/// Shared structure (the token fold, nesting) is handled generically;
/// targets only decide how text leaves are escaped and what syntax each
/// mark and line break produces. Inserted syntax is never re-escaped.
pub trait RenderTarget {
    /// Append a plain-text leaf, escaped for this target.
    fn text(text: &str, out: &mut String);

    /// Append the opening syntax for a mark.
    fn mark_open(mark: &Mark, out: &mut String);

    /// Append the closing syntax for a mark.
    fn mark_close(mark: &Mark, out: &mut String);

    /// Append a line break.
    fn line_break(out: &mut String);
}

/// Render markup text for the given target.
///
/// Total: malformed markers degrade to literal text and empty input
/// renders as the empty string.
#[must_use]
pub fn render(text: &str, target: Target) -> String {
    let segments = tokenize(text);
    let mut out = String::with_capacity(text.len() + 16);
    match target {
        Target::Display => fold::<crate::DisplayTarget>(&segments, &mut out),
        Target::Typeset => fold::<crate::TypesetTarget>(&segments, &mut out),
        Target::Plain => fold::<crate::PlainTarget>(&segments, &mut out),
    }
    out
}

fn fold<T: RenderTarget>(segments: &[Segment], out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Text(text) => T::text(text, out),
            Segment::Marked(mark, children) => {
                T::mark_open(mark, out);
                fold::<T>(children, out);
                T::mark_close(mark, out);
            }
            Segment::LineBreak => T::line_break(out),
        }
    }
}
