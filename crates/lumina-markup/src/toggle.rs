//! Selection-based mark toggling.
//!
//! Pure function of `(buffer, selection, kind)`: applies a mark to the
//! selected range, or removes it when the selection (or its immediate
//! surroundings) already carries it. Callers must use the returned range
//! for any follow-up operation, since inserting or stripping delimiters
//! shifts offsets.

/// Mark kinds the toggle engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKind {
    Bold,
    Italic,
    Underline,
    Link,
}

impl ToggleKind {
    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("**", "**"),
            Self::Italic => ("*", "*"),
            Self::Underline => ("__", "__"),
            Self::Link => ("[", "](url)"),
        }
    }
}

/// Result of a toggle: the new buffer and the selection spanning exactly
/// the affected text (never the delimiters).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toggle {
    pub buffer: String,
    pub sel_start: usize,
    pub sel_end: usize,
}

/// Toggle `kind` over `buffer[sel_start..sel_end]` (byte offsets on char
/// boundaries).
///
/// - Empty selection: inserts a `text` placeholder wrapped in the mark's
///   delimiters and selects the placeholder for immediate overtyping.
/// - Selection already wrapped (or surrounded by) the delimiters: removes
///   them.
/// - Otherwise: wraps the selection.
///
/// Total: offsets outside the buffer or off char boundaries return the
/// input unchanged.
#[must_use]
pub fn toggle(buffer: &str, sel_start: usize, sel_end: usize, kind: ToggleKind) -> Toggle {
    if sel_start > sel_end
        || sel_end > buffer.len()
        || !buffer.is_char_boundary(sel_start)
        || !buffer.is_char_boundary(sel_end)
    {
        return Toggle {
            buffer: buffer.to_owned(),
            sel_start,
            sel_end,
        };
    }

    let (open, close) = kind.delimiters();

    if sel_start == sel_end {
        // Placeholder span the caller can immediately overtype.
        let mut out = String::with_capacity(buffer.len() + open.len() + close.len() + 4);
        out.push_str(&buffer[..sel_start]);
        out.push_str(open);
        out.push_str("text");
        out.push_str(close);
        out.push_str(&buffer[sel_start..]);
        return Toggle {
            buffer: out,
            sel_start: sel_start + open.len(),
            sel_end: sel_start + open.len() + 4,
        };
    }

    let selected = &buffer[sel_start..sel_end];

    if let Some(inner) = unwrap_inner(selected, kind) {
        return splice(buffer, sel_start, sel_end, &inner, sel_start);
    }

    if let Some(result) = strip_surrounding(buffer, sel_start, sel_end, kind) {
        return result;
    }

    // Add-formatting branch.
    let wrapped = format!("{open}{selected}{close}");
    let mut result = splice(buffer, sel_start, sel_end, &wrapped, sel_start + open.len());
    result.sel_end = result.sel_start + selected.len();
    result
}

/// Replace `buffer[start..end]` with `replacement`; select `replacement`'s
/// span starting at `sel_at` unless adjusted by the caller.
fn splice(buffer: &str, start: usize, end: usize, replacement: &str, sel_at: usize) -> Toggle {
    let mut out = String::with_capacity(buffer.len() - (end - start) + replacement.len());
    out.push_str(&buffer[..start]);
    out.push_str(replacement);
    out.push_str(&buffer[end..]);
    Toggle {
        buffer: out,
        sel_start: sel_at,
        sel_end: start + replacement.len(),
    }
}

/// If `selected` is exactly the full-wrap pattern for `kind`, return the
/// inner text.
fn unwrap_inner(selected: &str, kind: ToggleKind) -> Option<String> {
    if kind == ToggleKind::Link {
        let text_end = selected.find("](")?;
        if selected.starts_with('[') && selected.ends_with(')') {
            return Some(selected[1..text_end].to_owned());
        }
        return None;
    }
    if kind == ToggleKind::Italic {
        // A selection opening with exactly `**` is bold-wrapped, not
        // italic-wrapped; `***` carries an italic on top of the bold.
        let inner = selected.strip_prefix('*')?.strip_suffix('*')?;
        let bold_open = inner.starts_with('*') && !inner.starts_with("**");
        let bold_close = inner.ends_with('*') && !inner.ends_with("**");
        if inner.is_empty() || bold_open || bold_close {
            return None;
        }
        return Some(inner.to_owned());
    }
    let (open, close) = kind.delimiters();
    if selected.len() >= open.len() + close.len()
        && selected.starts_with(open)
        && selected.ends_with(close)
    {
        return Some(selected[open.len()..selected.len() - close.len()].to_owned());
    }
    None
}

/// If the buffer carries the delimiters immediately around the selection
/// (the range a previous wrap returned), strip them.
fn strip_surrounding(
    buffer: &str,
    sel_start: usize,
    sel_end: usize,
    kind: ToggleKind,
) -> Option<Toggle> {
    let selected = &buffer[sel_start..sel_end];
    let before = &buffer[..sel_start];
    let after = &buffer[sel_end..];

    let (strip_before, strip_after) = if kind == ToggleKind::Link {
        if !before.ends_with('[') || !after.starts_with("](") {
            return None;
        }
        (1, after.find(')')? + 1)
    } else {
        let (open, close) = kind.delimiters();
        if !before.ends_with(open) || !after.starts_with(close) {
            return None;
        }
        if kind == ToggleKind::Italic {
            // Exactly `**` next to the selection is a bold marker whose
            // trailing `*` must not be mistaken for an italic delimiter;
            // `***` is a bold marker plus an italic that can come off.
            let bold_open = before.ends_with("**") && !before.ends_with("***");
            let bold_close = after.starts_with("**") && !after.starts_with("***");
            if bold_open || bold_close {
                return None;
            }
        }
        (open.len(), close.len())
    };

    let start = sel_start - strip_before;
    let mut out = String::with_capacity(buffer.len() - strip_before - strip_after);
    out.push_str(&buffer[..start]);
    out.push_str(selected);
    out.push_str(&buffer[sel_end + strip_after..]);
    Some(Toggle {
        buffer: out,
        sel_start: start,
        sel_end: start + selected.len(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_selection() {
        let t = toggle("Hello world", 0, 5, ToggleKind::Bold);
        assert_eq!(t.buffer, "**Hello** world");
        assert_eq!(&t.buffer[t.sel_start..t.sel_end], "Hello");
    }

    #[test]
    fn test_unwrap_fully_wrapped_selection() {
        let t = toggle("**Hello** world", 0, 9, ToggleKind::Bold);
        assert_eq!(t.buffer, "Hello world");
        assert_eq!((t.sel_start, t.sel_end), (0, 5));
    }

    #[test]
    fn test_round_trip_via_returned_range() {
        let first = toggle("Hello world", 0, 5, ToggleKind::Bold);
        let second = toggle(&first.buffer, first.sel_start, first.sel_end, ToggleKind::Bold);
        assert_eq!(second.buffer, "Hello world");
        assert_eq!(&second.buffer[second.sel_start..second.sel_end], "Hello");
    }

    #[test]
    fn test_round_trip_all_marker_kinds() {
        for kind in [ToggleKind::Bold, ToggleKind::Italic, ToggleKind::Underline] {
            let first = toggle("alpha beta", 6, 10, kind);
            let second = toggle(&first.buffer, first.sel_start, first.sel_end, kind);
            assert_eq!(second.buffer, "alpha beta");
            assert_eq!(&second.buffer[second.sel_start..second.sel_end], "beta");
        }
    }

    #[test]
    fn test_empty_selection_inserts_placeholder() {
        let t = toggle("ab", 1, 1, ToggleKind::Bold);
        assert_eq!(t.buffer, "a**text**b");
        assert_eq!(&t.buffer[t.sel_start..t.sel_end], "text");
    }

    #[test]
    fn test_empty_selection_link_placeholder() {
        let t = toggle("", 0, 0, ToggleKind::Link);
        assert_eq!(t.buffer, "[text](url)");
        assert_eq!(&t.buffer[t.sel_start..t.sel_end], "text");
    }

    #[test]
    fn test_link_wrap_and_unwrap() {
        let t = toggle("see docs here", 4, 8, ToggleKind::Link);
        assert_eq!(t.buffer, "see [docs](url) here");
        assert_eq!(&t.buffer[t.sel_start..t.sel_end], "docs");

        let back = toggle(&t.buffer, t.sel_start, t.sel_end, ToggleKind::Link);
        assert_eq!(back.buffer, "see docs here");
        assert_eq!(&back.buffer[back.sel_start..back.sel_end], "docs");
    }

    #[test]
    fn test_unwrap_link_selected_whole() {
        let t = toggle("[docs](https://e.com)", 0, 21, ToggleKind::Link);
        assert_eq!(t.buffer, "docs");
        assert_eq!((t.sel_start, t.sel_end), (0, 4));
    }

    #[test]
    fn test_italic_inside_bold_wrap_adds_italic() {
        // The bold `**` around the selection must not pass for an italic
        // delimiter pair.
        let t = toggle("**Hello** world", 2, 7, ToggleKind::Italic);
        assert_eq!(t.buffer, "***Hello*** world");
        assert_eq!(&t.buffer[t.sel_start..t.sel_end], "Hello");
    }

    #[test]
    fn test_italic_inside_bold_round_trips() {
        let first = toggle("**Hello** world", 2, 7, ToggleKind::Italic);
        let second = toggle(&first.buffer, first.sel_start, first.sel_end, ToggleKind::Italic);
        assert_eq!(second.buffer, "**Hello** world");
        assert_eq!(&second.buffer[second.sel_start..second.sel_end], "Hello");
    }

    #[test]
    fn test_italic_on_selected_bold_span_wraps() {
        let t = toggle("**Hello** world", 0, 9, ToggleKind::Italic);
        assert_eq!(t.buffer, "***Hello*** world");
        assert_eq!(&t.buffer[t.sel_start..t.sel_end], "**Hello**");
    }

    #[test]
    fn test_italic_on_different_mark_wraps() {
        let t = toggle("__x__ y", 6, 7, ToggleKind::Italic);
        assert_eq!(t.buffer, "__x__ *y*");
        assert_eq!(&t.buffer[t.sel_start..t.sel_end], "y");
    }

    #[test]
    fn test_out_of_range_returns_input_unchanged() {
        let t = toggle("short", 3, 99, ToggleKind::Bold);
        assert_eq!(t.buffer, "short");
        assert_eq!((t.sel_start, t.sel_end), (3, 99));
    }

    #[test]
    fn test_non_char_boundary_returns_input_unchanged() {
        let t = toggle("héllo", 1, 2, ToggleKind::Bold);
        assert_eq!(t.buffer, "héllo");
    }
}
