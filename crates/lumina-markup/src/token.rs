//! Tokenizer for the inline marker grammar.
//!
//! Classifies text into a segment stream instead of chained regex
//! substitution, which makes the italic/bold disambiguation (no adjacent
//! asterisk on either side of an italic delimiter) an explicit rule rather
//! than a lookaround. Pass order mirrors the historical substitution
//! chain: bold, italic, underline, link, then CRLF line breaks. Each pass
//! recurses into the content of marks found earlier, and at every nesting
//! level it matches delimiter pairs across the whole level, treating
//! already-matched marks as opaque atoms. That is how different mark kinds
//! nest in both directions (`**a *b* c**` and `__a *b*__`); a mark never
//! nests with itself.
//!
//! Anything that fails to match stays literal text. Tokenizing never fails.

/// An inline mark kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Link { url: String },
}

/// One classified span of input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including any markers that failed to match.
    Text(String),
    /// A marked span and its nested content.
    Marked(Mark, Vec<Segment>),
    /// A CRLF sequence in the source text.
    LineBreak,
}

/// Result of a single finder: the byte range consumed and the segment it
/// produced.
type Found = (usize, usize, Segment);

type Finder = fn(&str) -> Option<Found>;

/// A pass's view of one nesting level: literal characters interleaved with
/// segments earlier passes already matched.
#[derive(Clone)]
enum Item {
    Ch(char),
    Atom(Segment),
}

#[derive(Clone, Copy)]
enum Pair {
    Bold,
    Italic,
    Underline,
}

/// Tokenize markup text into a segment stream.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Segment> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut segments = vec![Segment::Text(input.to_owned())];
    for pair in [Pair::Bold, Pair::Italic, Pair::Underline] {
        segments = pair_pass(segments, pair);
    }
    for finder in [find_link as Finder, find_line_break] {
        segments = leaf_pass(segments, finder);
    }
    segments
}

/// Run one delimiter-pair pass: recurse into marked content, then match
/// pairs across this level's literal runs.
fn pair_pass(segments: Vec<Segment>, pair: Pair) -> Vec<Segment> {
    let segments: Vec<Segment> = segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Marked(mark, children) => Segment::Marked(mark, pair_pass(children, pair)),
            other => other,
        })
        .collect();
    let items = to_items(segments);
    match pair {
        Pair::Bold => match_double(&items, '*', &Mark::Bold),
        Pair::Italic => match_italic(&items),
        Pair::Underline => match_double(&items, '_', &Mark::Underline),
    }
}

fn to_items(segments: Vec<Segment>) -> Vec<Item> {
    let mut items = Vec::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => items.extend(text.chars().map(Item::Ch)),
            other => items.push(Item::Atom(other)),
        }
    }
    items
}

/// Reassemble consecutive characters into text segments.
fn to_segments(items: &[Item]) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut text = String::new();
    for item in items {
        match item {
            Item::Ch(c) => text.push(*c),
            Item::Atom(segment) => {
                if !text.is_empty() {
                    out.push(Segment::Text(std::mem::take(&mut text)));
                }
                out.push(segment.clone());
            }
        }
    }
    if !text.is_empty() {
        out.push(Segment::Text(text));
    }
    out
}

fn is_ch(items: &[Item], i: usize, c: char) -> bool {
    matches!(items.get(i), Some(Item::Ch(x)) if *x == c)
}

fn is_pair_at(items: &[Item], i: usize, delim: char) -> bool {
    is_ch(items, i, delim) && is_ch(items, i + 1, delim)
}

/// `DD X DD` where `D` is `delim` doubled and X is the span up to the next
/// doubled delimiter (a single `delim` inside X is allowed).
fn match_double(items: &[Item], delim: char, mark: &Mark) -> Vec<Segment> {
    let mut out: Vec<Item> = Vec::new();
    let mut i = 0;
    while i < items.len() {
        if is_pair_at(items, i, delim)
            && let Some(close) = (i + 2..items.len()).find(|&j| is_pair_at(items, j, delim))
        {
            let children = to_segments(&items[i + 2..close]);
            out.push(Item::Atom(Segment::Marked(mark.clone(), children)));
            i = close + 2;
            continue;
        }
        out.push(items[i].clone());
        i += 1;
    }
    to_segments(&out)
}

/// `*X*` where neither delimiter touches another `*` and X is the shortest
/// non-empty span containing no literal `*`.
///
/// The adjacency rule is what keeps leftover bold-marker fragments (and
/// inputs like `*a**b*`) literal instead of italicized. A neighboring atom
/// counts as a non-asterisk.
fn match_italic(items: &[Item]) -> Vec<Segment> {
    let mut out: Vec<Item> = Vec::new();
    let mut i = 0;
    while i < items.len() {
        if is_ch(items, i, '*')
            && !is_ch(items, i.wrapping_sub(1), '*')
            && !is_ch(items, i + 1, '*')
        {
            // Shortest close: the next `*` after at least one item.
            let mut j = i + 1;
            while j < items.len() && !is_ch(items, j, '*') {
                j += 1;
            }
            if j < items.len() && j > i + 1 && !is_ch(items, j + 1, '*') {
                let children = to_segments(&items[i + 1..j]);
                out.push(Item::Atom(Segment::Marked(Mark::Italic, children)));
                i = j + 1;
                continue;
            }
        }
        out.push(items[i].clone());
        i += 1;
    }
    to_segments(&out)
}

/// Run one finder over every text segment, recursing into marked content.
fn leaf_pass(segments: Vec<Segment>, find: Finder) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Text(text) => split_text(&text, find, &mut out),
            Segment::Marked(mark, children) => {
                out.push(Segment::Marked(mark, leaf_pass(children, find)));
            }
            Segment::LineBreak => out.push(Segment::LineBreak),
        }
    }
    out
}

fn split_text(text: &str, find: Finder, out: &mut Vec<Segment>) {
    let mut rest = text;
    while let Some((start, end, segment)) = find(rest) {
        if start > 0 {
            out.push(Segment::Text(rest[..start].to_owned()));
        }
        out.push(segment);
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        out.push(Segment::Text(rest.to_owned()));
    }
}

fn marked(mark: Mark, content: &str) -> Segment {
    let children = if content.is_empty() {
        Vec::new()
    } else {
        vec![Segment::Text(content.to_owned())]
    };
    Segment::Marked(mark, children)
}

/// `[text](url)`, neither part containing nested markup.
fn find_link(s: &str) -> Option<Found> {
    let mut from = 0;
    while let Some(rel) = s[from..].find('[') {
        let open = from + rel;
        if let Some(text_end) = s[open + 1..].find(']').map(|r| open + 1 + r) {
            if s[text_end + 1..].starts_with('(') {
                if let Some(url_end) = s[text_end + 2..].find(')').map(|r| text_end + 2 + r) {
                    let url = s[text_end + 2..url_end].to_owned();
                    let segment = marked(Mark::Link { url }, &s[open + 1..text_end]);
                    return Some((open, url_end + 1, segment));
                }
            }
        }
        from = open + 1;
    }
    None
}

/// A literal CRLF sequence becomes a target-appropriate line break.
fn find_line_break(s: &str) -> Option<Found> {
    let at = s.find("\r\n")?;
    Some((at, at + 2, Segment::LineBreak))
}
