use super::RawOffset;

/// What a stripped span used to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// `// ...` up to (not including) the newline
    LineComment,
    /// `/* ... */`, delimiters included
    BlockComment,
    /// interior of a `"..."` literal, quotes excluded
    StringLiteral,
    /// interior of a `'...'` literal, quotes excluded
    CharLiteral,
}

impl RegionKind {
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }
}

/// A blanked span of the raw text, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRegion {
    pub start: RawOffset,
    pub end: RawOffset,
    pub kind: RegionKind,
}

impl CommentRegion {
    #[must_use]
    pub const fn new(start: usize, end: usize, kind: RegionKind) -> Self {
        Self {
            start: RawOffset::new(start),
            end: RawOffset::new(end),
            kind,
        }
    }

    #[must_use]
    pub fn contains(&self, offset: RawOffset) -> bool {
        self.start <= offset && offset < self.end
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.get() - self.start.get()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output of [`strip`].
#[derive(Debug, Clone)]
pub struct Stripped {
    pub text: String,
    pub regions: Vec<CommentRegion>,
}

/// Blank comments and literal interiors in `raw`.
///
/// The result has exactly the byte length of `raw`; blanked bytes become spaces
/// while `\n` and `\r` survive, so line numbers line up between both views.
/// Block comments do not nest and an unterminated one runs to end of buffer.
#[must_use]
pub fn strip(raw: &str) -> Stripped {
    let regions = find_regions(raw.as_bytes());
    let text = blank_regions(raw, &regions);
    Stripped { text, regions }
}

fn find_regions(bytes: &[u8]) -> Vec<CommentRegion> {
    let mut regions = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'/')) => {
                let end = find_byte(bytes, i, b'\n').unwrap_or(bytes.len());
                regions.push(CommentRegion::new(i, end, RegionKind::LineComment));
                i = end;
            }
            (b'/', Some(b'*')) => {
                let end = find_seq(bytes, i + 2, b"*/").map_or(bytes.len(), |p| p + 2);
                regions.push(CommentRegion::new(i, end, RegionKind::BlockComment));
                i = end;
            }
            (b'"', _) => {
                let (next, interior_end) =
                    skip_raw_literal(bytes, i).unwrap_or_else(|| skip_literal(bytes, i, b'"'));
                if interior_end > i + 1 {
                    regions.push(CommentRegion::new(
                        i + 1,
                        interior_end,
                        RegionKind::StringLiteral,
                    ));
                }
                i = next;
            }
            (b'\'', _) if !is_digit_separator(bytes, i) => {
                let (next, interior_end) = skip_literal(bytes, i, b'\'');
                if interior_end > i + 1 {
                    regions.push(CommentRegion::new(
                        i + 1,
                        interior_end,
                        RegionKind::CharLiteral,
                    ));
                }
                i = next;
            }
            _ => i += 1,
        }
    }

    regions
}

/// Walk a quoted literal starting at `open`.
/// Returns `(index after the literal, end of its interior)`. An unescaped
/// newline terminates an unclosed literal.
fn skip_literal(bytes: &[u8], open: usize, quote: u8) -> (usize, usize) {
    let mut j = open + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'\n' => return (j, j),
            b if b == quote => return (j + 1, j),
            _ => j += 1,
        }
    }
    (bytes.len(), bytes.len())
}

/// Walk a C++11 raw string `R"delim( ... )delim"` whose quote is at `open`.
/// `None` when `open` does not start one. Raw strings may span lines; an
/// unterminated one runs to end of buffer.
fn skip_raw_literal(bytes: &[u8], open: usize) -> Option<(usize, usize)> {
    if !has_raw_prefix(bytes, open) {
        return None;
    }
    let paren = bytes[open + 1..].iter().take(17).position(|&b| b == b'(')? + open + 1;
    let delim = &bytes[open + 1..paren];
    if delim
        .iter()
        .any(|&b| b.is_ascii_whitespace() || matches!(b, b'\\' | b')' | b'"'))
    {
        return None;
    }

    let mut closing = Vec::with_capacity(delim.len() + 2);
    closing.push(b')');
    closing.extend_from_slice(delim);
    closing.push(b'"');
    Some(
        find_seq(bytes, paren + 1, &closing).map_or((bytes.len(), bytes.len()), |p| {
            let quote = p + closing.len() - 1;
            (quote + 1, quote)
        }),
    )
}

/// `R`, `LR`, `uR`, `UR` or `u8R` directly before the quote at `open`.
fn has_raw_prefix(bytes: &[u8], open: usize) -> bool {
    if open == 0 || bytes[open - 1] != b'R' {
        return false;
    }
    let token_start = bytes[..open]
        .iter()
        .rposition(|&b| !(b.is_ascii_alphanumeric() || b == b'_'))
        .map_or(0, |p| p + 1);
    matches!(&bytes[token_start..open], b"R" | b"LR" | b"uR" | b"UR" | b"u8R")
}

/// `1'000'000`: a quote inside a numeric literal.
fn is_digit_separator(bytes: &[u8], pos: usize) -> bool {
    if !bytes.get(pos + 1).is_some_and(u8::is_ascii_alphanumeric) {
        return false;
    }
    let token_start = bytes[..pos]
        .iter()
        .rposition(|&b| !(b.is_ascii_alphanumeric() || b == b'\''))
        .map_or(0, |p| p + 1);
    token_start < pos && bytes[token_start].is_ascii_digit()
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == needle)
        .map(|p| p + from)
}

fn find_seq(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

fn blank_regions(raw: &str, regions: &[CommentRegion]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending = regions.iter().peekable();

    for (idx, ch) in raw.char_indices() {
        let offset = RawOffset::new(idx);
        while pending.next_if(|r| r.end <= offset).is_some() {}
        let inside = pending.peek().is_some_and(|r| r.contains(offset));
        if inside && ch != '\n' && ch != '\r' {
            out.extend(std::iter::repeat_n(' ', ch.len_utf8()));
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;
