use crate::buffer::{AnalysisSnapshot, StrippedOffset};

use super::{is_ident_byte, last_non_whitespace, identifier_before};

/// Position of the bracket closing the one at `open_pos`.
///
/// Nested pairs of the same kind are balanced. Returns `None` when `open_pos`
/// does not hold `open` or the buffer ends first.
#[must_use]
pub fn find_closing_bracket(
    snapshot: &AnalysisSnapshot,
    open: u8,
    close: u8,
    open_pos: StrippedOffset,
) -> Option<StrippedOffset> {
    let bytes = snapshot.stripped_bytes();
    if open == close || bytes.get(open_pos.get()) != Some(&open) {
        return None;
    }

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open_pos.get()) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(StrippedOffset::new(i));
            }
        }
    }
    None
}

/// Whether `pos` lies inside a template argument list such as `vector<T>`,
/// as opposed to between relational operators.
///
/// The opening `<` must directly follow a name (or the `template` keyword)
/// and a matching `>` must appear before the statement ends, without
/// leaving the parentheses `pos` sits in. `&&`/`||` between the two mark an
/// expression.
#[must_use]
pub fn is_between_angle_brackets(snapshot: &AnalysisSnapshot, pos: StrippedOffset) -> bool {
    let bytes = snapshot.stripped_bytes();
    let pos = pos.get();
    if pos >= bytes.len() {
        return false;
    }

    let Some(open) = unmatched_open_angle(bytes, pos) else {
        return false;
    };
    if !opens_template_list(bytes, open) {
        return false;
    }
    let Some(close) = unmatched_close_angle(bytes, pos) else {
        return false;
    };

    let inner = &bytes[open + 1..close];
    !inner.windows(2).any(|w| w == b"&&" || w == b"||")
}

fn unmatched_open_angle(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut parens = 0usize;
    let mut i = pos;
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b';' | b'{' | b'}' => return None,
            b')' => parens += 1,
            b'(' if parens == 0 => return None,
            b'(' => parens -= 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => i -= 1,
            b'>' => depth += 1,
            b'<' if depth == 0 => return Some(i),
            b'<' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn unmatched_close_angle(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut parens = 0usize;
    for j in pos..bytes.len() {
        match bytes[j] {
            b';' | b'{' | b'}' => return None,
            b'(' => parens += 1,
            b')' if parens == 0 => return None,
            b')' => parens -= 1,
            b'<' => depth += 1,
            b'>' if j > 0 && bytes[j - 1] == b'-' => {}
            b'>' if depth == 0 => {
                return (bytes.get(j + 1) != Some(&b'=')).then_some(j);
            }
            b'>' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn opens_template_list(bytes: &[u8], open: usize) -> bool {
    if matches!(bytes.get(open + 1), Some(b'<' | b'=')) {
        return false;
    }
    if open > 0 && bytes[open - 1] == b'<' {
        return false;
    }
    if open > 0 && is_ident_byte(bytes[open - 1]) {
        return true;
    }
    // `template <typename T>` is commonly written with a space
    last_non_whitespace(bytes, open).is_some()
        && identifier_before(bytes, open).is_some_and(|(s, e)| &bytes[s..e] == b"template")
}

#[cfg(test)]
#[path = "brackets_tests.rs"]
mod tests;
