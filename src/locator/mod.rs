//! Structural queries over the stripped buffer.
//!
//! Comments and literal interiors are already blanked in the stripped view, so
//! none of these scans can match inside them. Not-found is always `None`.

mod access;
mod area;
mod brackets;
mod declarations;
mod members;

pub use access::{
    AccessKind, AccessRegion, ClassBody, ClassKeyword, find_access_region, find_class_bodies,
    regions_in_body,
};
pub use area::remove_named_area;
pub use brackets::{find_closing_bracket, is_between_angle_brackets};
pub use declarations::{
    SetterSignature, find_constructor, find_non_macro_setter, find_set_input_count, is_templated,
};
pub use members::{MemberVariable, find_member_variables};

pub(crate) const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether `word` sits at `pos` as a whole identifier.
pub(crate) fn word_at(bytes: &[u8], pos: usize, word: &str) -> bool {
    bytes.get(pos..).is_some_and(|rest| rest.starts_with(word.as_bytes()))
        && (pos == 0 || !is_ident_byte(bytes[pos - 1]))
        && !bytes
            .get(pos + word.len())
            .is_some_and(|&b| is_ident_byte(b))
}

/// Next whole-identifier occurrence of `word` at or after `from`.
pub(crate) fn find_word(bytes: &[u8], from: usize, word: &str) -> Option<usize> {
    let first = *word.as_bytes().first()?;
    (from..bytes.len()).find(|&i| bytes[i] == first && word_at(bytes, i, word))
}

pub(crate) fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.iter().position(|b| !b.is_ascii_whitespace()))
        .map_or(bytes.len(), |p| p + from)
}

/// Skip spaces and tabs only.
pub(crate) fn skip_blanks(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.iter().position(|&b| b != b' ' && b != b'\t'))
        .map_or(bytes.len(), |p| p + from)
}

/// Index of the last non-whitespace byte before `before`.
pub(crate) fn last_non_whitespace(bytes: &[u8], before: usize) -> Option<usize> {
    bytes[..before.min(bytes.len())]
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
}

/// End of the identifier starting at `pos`.
pub(crate) fn identifier_end(bytes: &[u8], pos: usize) -> usize {
    bytes
        .get(pos..)
        .and_then(|rest| rest.iter().position(|&b| !is_ident_byte(b)))
        .map_or(bytes.len(), |p| p + pos)
}

/// Span of the identifier that ends right before `before`, skipping whitespace.
pub(crate) fn identifier_before(bytes: &[u8], before: usize) -> Option<(usize, usize)> {
    let last = last_non_whitespace(bytes, before)?;
    if !is_ident_byte(bytes[last]) {
        return None;
    }
    let start = bytes[..=last]
        .iter()
        .rposition(|&b| !is_ident_byte(b))
        .map_or(0, |p| p + 1);
    Some((start, last + 1))
}

/// Whether `pos` lies on a preprocessor line, following `\` continuations.
pub(crate) fn on_preprocessor_line(bytes: &[u8], pos: usize) -> bool {
    let mut line_start = bytes[..pos.min(bytes.len())]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |p| p + 1);
    loop {
        let first = skip_blanks(bytes, line_start);
        if bytes.get(first) == Some(&b'#') {
            return true;
        }
        // previous line continued with a backslash?
        let Some(prev_end) = line_start.checked_sub(1) else {
            return false;
        };
        let continued = bytes[..prev_end]
            .iter()
            .rposition(|&b| b != b'\r')
            .is_some_and(|p| bytes[p] == b'\\');
        if !continued {
            return false;
        }
        line_start = bytes[..prev_end]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |p| p + 1);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
