use crate::buffer::{AnalysisSnapshot, StrippedOffset};

use super::{
    AccessKind, AccessRegion, find_closing_bracket, identifier_before, identifier_end,
    is_between_angle_brackets, is_ident_byte, on_preprocessor_line, skip_whitespace,
};

/// Statements starting with these words never declare a data member.
const NON_MEMBER_KEYWORDS: &[&str] = &[
    "typedef",
    "using",
    "friend",
    "static",
    "static_assert",
    "constexpr",
    "enum",
    "class",
    "struct",
    "union",
    "template",
    "namespace",
    "virtual",
    "explicit",
    "inline",
    "return",
];

/// Head words after which a `{` opens a definition body rather than a brace
/// initializer.
const BLOCK_KEYWORDS: &[&str] = &["class", "struct", "union", "enum", "namespace", "extern"];

/// A data member declaration found inside an access region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberVariable {
    pub name: String,
    /// Offset of the identifier
    pub offset: StrippedOffset,
    pub access: AccessKind,
}

/// Data members declared directly in `region`.
///
/// Function declarations and definitions, nested type definitions, typedefs,
/// static members and preprocessor lines are skipped. `int a, b;` yields two
/// members; commas inside template argument lists do not split.
#[must_use]
pub fn find_member_variables(
    snapshot: &AnalysisSnapshot,
    region: &AccessRegion,
) -> Vec<MemberVariable> {
    let bytes = snapshot.stripped_bytes();
    let end = region.end.get().min(bytes.len());
    let mut members = Vec::new();
    let mut stmt = region.start.get();
    let mut i = stmt;

    while i < end {
        match bytes[i] {
            b'#' if on_preprocessor_line(bytes, i) => {
                i = directive_end(bytes, i);
                stmt = i;
                continue;
            }
            b'{' => {
                let Some(close) = find_closing_bracket(snapshot, b'{', b'}', StrippedOffset::new(i))
                else {
                    break;
                };
                let after = close.get() + 1;
                let head = snapshot.slice(StrippedOffset::new(stmt), StrippedOffset::new(i));
                if opens_definition(head) {
                    let next = skip_whitespace(bytes, after);
                    i = if bytes.get(next) == Some(&b';') { next + 1 } else { after };
                    stmt = i;
                } else {
                    i = after;
                }
                continue;
            }
            b';' => {
                members.extend(parse_declaration(snapshot, stmt, i, region.kind));
                stmt = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    members
}

/// Index just past a preprocessor directive, honouring `\` continuations.
fn directive_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let continued = bytes[from..i]
                .iter()
                .rposition(|&b| b != b'\r')
                .is_some_and(|p| bytes[from + p] == b'\\');
            if !continued {
                return i + 1;
            }
        }
        i += 1;
    }
    bytes.len()
}

fn opens_definition(head: &str) -> bool {
    let head = head.trim();
    head.is_empty()
        || head.contains(')')
        || head
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .find(|w| !w.is_empty())
            .is_some_and(|w| BLOCK_KEYWORDS.contains(&w))
}

fn parse_declaration(
    snapshot: &AnalysisSnapshot,
    start: usize,
    end: usize,
    access: AccessKind,
) -> Vec<MemberVariable> {
    let bytes = snapshot.stripped_bytes();
    let start = skip_whitespace(bytes, start);
    if start >= end {
        return Vec::new();
    }

    let first_word = &bytes[start..identifier_end(bytes, start)];
    if NON_MEMBER_KEYWORDS
        .iter()
        .any(|k| k.as_bytes() == first_word)
        || contains_word(&bytes[start..end], b"operator")
    {
        return Vec::new();
    }

    let mut members = Vec::new();
    for (index, (seg_start, seg_end)) in split_declarators(snapshot, start, end).into_iter().enumerate() {
        let decl_end = declarator_end(snapshot, seg_start, seg_end);
        if index == 0 && has_call_parenthesis(snapshot, seg_start, decl_end) {
            return Vec::new();
        }
        let Some((name_start, name_end)) = identifier_before(bytes, decl_end)
            .filter(|&(s, _)| s >= seg_start)
        else {
            continue;
        };
        // the first declarator needs a type in front of its name
        if index == 0 && !bytes[seg_start..name_start].iter().any(|&b| is_ident_byte(b)) {
            return Vec::new();
        }
        members.push(MemberVariable {
            name: String::from_utf8_lossy(&bytes[name_start..name_end]).into_owned(),
            offset: StrippedOffset::new(name_start),
            access,
        });
    }
    members
}

/// Split `[start, end)` at commas outside brackets and template lists.
fn split_declarators(snapshot: &AnalysisSnapshot, start: usize, end: usize) -> Vec<(usize, usize)> {
    let bytes = snapshot.stripped_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut seg_start = start;
    for j in start..end {
        match bytes[j] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 && !is_between_angle_brackets(snapshot, StrippedOffset::new(j)) => {
                parts.push((seg_start, j));
                seg_start = j + 1;
            }
            _ => {}
        }
    }
    parts.push((seg_start, end));
    parts
}

/// Where the declarator proper stops: before an initializer, array bound or
/// bit-field width.
fn declarator_end(snapshot: &AnalysisSnapshot, start: usize, end: usize) -> usize {
    let bytes = snapshot.stripped_bytes();
    (start..end)
        .find(|&j| {
            let cut = match bytes[j] {
                b'=' | b'[' | b'{' => true,
                b':' => bytes.get(j + 1) != Some(&b':') && (j == 0 || bytes[j - 1] != b':'),
                _ => false,
            };
            cut && !is_between_angle_brackets(snapshot, StrippedOffset::new(j))
        })
        .unwrap_or(end)
}

fn has_call_parenthesis(snapshot: &AnalysisSnapshot, start: usize, end: usize) -> bool {
    let bytes = snapshot.stripped_bytes();
    (start..end).any(|j| {
        bytes[j] == b'(' && !is_between_angle_brackets(snapshot, StrippedOffset::new(j))
    })
}

fn contains_word(haystack: &[u8], word: &[u8]) -> bool {
    haystack.windows(word.len()).enumerate().any(|(i, w)| {
        w == word
            && (i == 0 || !is_ident_byte(haystack[i - 1]))
            && !haystack.get(i + word.len()).is_some_and(|&b| is_ident_byte(b))
    })
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod tests;
