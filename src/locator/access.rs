use std::fmt;

use serde::{Deserialize, Serialize};

use crate::buffer::{AnalysisSnapshot, StrippedOffset};

use super::{
    find_closing_bracket, identifier_before, identifier_end, is_between_angle_brackets,
    is_ident_byte, skip_whitespace, word_at,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    Public,
    Protected,
    Private,
}

impl AccessKind {
    pub const ALL: [Self; 3] = [Self::Public, Self::Protected, Self::Private];

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A span of a class body governed by one access specifier.
///
/// `start..end` covers the members; `label` is where the `public:` (etc.) label
/// begins, or `None` for the members preceding the first label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRegion {
    pub kind: AccessKind,
    pub label: Option<StrippedOffset>,
    pub start: StrippedOffset,
    pub end: StrippedOffset,
}

impl AccessRegion {
    /// Offset the region is anchored to: its label, else its first byte.
    #[must_use]
    pub fn anchor(&self) -> StrippedOffset {
        self.label.unwrap_or(self.start)
    }
}

/// Locate the first `kind:` label at or after `start` and the region it
/// governs, which ends at the next label or the unmatched `}` at the same
/// depth.
#[must_use]
pub fn find_access_region(
    snapshot: &AnalysisSnapshot,
    kind: AccessKind,
    start: StrippedOffset,
) -> Option<AccessRegion> {
    let bytes = snapshot.stripped_bytes();
    let mut i = start.get();
    while let Some(pos) = super::find_word(bytes, i, kind.keyword()) {
        if let Some((found, body_start)) = access_label_at(bytes, pos)
            && found == kind
        {
            return Some(AccessRegion {
                kind,
                label: Some(StrippedOffset::new(pos)),
                start: StrippedOffset::new(body_start),
                end: StrippedOffset::new(region_end(bytes, body_start)),
            });
        }
        i = pos + 1;
    }
    None
}

/// `public:`-style label at `pos`, returning its kind and the offset after the
/// colon. `public Base` and `private::x` are not labels.
fn access_label_at(bytes: &[u8], pos: usize) -> Option<(AccessKind, usize)> {
    AccessKind::ALL.into_iter().find_map(|kind| {
        if !word_at(bytes, pos, kind.keyword()) {
            return None;
        }
        let colon = skip_whitespace(bytes, pos + kind.keyword().len());
        (bytes.get(colon) == Some(&b':') && bytes.get(colon + 1) != Some(&b':'))
            .then_some((kind, colon + 1))
    })
}

fn region_end(bytes: &[u8], from: usize) -> usize {
    let mut depth = 0usize;
    for i in from..bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' if depth == 0 => return i,
            b'}' => depth -= 1,
            b'p' if depth == 0 && access_label_at(bytes, i).is_some() => return i,
            _ => {}
        }
    }
    bytes.len()
}

/// Next label at nesting depth zero in `[from, until)`:
/// `(label offset, kind, offset after colon)`.
fn next_access_label(bytes: &[u8], from: usize, until: usize) -> Option<(usize, AccessKind, usize)> {
    let mut depth = 0usize;
    for i in from..until.min(bytes.len()) {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'p' if depth == 0 => {
                if let Some((kind, after)) = access_label_at(bytes, i) {
                    return Some((i, kind, after));
                }
            }
            _ => {}
        }
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKeyword {
    Class,
    Struct,
}

impl ClassKeyword {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
        }
    }

    /// Access of members that precede any label.
    #[must_use]
    pub const fn default_access(self) -> AccessKind {
        match self {
            Self::Class => AccessKind::Private,
            Self::Struct => AccessKind::Public,
        }
    }
}

/// A `class`/`struct` definition with its braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBody {
    pub keyword: ClassKeyword,
    pub name: String,
    /// Offset of the `class`/`struct` keyword
    pub start: StrippedOffset,
    pub open: StrippedOffset,
    pub close: StrippedOffset,
}

/// Every class and struct definition in the buffer, nested ones included, in
/// source order. Forward declarations, template parameters (`template <class
/// T>`), `enum class` and elaborated type specifiers are skipped.
#[must_use]
pub fn find_class_bodies(snapshot: &AnalysisSnapshot) -> Vec<ClassBody> {
    let bytes = snapshot.stripped_bytes();
    let mut bodies = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let keyword = if word_at(bytes, i, "class") {
            ClassKeyword::Class
        } else if word_at(bytes, i, "struct") {
            ClassKeyword::Struct
        } else {
            i += 1;
            continue;
        };
        if let Some(body) = class_body_at(snapshot, i, keyword) {
            bodies.push(body);
        }
        i += keyword.keyword().len();
    }

    bodies
}

fn class_body_at(snapshot: &AnalysisSnapshot, pos: usize, keyword: ClassKeyword) -> Option<ClassBody> {
    let bytes = snapshot.stripped_bytes();
    if is_between_angle_brackets(snapshot, StrippedOffset::new(pos)) {
        return None;
    }
    if let Some((s, e)) = identifier_before(bytes, pos)
        && matches!(&bytes[s..e], b"enum" | b"friend")
    {
        return None;
    }

    let mut name: Option<(usize, usize)> = None;
    let mut naming = true;
    let mut j = pos + keyword.keyword().len();
    while j < bytes.len() {
        match bytes[j] {
            b'{' => break,
            b';' | b'(' | b')' | b'=' | b'}' => return None,
            b':' if bytes.get(j + 1) == Some(&b':') => {
                j += 2;
                continue;
            }
            b':' | b'<' => naming = false,
            b if is_ident_byte(b) => {
                let end = identifier_end(bytes, j);
                if naming && &bytes[j..end] != b"final" {
                    name = Some((j, end));
                }
                j = end;
                continue;
            }
            _ => {}
        }
        j += 1;
    }

    let (name_start, name_end) = name?;
    let open = StrippedOffset::new(j);
    let close = find_closing_bracket(snapshot, b'{', b'}', open)?;
    Some(ClassBody {
        keyword,
        name: String::from_utf8_lossy(&bytes[name_start..name_end]).into_owned(),
        start: StrippedOffset::new(pos),
        open,
        close,
    })
}

/// Access regions of one class body, in source order.
///
/// Members ahead of the first label form an unlabelled region with the
/// keyword's default access; it is omitted when it holds only whitespace.
#[must_use]
pub fn regions_in_body(snapshot: &AnalysisSnapshot, body: &ClassBody) -> Vec<AccessRegion> {
    let bytes = snapshot.stripped_bytes();
    let close = body.close.get();
    let mut regions = Vec::new();
    let mut kind = body.keyword.default_access();
    let mut label = None;
    let mut start = body.open.get() + 1;

    loop {
        let next = next_access_label(bytes, start, close);
        let end = next.map_or(close, |(pos, _, _)| pos);
        let region = AccessRegion {
            kind,
            label,
            start: StrippedOffset::new(start),
            end: StrippedOffset::new(end),
        };
        if region.label.is_some() || !snapshot.slice(region.start, region.end).trim().is_empty() {
            regions.push(region);
        }
        let Some((pos, next_kind, after)) = next else {
            break;
        };
        kind = next_kind;
        label = Some(StrippedOffset::new(pos));
        start = after;
    }

    regions
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
