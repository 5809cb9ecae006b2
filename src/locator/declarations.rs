use crate::buffer::{AnalysisSnapshot, StrippedOffset};

use super::{
    find_closing_bracket, find_word, identifier_before, identifier_end, is_ident_byte,
    last_non_whitespace, on_preprocessor_line, skip_whitespace, word_at,
};

/// Words that may precede a constructor name inside a class body.
const CONSTRUCTOR_SPECIFIERS: &[&[u8]] = &[b"explicit", b"inline", b"constexpr"];

/// Type words kept when trimming a parameter name off a declaration.
const BUILTIN_TYPES: &[&str] = &[
    "bool", "char", "short", "int", "long", "float", "double", "unsigned", "signed", "void",
];

/// If a `template <...>` introducer directly precedes the declaration at
/// `pos`, return where `template` starts.
#[must_use]
pub fn is_templated(snapshot: &AnalysisSnapshot, pos: StrippedOffset) -> Option<StrippedOffset> {
    let bytes = snapshot.stripped_bytes();
    let close = last_non_whitespace(bytes, pos.get())?;
    if bytes[close] != b'>' {
        return None;
    }

    let mut depth = 0usize;
    let mut k = close + 1;
    let open = loop {
        k = k.checked_sub(1)?;
        match bytes[k] {
            b'>' => depth += 1,
            b'<' => {
                depth -= 1;
                if depth == 0 {
                    break k;
                }
            }
            b';' | b'{' | b'}' => return None,
            _ => {}
        }
    };

    let (start, end) = identifier_before(bytes, open)?;
    (&bytes[start..end] == b"template").then(|| StrippedOffset::new(start))
}

/// Find a constructor of `class_name` at or after `start`.
///
/// With `header_file` the in-class declaration form `Name(` is accepted;
/// otherwise only the qualified definition `Name::Name(` (optionally
/// `Name<T>::Name(`) is. Returns the offset of the first `Name`.
#[must_use]
pub fn find_constructor(
    snapshot: &AnalysisSnapshot,
    class_name: &str,
    header_file: bool,
    start: StrippedOffset,
) -> Option<StrippedOffset> {
    if class_name.is_empty() {
        return None;
    }
    let bytes = snapshot.stripped_bytes();
    let mut from = start.get();

    while let Some(pos) = find_word(bytes, from, class_name) {
        from = pos + class_name.len();
        let found = if header_file {
            is_declared_constructor(bytes, pos, class_name)
        } else {
            is_qualified_constructor(snapshot, pos, class_name)
        };
        if found {
            return Some(StrippedOffset::new(pos));
        }
    }
    None
}

fn is_declared_constructor(bytes: &[u8], pos: usize, name: &str) -> bool {
    let paren = skip_whitespace(bytes, pos + name.len());
    if bytes.get(paren) != Some(&b'(') {
        return false;
    }
    let Some(prev) = last_non_whitespace(bytes, pos) else {
        return true;
    };
    match bytes[prev] {
        b'~' | b'.' | b'>' | b'*' | b'&' | b'=' | b',' | b'(' => false,
        b':' => prev == 0 || bytes[prev - 1] != b':',
        b if is_ident_byte(b) => identifier_before(bytes, pos)
            .is_some_and(|(s, e)| CONSTRUCTOR_SPECIFIERS.contains(&&bytes[s..e])),
        _ => true,
    }
}

fn is_qualified_constructor(snapshot: &AnalysisSnapshot, pos: usize, name: &str) -> bool {
    let bytes = snapshot.stripped_bytes();
    let mut j = skip_whitespace(bytes, pos + name.len());
    if bytes.get(j) == Some(&b'<') {
        let Some(close) = find_closing_bracket(snapshot, b'<', b'>', StrippedOffset::new(j)) else {
            return false;
        };
        j = skip_whitespace(bytes, close.get() + 1);
    }
    if !bytes.get(j..).is_some_and(|rest| rest.starts_with(b"::")) {
        return false;
    }
    j = skip_whitespace(bytes, j + 2);
    if !word_at(bytes, j, name) {
        return false;
    }
    let paren = skip_whitespace(bytes, j + name.len());
    bytes.get(paren) == Some(&b'(')
}

/// A `void SetXxx(...)` written out in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterSignature {
    /// Offset of `void`
    pub start: StrippedOffset,
    /// Offset just past the closing `)`
    pub end: StrippedOffset,
    /// Text after `Set`, e.g. `Radius` for `SetRadius`
    pub param_name: String,
    /// Type of the first parameter, whitespace runs reduced to one space;
    /// empty when the setter takes no argument
    pub param_type: String,
    /// `void SetXxx()` or `void SetXxx(void)`
    pub is_void_no_arg: bool,
}

/// First setter at or after `start` that is not produced by a macro.
///
/// Occurrences on preprocessor lines (macro definitions) are skipped; setters
/// generated by invoking a macro never spell out `void Set` at all.
/// `void Name::SetXxx(` definitions are accepted.
#[must_use]
pub fn find_non_macro_setter(
    snapshot: &AnalysisSnapshot,
    start: StrippedOffset,
) -> Option<SetterSignature> {
    let bytes = snapshot.stripped_bytes();
    let mut from = start.get();

    while let Some(pos) = find_word(bytes, from, "void") {
        from = pos + "void".len();
        if on_preprocessor_line(bytes, pos) {
            continue;
        }
        if let Some(setter) = setter_at(snapshot, pos) {
            return Some(setter);
        }
    }
    None
}

fn setter_at(snapshot: &AnalysisSnapshot, void_pos: usize) -> Option<SetterSignature> {
    let bytes = snapshot.stripped_bytes();
    let mut j = skip_whitespace(bytes, void_pos + "void".len());

    // skip `Qualifier::` and `Qualifier<T>::` prefixes
    loop {
        let end = identifier_end(bytes, j);
        if end == j {
            return None;
        }
        let mut k = end;
        if bytes.get(k) == Some(&b'<') {
            k = find_closing_bracket(snapshot, b'<', b'>', StrippedOffset::new(k))?.get() + 1;
        }
        if bytes.get(k..).is_some_and(|rest| rest.starts_with(b"::")) {
            j = skip_whitespace(bytes, k + 2);
            continue;
        }
        break;
    }

    let name_end = identifier_end(bytes, j);
    if !bytes[j..name_end].starts_with(b"Set") || name_end == j + 3 {
        return None;
    }
    let open = skip_whitespace(bytes, name_end);
    if bytes.get(open) != Some(&b'(') {
        return None;
    }
    let close = find_closing_bracket(snapshot, b'(', b')', StrippedOffset::new(open))?;
    let params = snapshot
        .slice(StrippedOffset::new(open + 1), close)
        .trim();
    let is_void_no_arg = params.is_empty() || params == "void";

    Some(SetterSignature {
        start: StrippedOffset::new(void_pos),
        end: close.forward(1),
        param_name: String::from_utf8_lossy(&bytes[j + 3..name_end]).into_owned(),
        param_type: if is_void_no_arg {
            String::new()
        } else {
            first_parameter_type(params)
        },
        is_void_no_arg,
    })
}

/// Highest input number among `SetInput(` / `SetInput<N>(` methods at or
/// after `start`, where plain `SetInput` is input 0.
///
/// Occurrences on preprocessor lines are skipped. `None` when the class
/// declares no `SetInput` method.
#[must_use]
pub fn find_set_input_count(snapshot: &AnalysisSnapshot, start: StrippedOffset) -> Option<usize> {
    const PREFIX: &[u8] = b"SetInput";
    let bytes = snapshot.stripped_bytes();
    let mut highest = None;

    let mut pos = start.get();
    while let Some(found) = bytes
        .get(pos..)
        .and_then(|rest| rest.windows(PREFIX.len()).position(|w| w == PREFIX))
    {
        let name_start = pos + found;
        pos = name_start + PREFIX.len();
        if name_start > 0 && is_ident_byte(bytes[name_start - 1]) {
            continue;
        }
        let name_end = identifier_end(bytes, name_start);
        let digits = &bytes[name_start + PREFIX.len()..name_end];
        if !digits.iter().all(u8::is_ascii_digit) {
            continue;
        }
        if bytes.get(skip_whitespace(bytes, name_end)) != Some(&b'(')
            || on_preprocessor_line(bytes, name_start)
        {
            continue;
        }
        let number = if digits.is_empty() {
            0
        } else {
            match std::str::from_utf8(digits).ok().and_then(|d| d.parse::<usize>().ok()) {
                Some(n) => n,
                None => continue,
            }
        };
        highest = highest.max(Some(number));
    }
    highest
}

/// Type of the first parameter in a parameter list, parameter name and
/// default value removed.
fn first_parameter_type(params: &str) -> String {
    let mut depth = 0usize;
    let first = params
        .char_indices()
        .find(|&(_, c)| match c {
            '<' | '(' | '[' => {
                depth += 1;
                false
            }
            '>' | ')' | ']' => {
                depth = depth.saturating_sub(1);
                false
            }
            ',' => depth == 0,
            _ => false,
        })
        .map_or(params, |(i, _)| &params[..i]);
    let declaration = first.split('=').next().unwrap_or(first).trim_end();

    let name_start = declaration
        .rfind(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .map_or(0, |p| p + 1);
    let name = &declaration[name_start..];
    let has_type_before = declaration[..name_start]
        .chars()
        .any(|c| c.is_ascii_alphanumeric() || c == '_');
    let ty = if has_type_before && !name.is_empty() && !BUILTIN_TYPES.contains(&name) {
        &declaration[..name_start]
    } else {
        declaration
    };
    reduce_spaces(ty)
}

fn reduce_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "declarations_tests.rs"]
mod tests;
