use super::*;

#[test]
fn word_at_requires_identifier_boundaries() {
    let bytes = b"private_data private: xprivate";
    assert!(!word_at(bytes, 0, "private"));
    assert!(word_at(bytes, 13, "private"));
    assert!(!word_at(bytes, 23, "private"));
}

#[test]
fn find_word_skips_partial_matches() {
    let bytes = b"voidness void";
    assert_eq!(find_word(bytes, 0, "void"), Some(9));
    assert_eq!(find_word(bytes, 10, "void"), None);
}

#[test]
fn identifier_before_skips_whitespace() {
    let bytes = b"template  <";
    assert_eq!(identifier_before(bytes, 10), Some((0, 8)));
    assert_eq!(identifier_before(b"a + <", 4), None);
}

#[test]
fn preprocessor_lines_follow_continuations() {
    let bytes = b"int a;\n  #define X \\\n  void f();\nvoid g();";
    let in_define = bytes.windows(4).position(|w| w == b"void").unwrap();
    let outside = bytes.len() - "void g();".len();

    assert!(on_preprocessor_line(bytes, in_define));
    assert!(!on_preprocessor_line(bytes, outside));
    assert!(!on_preprocessor_line(bytes, 0));
}

#[test]
fn skip_helpers() {
    assert_eq!(skip_whitespace(b"  \n x", 0), 4);
    assert_eq!(skip_blanks(b" \t\nx", 0), 2);
    assert_eq!(last_non_whitespace(b"ab  ", 4), Some(1));
    assert_eq!(identifier_end(b"m_Value;", 0), 7);
}
