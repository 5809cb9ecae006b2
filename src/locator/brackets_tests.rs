use super::*;

fn snap(text: &str) -> AnalysisSnapshot {
    AnalysisSnapshot::prepare(text)
}

fn at(text: &str, needle: &str) -> StrippedOffset {
    StrippedOffset::new(text.find(needle).unwrap())
}

#[test]
fn closing_bracket_skips_nested_pairs() {
    let text = "{ { } }";
    let snapshot = snap(text);

    assert_eq!(
        find_closing_bracket(&snapshot, b'{', b'}', StrippedOffset::new(0)),
        Some(StrippedOffset::new(6))
    );
    assert_eq!(
        find_closing_bracket(&snapshot, b'{', b'}', StrippedOffset::new(2)),
        Some(StrippedOffset::new(4))
    );
}

#[test]
fn closing_bracket_ignores_commented_brackets() {
    let text = "f( a /* ) */, \")\" )";
    let snapshot = snap(text);

    assert_eq!(
        find_closing_bracket(&snapshot, b'(', b')', StrippedOffset::new(1)),
        Some(StrippedOffset::new(text.len() - 1))
    );
}

#[test]
fn closing_bracket_not_found() {
    let snapshot = snap("{ { }");
    assert_eq!(
        find_closing_bracket(&snapshot, b'{', b'}', StrippedOffset::new(0)),
        None
    );
}

#[test]
fn closing_bracket_requires_open_char_at_position() {
    let snapshot = snap("a { }");
    assert_eq!(
        find_closing_bracket(&snapshot, b'{', b'}', StrippedOffset::new(0)),
        None
    );
}

#[test]
fn template_argument_is_between_angle_brackets() {
    let text = "std::vector<T> values;";
    assert!(is_between_angle_brackets(&snap(text), at(text, "T>")));
}

#[test]
fn relational_operators_are_not_template_lists() {
    let less = "bool r = a < b;";
    assert!(!is_between_angle_brackets(&snap(less), at(less, "b;")));

    let greater = "bool r = a > b;";
    assert!(!is_between_angle_brackets(&snap(greater), at(greater, "b;")));
    assert!(!is_between_angle_brackets(&snap(greater), at(greater, "a >")));
}

#[test]
fn comma_inside_nested_template_list() {
    let text = "std::map<int, std::vector<T>> lookup;";
    assert!(is_between_angle_brackets(&snap(text), at(text, ",")));
}

#[test]
fn comma_between_declarators_is_not_inside() {
    let text = "int a, b;";
    assert!(!is_between_angle_brackets(&snap(text), at(text, ",")));
}

#[test]
fn template_keyword_with_space() {
    let text = "template <class T> class Foo;";
    assert!(is_between_angle_brackets(&snap(text), at(text, "class T")));
    assert!(!is_between_angle_brackets(&snap(text), at(text, "class Foo")));
}

#[test]
fn logical_expression_is_not_a_template_list() {
    let text = "if (a<b && c>d) x();";
    assert!(!is_between_angle_brackets(&snap(text), at(text, "b &&")));
}

#[test]
fn shift_and_comparison_operators_are_ignored() {
    let shift = "x = a << b >> c;";
    assert!(!is_between_angle_brackets(&snap(shift), at(shift, "b ")));

    let le = "ok = a<=b;";
    assert!(!is_between_angle_brackets(&snap(le), at(le, "b;")));
}

#[test]
fn arrow_is_not_a_closing_angle() {
    let text = "x = p->y < q;";
    assert!(!is_between_angle_brackets(&snap(text), at(text, "y <")));
}

#[test]
fn angle_pair_does_not_cross_parentheses() {
    let text = "if (a<b) y = c>d;";
    assert!(!is_between_angle_brackets(&snap(text), at(text, "b)")));

    let backward = "x = (c > d) + a<b;";
    assert!(!is_between_angle_brackets(&snap(backward), at(backward, "d)")));
}

#[test]
fn parenthesised_template_arguments_are_balanced() {
    let text = "std::function<void(int)> callback;";
    assert!(is_between_angle_brackets(&snap(text), at(text, "void")));
}
