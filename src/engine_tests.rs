use super::*;
use crate::StyleGuardError;
use crate::ledger::RuleCode;

fn loaded(text: &str) -> Engine {
    let mut engine = Engine::new();
    engine.set_file_name("sample.h");
    engine.load_buffer(text);
    engine
}

#[test]
fn long_line_is_reported_with_its_length() {
    let text = format!("int x;\n{}\n", "a".repeat(95));
    let mut engine = loaded(&text);

    assert!(engine.check_line_length(80));
    assert_eq!(engine.errors().len(), 1);
    assert_eq!(engine.errors()[0].line, 2);
    assert!(engine.errors()[0].description.contains("95"));
}

#[test]
fn missing_final_newline_is_reported_on_the_last_line() {
    let mut engine = loaded("int x;\ncode;");
    assert!(engine.check_end_of_file_newline());
    assert_eq!(engine.errors()[0].rule.tag(), "EOF");
    assert_eq!(engine.errors()[0].line, 2);
}

#[test]
fn private_before_public_is_a_declaration_order_error() {
    let mut engine = loaded("class A {\nprivate:\n  int m_X;\npublic:\n  A();\n};\n");

    assert!(engine.check_declaration_order(1, 2, 3).unwrap());
    let errors = engine.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, RuleCode::DeclarationOrder);
    assert_eq!(errors[0].line, 4);
}

#[test]
fn tab_inside_comment_is_not_reported() {
    let mut engine = loaded("int a; // \tnote\n/* \t */\n");
    assert!(!engine.check_tabs());
    assert!(engine.errors().is_empty());
}

#[test]
fn rerunning_a_check_duplicates_findings_until_cleared() {
    let mut engine = loaded("int a   ;\n");
    engine.check_semicolon_space(0);
    let first = engine.last_errors_text();
    engine.check_semicolon_space(0);
    assert_eq!(engine.errors().len(), 2);

    engine.clear_errors();
    engine.check_semicolon_space(0);
    assert_eq!(engine.last_errors_text(), first);
}

#[test]
fn checks_do_not_alter_the_buffer() {
    let text = "class A {\npublic:\n  int x ;\n};\n";
    let mut engine = loaded(text);
    engine.check_internal_variables("^m_").unwrap();
    engine.check_semicolon_space(0);
    engine.check_indent(IndentUnit::Space, 2);

    assert_eq!(engine.snapshot().raw(), text);
    assert_eq!(engine.line_count(), 4);
    assert_eq!(engine.line(3), Some("  int x ;"));
}

#[test]
fn loading_a_new_buffer_resets_the_ledger() {
    let mut engine = loaded("int a   ;");
    engine.check_semicolon_space(0);
    engine.check_declaration_order(1, 2, 3).unwrap();
    assert!(!engine.errors().is_empty());
    assert!(!engine.info().is_empty());

    engine.load_buffer("int a;\n");
    assert!(engine.errors().is_empty());
    assert!(engine.info().is_empty());
    assert_eq!(engine.file_name(), "sample.h");
}

#[test]
fn invalid_pattern_records_nothing() {
    let mut engine = loaded("class A { int x; };\n");
    let err = engine.check_internal_variables("m_[").unwrap_err();
    assert!(matches!(err, StyleGuardError::InvalidPattern { .. }));
    assert!(engine.errors().is_empty());
}

#[test]
fn invalid_order_is_a_config_error() {
    let mut engine = loaded("class A {};\n");
    assert!(matches!(
        engine.check_declaration_order(1, 1, 2),
        Err(StyleGuardError::Config(_))
    ));
}

#[test]
fn error_text_groups_by_rule_code() {
    let text = format!("int a   ;\n\tint b;\n{}", "c".repeat(90));
    let mut engine = loaded(&text);
    engine.check_tabs();
    engine.check_end_of_file_newline();
    engine.check_semicolon_space(0);
    engine.check_line_length(80);

    let rendered = engine.last_errors_text();
    let tags: Vec<_> = rendered.lines().map(|line| &line[..5]).collect();
    assert_eq!(tags, vec!["[LEN]", "[SEM]", "[EOF]", "[TAB]"]);
}

#[test]
fn info_records_stay_out_of_errors() {
    let mut engine = loaded("int main() { return 0; }\n");
    assert!(!engine.check_internal_variables("^m_").unwrap());
    assert!(engine.errors().is_empty());
    assert_eq!(engine.info().len(), 1);
    assert!(engine.info_text().contains("no class declaration found"));

    engine.clear_info();
    assert!(engine.info_text().is_empty());
}

#[test]
fn header_and_guard_checks_use_their_inputs() {
    let mut engine = loaded("// Copyright\n#ifndef A_H\n#define A_H\n#endif\n");
    assert!(!engine.check_header("// Copyright\n", false));
    assert!(!engine.check_include_guard("<NAMEOFCLASS>_H", "a"));
    assert!(engine.check_include_guard("<NameOfClass>_h", "a"));
}

#[test]
fn class_name_is_the_file_stem() {
    assert_eq!(class_name_from_path(Path::new("src/vtkSphere.h")), "vtkSphere");
    assert_eq!(class_name_from_path(Path::new("Point.inl.h")), "Point.inl");
    assert_eq!(class_name_from_path(Path::new("")), "");
}

#[test]
fn reloading_the_same_buffer_is_idempotent() {
    let text = "class A {\nprivate:\n\tint x ;\npublic:\n  A();\n};";
    let mut engine = loaded(text);
    let run_all = |engine: &mut Engine| {
        engine.check_tabs();
        engine.check_semicolon_space(0);
        engine.check_declaration_order(1, 2, 3).unwrap();
        engine.check_internal_variables("^m_").unwrap();
        engine.check_end_of_file_newline();
        engine.errors().to_vec()
    };

    let first = run_all(&mut engine);
    engine.load_buffer(text);
    let second = run_all(&mut engine);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
