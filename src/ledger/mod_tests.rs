use std::collections::HashSet;

use super::*;

#[test]
fn every_rule_has_a_unique_three_letter_tag() {
    let tags: HashSet<_> = RuleCode::ALL.iter().map(|r| r.tag()).collect();
    assert_eq!(tags.len(), RuleCode::ALL.len());
    assert!(tags.iter().all(|t| t.len() == 3));
}

#[test]
fn tags_round_trip_through_lookup() {
    for rule in RuleCode::ALL {
        assert_eq!(RuleCode::from_tag(rule.tag()), Some(rule));
    }
    assert_eq!(RuleCode::from_tag("XYZ"), None);
}

#[test]
fn finding_display_includes_tag_and_line() {
    let finding = Finding::error(RuleCode::LineLength, 12, "line length is 95 characters (max 80)");
    assert_eq!(
        finding.to_string(),
        "[LEN] line 12: line length is 95 characters (max 80)"
    );
}

#[test]
fn spanning_finding_shows_range() {
    let finding = Finding::error(RuleCode::Header, 1, "header differs").spanning(14);
    assert_eq!(finding.to_string(), "[HRD] lines 1-14: header differs");

    let same_line = Finding::error(RuleCode::Header, 3, "x").spanning(3);
    assert_eq!(same_line.line2, None);
}

#[test]
fn ledger_routes_by_level() {
    let mut ledger = Ledger::new();
    let had_error = ledger.absorb([
        Finding::info(RuleCode::DeclarationOrder, 1, "no class declaration found"),
        Finding::error(RuleCode::Tabs, 4, "tab character found"),
    ]);

    assert!(had_error);
    assert_eq!(ledger.errors().len(), 1);
    assert_eq!(ledger.info().len(), 1);
}

#[test]
fn absorb_of_info_only_reports_no_error() {
    let mut ledger = Ledger::new();
    assert!(!ledger.absorb([Finding::info(RuleCode::IvarRegex, 1, "note")]));
}

#[test]
fn clearing_is_explicit_and_independent() {
    let mut ledger = Ledger::new();
    ledger.record(Finding::error(RuleCode::Tabs, 1, "tab"));
    ledger.record(Finding::info(RuleCode::Tabs, 1, "note"));

    ledger.clear_errors();
    assert!(ledger.errors().is_empty());
    assert_eq!(ledger.info().len(), 1);

    ledger.clear_info();
    assert!(ledger.info().is_empty());
}

#[test]
fn text_is_grouped_by_rule_code() {
    let mut ledger = Ledger::new();
    ledger.record(Finding::error(RuleCode::Tabs, 9, "tab"));
    ledger.record(Finding::error(RuleCode::LineLength, 20, "long"));
    ledger.record(Finding::error(RuleCode::Tabs, 2, "tab"));

    assert_eq!(
        ledger.errors_text(),
        "[LEN] line 20: long\n[TAB] line 9: tab\n[TAB] line 2: tab\n"
    );
    // recording order is preserved by errors()
    assert_eq!(ledger.errors()[0].rule, RuleCode::Tabs);
}

#[test]
fn finding_serializes_rule_in_snake_case() {
    let finding = Finding::error(RuleCode::EofNewLine, 3, "missing newline");
    let json = serde_json::to_string(&finding).unwrap();
    assert!(json.contains("\"rule\":\"eof_new_line\""));
    assert!(json.contains("\"level\":\"error\""));
    assert!(!json.contains("line2"));
}
