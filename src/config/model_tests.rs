use super::*;

#[test]
fn empty_document_enables_nothing() {
    let config = StyleConfig::from_toml_str("").unwrap();
    assert_eq!(config, StyleConfig::default());
    assert!(config.enabled_rules().is_empty());
    assert!(config.build_checks("Any", None).unwrap().is_empty());
}

#[test]
fn tables_enable_rules_with_defaults() {
    let config = StyleConfig::from_toml_str(
        r"
[tabs]
[eof_newline]
[line_length]
[internal_variables]
",
    )
    .unwrap();

    assert_eq!(config.line_length, Some(LineLengthConfig { max: 80, tab_width: 8 }));
    let ivars = config.internal_variables.as_ref().unwrap();
    assert_eq!(ivars.pattern, "^m_[A-Z][A-Za-z0-9]*$");
    assert!(ivars.check_public);
    assert_eq!(
        config.enabled_rules(),
        vec![
            RuleCode::LineLength,
            RuleCode::IvarPublic,
            RuleCode::IvarRegex,
            RuleCode::EofNewLine,
            RuleCode::Tabs,
        ]
    );
}

#[test]
fn full_document_parses() {
    let config = StyleConfig::from_toml_str(
        r#"
[line_length]
max = 100
tab_width = 4

[indent]
unit = "tab"
size = 1
namespace_indent = true

[internal_variables]
pattern = "^_[a-z]+$"
check_public = false

[declaration_order]
public = 3
protected = 2
private = 1

[semicolon_space]
max = 1

[header]
template = "header.txt"
consider_trailing_space = true

[include_guard]
pattern = "<NAMEOFCLASS>_H"
"#,
    )
    .unwrap();

    assert_eq!(config.line_length.unwrap().tab_width, 4);
    assert!(config.indent.as_ref().unwrap().namespace_indent);
    assert_eq!(config.declaration_order.unwrap().private, 1);
    assert_eq!(config.semicolon_space.unwrap().max, 1);
    assert_eq!(config.header.as_ref().unwrap().template, PathBuf::from("header.txt"));
    assert!(!config.enabled_rules().contains(&RuleCode::IvarPublic));

    let checks = config.build_checks("Sphere", Some("// header\n")).unwrap();
    let rules: Vec<_> = checks.iter().map(|c| c.rule()).collect();
    assert_eq!(
        rules,
        vec![
            RuleCode::LineLength,
            RuleCode::IvarRegex,
            RuleCode::SemicolonSpace,
            RuleCode::DeclarationOrder,
            RuleCode::Indent,
            RuleCode::Header,
            RuleCode::IncludeGuard,
        ]
    );
}

#[test]
fn unknown_indent_unit_names_the_value() {
    let err = StyleConfig::from_toml_str("[indent]\nunit = \"dots\"\n").unwrap_err();
    assert!(matches!(err, StyleGuardError::Config(_)));
    assert!(err.to_string().contains("dots"));
}

#[test]
fn zero_indent_size_is_rejected() {
    let err = StyleConfig::from_toml_str("[indent]\nsize = 0\n").unwrap_err();
    assert!(err.to_string().contains("indent.size"));
}

#[test]
fn zero_line_length_is_rejected() {
    assert!(StyleConfig::from_toml_str("[line_length]\nmax = 0\n").is_err());
    assert!(StyleConfig::from_toml_str("[line_length]\ntab_width = 0\n").is_err());
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = StyleConfig::from_toml_str("[internal_variables]\npattern = \"m_[\"\n").unwrap_err();
    assert!(matches!(err, StyleGuardError::InvalidPattern { .. }));
}

#[test]
fn duplicate_ranks_are_rejected() {
    let err =
        StyleConfig::from_toml_str("[declaration_order]\npublic = 1\nprotected = 1\n").unwrap_err();
    assert!(matches!(err, StyleGuardError::Config(_)));
}

#[test]
fn empty_guard_pattern_is_rejected() {
    assert!(StyleConfig::from_toml_str("[include_guard]\npattern = \" \"\n").is_err());
}

#[test]
fn unknown_keys_are_parse_errors() {
    let err = StyleConfig::from_toml_str("[line_length]\nmaximum = 80\n").unwrap_err();
    assert!(matches!(err, StyleGuardError::TomlParse(_)));

    let err = StyleConfig::from_toml_str("[spelling]\n").unwrap_err();
    assert!(matches!(err, StyleGuardError::TomlParse(_)));
}

#[test]
fn header_needs_loaded_text() {
    let config = StyleConfig::from_toml_str("[header]\ntemplate = \"h.txt\"\n").unwrap();
    let err = config.build_checks("A", None).err().unwrap();
    assert!(err.to_string().contains("h.txt"));
}

#[test]
fn recommended_covers_self_contained_rules() {
    let config = StyleConfig::recommended();
    config.validate().unwrap();

    let rules = config.enabled_rules();
    assert_eq!(rules.len(), 8);
    assert!(!rules.contains(&RuleCode::Header));
    assert!(!rules.contains(&RuleCode::IncludeGuard));
    assert_eq!(config.build_checks("A", None).unwrap().len(), 7);
}

#[test]
fn config_round_trips_through_toml() {
    let config = StyleConfig::recommended();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(StyleConfig::from_toml_str(&text).unwrap(), config);
}
