use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checks::{
    DEFAULT_TAB_WIDTH, DeclarationOrder, DeclarationOrderCheck, EofNewLineCheck, HeaderCheck,
    IncludeGuardCheck, IndentCheck, IndentUnit, InternalVariablesCheck, LineLengthCheck,
    SemicolonSpaceCheck, StyleCheck, TabsCheck,
};
use crate::error::{Result, StyleGuardError};
use crate::ledger::RuleCode;
use crate::matcher::RegexMatcher;

use super::validation::validate_config_semantics;

/// Rule configuration. Each table enables one rule; an absent table
/// disables it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_length: Option<LineLengthConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<RuleSwitch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<IndentConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_variables: Option<InternalVariablesConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_order: Option<DeclarationOrderConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semicolon_space: Option<SemicolonSpaceConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eof_newline: Option<RuleSwitch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_guard: Option<IncludeGuardConfig>,
}

/// Table with no settings; its presence enables the rule.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleSwitch {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LineLengthConfig {
    #[serde(default = "default_max_length")]
    pub max: usize,

    /// Columns a tab counts for.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

impl Default for LineLengthConfig {
    fn default() -> Self {
        Self {
            max: default_max_length(),
            tab_width: default_tab_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IndentConfig {
    /// "space" or "tab".
    #[serde(default = "default_indent_unit")]
    pub unit: String,

    #[serde(default = "default_indent_size")]
    pub size: usize,

    /// Indent the contents of namespace blocks.
    #[serde(default)]
    pub namespace_indent: bool,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            unit: default_indent_unit(),
            size: default_indent_size(),
            namespace_indent: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InternalVariablesConfig {
    /// Regex every non-public member variable name must match.
    #[serde(default = "default_member_pattern")]
    pub pattern: String,

    /// Report public member variables.
    #[serde(default = "default_true")]
    pub check_public: bool,
}

impl Default for InternalVariablesConfig {
    fn default() -> Self {
        Self {
            pattern: default_member_pattern(),
            check_public: true,
        }
    }
}

/// Rank of each access section; lower ranks come first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DeclarationOrderConfig {
    #[serde(default = "default_public_rank")]
    pub public: u8,

    #[serde(default = "default_protected_rank")]
    pub protected: u8,

    #[serde(default = "default_private_rank")]
    pub private: u8,
}

impl Default for DeclarationOrderConfig {
    fn default() -> Self {
        Self {
            public: default_public_rank(),
            protected: default_protected_rank(),
            private: default_private_rank(),
        }
    }
}

impl DeclarationOrderConfig {
    /// # Errors
    /// Returns `Config` when the ranks are not a permutation of 1, 2 and 3.
    pub fn to_order(self) -> Result<DeclarationOrder> {
        DeclarationOrder::new(self.public, self.protected, self.private)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SemicolonSpaceConfig {
    /// Spaces allowed before a terminating semicolon.
    #[serde(default)]
    pub max: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    /// Reference header file; relative paths resolve against the config
    /// file's directory.
    pub template: PathBuf,

    #[serde(default)]
    pub consider_trailing_space: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IncludeGuardConfig {
    /// Guard symbol; `<NameOfClass>` and `<NAMEOFCLASS>` are substituted.
    #[serde(default = "default_guard_pattern")]
    pub pattern: String,
}

impl Default for IncludeGuardConfig {
    fn default() -> Self {
        Self {
            pattern: default_guard_pattern(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_length() -> usize {
    80
}

const fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

fn default_indent_unit() -> String {
    "space".to_string()
}

const fn default_indent_size() -> usize {
    2
}

fn default_member_pattern() -> String {
    "^m_[A-Z][A-Za-z0-9]*$".to_string()
}

const fn default_public_rank() -> u8 {
    1
}

const fn default_protected_rank() -> u8 {
    2
}

const fn default_private_rank() -> u8 {
    3
}

fn default_guard_pattern() -> String {
    "__<NameOfClass>_h".to_string()
}

impl StyleConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns `TomlParse` for malformed TOML or unknown keys, and `Config` /
    /// `InvalidPattern` when a value fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns the first semantic problem found.
    pub fn validate(&self) -> Result<()> {
        validate_config_semantics(self)
    }

    /// Every rule that needs no external input, with default settings.
    #[must_use]
    pub fn recommended() -> Self {
        Self {
            line_length: Some(LineLengthConfig::default()),
            tabs: Some(RuleSwitch::default()),
            indent: Some(IndentConfig::default()),
            internal_variables: Some(InternalVariablesConfig::default()),
            declaration_order: Some(DeclarationOrderConfig::default()),
            semicolon_space: Some(SemicolonSpaceConfig::default()),
            eof_newline: Some(RuleSwitch::default()),
            header: None,
            include_guard: None,
        }
    }

    /// Rules enabled by this configuration, in rule-code order. Enabling
    /// `internal_variables` covers both `IVP` and `IVR`.
    #[must_use]
    pub fn enabled_rules(&self) -> Vec<RuleCode> {
        RuleCode::ALL
            .into_iter()
            .filter(|rule| match rule {
                RuleCode::LineLength => self.line_length.is_some(),
                RuleCode::IvarPublic => self
                    .internal_variables
                    .as_ref()
                    .is_some_and(|c| c.check_public),
                RuleCode::IvarRegex => self.internal_variables.is_some(),
                RuleCode::SemicolonSpace => self.semicolon_space.is_some(),
                RuleCode::DeclarationOrder => self.declaration_order.is_some(),
                RuleCode::EofNewLine => self.eof_newline.is_some(),
                RuleCode::Tabs => self.tabs.is_some(),
                RuleCode::Indent => self.indent.is_some(),
                RuleCode::Header => self.header.is_some(),
                RuleCode::IncludeGuard => self.include_guard.is_some(),
            })
            .collect()
    }

    /// Instantiate the enabled checks.
    ///
    /// `class_name` feeds the include-guard placeholders; `header_text` is the
    /// loaded header template and must be present when `header` is enabled.
    ///
    /// # Errors
    /// Returns `Config` / `InvalidPattern` for values that fail validation,
    /// or `Config` when the header template was not supplied.
    pub fn build_checks(
        &self,
        class_name: &str,
        header_text: Option<&str>,
    ) -> Result<Vec<Box<dyn StyleCheck>>> {
        let mut checks: Vec<Box<dyn StyleCheck>> = Vec::new();

        if let Some(c) = &self.line_length {
            checks.push(Box::new(LineLengthCheck::new(c.max).with_tab_width(c.tab_width)));
        }
        if let Some(c) = &self.internal_variables {
            let matcher = RegexMatcher::new(&c.pattern)?;
            checks.push(Box::new(
                InternalVariablesCheck::new(Box::new(matcher)).with_check_public(c.check_public),
            ));
        }
        if let Some(c) = &self.semicolon_space {
            checks.push(Box::new(SemicolonSpaceCheck::new(c.max)));
        }
        if let Some(c) = &self.declaration_order {
            checks.push(Box::new(DeclarationOrderCheck::new(c.to_order()?)));
        }
        if self.eof_newline.is_some() {
            checks.push(Box::new(EofNewLineCheck));
        }
        if self.tabs.is_some() {
            checks.push(Box::new(TabsCheck));
        }
        if let Some(c) = &self.indent {
            let unit: IndentUnit = c.unit.parse()?;
            checks.push(Box::new(
                IndentCheck::new(unit, c.size).with_namespace_indent(c.namespace_indent),
            ));
        }
        if let Some(c) = &self.header {
            let template = header_text.ok_or_else(|| {
                StyleGuardError::Config(format!(
                    "header template {} was not loaded",
                    c.template.display()
                ))
            })?;
            checks.push(Box::new(HeaderCheck::new(template, c.consider_trailing_space)));
        }
        if let Some(c) = &self.include_guard {
            checks.push(Box::new(IncludeGuardCheck::new(&c.pattern, class_name)));
        }

        Ok(checks)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
