//! Findings and the ledger that accumulates them.

mod rule;

pub use rule::RuleCode;

use std::fmt;

use serde::Serialize;

/// Whether a record is a rule violation or an informational note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Info,
}

/// One recorded observation anchored to original line numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub level: Level,
    pub rule: RuleCode,
    /// Main line (1-based)
    pub line: usize,
    /// Last line when the finding covers several lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<usize>,
    pub description: String,
}

impl Finding {
    #[must_use]
    pub fn error(rule: RuleCode, line: usize, description: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            rule,
            line,
            line2: None,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn info(rule: RuleCode, line: usize, description: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            ..Self::error(rule, line, description)
        }
    }

    /// Extend the finding to a second line. Ignored when equal to `line`.
    #[must_use]
    pub fn spanning(mut self, line2: usize) -> Self {
        self.line2 = (line2 != self.line).then_some(line2);
        self
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, Level::Error)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line2 {
            Some(line2) => write!(
                f,
                "[{}] lines {}-{}: {}",
                self.rule.tag(),
                self.line,
                line2,
                self.description
            ),
            None => write!(
                f,
                "[{}] line {}: {}",
                self.rule.tag(),
                self.line,
                self.description
            ),
        }
    }
}

/// Append-only store of errors and info records for one loaded buffer.
///
/// Nothing is cleared implicitly; callers reset between passes.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    errors: Vec<Finding>,
    info: Vec<Finding>,
}

impl Ledger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            info: Vec::new(),
        }
    }

    pub fn record(&mut self, finding: Finding) {
        match finding.level {
            Level::Error => self.errors.push(finding),
            Level::Info => self.info.push(finding),
        }
    }

    /// Record every finding, returning whether any of them was an error.
    pub fn absorb(&mut self, findings: impl IntoIterator<Item = Finding>) -> bool {
        let mut any_error = false;
        for finding in findings {
            any_error |= finding.is_error();
            self.record(finding);
        }
        any_error
    }

    /// Errors in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    #[must_use]
    pub fn info(&self) -> &[Finding] {
        &self.info
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn clear_info(&mut self) {
        self.info.clear();
    }

    #[must_use]
    pub fn errors_text(&self) -> String {
        render_grouped(&self.errors)
    }

    #[must_use]
    pub fn info_text(&self) -> String {
        render_grouped(&self.info)
    }
}

/// One line per finding, grouped by rule code in code order; recording order
/// is kept within a group.
fn render_grouped(findings: &[Finding]) -> String {
    let mut out = String::new();
    for rule in RuleCode::ALL {
        for finding in findings.iter().filter(|f| f.rule == rule) {
            out.push_str(&finding.to_string());
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
