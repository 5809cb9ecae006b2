//! Per-file façade over the snapshot, the rule checks and the ledger.
//!
//! Load a buffer, run any number of `check_*` calls, then read the ledger.
//! Every check returns `true` when it recorded at least one violation.

use std::path::Path;

use tracing::debug;

use crate::buffer::AnalysisSnapshot;
use crate::checks::{
    DeclarationOrder, DeclarationOrderCheck, EofNewLineCheck, HeaderCheck, IncludeGuardCheck,
    IndentCheck, IndentUnit, InternalVariablesCheck, LineLengthCheck, SemicolonSpaceCheck,
    StyleCheck, TabsCheck,
};
use crate::error::Result;
use crate::ledger::{Finding, Ledger};
use crate::matcher::{IdentifierMatcher, RegexMatcher};

#[derive(Debug, Default)]
pub struct Engine {
    file_name: String,
    snapshot: AnalysisSnapshot,
    ledger: Ledger,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the analysed text. The ledger is reset.
    pub fn load_buffer(&mut self, text: impl Into<String>) {
        self.snapshot = AnalysisSnapshot::prepare(text);
        self.ledger = Ledger::new();
        debug!(
            file = %self.file_name,
            bytes = self.snapshot.len(),
            lines = self.snapshot.line_count(),
            "loaded buffer"
        );
    }

    /// Name used in diagnostics only.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = name.into();
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub const fn snapshot(&self) -> &AnalysisSnapshot {
        &self.snapshot
    }

    /// Run one check and record what it found. Returns whether any error was
    /// recorded.
    pub fn run(&mut self, check: &dyn StyleCheck) -> bool {
        let findings = check.check(&self.snapshot);
        debug!(
            file = %self.file_name,
            rule = %check.rule(),
            findings = findings.len(),
            "check finished"
        );
        self.ledger.absorb(findings)
    }

    pub fn check_tabs(&mut self) -> bool {
        self.run(&TabsCheck)
    }

    pub fn check_indent(&mut self, unit: IndentUnit, size: usize) -> bool {
        self.run(&IndentCheck::new(unit, size))
    }

    pub fn check_line_length(&mut self, max: usize) -> bool {
        self.run(&LineLengthCheck::new(max))
    }

    /// # Errors
    /// Returns `InvalidPattern` when `pattern` is not a valid regex; nothing is
    /// recorded in that case.
    pub fn check_internal_variables(&mut self, pattern: &str) -> Result<bool> {
        let matcher = RegexMatcher::new(pattern)?;
        Ok(self.check_internal_variables_with(Box::new(matcher)))
    }

    pub fn check_internal_variables_with(&mut self, matcher: Box<dyn IdentifierMatcher>) -> bool {
        self.run(&InternalVariablesCheck::new(matcher))
    }

    /// # Errors
    /// Returns `Config` when the ranks are not a permutation of 1, 2 and 3.
    pub fn check_declaration_order(&mut self, public: u8, protected: u8, private: u8) -> Result<bool> {
        let order = DeclarationOrder::new(public, protected, private)?;
        Ok(self.run(&DeclarationOrderCheck::new(order)))
    }

    pub fn check_semicolon_space(&mut self, max: usize) -> bool {
        self.run(&SemicolonSpaceCheck::new(max))
    }

    pub fn check_end_of_file_newline(&mut self) -> bool {
        self.run(&EofNewLineCheck)
    }

    pub fn check_header(&mut self, template: &str, consider_trailing_space: bool) -> bool {
        self.run(&HeaderCheck::new(template, consider_trailing_space))
    }

    pub fn check_include_guard(&mut self, pattern: &str, class_name: &str) -> bool {
        self.run(&IncludeGuardCheck::new(pattern, class_name))
    }

    #[must_use]
    pub fn errors(&self) -> &[Finding] {
        self.ledger.errors()
    }

    #[must_use]
    pub fn info(&self) -> &[Finding] {
        self.ledger.info()
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Recorded errors, one per line, grouped by rule.
    #[must_use]
    pub fn last_errors_text(&self) -> String {
        self.ledger.errors_text()
    }

    #[must_use]
    pub fn info_text(&self) -> String {
        self.ledger.info_text()
    }

    pub fn clear_errors(&mut self) {
        self.ledger.clear_errors();
    }

    pub fn clear_info(&mut self) {
        self.ledger.clear_info();
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.snapshot.line_count()
    }

    /// Original text of a 1-based line.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        self.snapshot.line(number)
    }
}

/// Class name a source file is expected to declare: its file stem.
#[must_use]
pub fn class_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
