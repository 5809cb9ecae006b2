use crate::buffer::AnalysisSnapshot;
use crate::ledger::{Finding, RuleCode};

use super::StyleCheck;

/// `<NameOfClass>` in a guard pattern is replaced by the class name as given.
pub const CLASS_PLACEHOLDER: &str = "<NameOfClass>";
/// `<NAMEOFCLASS>` is replaced by the upper-cased class name.
pub const UPPER_CLASS_PLACEHOLDER: &str = "<NAMEOFCLASS>";

/// A header's first `#ifndef` must be followed by a `#define` of the same
/// symbol, and the symbol must equal the expanded pattern.
#[derive(Debug, Clone)]
pub struct IncludeGuardCheck {
    expected: String,
}

#[derive(Debug)]
struct Directive<'a> {
    line: usize,
    name: &'a str,
    argument: &'a str,
}

impl IncludeGuardCheck {
    #[must_use]
    pub fn new(pattern: &str, class_name: &str) -> Self {
        let expected = pattern
            .replace(CLASS_PLACEHOLDER, class_name)
            .replace(UPPER_CLASS_PLACEHOLDER, &class_name.to_uppercase());
        Self { expected }
    }

    /// Guard symbol the file must use.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

fn parse_directive(line: usize, text: &str) -> Option<Directive<'_>> {
    let rest = text.trim_start().strip_prefix('#')?.trim_start();
    let name_end = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    let (name, rest) = rest.split_at(name_end);
    let argument = rest.split_whitespace().next().unwrap_or_default();
    Some(Directive {
        line,
        name,
        argument,
    })
}

impl StyleCheck for IncludeGuardCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::IncludeGuard
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        let directives: Vec<Directive<'_>> = snapshot
            .stripped_lines()
            .filter_map(|(number, line)| parse_directive(number, line))
            .collect();

        let Some(index) = directives.iter().position(|d| d.name == "ifndef") else {
            return vec![Finding::error(
                RuleCode::IncludeGuard,
                1,
                format!("no #ifndef include guard found (expected {})", self.expected),
            )];
        };
        let guard = &directives[index];
        let mut findings = Vec::new();

        match directives.get(index + 1) {
            Some(define) if define.name == "define" && define.argument == guard.argument => {}
            Some(define) if define.name == "define" => findings.push(
                Finding::error(
                    RuleCode::IncludeGuard,
                    guard.line,
                    format!(
                        "#define {} does not match #ifndef {}",
                        define.argument, guard.argument
                    ),
                )
                .spanning(define.line),
            ),
            _ => findings.push(Finding::error(
                RuleCode::IncludeGuard,
                guard.line,
                format!("#ifndef {} is not followed by its #define", guard.argument),
            )),
        }

        if guard.argument != self.expected {
            findings.push(Finding::error(
                RuleCode::IncludeGuard,
                guard.line,
                format!(
                    "include guard is {}, expected {}",
                    guard.argument, self.expected
                ),
            ));
        }

        findings
    }
}

#[cfg(test)]
#[path = "include_guard_tests.rs"]
mod tests;
