use std::fmt;

use crate::buffer::AnalysisSnapshot;
use crate::ledger::{Finding, RuleCode};
use crate::locator::{AccessKind, MemberVariable, find_class_bodies, find_member_variables, regions_in_body};
use crate::matcher::IdentifierMatcher;

use super::{StyleCheck, no_class_found};

/// Member variable conventions.
///
/// Public data members are never name-checked. With `check_public` set they
/// are reported as `IVP`. Members of the other regions whose name the matcher
/// rejects are reported as `IVR`.
pub struct InternalVariablesCheck {
    matcher: Box<dyn IdentifierMatcher>,
    check_public: bool,
}

impl fmt::Debug for InternalVariablesCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternalVariablesCheck")
            .field("pattern", &self.matcher.pattern())
            .field("check_public", &self.check_public)
            .finish()
    }
}

impl InternalVariablesCheck {
    #[must_use]
    pub fn new(matcher: Box<dyn IdentifierMatcher>) -> Self {
        Self {
            matcher,
            check_public: true,
        }
    }

    #[must_use]
    pub fn with_check_public(mut self, check_public: bool) -> Self {
        self.check_public = check_public;
        self
    }

    fn judge(&self, snapshot: &AnalysisSnapshot, class_name: &str, member: &MemberVariable) -> Option<Finding> {
        let line = snapshot.line_of(member.offset);
        if member.access == AccessKind::Public {
            return self.check_public.then(|| {
                Finding::error(
                    RuleCode::IvarPublic,
                    line,
                    format!(
                        "member variable '{}' of {class_name} is public (encapsulation not preserved)",
                        member.name
                    ),
                )
            });
        }
        (!self.matcher.is_match(&member.name)).then(|| {
            Finding::error(
                RuleCode::IvarRegex,
                line,
                format!(
                    "member variable '{}' of {class_name} does not match '{}'",
                    member.name,
                    self.matcher.pattern()
                ),
            )
        })
    }
}

impl StyleCheck for InternalVariablesCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::IvarRegex
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        let bodies = find_class_bodies(snapshot);
        if bodies.is_empty() {
            return vec![no_class_found(RuleCode::IvarRegex)];
        }

        let mut findings = Vec::new();
        for body in &bodies {
            for region in regions_in_body(snapshot, body) {
                for member in find_member_variables(snapshot, &region) {
                    findings.extend(self.judge(snapshot, &body.name, &member));
                }
            }
        }
        findings
    }
}

#[cfg(test)]
#[path = "internal_variables_tests.rs"]
mod tests;
