//! Rule checks.
//!
//! Each check is a pure function of an [`AnalysisSnapshot`]: it returns the
//! findings it produced and never touches the buffers.

mod declaration_order;
mod eof_newline;
mod header;
mod include_guard;
mod indent;
mod internal_variables;
mod line_length;
mod semicolon;
mod tabs;

pub use declaration_order::{DeclarationOrder, DeclarationOrderCheck};
pub use eof_newline::EofNewLineCheck;
pub use header::HeaderCheck;
pub use include_guard::{CLASS_PLACEHOLDER, IncludeGuardCheck, UPPER_CLASS_PLACEHOLDER};
pub use indent::{IndentCheck, IndentUnit};
pub use internal_variables::InternalVariablesCheck;
pub use line_length::{DEFAULT_TAB_WIDTH, LineLengthCheck};
pub use semicolon::SemicolonSpaceCheck;
pub use tabs::TabsCheck;

use crate::buffer::AnalysisSnapshot;
use crate::ledger::{Finding, RuleCode};

pub trait StyleCheck: Send + Sync {
    /// Rule this check reports under.
    fn rule(&self) -> RuleCode;

    /// Analyse `snapshot`, returning errors and info records in source order.
    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding>;
}

/// Info record noting that a class-based check found nothing to look at.
fn no_class_found(rule: RuleCode) -> Finding {
    Finding::info(rule, 1, "no class declaration found")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
