use crate::buffer::AnalysisSnapshot;
use crate::ledger::{Finding, RuleCode};

use super::StyleCheck;

/// The last byte of a non-empty file must be `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EofNewLineCheck;

impl StyleCheck for EofNewLineCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::EofNewLine
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        if snapshot.is_empty() || snapshot.raw().ends_with('\n') {
            return Vec::new();
        }
        vec![Finding::error(
            RuleCode::EofNewLine,
            snapshot.line_count(),
            "file does not end with a newline",
        )]
    }
}
