use crate::buffer::{AnalysisSnapshot, StrippedOffset};
use crate::ledger::{Finding, RuleCode};

use super::StyleCheck;

/// Limits the whitespace between a statement and its terminating `;`.
///
/// Semicolons inside parentheses (`for (;;)`) and semicolons that open their
/// own line are not measured. Counting stops at a blanked comment.
#[derive(Debug, Clone, Copy)]
pub struct SemicolonSpaceCheck {
    max: usize,
}

impl SemicolonSpaceCheck {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }

    fn spaces_before(snapshot: &AnalysisSnapshot, semicolon: usize) -> Option<usize> {
        let bytes = snapshot.stripped_bytes();
        let map = snapshot.map();
        let mut start = semicolon;
        while start > 0
            && matches!(bytes[start - 1], b' ' | b'\t')
            && !map.is_stripped(StrippedOffset::new(start - 1))
        {
            start -= 1;
        }
        if start == 0 || bytes[start - 1] == b'\n' {
            return None;
        }
        Some(semicolon - start)
    }
}

impl StyleCheck for SemicolonSpaceCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::SemicolonSpace
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut parens = 0usize;

        for (i, &b) in snapshot.stripped_bytes().iter().enumerate() {
            match b {
                b'(' => parens += 1,
                b')' => parens = parens.saturating_sub(1),
                b';' if parens == 0 => {
                    let Some(count) = Self::spaces_before(snapshot, i) else {
                        continue;
                    };
                    if count > self.max {
                        findings.push(Finding::error(
                            RuleCode::SemicolonSpace,
                            snapshot.line_of(StrippedOffset::new(i)),
                            format!("{count} spaces before semicolon (max {})", self.max),
                        ));
                    }
                }
                _ => {}
            }
        }

        findings
    }
}
