use crate::buffer::AnalysisSnapshot;
use crate::ledger::{Finding, RuleCode};

use super::StyleCheck;

/// Flags literal tab characters outside comments and literals, once per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabsCheck;

impl StyleCheck for TabsCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::Tabs
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        snapshot
            .stripped_lines()
            .filter_map(|(number, line)| {
                let column = line.find('\t')? + 1;
                Some(Finding::error(
                    RuleCode::Tabs,
                    number,
                    format!("tab character found at column {column}"),
                ))
            })
            .collect()
    }
}
