use crate::buffer::AnalysisSnapshot;
use crate::ledger::{Finding, RuleCode};

use super::StyleCheck;

pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Lines of the original text may not exceed `max` characters. Each tab
/// counts as `tab_width` characters.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthCheck {
    max: usize,
    tab_width: usize,
}

impl LineLengthCheck {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self {
            max,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    #[must_use]
    pub const fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    fn measure(&self, line: &str) -> usize {
        line.chars()
            .map(|c| if c == '\t' { self.tab_width } else { 1 })
            .sum()
    }
}

impl StyleCheck for LineLengthCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::LineLength
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        snapshot
            .lines()
            .filter_map(|(number, line)| {
                let length = self.measure(line);
                (length > self.max).then(|| {
                    Finding::error(
                        RuleCode::LineLength,
                        number,
                        format!("line length is {length} characters (max {})", self.max),
                    )
                })
            })
            .collect()
    }
}
