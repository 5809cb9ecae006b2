use crate::buffer::AnalysisSnapshot;
use crate::ledger::{Finding, RuleCode};

use super::StyleCheck;

/// The file must open with the lines of a reference header, one for one.
///
/// Trailing whitespace is ignored unless `consider_trailing_space` is set.
/// Only the first mismatch is reported; it spans to the template's last line.
#[derive(Debug, Clone)]
pub struct HeaderCheck {
    template: Vec<String>,
    consider_trailing_space: bool,
}

impl HeaderCheck {
    #[must_use]
    pub fn new(template: &str, consider_trailing_space: bool) -> Self {
        Self {
            template: template.lines().map(str::to_string).collect(),
            consider_trailing_space,
        }
    }

    fn normalize<'a>(&self, line: &'a str) -> &'a str {
        if self.consider_trailing_space {
            line
        } else {
            line.trim_end()
        }
    }
}

impl StyleCheck for HeaderCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::Header
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        if self.template.is_empty() {
            return vec![Finding::info(RuleCode::Header, 1, "header template is empty")];
        }
        let last = self.template.len();

        for (index, wanted) in self.template.iter().enumerate() {
            let number = index + 1;
            let Some(found) = snapshot.line(number) else {
                return vec![
                    Finding::error(
                        RuleCode::Header,
                        snapshot.line_count().max(1),
                        format!("file ends before the {last}-line header is complete"),
                    )
                    .spanning(last),
                ];
            };
            let (wanted, found) = (self.normalize(wanted), self.normalize(found));
            if wanted != found {
                return vec![
                    Finding::error(
                        RuleCode::Header,
                        number,
                        format!("header mismatch: expected \"{wanted}\", found \"{found}\""),
                    )
                    .spanning(last),
                ];
            }
        }

        Vec::new()
    }
}
