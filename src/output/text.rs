use std::fmt::Write;

use crate::error::Result;
use crate::ledger::Finding;

use super::{FileReport, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// `path: [TAG] line N: description`, one finding per line, then a summary.
pub struct TextFormatter {
    use_colors: bool,
    show_info: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            show_info: false,
        }
    }

    /// Also print info records.
    #[must_use]
    pub const fn with_info(mut self, show: bool) -> Self {
        self.show_info = show;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_finding(&self, report: &FileReport, finding: &Finding, output: &mut String) {
        let color = if finding.is_error() { ansi::RED } else { ansi::CYAN };
        let tag = self.colorize(&format!("[{}]", finding.rule.tag()), color);
        let lines = match finding.line2 {
            Some(line2) => format!("lines {}-{line2}", finding.line),
            None => format!("line {}", finding.line),
        };
        writeln!(
            output,
            "{}: {tag} {lines}: {}",
            report.path.display(),
            finding.description
        )
        .ok();
    }

    fn format_summary(&self, reports: &[FileReport]) -> String {
        let failed = reports.iter().filter(|r| !r.passed()).count();
        let passed = reports.len() - failed;
        let errors: usize = reports.iter().map(|r| r.errors.len()).sum();

        let passed_str = self.colorize(&passed.to_string(), ansi::GREEN);
        let failed_str = self.colorize(&failed.to_string(), ansi::RED);
        format!(
            "Summary: {} files checked, {passed_str} passed, {failed_str} failed ({errors} errors)",
            reports.len()
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();
        for report in reports {
            for finding in &report.errors {
                self.format_finding(report, finding, &mut output);
            }
            if self.show_info {
                for finding in &report.info {
                    self.format_finding(report, finding, &mut output);
                }
            }
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&self.format_summary(reports));
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
