use std::fmt;
use std::str::FromStr;

use crate::buffer::AnalysisSnapshot;
use crate::error::StyleGuardError;
use crate::ledger::{Finding, RuleCode};

use super::StyleCheck;

/// Character used for one level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentUnit {
    #[default]
    Space,
    Tab,
}

impl IndentUnit {
    const fn byte(self) -> u8 {
        match self {
            Self::Space => b' ',
            Self::Tab => b'\t',
        }
    }

    const fn plural(self) -> &'static str {
        match self {
            Self::Space => "spaces",
            Self::Tab => "tabs",
        }
    }
}

impl FromStr for IndentUnit {
    type Err = StyleGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "space" | "spaces" => Ok(Self::Space),
            "tab" | "tabs" => Ok(Self::Tab),
            _ => Err(StyleGuardError::Config(format!(
                "unknown indent unit '{s}' (expected 'space' or 'tab')"
            ))),
        }
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space => f.write_str("space"),
            Self::Tab => f.write_str("tab"),
        }
    }
}

/// Brace-depth indentation policy.
///
/// Every `{` opens one level, except the braces of `namespace` and
/// `extern "C"` blocks unless `namespace_indent` is set. A line starting with
/// `}` sits one level out. Access specifiers and `case`/`default` labels may
/// sit at the current level or one level out.
///
/// Lines are not measured when they are blank, belong to a preprocessor
/// directive, start inside a comment, sit inside parentheses, or continue a
/// statement left open by the previous line.
#[derive(Debug, Clone, Copy)]
pub struct IndentCheck {
    unit: IndentUnit,
    size: usize,
    namespace_indent: bool,
}

#[derive(Debug, Default)]
struct Nesting {
    /// One entry per open brace: whether it adds an indentation level.
    blocks: Vec<bool>,
    /// A `namespace`/`extern` header whose `{` has not been seen yet.
    pending_plain_block: bool,
    parens: usize,
    open_statement: bool,
    in_directive: bool,
}

impl Nesting {
    fn level(&self) -> usize {
        self.blocks.iter().filter(|adds| **adds).count()
    }

    fn innermost_adds(&self) -> bool {
        self.blocks.last().copied().unwrap_or(false)
    }
}

impl IndentCheck {
    #[must_use]
    pub const fn new(unit: IndentUnit, size: usize) -> Self {
        Self {
            unit,
            size,
            namespace_indent: false,
        }
    }

    #[must_use]
    pub const fn with_namespace_indent(mut self, namespace_indent: bool) -> Self {
        self.namespace_indent = namespace_indent;
        self
    }

    fn measure(&self, number: usize, raw: &str, level: usize, label: bool) -> Option<Finding> {
        let indent = &raw[..raw.len() - raw.trim_start_matches([' ', '\t']).len()];
        let unit = self.unit.byte();
        if let Some(stray) = indent.bytes().find(|b| *b != unit) {
            let found = if stray == b'\t' { "tab" } else { "space" };
            return Some(Finding::error(
                RuleCode::Indent,
                number,
                format!("indentation uses a {found}, expected {}", self.unit.plural()),
            ));
        }

        let actual = indent.len();
        let expected = level * self.size;
        let outdented_label = label && level > 0 && actual + self.size == expected;
        if actual == expected || outdented_label {
            return None;
        }
        Some(Finding::error(
            RuleCode::Indent,
            number,
            format!(
                "indentation is {actual} {}, expected {expected}",
                self.unit.plural()
            ),
        ))
    }

    fn advance(&self, state: &mut Nesting, line: &str) {
        let trimmed = line.trim();
        if !self.namespace_indent && starts_plain_block(trimmed) {
            state.pending_plain_block = true;
        }
        for b in trimmed.bytes() {
            match b {
                b'(' => state.parens += 1,
                b')' => state.parens = state.parens.saturating_sub(1),
                b'{' => {
                    state.blocks.push(!state.pending_plain_block);
                    state.pending_plain_block = false;
                }
                b'}' => {
                    state.blocks.pop();
                }
                b';' => state.pending_plain_block = false,
                _ => {}
            }
        }
        state.open_statement = state.parens == 0
            && !is_label(trimmed)
            && !trimmed.ends_with([';', '{', '}', ':']);
    }
}

impl StyleCheck for IndentCheck {
    fn rule(&self) -> RuleCode {
        RuleCode::Indent
    }

    fn check(&self, snapshot: &AnalysisSnapshot) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut state = Nesting::default();

        for (number, line) in snapshot.stripped_lines() {
            let trimmed = line.trim();
            if state.in_directive || trimmed.starts_with('#') {
                state.in_directive = line.trim_end().ends_with('\\');
                continue;
            }
            if trimmed.is_empty() {
                continue;
            }

            let raw = snapshot.line(number).unwrap_or(line);
            let starts_in_comment = raw.trim_start().len() != line.trim_start().len();
            if state.parens == 0 && !state.open_statement && !starts_in_comment {
                let level = if trimmed.starts_with('}') && state.innermost_adds() {
                    state.level() - 1
                } else {
                    state.level()
                };
                findings.extend(self.measure(number, raw, level, is_label(trimmed)));
            }

            self.advance(&mut state, line);
        }

        findings
    }
}

fn starts_plain_block(trimmed: &str) -> bool {
    let first = trimmed
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .next()
        .unwrap_or_default();
    matches!(first, "namespace" | "extern")
}

/// Access specifiers and switch labels.
fn is_label(trimmed: &str) -> bool {
    for keyword in ["public", "protected", "private"] {
        if let Some(rest) = trimmed.strip_prefix(keyword) {
            let rest = rest.trim_start();
            if rest.starts_with(':') && !rest.starts_with("::") {
                return true;
            }
        }
    }
    let is_case = trimmed
        .strip_prefix("case")
        .is_some_and(|rest| rest.starts_with([' ', '\t', '(', '\'']));
    let is_default = trimmed
        .strip_prefix("default")
        .is_some_and(|rest| rest.trim_start().starts_with(':'));
    is_case || is_default
}

#[cfg(test)]
#[path = "indent_tests.rs"]
mod tests;
