mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::PathBuf;

use crate::Engine;
use crate::error::Result;
use crate::ledger::Finding;

/// Findings for one checked file, errors grouped by rule code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub errors: Vec<Finding>,
    pub info: Vec<Finding>,
}

impl FileReport {
    #[must_use]
    pub fn from_engine(path: impl Into<PathBuf>, engine: &Engine) -> Self {
        let mut errors = engine.errors().to_vec();
        let mut info = engine.info().to_vec();
        errors.sort_by_key(|f| f.rule);
        info.sort_by_key(|f| f.rule);
        Self {
            path: path.into(),
            errors,
            info,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Trait for formatting check results into various output formats.
pub trait OutputFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
