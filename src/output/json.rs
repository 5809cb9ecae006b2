use serde::Serialize;

use crate::error::Result;
use crate::ledger::Finding;

use super::{FileReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    errors: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    file: String,
    errors: &'a [Finding],
    info: &'a [Finding],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let failed = reports.iter().filter(|r| !r.passed()).count();
        let output = JsonOutput {
            summary: Summary {
                total_files: reports.len(),
                passed: reports.len() - failed,
                failed,
                errors: reports.iter().map(|r| r.errors.len()).sum(),
            },
            results: reports
                .iter()
                .map(|report| FileResult {
                    file: report.path.display().to_string(),
                    errors: &report.errors,
                    info: &report.info,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
