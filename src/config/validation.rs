//! Configuration semantic validation.
//!
//! Runs after parsing: range checks, indent units, regex compilation and
//! declaration-order ranks.

use crate::checks::IndentUnit;
use crate::matcher::RegexMatcher;
use crate::{Result, StyleGuardError};

use super::StyleConfig;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for zero limits, unknown indent units, patterns that do
/// not compile, or ranks that are not a permutation of 1, 2 and 3.
pub fn validate_config_semantics(config: &StyleConfig) -> Result<()> {
    validate_line_length(config)?;
    validate_indent(config)?;
    if let Some(c) = &config.internal_variables {
        RegexMatcher::new(&c.pattern)?;
    }
    if let Some(c) = &config.declaration_order {
        c.to_order()?;
    }
    if let Some(c) = &config.include_guard
        && c.pattern.trim().is_empty()
    {
        return Err(StyleGuardError::Config(
            "include_guard.pattern must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_line_length(config: &StyleConfig) -> Result<()> {
    let Some(c) = &config.line_length else {
        return Ok(());
    };
    if c.max == 0 {
        return Err(StyleGuardError::Config(
            "line_length.max must be greater than 0".to_string(),
        ));
    }
    if c.tab_width == 0 {
        return Err(StyleGuardError::Config(
            "line_length.tab_width must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_indent(config: &StyleConfig) -> Result<()> {
    let Some(c) = &config.indent else {
        return Ok(());
    };
    c.unit.parse::<IndentUnit>()?;
    if c.size == 0 {
        return Err(StyleGuardError::Config(
            "indent.size must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
