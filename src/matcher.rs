//! Identifier validation used by the member-variable naming rule.
//!
//! The engine only needs a yes/no answer per identifier, so the pattern engine
//! sits behind [`IdentifierMatcher`]; [`RegexMatcher`] is the default.

use regex::Regex;

use crate::{Result, StyleGuardError};

pub trait IdentifierMatcher: Send + Sync {
    /// Whether `identifier` satisfies the naming convention.
    fn is_match(&self, identifier: &str) -> bool;

    /// Pattern text, quoted in finding descriptions.
    fn pattern(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile `pattern`.
    ///
    /// # Errors
    /// Returns `InvalidPattern` when the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| StyleGuardError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }
}

impl IdentifierMatcher for RegexMatcher {
    fn is_match(&self, identifier: &str) -> bool {
        self.regex.is_match(identifier)
    }

    fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}
