pub mod buffer;
pub mod checks;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod locator;
pub mod matcher;
pub mod output;

pub use engine::{Engine, class_name_from_path};
pub use error::{Result, StyleGuardError};

/// Exit codes of the `style-guard` binary.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
