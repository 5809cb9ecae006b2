use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StyleGuardError};

use super::StyleConfig;

/// Config file looked up in the current directory when none is given.
pub const LOCAL_CONFIG_NAME: &str = ".style-guard.toml";

/// A loaded configuration plus the inputs it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: StyleConfig,
    /// Contents of the `[header]` template, when that rule is enabled.
    pub header_text: Option<String>,
    /// File the configuration came from; `None` for the built-in defaults.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `.style-guard.toml` from the current directory, falling back to
    /// [`StyleConfig::recommended`].
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file or its header template cannot be read,
    /// or the configuration is invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.fs
            .read_to_string(path)
            .map_err(|source| StyleGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read_header(&self, config: &StyleConfig, config_path: &Path) -> Result<Option<String>> {
        let Some(header) = &config.header else {
            return Ok(None);
        };
        let template = if header.template.is_absolute() {
            header.template.clone()
        } else {
            config_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(&header.template)
        };
        self.read(&template).map(Some)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let local = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }
        debug!("no {LOCAL_CONFIG_NAME} found, using recommended rules");
        Ok(LoadResult {
            config: StyleConfig::recommended(),
            header_text: None,
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.read(path)?;
        let config = StyleConfig::from_toml_str(&content)?;
        let header_text = self.read_header(&config, path)?;
        debug!(config = %path.display(), rules = config.enabled_rules().len(), "loaded configuration");
        Ok(LoadResult {
            config,
            header_text,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
