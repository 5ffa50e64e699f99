//! Path management for uncleared-cli
//!
//! ## Path Resolution Order
//!
//! 1. `UNCLEARED_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`~/.config/uncleared-cli` on Linux, `~/Library/Application Support/...`
//!    on macOS, `%APPDATA%\...` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ReviewError;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "UNCLEARED_CONFIG_DIR";

/// Manages all paths used by uncleared-cli
#[derive(Debug, Clone)]
pub struct ReviewPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl ReviewPaths {
    /// Create a new ReviewPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, ReviewError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "uncleared-cli")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ReviewError::Config("Could not determine configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ReviewPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// File name of the log inside [`ReviewPaths::log_dir`]
    pub fn log_file_name(&self) -> &'static str {
        "uncleared.log"
    }

    /// Get the full path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join(self.log_file_name())
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), ReviewError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReviewError::Io(format!("Failed to create config directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| ReviewError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReviewPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.log_file(),
            temp_dir.path().join("logs").join("uncleared.log")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = ReviewPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReviewPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.base_dir().exists());
        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.log_dir().exists());
    }
}
