//! User settings for uncleared-cli
//!
//! Settings live in `config.json` under the configuration directory. Every
//! field has a default, so a partial file (or none at all) is valid. The
//! access token and budget id may come from the file, but command-line flags
//! and environment variables take precedence (see [`Settings::resolve`]).

use std::fmt;

use serde::Deserialize;

use super::paths::ReviewPaths;
use crate::api::DEFAULT_BASE_URL;
use crate::error::ReviewError;
use crate::models::BudgetId;

/// User settings for uncleared-cli
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// YNAB personal access token
    #[serde(default)]
    pub access_token: Option<String>,

    /// Budget to review (a budget id or `last-used`)
    #[serde(default)]
    pub budget_id: Option<String>,

    /// API root
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Minimum width of the payee column
    #[serde(default = "default_payee_width")]
    pub payee_width: usize,

    /// Minimum width of the amount column
    #[serde(default = "default_amount_width")]
    pub amount_width: usize,

    /// How often the UI wakes up to expire notifications (milliseconds)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_payee_width() -> usize {
    20
}

fn default_amount_width() -> usize {
    8
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            access_token: None,
            budget_id: None,
            api_base_url: default_api_base_url(),
            payee_width: default_payee_width(),
            amount_width: default_amount_width(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub budget_id: Option<String>,
    pub api_base_url: Option<String>,
}

/// Everything needed to talk to the API, validated
#[derive(Clone)]
pub struct ResolvedConfig {
    pub token: String,
    pub budget_id: BudgetId,
    pub api_base_url: String,
}

impl ResolvedConfig {
    /// Token with everything but the last four characters hidden
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 4 {
            return "****".to_string();
        }
        let visible = chars.len() - 4;
        let tail: String = chars[visible..].iter().collect();
        format!("{}{}", "*".repeat(visible.min(8)), tail)
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("token", &self.masked_token())
            .field("budget_id", &self.budget_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReviewPaths) -> Result<Self, ReviewError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReviewError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReviewError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Combine file settings with overrides and check required values
    ///
    /// Overrides win over the file. Blank values count as missing. A missing
    /// token or budget id is a [`ReviewError::Config`].
    pub fn resolve(&self, overrides: &ConfigOverrides) -> Result<ResolvedConfig, ReviewError> {
        let token = pick(&overrides.token, &self.access_token).ok_or_else(|| {
            ReviewError::Config("YNAB_TOKEN environment variable is required".into())
        })?;
        let budget_id = pick(&overrides.budget_id, &self.budget_id).ok_or_else(|| {
            ReviewError::Config("YNAB_BUDGET_ID environment variable is required".into())
        })?;
        let api_base_url = pick(&overrides.api_base_url, &Some(self.api_base_url.clone()))
            .unwrap_or_else(default_api_base_url);

        Ok(ResolvedConfig {
            token,
            budget_id: BudgetId::new(budget_id),
            api_base_url,
        })
    }
}

fn pick(preferred: &Option<String>, fallback: &Option<String>) -> Option<String> {
    [preferred, fallback]
        .into_iter()
        .flatten()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn overrides(token: Option<&str>, budget_id: Option<&str>) -> ConfigOverrides {
        ConfigOverrides {
            token: token.map(String::from),
            budget_id: budget_id.map(String::from),
            api_base_url: None,
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.payee_width, 20);
        assert_eq!(settings.amount_width, 8);
        assert!(settings.access_token.is_none());
    }

    #[test]
    fn test_load_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReviewPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version": 1, "budget_id": "last-used", "payee_width": 30}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.budget_id.as_deref(), Some("last-used"));
        assert_eq!(loaded.payee_width, 30);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReviewPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"budget_id": "b-1"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.budget_id.as_deref(), Some("b-1"));
        assert_eq!(loaded.amount_width, 8);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReviewPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReviewError::Config(_)));
    }

    #[test]
    fn test_resolve_prefers_overrides() {
        let mut settings = Settings::default();
        settings.access_token = Some("file-token".into());
        settings.budget_id = Some("file-budget".into());

        let resolved = settings
            .resolve(&overrides(Some("flag-token"), None))
            .unwrap();
        assert_eq!(resolved.token, "flag-token");
        assert_eq!(resolved.budget_id.as_str(), "file-budget");
        assert_eq!(resolved.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_missing_token() {
        let err = Settings::default()
            .resolve(&overrides(None, Some("budget")))
            .unwrap_err();
        assert!(matches!(err, ReviewError::Config(_)));
        assert!(err.to_string().contains("YNAB_TOKEN"));
    }

    #[test]
    fn test_resolve_blank_budget_is_missing() {
        let err = Settings::default()
            .resolve(&overrides(Some("token"), Some("   ")))
            .unwrap_err();
        assert!(err.to_string().contains("YNAB_BUDGET_ID"));
    }

    #[test]
    fn test_masked_token() {
        let resolved = Settings::default()
            .resolve(&overrides(Some("abcdef123456"), Some("b")))
            .unwrap();
        assert_eq!(resolved.masked_token(), "********3456");
        assert!(!format!("{:?}", resolved).contains("abcdef"));
    }
}
