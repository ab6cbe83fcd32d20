//! User settings for budget-tracker
//!
//! Display preferences, the default user, and how to reach the model that
//! writes savings tips.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::TrackerPaths;
use crate::error::BudgetError;
use crate::models::UserId;

/// Which backend generates savings tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipsBackendKind {
    /// A local or hosted Ollama server
    #[default]
    Ollama,
    /// Canned offline responses
    Mock,
}

/// Settings for the AI tips collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSettings {
    #[serde(default)]
    pub backend: TipsBackendKind,

    /// Base URL of the model server
    #[serde(default = "default_ai_host")]
    pub host: String,

    /// Model name passed to the server
    #[serde(default = "default_ai_model")]
    pub model: String,

    /// Per-request timeout
    #[serde(default = "default_ai_timeout")]
    pub timeout_secs: u64,
}

fn default_ai_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_ai_model() -> String {
    "llama3.2".to_string()
}

fn default_ai_timeout() -> u64 {
    60
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            backend: TipsBackendKind::default(),
            host: default_ai_host(),
            model: default_ai_model(),
            timeout_secs: default_ai_timeout(),
        }
    }
}

impl AiSettings {
    /// Apply `AI_BACKEND`, `OLLAMA_HOST` and `OLLAMA_MODEL` overrides from the
    /// environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(backend) = std::env::var("AI_BACKEND") {
            match backend.trim().to_ascii_lowercase().as_str() {
                "ollama" => self.backend = TipsBackendKind::Ollama,
                "mock" => self.backend = TipsBackendKind::Mock,
                "" => {}
                other => {
                    warn!(backend = %other, "unknown AI_BACKEND, keeping configured backend")
                }
            }
        }
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            if !model.trim().is_empty() {
                self.model = model;
            }
        }
        self
    }
}

/// User settings for budget-tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// User whose data is used when none is given on the command line
    #[serde(default)]
    pub default_user: UserId,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub ai: AiSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Whether chrono can render dates with this strftime format
fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_user: UserId::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            ai: AiSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Nothing is written; the caller decides when to persist.
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        if !is_valid_date_format(&settings.date_format) {
            warn!(
                date_format = %settings.date_format,
                "invalid date format in settings, using the default"
            );
            settings.date_format = default_date_format();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), BudgetError> {
        std::fs::create_dir_all(paths.base_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create config directory: {}", e)))?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_user.as_str(), "default");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.ai.backend, TipsBackendKind::Ollama);
        assert_eq!(settings.ai.timeout_secs, 60);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.ai.backend = TipsBackendKind::Mock;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.ai.backend, TipsBackendKind::Mock);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_user": "bob"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_user.as_str(), "bob");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.ai.model, "llama3.2");
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(is_valid_date_format("%b %e, %Y"));
        assert!(!is_valid_date_format("%Q"));
    }

    #[test]
    fn test_invalid_user_in_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_user": "../x"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("AI_BACKEND", "MOCK");
        std::env::set_var("OLLAMA_MODEL", "mistral");
        let ai = AiSettings::default().with_env_overrides();
        std::env::remove_var("AI_BACKEND");
        std::env::remove_var("OLLAMA_MODEL");

        assert_eq!(ai.backend, TipsBackendKind::Mock);
        assert_eq!(ai.model, "mistral");
    }

    #[test]
    fn test_load_without_file_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let _ = Settings::load_or_create(&paths).unwrap();
        assert!(!paths.is_initialized());
    }
}
