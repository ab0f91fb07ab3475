//! Service configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables (a `.env` file is loaded by the binary before this
//! runs). Secrets are expected from the environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const DEFAULT_CONFIG_FILE: &str = "headliner.toml";
pub const DEFAULT_SPREADSHEET_ID: &str = "1eDGulXJxIoT-DMN2q6O7lR11hgCDXWGSLMyIRDj1D8Y";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind: String,
    /// How many trailing rows `/latest_topics` shows
    pub recent_limit: usize,
    pub completion: CompletionConfig,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStyle {
    /// `/v1/completions`, text comes back in `choices[0].text`
    Legacy,
    /// `/v1/chat/completions`, text comes back in `choices[0].message.content`
    Chat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub api_style: ApiStyle,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetsBackend {
    Google,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    pub backend: SheetsBackend,
    pub spreadsheet_id: String,
    pub credentials_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            recent_limit: 10,
            completion: CompletionConfig::default(),
            sheets: SheetsConfig::default(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            api_style: ApiStyle::Legacy,
            request_timeout_secs: 60,
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            backend: SheetsBackend::Google,
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            credentials_path: PathBuf::from("credentials.json"),
        }
    }
}

impl AppConfig {
    /// Load from `path` (or the default file if present), then apply the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = env::var("HEADLINER_CONFIG")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Environment variables win over file values
    pub fn apply_env(&mut self) {
        if let Ok(bind) = env::var("HEADLINER_BIND") {
            self.bind = bind;
        }
        if let Some(limit) = env::var("HEADLINER_RECENT_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.recent_limit = limit;
        }

        if let Ok(key) = env::var("OPENAI_KEY").or_else(|_| env::var("OPENAI_API_KEY")) {
            self.completion.api_key = key;
        }
        if let Ok(base) = env::var("OPENAI_BASE_URL") {
            self.completion.base_url = base;
        }
        if let Ok(model) = env::var("OPENAI_MODEL") {
            self.completion.model = model;
        }
        match env::var("OPENAI_API_STYLE").as_deref() {
            Ok("chat") => self.completion.api_style = ApiStyle::Chat,
            Ok("legacy") => self.completion.api_style = ApiStyle::Legacy,
            _ => {}
        }

        match env::var("HEADLINER_SHEETS_BACKEND").as_deref() {
            Ok("memory") => self.sheets.backend = SheetsBackend::Memory,
            Ok("google") => self.sheets.backend = SheetsBackend::Google,
            _ => {}
        }
        if let Ok(id) = env::var("HEADLINER_SPREADSHEET_ID") {
            self.sheets.spreadsheet_id = id;
        }
        if let Ok(path) = env::var("GOOGLE_APPLICATION_CREDENTIALS") {
            self.sheets.credentials_path = PathBuf::from(path);
        }
    }

    pub fn validate(&self) -> std::result::Result<(), AppError> {
        let mut issues = Vec::new();
        if self.completion.api_key.trim().is_empty() {
            issues.push("completion API key is empty (set OPENAI_KEY)");
        }
        if self.completion.base_url.trim().is_empty() {
            issues.push("completion.base_url is empty");
        }
        if self.sheets.backend == SheetsBackend::Google && self.sheets.spreadsheet_id.trim().is_empty() {
            issues.push("sheets.spreadsheet_id is empty");
        }
        if self.recent_limit == 0 {
            issues.push("recent_limit must be at least 1");
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(issues.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-global
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "HEADLINER_BIND",
        "HEADLINER_RECENT_LIMIT",
        "OPENAI_KEY",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "OPENAI_MODEL",
        "OPENAI_API_STYLE",
        "HEADLINER_SHEETS_BACKEND",
        "HEADLINER_SPREADSHEET_ID",
        "GOOGLE_APPLICATION_CREDENTIALS",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert_eq!(config.recent_limit, 10);
        assert_eq!(config.completion.api_style, ApiStyle::Legacy);
        assert_eq!(config.sheets.backend, SheetsBackend::Google);
        assert_eq!(config.sheets.spreadsheet_id, DEFAULT_SPREADSHEET_ID);
    }

    #[test]
    fn test_from_file_with_partial_tables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("headliner.toml");
        fs::write(
            &path,
            r#"
recent_limit = 12

[completion]
model = "gpt-4o-mini"
api_style = "chat"

[sheets]
backend = "memory"
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.recent_limit, 12);
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.completion.api_style, ApiStyle::Chat);
        assert_eq!(config.completion.base_url, "https://api.openai.com");
        assert_eq!(config.sheets.backend, SheetsBackend::Memory);
        assert_eq!(config.bind, "127.0.0.1:5000");
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("OPENAI_API_KEY", "sk-fallback");
        env::set_var("HEADLINER_BIND", "0.0.0.0:8080");
        env::set_var("OPENAI_API_STYLE", "chat");
        env::set_var("HEADLINER_SHEETS_BACKEND", "memory");
        env::set_var("HEADLINER_RECENT_LIMIT", "not-a-number");

        let mut config = AppConfig::default();
        config.apply_env();
        assert_eq!(config.completion.api_key, "sk-fallback");
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.completion.api_style, ApiStyle::Chat);
        assert_eq!(config.sheets.backend, SheetsBackend::Memory);
        assert_eq!(config.recent_limit, 10);

        env::set_var("OPENAI_KEY", "sk-primary");
        config.apply_env();
        assert_eq!(config.completion.api_key, "sk-primary");

        clear_env();
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("OPENAI_KEY"));

        config.completion.api_key = "sk-test".to_string();
        assert!(config.validate().is_ok());

        config.sheets.spreadsheet_id = " ".to_string();
        assert!(config.validate().is_err());

        config.sheets.backend = SheetsBackend::Memory;
        assert!(config.validate().is_ok());
    }
}
