use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PortalResult;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// API key for the text-generation collaborator. Absent means every
    /// assistant call degrades to its fallback phrase.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    /// Override of the API host. Tests point this at a mock server.
    #[serde(default)]
    pub api_base_url: Option<String>,

    #[serde(default = "default_question_temperature")]
    pub question_temperature: f32,

    #[serde(default = "default_tip_temperature")]
    pub tip_temperature: f32,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_base_url: None,
            question_temperature: default_question_temperature(),
            tip_temperature: default_tip_temperature(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_question_temperature() -> f32 {
    0.7
}

fn default_tip_temperature() -> f32 {
    0.9
}

fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

/// Config directory, typically `~/.config/campuscare`.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("campuscare"))
}

impl PortalConfig {
    /// Load configuration: defaults, then an optional config file, then a
    /// `CAMPUSCARE_*` environment overlay. A `.env` file is read first so
    /// the API key can live there.
    pub fn load() -> PortalResult<Self> {
        dotenvy::dotenv().ok();

        let mut builder = ConfigBuilder::builder();

        if let Some(dir) = get_config_dir() {
            builder = builder.add_source(File::from(dir.join("config")).required(false));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("CAMPUSCARE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: PortalConfig = settings.try_deserialize()?;

        // GEMINI_API_KEY is the conventional variable for this collaborator.
        if config.assistant.api_key.is_none() {
            config.assistant.api_key = std::env::var("GEMINI_API_KEY").ok();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.assistant.model, "gemini-1.5-flash");
        assert!(config.assistant.api_key.is_none());
        assert_eq!(config.assistant.question_temperature, 0.7);
        assert_eq!(config.assistant.tip_temperature, 0.9);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_deserialize_partial_overrides() {
        let json = r#"{"assistant": {"model": "gemini-1.5-pro"}}"#;
        let config: PortalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.assistant.model, "gemini-1.5-pro");
        // Untouched fields keep their defaults.
        assert_eq!(config.assistant.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
    }
}
