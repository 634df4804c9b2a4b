use adw::Application;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::session::ReplyAttribution;

pub const DEFAULT_REPLY_DELAY_MS: u64 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub contacts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_contact: Option<String>,
    pub reply_delay_ms: u64,
    pub reply_attribution: ReplyAttribution,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contacts: vec!["Alice".into(), "Bob".into(), "Carol".into()],
            default_contact: None,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            reply_attribution: ReplyAttribution::default(),
        }
    }
}

impl AppConfig {
    // TOML configuration is preferred, but a legacy JSON file is still
    // accepted and converted to TOML on first read.
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        let cfg_dir = base.config_dir();
        Some(cfg_dir.join("echochat.toml"))
    }

    fn legacy_json_path() -> Option<PathBuf> {
        let proj = directories::ProjectDirs::from("com", "example", "EchoChat")?;
        Some(proj.config_dir().join("state.json"))
    }

    pub fn load() -> Self {
        if let Some(path) = Self::toml_path() {
            if let Ok(text) = fs::read_to_string(&path) {
                match toml::from_str::<AppConfig>(&text) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("ignoring malformed config {}: {}", path.display(), e),
                }
            }
        }

        if let Some(legacy) = Self::legacy_json_path() {
            if let Ok(bytes) = fs::read(&legacy) {
                if let Ok(config) = serde_json::from_slice::<AppConfig>(&bytes) {
                    if let Err(e) = config.save() {
                        log::warn!("failed to convert legacy config: {}", e);
                    }
                    return config;
                }
            }
        }

        Self::default()
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::toml_path().ok_or(ConfigError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml)?;
        Ok(())
    }

    /// Contact the view starts on: the configured default when it is in the
    /// roster, otherwise the first roster entry.
    pub fn initial_contact(&self) -> &str {
        if let Some(name) = &self.default_contact {
            if self.contacts.iter().any(|c| c == name) {
                return name;
            }
        }
        self.contacts.first().map(String::as_str).unwrap_or("")
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

pub fn build_ui(app: &Application) {
    let mut config = AppConfig::load();
    if config.contacts.is_empty() {
        log::warn!("empty contact roster in config, using defaults");
        config.contacts = AppConfig::default().contacts;
    }
    log::info!(
        "starting with {} contacts, {} ms reply delay",
        config.contacts.len(),
        config.reply_delay_ms
    );
    crate::ui::main_window::show_main_window(app, config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.contacts, ["Alice", "Bob", "Carol"]);
        assert_eq!(config.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
        assert_eq!(config.reply_attribution, ReplyAttribution::AtSend);
        assert!(config.default_contact.is_none());
    }

    #[test]
    fn populated_document_round_trips() {
        let config = AppConfig {
            contacts: vec!["Dave".into(), "Eve".into()],
            default_contact: Some("Eve".into()),
            reply_delay_ms: 250,
            reply_attribution: ReplyAttribution::AtFire,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn attribution_parses_kebab_case() {
        let config: AppConfig = toml::from_str(r#"reply_attribution = "at-fire""#).unwrap();
        assert_eq!(config.reply_attribution, ReplyAttribution::AtFire);
    }

    #[test]
    fn legacy_json_is_accepted() {
        let config: AppConfig =
            serde_json::from_str(r#"{"contacts": ["Zoe"], "reply_delay_ms": 100}"#).unwrap();
        assert_eq!(config.contacts, ["Zoe"]);
        assert_eq!(config.reply_delay_ms, 100);
        assert_eq!(config.reply_attribution, ReplyAttribution::AtSend);
    }

    #[test]
    fn initial_contact_prefers_configured_default() {
        let config = AppConfig {
            default_contact: Some("Bob".into()),
            ..AppConfig::default()
        };
        assert_eq!(config.initial_contact(), "Bob");
    }

    #[test]
    fn initial_contact_falls_back_to_first_when_unknown() {
        let config = AppConfig {
            default_contact: Some("Zed".into()),
            ..AppConfig::default()
        };
        assert_eq!(config.initial_contact(), "Alice");
    }
}
