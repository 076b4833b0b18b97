//! Application settings.
//!
//! Settings come from an optional TOML file (default `./config.toml`) and are then
//! overridden by environment variables, which may in turn come from a `.env` file.
//! The API key is normally supplied only through `GEMINI_API_KEY`.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "PROMPT_TRANSLATOR_CONFIG";

/// Config file used when `PROMPT_TRANSLATOR_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Socket address the HTTP server listens on
    pub bind_address: String,
    /// `SeaORM` database URL
    pub database_url: String,
    /// Generative text service settings
    pub gemini: GeminiSettings,
}

/// Settings for the Gemini `generateContent` API
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeminiSettings {
    /// API key; translation requests fail with a configuration error while unset
    pub api_key: Option<String>,
    /// Model name used in the request path
    pub model: String,
    /// Scheme and host of the API
    pub base_url: String,
    /// Sampling temperature, kept low for consistent output
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            gemini: GeminiSettings::default(),
        }
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash-lite".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.1,
            max_output_tokens: 4096,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })
    }

    /// Loads settings from a TOML file, falling back to defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read config file {path:?}: {e}"),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Applies environment overrides using `lookup` to read variables.
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = get("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(address) = get("BIND_ADDRESS") {
            self.bind_address = address;
        }
        if let Some(key) = get("GEMINI_API_KEY") {
            self.gemini.api_key = Some(key);
        }
        if let Some(model) = get("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(base_url) = get("GEMINI_BASE_URL") {
            self.gemini.base_url = base_url;
        }
        self.gemini.api_key = self.gemini.api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Loads the config file named by `PROMPT_TRANSLATOR_CONFIG` (or `./config.toml`)
    /// and applies the process environment on top.
    pub fn from_environment() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let settings = Self::load(&path)?.with_overrides(|key| std::env::var(key).ok());
        info!(
            bind_address = %settings.bind_address,
            model = %settings.gemini.model,
            api_key_configured = settings.gemini.api_key.is_some(),
            "Settings loaded"
        );
        Ok(settings)
    }
}
