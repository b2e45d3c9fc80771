use crate::domain::error::TrqError;
use crate::domain::model::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_translator")]
    pub translator: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub engines: Engines,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Engines {
    /// Base URL of a LibreTranslate instance (usually self-hosted).
    #[serde(default = "default_libre_url")]
    pub libre_url: String,
    /// DeepL API key; the DEEPL_API_KEY environment variable wins over this.
    pub deepl_api_key: Option<String>,
}

impl Config {
    /// Snapshot of the two persisted settings keys.
    pub fn settings(&self) -> Settings {
        Settings {
            translator: self.translator.clone(),
            lang: self.lang.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator: default_translator(),
            lang: default_lang(),
            logging: Logging::default(),
            engines: Engines::default(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for Engines {
    fn default() -> Self {
        Self {
            libre_url: default_libre_url(),
            deepl_api_key: None,
        }
    }
}

// Defaults
fn default_translator() -> String {
    "google".to_string()
}
fn default_lang() -> String {
    system_lang()
}
fn default_libre_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

/// Default destination language: first two letters of the system locale,
/// lowercased, with the POSIX precedence LC_ALL > LC_MESSAGES > LANG.
/// Falls back to "en" when nothing usable is set.
pub fn system_lang() -> String {
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(key) {
            if let Some(lang) = lang_from_locale(&value) {
                return lang;
            }
        }
    }
    "en".to_string()
}

/// Extract the two-letter language code from a locale string
/// ("en_US.UTF-8" -> "en"). `None` for "C", "POSIX", empty, or anything
/// that is not a two-letter prefix.
pub fn lang_from_locale(locale: &str) -> Option<String> {
    let mut chars = locale.chars();
    let a = chars.next()?;
    let b = chars.next()?;
    if !a.is_ascii_alphabetic() || !b.is_ascii_alphabetic() {
        return None;
    }
    // Anything but a separator after the two letters means this is not a
    // plain language prefix ("POSIX", "English", ...).
    match chars.next() {
        None | Some('.') | Some('_') | Some('-') | Some('@') => {}
        Some(_) => return None,
    }
    Some(format!(
        "{}{}",
        a.to_ascii_lowercase(),
        b.to_ascii_lowercase()
    ))
}

/// Map the config's log level spelling onto an EnvFilter directive.
pub fn resolve_level(level: &str) -> &'static str {
    match level {
        "DEBUG" | "debug" => "debug",
        "INFO" | "info" => "info",
        "WARN" | "warn" => "warn",
        "ERROR" | "error" => "error",
        _ => "warn",
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("trq").join("config.toml"))
}

pub fn load_config() -> Result<Config, TrqError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Tolerant load: missing file means defaults, and a file that fails to
/// parse is reported but never fatal.
pub fn load_config_from(path: &Path) -> Result<Config, TrqError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => return Ok(config),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse config file: {}. Using defaults.",
                    e
                );
            }
        }
    }
    Ok(Config::default())
}

/// Write the two settings keys back, keeping the rest of the file's
/// sections as they are.
pub fn persist_settings(path: &Path, settings: &Settings) -> Result<(), TrqError> {
    let mut config = load_config_from(path)?;
    config.translator = settings.translator.clone();
    config.lang = settings.lang.clone();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let toml_content = toml::to_string_pretty(&config)
        .map_err(|e| TrqError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)?;
    Ok(())
}

pub fn generate_config_sample() -> Result<(), TrqError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| TrqError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| TrqError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(TrqError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
