use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_json")]
    pub log_json: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_json() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            currency: default_currency(),
            log_level: default_log_level(),
            log_json: default_log_json(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Application-wide settings resolved once at start-up and handed to
/// consumers explicitly.
#[derive(Debug, Clone)]
pub struct AppContext {
    api_base_url: String,
    currency: String,
}

impl AppContext {
    pub fn new(api_base_url: impl Into<String>, currency: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            currency: currency.into().trim().to_uppercase(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone(), config.currency.clone())
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// ISO 4217 code used for display formatting.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Turn a catalog image reference into a fetchable URL.
    ///
    /// Absolute `http(s)://` and `data:` references pass through untouched,
    /// relative paths are joined onto the API base URL.
    pub fn resolve_image_url(&self, image: Option<&str>) -> Option<String> {
        let image = image.map(str::trim).filter(|s| !s.is_empty())?;

        let lower = image.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:")
        {
            return Some(image.to_string());
        }

        Some(format!(
            "{}/{}",
            self.api_base_url,
            image.trim_start_matches('/')
        ))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
