//! Configuration module for line-item-editor.

use service_core::config::{self as core_config, AppContext};
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
}

impl EditorConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(Self {
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "line-item-editor".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| common.log_level.clone()),
            common,
        })
    }

    /// Build the context handed to everything that needs the API base URL
    /// or the display currency.
    pub fn context(&self) -> AppContext {
        AppContext::from_config(&self.common)
    }
}
