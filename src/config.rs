use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        AgriError,
        CropType,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const CONFIG_FILE: &str = "config.json";
pub const API_URL_ENV: &str = "AGRI_API_URL";
pub const TIMEOUT_ENV: &str = "AGRI_REQUEST_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address of the proxy serving `/api/analyze` and `/api/retrain`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub default_crop: CropType,
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost".to_string(),
            request_timeout_secs: 30,
            default_crop: CropType::Corn,
            dark_mode: true,
        }
    }
}

impl AppConfig {
    /// Saved config with environment overrides on top.
    pub fn load() -> Self {
        let mut config = load_json_or_default::<AppConfig>(CONFIG_FILE);
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn save(&self) -> Result<(), AgriError> {
        save_json(self, CONFIG_FILE)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            tracing::info!("Using {} from {}", url, API_URL_ENV);
            self.api_base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => tracing::warn!("Ignoring invalid {} value {:?}", TIMEOUT_ENV, raw),
            }
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
