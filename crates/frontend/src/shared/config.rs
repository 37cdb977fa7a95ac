//! Runtime configuration of the dashboard.
//!
//! Defaults are derived from the page location (backend on port 3000);
//! a JSON object stored under `localStorage["app_config"]` may override any
//! subset of the fields.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use contracts::shared::list::DEFAULT_PAGE_SIZE;

const STORAGE_KEY: &str = "app_config";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base: String,
    pub search_debounce_ms: u32,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub notification_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:3000/api".to_string(),
            search_debounce_ms: 300,
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 25, 50, 100],
            notification_timeout_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Defaults for an app served from `protocol//hostname`.
    pub fn for_location(protocol: &str, hostname: &str) -> Self {
        Self {
            api_base: format!("{}//{}:3000/api", protocol, hostname),
            ..Self::default()
        }
    }

    /// Applies a partial JSON override. Invalid JSON leaves the config untouched.
    pub fn with_overrides(self, raw: &str) -> Self {
        let Ok(serde_json::Value::Object(overrides)) = serde_json::from_str(raw) else {
            log::warn!("ignoring malformed {} override", STORAGE_KEY);
            return self;
        };
        let mut merged = match serde_json::to_value(&self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return self,
        };
        merged.extend(overrides);
        match serde_json::from_value::<AppConfig>(serde_json::Value::Object(merged)) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                log::warn!("ignoring invalid {} override: {}", STORAGE_KEY, e);
                self
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        self.page_size_options.retain(|size| *size > 0);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        if self.default_page_size == 0 {
            self.default_page_size = DEFAULT_PAGE_SIZE;
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            self.page_size_options.push(self.default_page_size);
            self.page_size_options.sort_unstable();
        }
        self
    }

    fn from_browser() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let config = Self::for_location(&protocol, &hostname);

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        match stored {
            Some(raw) => config.with_overrides(&raw),
            None => config,
        }
    }
}

/// Loads the configuration once; later calls return the same value.
pub fn init() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = AppConfig::from_browser();
        log::info!("api base: {}", config.api_base);
        config
    })
}

pub fn app_config() -> &'static AppConfig {
    init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_defaults() {
        let config = AppConfig::for_location("https:", "admin.example.org");
        assert_eq!(config.api_base, "https://admin.example.org:3000/api");
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::for_location("http:", "localhost")
            .with_overrides(r#"{"api_base": "https://api.example.org/api/", "default_page_size": 20}"#);
        assert_eq!(config.api_base, "https://api.example.org/api");
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.page_size_options, vec![10, 20, 25, 50, 100]);
        assert_eq!(config.notification_timeout_ms, 4000);
    }

    #[test]
    fn test_malformed_override_is_ignored() {
        let base = AppConfig::default();
        assert_eq!(base.clone().with_overrides("not json"), base);
        assert_eq!(base.clone().with_overrides("[1, 2]"), base);
        assert_eq!(
            base.clone().with_overrides(r#"{"default_page_size": "ten"}"#),
            base
        );
    }
}
