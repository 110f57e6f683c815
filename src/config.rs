//! Runtime Configuration
//!
//! Defaults can be overridden by the host page before the bundle loads:
//!
//! ```html
//! <script>window.__INVENTORY_CONFIG__ = { api_base: "https://stock.example", log_level: "debug" };</script>
//! ```

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Global the host page may define
const CONFIG_GLOBAL: &str = "__INVENTORY_CONFIG__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no browser window")]
    NoWindow,
    #[error("invalid window.__INVENTORY_CONFIG__: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the REST API; empty means the page origin
    pub api_base: String,
    pub search_min_length: usize,
    pub search_debounce_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_min_length: inventory_core::MIN_QUERY_LEN,
            search_debounce_ms: 200,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        match Self::from_window() {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("[config] {}; using defaults", e).into());
                Self::default().with_origin(None)
            }
        }
    }

    fn from_window() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
        let origin = window.location().origin().ok();
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;

        let config = if raw.is_undefined() || raw.is_null() {
            Self::default()
        } else {
            serde_wasm_bindgen::from_value::<Self>(raw)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?
        };
        Ok(config.with_origin(origin))
    }

    fn with_origin(mut self, origin: Option<String>) -> Self {
        if self.api_base.is_empty() {
            if let Some(origin) = origin {
                self.api_base = origin;
            }
        }
        self
    }

    /// Absolute URL for an API path such as `/api/items/`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_base": "https://stock.example/", "search_debounce_ms": 50}"#)
                .unwrap();
        assert_eq!(config.api_base, "https://stock.example/");
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.search_min_length, 2);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = AppConfig {
            api_base: "https://stock.example/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint("/api/items/"), "https://stock.example/api/items/");
        assert_eq!(config.endpoint("api/csrf/"), "https://stock.example/api/csrf/");
    }

    #[test]
    fn test_origin_fills_empty_base_only() {
        let page = AppConfig::default().with_origin(Some("http://localhost:8000".to_string()));
        assert_eq!(page.api_base, "http://localhost:8000");

        let explicit = AppConfig { api_base: "https://api.example".to_string(), ..Default::default() }
            .with_origin(Some("http://localhost:8000".to_string()));
        assert_eq!(explicit.api_base, "https://api.example");
    }

    #[test]
    fn test_log_filter_falls_back_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
    }
}
