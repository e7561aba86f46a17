#![allow(dead_code)]

pub mod env;
pub mod stub_server;

use boson_detector::config::{AppConfig, HttpSettings};

/// Config pointing at `base_url` with short timeouts.
pub fn config_for(base_url: &str) -> AppConfig {
    AppConfig {
        api_base_url: base_url.to_string(),
        http: HttpSettings {
            connect_timeout_secs: 2,
            read_timeout_secs: 5,
        },
    }
}

pub const SINGLE_FIELD_SCHEMA: &str = r#"{"x": {"min": 0, "max": 10, "mean": 5}}"#;
