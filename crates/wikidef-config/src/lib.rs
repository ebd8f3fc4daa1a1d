use std::env;

use serde::{Deserialize, Serialize};

use self::server::ServerConfig;
use self::upstream::UpstreamConfig;

pub mod server;
pub mod upstream;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Build the config from process environment variables
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from any variable source, falling back to defaults for unset keys
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let log_json = var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Config {
            server: ServerConfig::from_vars(&var),
            upstream: UpstreamConfig::from_vars(&var),
            log_json,
        }
    }
}
