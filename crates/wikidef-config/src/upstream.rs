use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://en.wiktionary.org/api/rest_v1/page/definition".to_string()
}

// Wikimedia rejects anonymous API clients
fn default_user_agent() -> String {
    concat!("wikidef/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Dictionary API the service proxies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Endpoint the looked-up word is appended to as a path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl UpstreamConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: var("WIKIDEF_UPSTREAM_URL").unwrap_or_else(default_base_url),
            user_agent: var("WIKIDEF_USER_AGENT").unwrap_or_else(default_user_agent),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}
