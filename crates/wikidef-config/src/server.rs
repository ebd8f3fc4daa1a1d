use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Locale used when a request has no `locale` query parameter
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl ServerConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: var("WIKIDEF_BIND_ADDR").unwrap_or_else(default_bind_addr),
            default_locale: var("WIKIDEF_DEFAULT_LOCALE")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(default_locale),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            default_locale: default_locale(),
        }
    }
}
