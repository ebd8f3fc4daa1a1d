use std::sync::Arc;

use wikidef_config::Config;
use wikidef_lookup::{DefinitionSource, LookupError, WiktionaryClient};

/// Shared, read-only request context
pub struct AppState {
    pub source: Arc<dyn DefinitionSource>,
    /// Locale used when the request has none
    pub default_locale: String,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client =
            WiktionaryClient::new(&config.upstream.base_url, &config.upstream.user_agent)?;

        Ok(Self::with_source(
            Arc::new(client),
            config.server.default_locale.clone(),
        ))
    }

    pub fn with_source(source: Arc<dyn DefinitionSource>, default_locale: String) -> Self {
        Self {
            source,
            default_locale,
        }
    }
}
