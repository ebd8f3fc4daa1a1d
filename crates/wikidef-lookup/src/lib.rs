use wikidef_core::{DefinitionRecord, NormalizeError};

pub mod wiktionary;

pub use wiktionary::WiktionaryClient;

/// Word definition provider interface
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up every definition of `word`, preferring the `locale` branch of the response
    async fn lookup(&self, word: &str, locale: &str) -> Result<Vec<DefinitionRecord>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No definition found")]
    NotFound,

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// Response body was not JSON or had an unexpected shape
    #[error(transparent)]
    Payload(#[from] serde_json::Error),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}

impl From<NormalizeError> for LookupError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::NotFound => LookupError::NotFound,
            NormalizeError::Shape(e) => LookupError::Payload(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(LookupError::NotFound.to_string(), "No definition found");
        assert!(LookupError::NotFound.is_not_found());
    }

    #[test]
    fn test_shape_error_text_passes_through() {
        let decode_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let expected = decode_err.to_string();

        let err = LookupError::from(NormalizeError::Shape(decode_err));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), expected);
    }
}
