use async_trait::async_trait;
use reqwest::Url;
use wikidef_core::{DefinitionRecord, RawApiPayload, normalize};

use crate::{DefinitionSource, LookupError, SourceMetadata};

/// Client for the Wiktionary REST `page/definition` endpoint
#[derive(Clone)]
pub struct WiktionaryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl WiktionaryClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, LookupError> {
        let invalid = |reason: String| LookupError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot have path segments".to_string()));
        }

        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// `<base>/<word>`, with the word percent-encoded as a single path segment
    pub fn definition_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

#[async_trait]
impl DefinitionSource for WiktionaryClient {
    async fn lookup(&self, word: &str, locale: &str) -> Result<Vec<DefinitionRecord>, LookupError> {
        let url = self.definition_url(word);
        tracing::debug!(%url, word, locale, "fetching definitions");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        // Error responses are decoded too; their shape decides the outcome
        if !status.is_success() {
            tracing::debug!(%status, word, "upstream returned non-success status");
        }

        let payload: RawApiPayload = serde_json::from_slice(&body)?;
        let records = normalize(&payload, locale)?;

        tracing::debug!(word, locale, count = records.len(), "definitions normalized");
        Ok(records)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Wiktionary".to_string(),
            endpoint: self.base_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://en.wiktionary.org/api/rest_v1/page/definition";

    fn client(base: &str) -> WiktionaryClient {
        WiktionaryClient::new(base, "wikidef-tests").unwrap()
    }

    #[test]
    fn test_word_is_appended_as_path_segment() {
        let url = client(BASE).definition_url("cat");
        assert_eq!(url.as_str(), "https://en.wiktionary.org/api/rest_v1/page/definition/cat");
    }

    #[test]
    fn test_trailing_slash_on_base_is_not_doubled() {
        let url = client(&format!("{BASE}/")).definition_url("cat");
        assert_eq!(url.as_str(), "https://en.wiktionary.org/api/rest_v1/page/definition/cat");
    }

    #[test]
    fn test_word_is_percent_encoded() {
        let url = client(BASE).definition_url("ice cream/cone?");
        assert_eq!(
            url.as_str(),
            "https://en.wiktionary.org/api/rest_v1/page/definition/ice%20cream%2Fcone%3F"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = WiktionaryClient::new("not a url", "wikidef-tests").err().unwrap();
        assert!(matches!(err, LookupError::InvalidBaseUrl { .. }));

        let err = WiktionaryClient::new("mailto:someone@example.com", "wikidef-tests")
            .err()
            .unwrap();
        assert!(matches!(err, LookupError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_metadata_reports_endpoint() {
        let metadata = client(BASE).metadata();
        assert_eq!(metadata.name, "Wiktionary");
        assert_eq!(metadata.endpoint, BASE);
    }
}
