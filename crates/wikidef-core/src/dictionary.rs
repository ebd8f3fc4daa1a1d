use serde::{Deserialize, Serialize};

/// Upstream response: locale code -> part-of-speech groups, in the order the API sent them.
///
/// Branches are kept as raw JSON so that an unrelated malformed locale never
/// fails a lookup that does not select it.
pub type RawApiPayload = serde_json::Map<String, serde_json::Value>;

/// One part-of-speech block under a locale
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOfSpeechGroup {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Option<Vec<DefinitionEntry>>,
}

/// One sense of the word
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionEntry {
    pub definition: String,
    #[serde(default)]
    pub examples: Option<Vec<String>>,
}

/// Flattened, markup-free definition returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRecord {
    pub part_of_speech: Option<String>,
    pub definition: String,
    pub examples: Vec<String>,
}
