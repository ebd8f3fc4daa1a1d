use serde::Deserialize;

use crate::dictionary::{DefinitionEntry, DefinitionRecord, PartOfSpeechGroup, RawApiPayload};
use crate::error::NormalizeError;
use crate::sanitize::sanitize;

/// Pick the locale branch to read.
///
/// Falls back to the first branch in payload order when the requested locale
/// is missing, so a lookup may answer in a different language than asked.
/// Returns `None` only for an empty payload.
pub fn select_locale<'a>(payload: &'a RawApiPayload, requested_locale: &'a str) -> Option<&'a str> {
    if payload.contains_key(requested_locale) {
        return Some(requested_locale);
    }

    payload.keys().next().map(String::as_str)
}

/// Flatten the selected locale branch into sanitized definition records.
pub fn normalize(
    payload: &RawApiPayload,
    requested_locale: &str,
) -> Result<Vec<DefinitionRecord>, NormalizeError> {
    let locale = select_locale(payload, requested_locale).ok_or(NormalizeError::NotFound)?;

    let groups = Option::<Vec<PartOfSpeechGroup>>::deserialize(&payload[locale])?;
    let groups = match groups {
        Some(groups) if !groups.is_empty() => groups,
        _ => return Err(NormalizeError::NotFound),
    };

    let records = groups
        .into_iter()
        .flat_map(|group| {
            let part_of_speech = group.part_of_speech;
            group
                .definitions
                .unwrap_or_default()
                .into_iter()
                .map(move |entry| to_record(part_of_speech.clone(), entry))
        })
        .collect();

    Ok(records)
}

fn to_record(part_of_speech: Option<String>, entry: DefinitionEntry) -> DefinitionRecord {
    DefinitionRecord {
        part_of_speech,
        definition: sanitize(&entry.definition),
        examples: entry
            .examples
            .unwrap_or_default()
            .iter()
            .map(|example| sanitize(example))
            .collect(),
    }
}
