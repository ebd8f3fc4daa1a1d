//! GET /:word: definition lookup endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Serialize;
use wikidef_core::DefinitionRecord;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DefinitionsResponse {
    pub definitions: Vec<DefinitionRecord>,
}

/// First `locale` value in the query string; later repeats are ignored
pub fn first_locale(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "locale")
        .map(|(_, value)| value)
}

pub async fn get_definition(
    State(state): State<Arc<AppState>>,
    word: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<DefinitionsResponse>, ApiError> {
    let Path(word) = word.map_err(|e| {
        tracing::warn!("rejected path: {}", e.body_text());
        ApiError::Rejected(e.body_text())
    })?;
    let Query(params) = query.map_err(|e| {
        tracing::warn!(%word, "rejected query: {}", e.body_text());
        ApiError::Rejected(e.body_text())
    })?;
    let locale = first_locale(params).unwrap_or_else(|| state.default_locale.clone());

    match state.source.lookup(&word, &locale).await {
        Ok(definitions) => Ok(Json(DefinitionsResponse { definitions })),
        Err(e) => {
            if e.is_not_found() {
                tracing::info!(%word, %locale, "no definition found");
            } else {
                tracing::warn!(%word, %locale, "lookup failed: {e}");
            }
            Err(e.into())
        }
    }
}
