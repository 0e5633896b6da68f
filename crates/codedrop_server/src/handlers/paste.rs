//! Paste HTTP handlers.

use crate::{error::ApiError, AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use codedrop_core::constants::{
    ACCESS_TOKEN, ACCESS_TOKEN_HEADER, MAX_PASTE_ID_LEN, MAX_TTL_SECONDS, MIN_TTL_SECONDS,
};
use codedrop_core::{CreatePasteResponse, Paste};
use serde::Deserialize;

// Fields are optional so missing values map to a 400 with a clear message
// instead of a generic extractor rejection.
#[derive(Debug, Deserialize)]
struct CreateBody {
    content: Option<String>,
    language: Option<String>,
    ttl_seconds: Option<i64>,
}

fn has_valid_token(headers: &HeaderMap) -> bool {
    headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == ACCESS_TOKEN)
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(format!("Missing field: {}", field))),
    }
}

/// Create a paste.
///
/// The token check runs before the body is parsed, so unauthenticated
/// requests are rejected regardless of payload.
///
/// # Returns
/// `201 Created` with `{"id": ...}`.
///
/// # Errors
/// `403` without the access token, `400` for a malformed body or TTL
/// outside the accepted range, `413` for oversized content.
pub async fn create_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatePasteResponse>), ApiError> {
    if !has_valid_token(&headers) {
        tracing::warn!("rejected create without valid access token");
        return Err(ApiError::Forbidden);
    }

    let body: CreateBody = serde_json::from_slice(&body)
        .map_err(|err| ApiError::BadRequest(format!("Invalid JSON body: {}", err)))?;
    let content = required(body.content, "content")?;
    let language = required(body.language, "language")?;
    let ttl_seconds = body
        .ttl_seconds
        .ok_or_else(|| ApiError::BadRequest("Missing field: ttl_seconds".to_string()))?;

    if content.len() > state.config.max_content_bytes {
        return Err(ApiError::PayloadTooLarge);
    }
    let ttl_seconds = u64::try_from(ttl_seconds)
        .ok()
        .filter(|ttl| (MIN_TTL_SECONDS..=MAX_TTL_SECONDS).contains(ttl))
        .ok_or_else(|| ApiError::BadRequest("Invalid TTL".to_string()))?;

    let paste = state
        .store
        .insert(content, language, ttl_seconds, Utc::now());
    tracing::info!(
        id = %paste.id,
        bytes = paste.byte_len(),
        language = %paste.language,
        "paste created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatePasteResponse { id: paste.id }),
    ))
}

/// Fetch a live paste.
///
/// # Errors
/// `400` for identifiers longer than the accepted maximum, `404` when the
/// paste does not exist or has expired.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Paste>, ApiError> {
    if id.len() > MAX_PASTE_ID_LEN {
        return Err(ApiError::BadRequest("Invalid ID".to_string()));
    }
    state
        .store
        .get(&id, Utc::now())
        .map(Json)
        .ok_or(ApiError::NotFound)
}
