//! Paste records and request/response payloads for the HTTP API.

use super::Language;
use crate::constants::PASTE_TTL_SECONDS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored paste as returned by `GET /api/pastes/{id}`.
///
/// Only `id` and `content` are required on the wire; the backend may omit
/// metadata and may send extra fields, which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Request payload for `POST /api/pastes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePasteRequest {
    pub content: String,
    pub language: String,
    pub ttl_seconds: u64,
}

/// Response payload for a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePasteResponse {
    pub id: String,
}

impl Paste {
    /// Size of the content in UTF-8 bytes (not characters).
    pub fn byte_len(&self) -> usize {
        self.content.len()
    }

    /// Recorded language, mapped onto the known tag set.
    pub fn language_tag(&self) -> Language {
        Language::from_tag(&self.language)
    }
}

impl CreatePasteRequest {
    /// Build a create request with the fixed client TTL.
    pub fn new(content: impl Into<String>, language: Language) -> Self {
        Self {
            content: content.into(),
            language: language.tag().to_string(),
            ttl_seconds: PASTE_TTL_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paste_with(content: &str) -> Paste {
        Paste {
            id: "abc123".to_string(),
            content: content.to_string(),
            language: "rust".to_string(),
            created_at: None,
            expires_at: None,
        }
    }

    #[test]
    fn byte_len_counts_utf8_bytes() {
        assert_eq!(paste_with("é").byte_len(), 2);
        assert_eq!(paste_with("abc").byte_len(), 3);
        assert_eq!(paste_with("日本").byte_len(), 6);
        assert_eq!(paste_with("").byte_len(), 0);
    }

    #[test]
    fn create_request_uses_fixed_ttl_and_tag() {
        let request = CreatePasteRequest::new("console.log(1)", Language::JavaScript);
        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "content": "console.log(1)",
                "language": "javascript",
                "ttl_seconds": 604800
            })
        );
    }

    #[test]
    fn paste_deserializes_backend_record_and_ignores_extras() {
        let raw = r#"{
            "id": "Ab3dE6gH",
            "content": "fn main() {}",
            "language": "rust",
            "created_at": "2026-01-02T03:04:05Z",
            "expires_at": "2026-01-09T03:04:05Z",
            "views": 12
        }"#;
        let paste: Paste = serde_json::from_str(raw).expect("parse");
        assert_eq!(paste.id, "Ab3dE6gH");
        assert_eq!(paste.language_tag(), Language::Rust);
        assert!(paste.created_at.is_some());
        assert!(paste.expires_at > paste.created_at);
    }

    #[test]
    fn paste_tolerates_missing_metadata() {
        let paste: Paste =
            serde_json::from_str(r#"{"id":"x","content":"hi"}"#).expect("parse");
        assert_eq!(paste.language_tag(), Language::PlainText);
        assert_eq!(paste.created_at, None);
    }
}
