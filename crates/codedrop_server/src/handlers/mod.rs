//! HTTP handlers for the paste endpoints.

/// `POST /api/pastes` and `GET /api/pastes/:id`.
pub mod paste;
