//! Data models shared by the client, CLI, and development backend.

/// Language tag set offered by the editor.
pub mod language;
/// Paste records and API payloads.
pub mod paste;

pub use language::Language;
pub use paste::{CreatePasteRequest, CreatePasteResponse, Paste};
