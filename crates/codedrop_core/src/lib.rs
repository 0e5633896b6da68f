//! Core domain library for CodeDrop (config, models, preferences, highlighting, API client).

/// Blocking HTTP client for the paste backend.
pub mod client;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across CodeDrop crates.
pub mod constants;
/// Process-global environment helpers (used by tests).
pub mod env;
/// Application error types.
pub mod error;
/// Syntax highlighting adapter built on syntect.
pub mod highlight;
/// Static translation tables.
pub mod i18n;
/// Data models for API requests and responses.
pub mod models;
/// Persisted theme/locale preferences.
pub mod preferences;
/// Session-wide theme, locale, and translation state.
pub mod presentation;

pub use client::{ApiClient, ClientError, PasteLookup};
pub use config::Config;
pub use error::AppError;
pub use highlight::{HighlightEngine, HighlightOutcome, HighlightToken, TokenCategory};
pub use models::{CreatePasteRequest, CreatePasteResponse, Language, Paste};
pub use preferences::{FilePreferenceStore, Locale, MemoryPreferenceStore, PreferenceStore, Theme};
pub use presentation::{PresentationContext, Startup};
