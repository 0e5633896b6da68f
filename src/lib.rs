//! Root crate facade for CodeDrop.
//!
//! Re-exports the core library and, with the `gui` feature, the desktop
//! client entry point.

pub use codedrop_core::{
    client, config, constants, error, highlight, i18n, models, preferences, presentation,
    ApiClient, AppError, ClientError, Config, HighlightEngine, HighlightOutcome, Language, Paste,
    PasteLookup, PresentationContext, Theme,
};

#[cfg(feature = "gui")]
pub use codedrop_gui::run as run_gui;
