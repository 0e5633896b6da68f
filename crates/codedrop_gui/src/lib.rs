//! CodeDrop desktop client.
//!
//! Exposes a `run` helper so the workspace root can launch the UI without
//! duplicating initialization logic.

mod app;
/// Backend worker + protocol types used by the UI and headless tests.
pub mod backend;

use app::CodeDropApp;
use codedrop_core::Config;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("codedrop_core=warn,codedrop_gui=info"));

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

/// Extract a paste identifier from command-line arguments.
///
/// Accepts a bare id or a link whose last path segment is the id. A link
/// with no path after the host carries no id.
pub fn paste_id_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let raw = args.into_iter().nth(1)?;
    let trimmed = raw.trim();
    let path = match trimmed.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path)?,
        None => trimmed,
    };
    let path = path.trim_end_matches('/');
    let id = path.rsplit('/').next().unwrap_or(path).trim();
    if id.is_empty() || id.starts_with('-') {
        None
    } else {
        Some(id.to_string())
    }
}

/// Start the desktop UI with tracing enabled.
///
/// A paste id passed as the first argument opens its read view directly.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when the API client cannot be built.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    tracing::info!(api = %config.api_base, "starting CodeDrop");
    let initial_paste = paste_id_from_args(std::env::args());
    let app = CodeDropApp::new(&config, initial_paste)
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("CodeDrop"),
        ..Default::default()
    };

    eframe::run_native("CodeDrop", options, Box::new(|_cc| Ok(Box::new(app))))
}
