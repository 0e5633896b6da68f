//! UI panel modules extracted from the main app update loop.

/// Compose view: language selector, publish button, and code editor.
pub(super) mod compose_panel;
/// Footer with attribution.
pub(super) mod footer;
/// Read view for a fetched paste.
pub(super) mod paste_panel;
/// Top bar with logo and theme/locale switches.
pub(super) mod top_bar;
/// Transient toast notifications.
pub(super) mod toasts;
