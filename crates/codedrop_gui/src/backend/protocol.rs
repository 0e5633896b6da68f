//! Protocol types for the desktop client's backend worker.

use codedrop_core::{Language, Paste};

/// Commands issued by the UI thread for the backend worker to execute.
///
/// Every command carries a `request_id` chosen by the UI; the matching event
/// echoes it so stale responses can be recognized and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCmd {
    /// Publish a new paste.
    CreatePaste {
        request_id: u64,
        content: String,
        language: Language,
    },
    /// Fetch a paste for the read view.
    GetPaste { request_id: u64, id: String },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// The backend accepted the paste and assigned `id`.
    PasteCreated { request_id: u64, id: String },
    /// Publishing failed. `message` is for logs only; the UI shows a generic
    /// failure.
    CreateFailed { request_id: u64, message: String },
    /// The requested paste was fetched.
    PasteLoaded { request_id: u64, paste: Paste },
    /// The paste could not be fetched for any reason.
    PasteMissing { request_id: u64, id: String },
}
