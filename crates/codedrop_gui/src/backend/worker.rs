//! Background worker thread for blocking HTTP access.

use crate::backend::{CoreCmd, CoreEvent};
use codedrop_core::{ApiClient, PasteLookup};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    /// Wrap pre-built channels, for tests that play the worker's role.
    pub fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

fn handle_command(client: &ApiClient, cmd: CoreCmd) -> CoreEvent {
    match cmd {
        CoreCmd::CreatePaste {
            request_id,
            content,
            language,
        } => {
            let started = Instant::now();
            match client.create_paste(&content, language) {
                Ok(id) => {
                    info!(
                        id = %id,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "paste published"
                    );
                    CoreEvent::PasteCreated { request_id, id }
                }
                Err(err) => {
                    warn!("publish failed: {}", err);
                    CoreEvent::CreateFailed {
                        request_id,
                        message: err.to_string(),
                    }
                }
            }
        }
        CoreCmd::GetPaste { request_id, id } => match client.lookup_paste(&id) {
            PasteLookup::Found(paste) => {
                debug!(id = %paste.id, bytes = paste.byte_len(), "paste loaded");
                CoreEvent::PasteLoaded { request_id, paste }
            }
            PasteLookup::NotFound => CoreEvent::PasteMissing { request_id, id },
        },
    }
}

/// Spawn the backend worker thread that performs blocking HTTP calls.
///
/// All I/O stays off the UI thread; the worker replies with [`CoreEvent`]
/// values that are polled each frame. The thread exits once every command
/// sender is dropped.
///
/// # Errors
/// Returns an error if the worker thread cannot be spawned.
pub fn spawn_backend(client: ApiClient) -> std::io::Result<BackendHandle> {
    let (cmd_tx, cmd_rx) = unbounded::<CoreCmd>();
    let (evt_tx, evt_rx) = unbounded::<CoreEvent>();

    thread::Builder::new()
        .name("codedrop-gui-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                let event = handle_command(&client, cmd);
                if evt_tx.send(event).is_err() {
                    break;
                }
            }
            debug!("backend worker stopped");
        })?;

    Ok(BackendHandle { cmd_tx, evt_rx })
}
