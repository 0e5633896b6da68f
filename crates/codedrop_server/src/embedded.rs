//! Embedded server helper for running the backend inside another process
//! (integration tests, local tooling).

use crate::{serve_router, AppState, ServerConfig};
use std::{
    io,
    net::SocketAddr,
    sync::mpsc,
    thread::{self, JoinHandle},
};
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Handle to a backend running on a background thread.
///
/// Dropping the handle shuts the server down and joins its thread.
pub struct EmbeddedServer {
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
    addr: SocketAddr,
    state: AppState,
}

impl EmbeddedServer {
    /// Start a server with default config on an ephemeral loopback port.
    ///
    /// # Errors
    /// See [`EmbeddedServer::start`].
    pub fn start_ephemeral() -> io::Result<Self> {
        Self::start(
            AppState::new(ServerConfig::default()),
            SocketAddr::from(([127, 0, 0, 1], 0)),
        )
    }

    /// Start the server on a background thread with its own tokio runtime.
    ///
    /// Blocks until the listener is bound, so requests can be sent as soon
    /// as this returns.
    ///
    /// # Errors
    /// Returns an error if the thread, runtime, or socket cannot be created.
    pub fn start(state: AppState, bind_addr: SocketAddr) -> io::Result<Self> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel::<io::Result<SocketAddr>>();
        let server_state = state.clone();

        let thread = thread::Builder::new()
            .name("codedrop-embedded-server".into())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(2)
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };

                let listener = match rt.block_on(tokio::net::TcpListener::bind(bind_addr)) {
                    Ok(listener) => listener,
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };
                let actual_addr = listener.local_addr().unwrap_or(bind_addr);
                info!("embedded backend listening on http://{}", actual_addr);
                let _ = ready_tx.send(Ok(actual_addr));

                let shutdown = async {
                    let _ = shutdown_rx.await;
                };
                if let Err(err) = rt.block_on(serve_router(listener, server_state, false, shutdown))
                {
                    warn!("embedded backend error: {}", err);
                }
            })?;

        match ready_rx.recv() {
            Ok(Ok(addr)) => Ok(Self {
                shutdown: Some(shutdown_tx),
                thread: Some(thread),
                addr,
                state,
            }),
            Ok(Err(err)) => {
                let _ = thread.join();
                Err(err)
            }
            Err(_) => {
                let _ = thread.join();
                Err(io::Error::other("embedded backend exited before binding"))
            }
        }
    }

    /// Address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL suitable for [`codedrop_core::ApiClient::new`].
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shared state, for seeding or inspecting the store in tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl Drop for EmbeddedServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}
