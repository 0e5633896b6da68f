//! Headless integration tests for the GUI backend worker against the embedded API.

use codedrop_core::{ApiClient, Language};
use codedrop_gui::backend::{spawn_backend, BackendHandle, CoreCmd, CoreEvent};
use codedrop_server::EmbeddedServer;
use crossbeam_channel::Receiver;
use std::time::Duration;

fn recv_event(rx: &Receiver<CoreEvent>) -> CoreEvent {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("expected backend event")
}

fn backend_for(server: &EmbeddedServer) -> BackendHandle {
    let client = ApiClient::new(&server.base_url(), Duration::from_secs(5)).expect("client");
    spawn_backend(client).expect("spawn backend")
}

#[test]
fn publish_then_load_round_trips_through_worker() {
    let server = EmbeddedServer::start_ephemeral().expect("server");
    let backend = backend_for(&server);

    backend
        .cmd_tx
        .send(CoreCmd::CreatePaste {
            request_id: 1,
            content: "SELECT 1;".to_string(),
            language: Language::Sql,
        })
        .expect("send create");
    let id = match recv_event(&backend.evt_rx) {
        CoreEvent::PasteCreated { request_id, id } => {
            assert_eq!(request_id, 1);
            id
        }
        other => panic!("unexpected event: {:?}", other),
    };
    assert_eq!(server.state().store.len(), 1);

    backend
        .cmd_tx
        .send(CoreCmd::GetPaste {
            request_id: 2,
            id: id.clone(),
        })
        .expect("send get");
    match recv_event(&backend.evt_rx) {
        CoreEvent::PasteLoaded { request_id, paste } => {
            assert_eq!(request_id, 2);
            assert_eq!(paste.id, id);
            assert_eq!(paste.content, "SELECT 1;");
            assert_eq!(paste.language_tag(), Language::Sql);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn missing_paste_and_blank_publish_report_failures() {
    let server = EmbeddedServer::start_ephemeral().expect("server");
    let backend = backend_for(&server);

    backend
        .cmd_tx
        .send(CoreCmd::GetPaste {
            request_id: 7,
            id: "missing".to_string(),
        })
        .expect("send get");
    assert_eq!(
        recv_event(&backend.evt_rx),
        CoreEvent::PasteMissing {
            request_id: 7,
            id: "missing".to_string()
        }
    );

    backend
        .cmd_tx
        .send(CoreCmd::CreatePaste {
            request_id: 8,
            content: "   ".to_string(),
            language: Language::Go,
        })
        .expect("send create");
    match recv_event(&backend.evt_rx) {
        CoreEvent::CreateFailed { request_id, .. } => assert_eq!(request_id, 8),
        other => panic!("unexpected event: {:?}", other),
    }
    assert!(server.state().store.is_empty());
}

#[test]
fn unreachable_backend_yields_failure_events() {
    let addr = {
        let server = EmbeddedServer::start_ephemeral().expect("server");
        server.addr()
    };
    let client =
        ApiClient::new(&format!("http://{}", addr), Duration::from_millis(500)).expect("client");
    let backend = spawn_backend(client).expect("spawn backend");

    backend
        .cmd_tx
        .send(CoreCmd::CreatePaste {
            request_id: 1,
            content: "x".to_string(),
            language: Language::C,
        })
        .expect("send create");
    assert!(matches!(
        recv_event(&backend.evt_rx),
        CoreEvent::CreateFailed { request_id: 1, .. }
    ));

    backend
        .cmd_tx
        .send(CoreCmd::GetPaste {
            request_id: 2,
            id: "abc".to_string(),
        })
        .expect("send get");
    assert!(matches!(
        recv_event(&backend.evt_rx),
        CoreEvent::PasteMissing { request_id: 2, .. }
    ));
}

#[test]
fn worker_exits_when_commands_close() {
    let server = EmbeddedServer::start_ephemeral().expect("server");
    let backend = backend_for(&server);
    let evt_rx = backend.evt_rx.clone();
    drop(backend);
    assert!(matches!(
        evt_rx.recv_timeout(Duration::from_secs(2)),
        Err(crossbeam_channel::RecvTimeoutError::Disconnected)
    ));
}
