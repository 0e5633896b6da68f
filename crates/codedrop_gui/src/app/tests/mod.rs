//! App state tests driven through fake backend channels.

use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreEvent};
use codedrop_core::MemoryPreferenceStore;
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use std::sync::OnceLock;

struct TestHarness {
    app: CodeDropApp,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
}

fn shared_engine() -> HighlightEngine {
    static ENGINE: OnceLock<HighlightEngine> = OnceLock::new();
    ENGINE.get_or_init(HighlightEngine::loaded).clone()
}

fn make_app_with_store(store: Box<dyn PreferenceStore>) -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let app = CodeDropApp::with_parts(
        BackendHandle::from_test_channels(cmd_tx, evt_rx),
        store,
        shared_engine(),
        "http://localhost:8080".to_string(),
    );
    TestHarness {
        app,
        cmd_rx,
        evt_tx,
    }
}

fn make_app() -> TestHarness {
    make_app_with_store(Box::new(MemoryPreferenceStore::new()))
}

fn run_frame(app: &mut CodeDropApp, ctx: &egui::Context, input: egui::RawInput) -> egui::FullOutput {
    ctx.run(input, |ctx| app.update_ui(ctx))
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outbound command")
}

fn assert_no_cmd(rx: &Receiver<CoreCmd>) {
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

fn toast_keys(app: &CodeDropApp) -> Vec<&'static str> {
    app.toasts.iter().map(|toast| toast.key).collect()
}

fn sample_paste(id: &str, content: &str, language: &str) -> Paste {
    Paste {
        id: id.to_string(),
        content: content.to_string(),
        language: language.to_string(),
        created_at: None,
        expires_at: None,
    }
}

mod layout_cache;
