//! Native egui app for composing and reading pastes.

mod highlight;
mod state_feedback;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle, CoreCmd, CoreEvent};
use codedrop_core::{
    ApiClient, ClientError, Config, FilePreferenceStore, HighlightEngine, Language, Paste,
    PreferenceStore, PresentationContext, Startup,
};
use crossbeam_channel::TryRecvError;
use eframe::egui;
use highlight::EditorLayoutCache;
use state_feedback::CopyFeedback;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use style::{egui_theme, theme_from_egui};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Native egui application shell.
///
/// Owns the UI state and talks to the backend worker over channels so the
/// `update` loop never blocks on the network.
pub(crate) struct CodeDropApp {
    backend: BackendHandle,
    startup: Startup,
    highlighter: HighlightEngine,
    view: View,
    draft: String,
    draft_language: Language,
    submit_in_flight: Option<u64>,
    next_request_id: u64,
    show_raw: bool,
    copy_feedback: CopyFeedback,
    clipboard_outgoing: Option<String>,
    editor_cache: EditorLayoutCache,
    view_cache: EditorLayoutCache,
    toasts: VecDeque<ToastMessage>,
    style_applied: bool,
    focus_editor_next: bool,
    backend_disconnected: bool,
    api_base: String,
}

/// Which screen the central panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    Compose,
    Paste(ReadView),
}

/// Read view lifecycle for one paste id.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReadView {
    Loading { request_id: u64, id: String },
    Loaded(Paste),
    NotFound { id: String },
}

/// Actions that need the presentation context mutably, applied after the
/// frame's widgets are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiIntent {
    ToggleTheme,
    ToggleLocale,
}

struct ToastMessage {
    key: &'static str,
    expires_at: Instant,
}

/// Errors raised while constructing [`CodeDropApp`].
#[derive(Debug, Error)]
pub(crate) enum AppInitError {
    #[error("invalid API configuration: {0}")]
    Client(#[from] ClientError),
    #[error("failed to start backend worker: {0}")]
    Spawn(#[from] std::io::Error),
}

const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
#[doc = "Default initial window size for native GUI startup."]
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];
#[doc = "Minimum enforced window size to keep the header controls usable."]
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [560.0, 420.0];

impl CodeDropApp {
    /// Construct the app from resolved configuration.
    ///
    /// Spawns the backend worker and starts loading grammars in the
    /// background. When `initial_paste` is set the read view for that id is
    /// requested immediately.
    ///
    /// # Errors
    /// Returns an error if the API base URL is unusable or the worker thread
    /// cannot be spawned.
    pub(crate) fn new(config: &Config, initial_paste: Option<String>) -> Result<Self, AppInitError> {
        let client = ApiClient::from_config(config)?;
        let backend = spawn_backend(client)?;
        let store = FilePreferenceStore::open(&config.preferences_path);
        info!(path = %store.path().display(), "preferences store opened");

        let highlighter = HighlightEngine::uninitialized();
        if let Err(err) = highlighter.spawn_loader() {
            warn!("failed to spawn grammar loader, loading inline: {}", err);
            highlighter.load();
        }

        let mut app = Self::with_parts(
            backend,
            Box::new(store),
            highlighter,
            config.api_base.clone(),
        );
        if let Some(id) = initial_paste {
            app.open_paste(id);
        }
        Ok(app)
    }

    fn with_parts(
        backend: BackendHandle,
        store: Box<dyn PreferenceStore>,
        highlighter: HighlightEngine,
        api_base: String,
    ) -> Self {
        Self {
            backend,
            startup: Startup::new(store),
            highlighter,
            view: View::Compose,
            draft: String::new(),
            draft_language: Language::default(),
            submit_in_flight: None,
            next_request_id: 1,
            show_raw: false,
            copy_feedback: CopyFeedback::default(),
            clipboard_outgoing: None,
            editor_cache: EditorLayoutCache::default(),
            view_cache: EditorLayoutCache::default(),
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            style_applied: false,
            focus_editor_next: true,
            backend_disconnected: false,
            api_base,
        }
    }

    fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        id
    }

    /// Publish the current draft.
    ///
    /// Blank drafts and calls made while a publish is pending are ignored.
    ///
    /// # Returns
    /// `true` when a request was handed to the backend worker.
    fn submit_draft(&mut self) -> bool {
        if self.submit_in_flight.is_some() {
            debug!("publish already in flight; ignoring");
            return false;
        }
        if self.draft.trim().is_empty() {
            return false;
        }
        let request_id = self.allocate_request_id();
        self.submit_in_flight = Some(request_id);
        let cmd = CoreCmd::CreatePaste {
            request_id,
            content: self.draft.clone(),
            language: self.draft_language,
        };
        if let Err(err) = self.backend.cmd_tx.send(cmd) {
            warn!("backend unavailable for publish: {}", err);
            self.submit_in_flight = None;
            self.push_toast("publishFailed");
            return false;
        }
        true
    }

    /// Switch to the read view for `id` and request its content.
    fn open_paste(&mut self, id: String) {
        let request_id = self.allocate_request_id();
        self.show_raw = false;
        self.copy_feedback.reset();
        let cmd = CoreCmd::GetPaste {
            request_id,
            id: id.clone(),
        };
        if let Err(err) = self.backend.cmd_tx.send(cmd) {
            warn!("backend unavailable for lookup: {}", err);
            self.view = View::Paste(ReadView::NotFound { id });
            return;
        }
        self.view = View::Paste(ReadView::Loading { request_id, id });
    }

    /// Return to an empty editor. Any lookup still pending becomes stale.
    fn start_new_paste(&mut self) {
        self.view = View::Compose;
        self.copy_feedback.reset();
        self.focus_editor_next = true;
    }

    fn awaiting_load(&self, request_id: u64) -> bool {
        matches!(
            &self.view,
            View::Paste(ReadView::Loading { request_id: pending, .. }) if *pending == request_id
        )
    }

    fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::PasteCreated { request_id, id } => {
                if self.submit_in_flight != Some(request_id) {
                    debug!(request_id, "dropping stale publish result");
                    return;
                }
                self.submit_in_flight = None;
                info!(id = %id, "paste published");
                self.draft.clear();
                self.open_paste(id);
            }
            CoreEvent::CreateFailed {
                request_id,
                message,
            } => {
                if self.submit_in_flight != Some(request_id) {
                    debug!(request_id, "dropping stale publish failure");
                    return;
                }
                self.submit_in_flight = None;
                warn!("publish failed: {}", message);
                self.push_toast("publishFailed");
            }
            CoreEvent::PasteLoaded { request_id, paste } => {
                if !self.awaiting_load(request_id) {
                    debug!(request_id, "dropping stale paste load");
                    return;
                }
                self.view = View::Paste(ReadView::Loaded(paste));
            }
            CoreEvent::PasteMissing { request_id, id } => {
                if !self.awaiting_load(request_id) {
                    debug!(request_id, "dropping stale paste miss");
                    return;
                }
                self.view = View::Paste(ReadView::NotFound { id });
            }
        }
    }

    fn poll_backend(&mut self) {
        loop {
            match self.backend.evt_rx.try_recv() {
                Ok(event) => self.apply_event(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.backend_disconnected {
                        self.backend_disconnected = true;
                        self.handle_backend_loss();
                    }
                    break;
                }
            }
        }
    }

    fn handle_backend_loss(&mut self) {
        warn!("backend worker disconnected");
        if self.submit_in_flight.take().is_some() {
            self.push_toast("publishFailed");
        }
        if let View::Paste(ReadView::Loading { id, .. }) = &self.view {
            self.view = View::Paste(ReadView::NotFound { id: id.clone() });
        }
    }

    fn apply_intents(
        &mut self,
        ctx: &egui::Context,
        presentation: &mut PresentationContext,
        intents: Vec<UiIntent>,
    ) {
        let toggled = !intents.is_empty();
        for intent in intents {
            match intent {
                UiIntent::ToggleTheme => {
                    let theme = presentation.toggle_theme();
                    ctx.set_theme(egui_theme(theme));
                    debug!(theme = theme.as_str(), "theme toggled");
                }
                UiIntent::ToggleLocale => {
                    let locale = presentation.toggle_locale();
                    debug!(locale = locale.as_str(), "locale toggled");
                }
            }
        }
        if toggled {
            // This pass drew with the previous theme or locale.
            ctx.request_discard("presentation toggled");
        }
    }

    /// Run one frame of app logic and rendering.
    ///
    /// Preferences are hydrated before anything is drawn, so the first
    /// painted frame already uses the stored theme and locale.
    pub(crate) fn update_ui(&mut self, ctx: &egui::Context) {
        self.ensure_style(ctx);

        let mut startup = std::mem::take(&mut self.startup);
        let hydrating = !startup.is_ready();
        let presentation = startup.ensure_ready(|| ctx.system_theme().map(theme_from_egui));
        if hydrating {
            ctx.set_theme(egui_theme(presentation.theme()));
            info!(
                theme = presentation.theme().as_str(),
                locale = presentation.locale().as_str(),
                api = %self.api_base,
                "presentation ready"
            );
        }

        let now = Instant::now();
        self.expire_toasts(now);
        self.poll_backend();

        let mut intents = Vec::new();
        self.render_top_bar(ctx, presentation, &mut intents);
        self.render_footer(ctx, presentation);
        match self.view {
            View::Compose => self.render_compose_panel(ctx, presentation),
            View::Paste(_) => self.render_paste_panel(ctx, presentation, now),
        }
        self.render_toasts(ctx, presentation);
        self.apply_intents(ctx, presentation, intents);

        if let Some(text) = self.clipboard_outgoing.take() {
            ctx.send_cmd(egui::OutputCommand::CopyText(text));
        }
        if let Some(remaining) = self.copy_feedback.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
        if let Some(toast) = self.toasts.front() {
            ctx.request_repaint_after(toast.expires_at.saturating_duration_since(now));
        }
        if self.submit_in_flight.is_some() || self.is_loading() || !self.highlighter.is_ready() {
            // Backend and grammar results arrive off-thread.
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        self.startup = startup;
    }

    fn is_loading(&self) -> bool {
        matches!(self.view, View::Paste(ReadView::Loading { .. }))
    }
}

impl eframe::App for CodeDropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_ui(ctx);
    }
}

#[cfg(test)]
mod tests;
