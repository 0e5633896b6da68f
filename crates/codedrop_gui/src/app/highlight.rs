//! Layout caching for the syntax-highlighted editor and read view.
//!
//! egui calls the layouter every frame, so the highlight outcome and the
//! shaped galley are cached separately: the outcome only depends on the text
//! and language, while the galley also depends on theme and wrap width.

use super::style::{code_font, palette, token_color};
use codedrop_core::{HighlightEngine, HighlightOutcome, Language, Theme};
use eframe::egui::{
    self,
    text::{LayoutJob, TextFormat},
    FontId,
};
use std::sync::Arc;
use tracing::trace;

#[derive(Default)]
pub(super) struct EditorLayoutCache {
    text: String,
    language: Language,
    engine_ready: bool,
    outcome: Option<HighlightOutcome>,
    theme: Theme,
    wrap_width: f32,
    pixels_per_point: f32,
    galley: Option<Arc<egui::Galley>>,
    highlight_runs: u64,
}

pub(super) struct EditorLayoutRequest<'a> {
    pub(super) ui: &'a egui::Ui,
    pub(super) text: &'a str,
    pub(super) wrap_width: f32,
    pub(super) language: Language,
    pub(super) theme: Theme,
    pub(super) engine: &'a HighlightEngine,
}

impl EditorLayoutCache {
    /// Number of times the highlighter actually ran, for tests.
    #[cfg(test)]
    pub(super) fn highlight_runs(&self) -> u64 {
        self.highlight_runs
    }

    /// Highlight `text`, reusing the previous outcome when nothing it depends
    /// on has changed.
    ///
    /// A grammar set that finishes loading invalidates a fallback outcome.
    pub(super) fn ensure_outcome(
        &mut self,
        engine: &HighlightEngine,
        text: &str,
        language: Language,
    ) -> &HighlightOutcome {
        let engine_ready = engine.is_ready();
        let stale = self.outcome.is_none()
            || self.language != language
            || self.engine_ready != engine_ready
            || self.text != text;
        if stale {
            self.outcome = Some(engine.highlight_language(text, language));
            self.text.clear();
            self.text.push_str(text);
            self.language = language;
            self.engine_ready = engine_ready;
            self.galley = None;
            self.highlight_runs += 1;
            trace!(language = language.tag(), bytes = text.len(), "re-highlighted");
        }
        self.outcome
            .get_or_insert_with(|| HighlightOutcome::Fallback(text.to_string()))
    }

    pub(super) fn layout(&mut self, request: EditorLayoutRequest<'_>) -> Arc<egui::Galley> {
        let pixels_per_point = request.ui.ctx().pixels_per_point();
        let wrap_width = request.wrap_width.max(0.0).round();
        self.ensure_outcome(request.engine, request.text, request.language);

        let cache_hit = self.theme == request.theme
            && self.wrap_width == wrap_width
            && self.pixels_per_point == pixels_per_point;
        if cache_hit {
            if let Some(galley) = self.galley.as_ref() {
                return galley.clone();
            }
        }

        let mut job = match self.outcome.as_ref() {
            Some(outcome) => layout_job(outcome, request.theme, &code_font()),
            None => plain_job(request.text, request.theme, &code_font()),
        };
        job.wrap.max_width = wrap_width;
        let galley = request.ui.fonts_mut(|f| f.layout_job(job));
        self.theme = request.theme;
        self.wrap_width = wrap_width;
        self.pixels_per_point = pixels_per_point;
        self.galley = Some(galley.clone());
        galley
    }
}

fn plain_job(text: &str, theme: Theme, font: &FontId) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(
        text,
        0.0,
        TextFormat::simple(font.clone(), palette(theme).text_primary),
    );
    job
}

/// Build a layout job coloring each token by category.
pub(super) fn layout_job(outcome: &HighlightOutcome, theme: Theme, font: &FontId) -> LayoutJob {
    match outcome {
        HighlightOutcome::Fallback(text) => plain_job(text, theme, font),
        HighlightOutcome::Highlighted(tokens) => {
            let mut job = LayoutJob::default();
            for token in tokens {
                job.append(
                    &token.text,
                    0.0,
                    TextFormat::simple(font.clone(), token_color(theme, token.category)),
                );
            }
            job
        }
    }
}
