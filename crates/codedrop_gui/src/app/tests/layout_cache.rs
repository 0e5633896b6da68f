use super::*;
use crate::app::highlight::{EditorLayoutCache, EditorLayoutRequest};
use codedrop_core::{HighlightOutcome, Theme};
use std::sync::Arc;

#[test]
fn outcome_is_reused_until_text_or_language_changes() {
    let engine = shared_engine();
    let mut cache = EditorLayoutCache::default();

    assert!(!cache
        .ensure_outcome(&engine, "let a = 1;\n", Language::JavaScript)
        .is_fallback());
    cache.ensure_outcome(&engine, "let a = 1;\n", Language::JavaScript);
    assert_eq!(cache.highlight_runs(), 1);

    cache.ensure_outcome(&engine, "let a = 12;\n", Language::JavaScript);
    assert_eq!(cache.highlight_runs(), 2);

    cache.ensure_outcome(&engine, "let a = 12;\n", Language::Rust);
    assert_eq!(cache.highlight_runs(), 3);
}

#[test]
fn fallback_is_replaced_once_grammars_load() {
    let cold = HighlightEngine::uninitialized();
    let mut cache = EditorLayoutCache::default();
    assert_eq!(
        cache.ensure_outcome(&cold, "x = 1\n", Language::Python),
        &HighlightOutcome::Fallback("x = 1\n".to_string())
    );

    cold.load();
    assert!(!cache
        .ensure_outcome(&cold, "x = 1\n", Language::Python)
        .is_fallback());
    assert_eq!(cache.highlight_runs(), 2);
}

#[test]
fn plain_text_language_always_falls_back() {
    let engine = shared_engine();
    let mut cache = EditorLayoutCache::default();
    assert!(cache
        .ensure_outcome(&engine, "fn main() {}", Language::PlainText)
        .is_fallback());
}

#[test]
fn galley_is_rebuilt_for_theme_but_not_rehighlighted() {
    let engine = shared_engine();
    let mut cache = EditorLayoutCache::default();
    egui::__run_test_ctx(|ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let ui: &egui::Ui = ui;
            let engine = &engine;
            let request = |theme: Theme| EditorLayoutRequest {
                ui,
                text: "const x = \"s\";\n",
                wrap_width: 400.0,
                language: Language::JavaScript,
                theme,
                engine,
            };
            let first = cache.layout(request(Theme::Light));
            let again = cache.layout(request(Theme::Light));
            assert!(Arc::ptr_eq(&first, &again));

            let dark = cache.layout(request(Theme::Dark));
            assert!(!Arc::ptr_eq(&first, &dark));
            assert_eq!(dark.job.text, "const x = \"s\";\n");
        });
    });
    assert_eq!(cache.highlight_runs(), 1);
}

#[test]
fn editor_rehighlights_after_each_change() {
    let mut harness = make_app();
    let ctx = egui::Context::default();
    harness.app.draft = "let a = 1;".to_string();
    let _ = run_frame(&mut harness.app, &ctx, egui::RawInput::default());
    let runs = harness.app.editor_cache.highlight_runs();
    assert!(runs >= 1);

    let _ = run_frame(&mut harness.app, &ctx, egui::RawInput::default());
    assert_eq!(harness.app.editor_cache.highlight_runs(), runs);

    harness.app.draft.push_str("\nlet b = 2;");
    let _ = run_frame(&mut harness.app, &ctx, egui::RawInput::default());
    assert_eq!(harness.app.editor_cache.highlight_runs(), runs + 1);

    harness.app.draft_language = Language::TypeScript;
    let _ = run_frame(&mut harness.app, &ctx, egui::RawInput::default());
    assert_eq!(harness.app.editor_cache.highlight_runs(), runs + 2);
}
