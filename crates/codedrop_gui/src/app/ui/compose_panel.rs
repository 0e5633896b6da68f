//! Compose view: language selector, publish control, and the highlighted editor.

use super::super::highlight::EditorLayoutRequest;
use super::super::style::{palette, COLOR_ACCENT};
use super::super::CodeDropApp;
use codedrop_core::{Language, PresentationContext};
use eframe::egui::{self, RichText};

const DRAFT_EDITOR_ID: &str = "draft_editor";

impl CodeDropApp {
    pub(crate) fn render_compose_panel(
        &mut self,
        ctx: &egui::Context,
        presentation: &PresentationContext,
    ) {
        // Consumed before the editor so it does not also insert a newline.
        let submit_shortcut = ctx.input_mut(|input| {
            input.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter)
        });
        if submit_shortcut {
            self.submit_draft();
        }

        let theme = presentation.theme();
        let colors = palette(theme);
        let mut submit_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(presentation.translate("syntax").to_uppercase())
                        .small()
                        .color(colors.text_muted),
                );
                egui::ComboBox::from_id_salt("draft_language_select")
                    .selected_text(self.draft_language.label())
                    .show_ui(ui, |ui| {
                        for language in Language::SELECTABLE {
                            ui.selectable_value(&mut self.draft_language, language, language.label());
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let busy = self.submit_in_flight.is_some();
                    let label = if busy {
                        presentation.translate("creating")
                    } else {
                        presentation.translate("create")
                    };
                    let enabled = !busy && !self.draft.trim().is_empty();
                    let button = egui::Button::new(
                        RichText::new(label.to_uppercase())
                            .strong()
                            .color(COLOR_ACCENT),
                    )
                    .frame(false);
                    if ui.add_enabled(enabled, button).clicked() {
                        submit_clicked = true;
                    }
                });
            });
            ui.add_space(4.0);

            egui::Frame::group(ui.style())
                .fill(colors.bg_primary)
                .stroke(egui::Stroke::new(1.0, colors.border))
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("draft_scroll")
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            let mut editor_cache = std::mem::take(&mut self.editor_cache);
                            let engine = &self.highlighter;
                            let language = self.draft_language;
                            let mut layouter =
                                |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
                                    editor_cache.layout(EditorLayoutRequest {
                                        ui,
                                        text: text.as_str(),
                                        wrap_width,
                                        language,
                                        theme,
                                        engine,
                                    })
                                };
                            let output = egui::TextEdit::multiline(&mut self.draft)
                                .id_salt(DRAFT_EDITOR_ID)
                                .font(egui::TextStyle::Monospace)
                                .code_editor()
                                .frame(false)
                                .desired_width(f32::INFINITY)
                                .desired_rows(24)
                                .lock_focus(true)
                                .hint_text(presentation.translate("pastePlaceholder"))
                                .layouter(&mut layouter)
                                .show(ui);
                            self.editor_cache = editor_cache;
                            if self.focus_editor_next {
                                output.response.request_focus();
                                self.focus_editor_next = false;
                            }
                        });
                });
        });

        if submit_clicked {
            self.submit_draft();
        }
    }
}
