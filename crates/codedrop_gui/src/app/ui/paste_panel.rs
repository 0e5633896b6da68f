//! Read view: paste metadata header, copy/raw controls, and highlighted content.

use super::super::highlight::EditorLayoutRequest;
use super::super::style::{palette, COLOR_ACCENT};
use super::super::{CodeDropApp, ReadView, View};
use chrono::{DateTime, Local, Utc};
use codedrop_core::{Language, Paste, PresentationContext};
use eframe::egui::{self, RichText};
use std::time::Instant;

fn format_timestamp(value: DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Language label for the header; unknown tags show what the backend sent.
fn language_caption(paste: &Paste) -> String {
    match paste.language_tag() {
        Language::PlainText if !paste.language.trim().is_empty() => {
            paste.language.trim().to_uppercase()
        }
        language => language.tag().to_uppercase(),
    }
}

#[derive(Default)]
struct ReadActions {
    new_paste: bool,
    copy: bool,
    toggle_raw: bool,
}

impl CodeDropApp {
    pub(crate) fn render_paste_panel(
        &mut self,
        ctx: &egui::Context,
        presentation: &PresentationContext,
        now: Instant,
    ) {
        let theme = presentation.theme();
        let colors = palette(theme);
        let copied = self.copy_feedback.is_active(now);
        let mut actions = ReadActions::default();

        egui::CentralPanel::default().show(ctx, |ui| match &self.view {
            View::Compose => {}
            View::Paste(ReadView::Loading { .. }) => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(presentation.translate("loading")).color(colors.text_muted));
                });
            }
            View::Paste(ReadView::NotFound { id }) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.heading(presentation.translate("pasteNotFound"));
                    ui.label(RichText::new(id).monospace().color(colors.text_muted));
                    ui.add_space(12.0);
                    if ui.button(presentation.translate("newPaste")).clicked() {
                        actions.new_paste = true;
                    }
                });
            }
            View::Paste(ReadView::Loaded(paste)) => {
                ui.horizontal_wrapped(|ui| {
                    let meta = |text: String| RichText::new(text).small().strong().color(colors.text_muted);
                    ui.label(meta(paste.id.clone()));
                    ui.label(meta(language_caption(paste)));
                    ui.label(meta(format!("{} B", paste.byte_len())));
                    if let Some(created_at) = paste.created_at {
                        ui.label(meta(format!(
                            "{} {}",
                            presentation.translate("created"),
                            format_timestamp(created_at)
                        )));
                    }
                    if let Some(expires_at) = paste.expires_at {
                        ui.label(meta(format!(
                            "{} {}",
                            presentation.translate("expires"),
                            format_timestamp(expires_at)
                        )));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let copy_label = if copied {
                            presentation.translate("copied")
                        } else {
                            presentation.translate("copy")
                        };
                        let copy_button = if copied {
                            egui::Button::new(
                                RichText::new(copy_label.to_uppercase())
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            )
                            .fill(COLOR_ACCENT)
                            .stroke(egui::Stroke::new(1.0, COLOR_ACCENT))
                        } else {
                            egui::Button::new(RichText::new(copy_label.to_uppercase()).strong())
                                .stroke(egui::Stroke::new(1.0, colors.border))
                        };
                        if ui.add(copy_button).clicked() {
                            actions.copy = true;
                        }
                        if ui
                            .selectable_label(
                                self.show_raw,
                                RichText::new(presentation.translate("raw").to_uppercase()).small(),
                            )
                            .clicked()
                        {
                            actions.toggle_raw = true;
                        }
                        if ui
                            .add(
                                egui::Button::new(
                                    RichText::new(presentation.translate("newPaste").to_uppercase())
                                        .small()
                                        .color(colors.text_secondary),
                                )
                                .frame(false),
                            )
                            .clicked()
                        {
                            actions.new_paste = true;
                        }
                    });
                });
                ui.add_space(4.0);

                let language = if self.show_raw {
                    Language::PlainText
                } else {
                    paste.language_tag()
                };
                egui::Frame::group(ui.style())
                    .fill(colors.bg_secondary)
                    .stroke(egui::Stroke::new(1.0, colors.border))
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("paste_scroll")
                            .auto_shrink([false; 2])
                            .show(ui, |ui| {
                                let view_cache = &mut self.view_cache;
                                let engine = &self.highlighter;
                                let mut layouter =
                                    |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
                                        view_cache.layout(EditorLayoutRequest {
                                            ui,
                                            text: text.as_str(),
                                            wrap_width,
                                            language,
                                            theme,
                                            engine,
                                        })
                                    };
                                let mut content = paste.content.as_str();
                                egui::TextEdit::multiline(&mut content)
                                    .id_salt("paste_content")
                                    .font(egui::TextStyle::Monospace)
                                    .code_editor()
                                    .frame(false)
                                    .desired_width(f32::INFINITY)
                                    .layouter(&mut layouter)
                                    .show(ui);
                            });
                    });
            }
        });

        if actions.toggle_raw {
            self.show_raw = !self.show_raw;
        }
        if actions.copy {
            if let View::Paste(ReadView::Loaded(paste)) = &self.view {
                let content = paste.content.clone();
                self.copy_to_clipboard(content, now);
            }
        }
        if actions.new_paste {
            self.start_new_paste();
        }
    }
}
