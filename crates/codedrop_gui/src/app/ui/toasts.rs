//! Ephemeral toast notifications for short action feedback.

use super::super::style::palette;
use super::super::CodeDropApp;
use codedrop_core::PresentationContext;
use eframe::egui;

impl CodeDropApp {
    /// Renders transient toast notifications in the top-right overlay area.
    pub(crate) fn render_toasts(&mut self, ctx: &egui::Context, presentation: &PresentationContext) {
        if self.toasts.is_empty() {
            return;
        }
        let colors = palette(presentation.theme());

        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 56.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.vertical(|ui| {
                    for toast in self.toasts.iter().rev() {
                        egui::Frame::popup(ui.style())
                            .fill(colors.bg_secondary)
                            .stroke(egui::Stroke::new(1.0, colors.border))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(presentation.translate(toast.key))
                                        .small()
                                        .color(colors.text_primary),
                                );
                            });
                    }
                });
            });
    }
}
