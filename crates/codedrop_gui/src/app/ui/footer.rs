//! Footer with the product name, current year, and author link.

use super::super::style::palette;
use super::super::CodeDropApp;
use chrono::Datelike;
use codedrop_core::PresentationContext;
use eframe::egui::{self, RichText};

const AUTHOR_NAME: &str = "akyloffdev";
const AUTHOR_URL: &str = "https://github.com/akyloffdev";

impl CodeDropApp {
    pub(crate) fn render_footer(&mut self, ctx: &egui::Context, presentation: &PresentationContext) {
        let colors = palette(presentation.theme());
        let year = chrono::Local::now().year();
        egui::TopBottomPanel::bottom("footer")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} / {}",
                            presentation.translate("footerRights").to_uppercase(),
                            year
                        ))
                        .small()
                        .color(colors.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.hyperlink_to(RichText::new(AUTHOR_NAME).small().strong(), AUTHOR_URL);
                        ui.label(
                            RichText::new(presentation.translate("devBy"))
                                .small()
                                .color(colors.text_muted),
                        );
                    });
                });
            });
    }
}
