//! Top bar: logo (returns to the editor) plus locale and theme switches.

use super::super::style::{palette, COLOR_ACCENT};
use super::super::{CodeDropApp, UiIntent};
use codedrop_core::{PresentationContext, Theme};
use eframe::egui::{self, RichText};

fn paint_logo(ui: &mut egui::Ui) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::click());
    let top = egui::pos2(rect.center().x, rect.top() + 1.5);
    let left = egui::pos2(rect.left() + 2.0, rect.bottom() - 1.5);
    let right = egui::pos2(rect.right() - 2.0, rect.bottom() - 1.5);
    ui.painter().add(egui::Shape::convex_polygon(
        vec![top, right, left],
        COLOR_ACCENT,
        egui::Stroke::NONE,
    ));
    response
}

impl CodeDropApp {
    pub(in crate::app) fn render_top_bar(
        &mut self,
        ctx: &egui::Context,
        presentation: &PresentationContext,
        intents: &mut Vec<UiIntent>,
    ) {
        let colors = palette(presentation.theme());
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let logo = paint_logo(ui);
                    let title = ui.add(
                        egui::Button::new(RichText::new("CODEDROP").strong().size(14.0))
                            .frame(false),
                    );
                    if logo.clicked() || title.clicked() {
                        self.start_new_paste();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let target_key = match presentation.theme().toggled() {
                            Theme::Light => "themeLight",
                            Theme::Dark => "themeDark",
                        };
                        let theme_label = presentation.translate(target_key).to_uppercase();
                        if ui
                            .add(
                                egui::Button::new(
                                    RichText::new(theme_label)
                                        .small()
                                        .color(colors.text_secondary),
                                )
                                .frame(false),
                            )
                            .clicked()
                        {
                            intents.push(UiIntent::ToggleTheme);
                        }

                        let locale_label = presentation.locale().as_str().to_uppercase();
                        if ui
                            .add(
                                egui::Button::new(
                                    RichText::new(locale_label)
                                        .small()
                                        .color(colors.text_secondary),
                                )
                                .frame(false),
                            )
                            .clicked()
                        {
                            intents.push(UiIntent::ToggleLocale);
                        }
                    });
                });
            });
    }
}
