//! Theme palettes and one-time style registration for the egui app.
//!
//! Both the light and dark styles are registered up front; switching theme
//! only changes which one egui resolves.

use super::CodeDropApp;
use codedrop_core::{Theme, TokenCategory};
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0xF6, 0x82, 0x1F);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0xE5, 0x70, 0x00);

/// Background, border, and text colors for one theme.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    pub(super) bg_primary: Color32,
    pub(super) bg_secondary: Color32,
    pub(super) bg_tertiary: Color32,
    pub(super) border: Color32,
    pub(super) text_primary: Color32,
    pub(super) text_secondary: Color32,
    pub(super) text_muted: Color32,
}

const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(0x0d, 0x11, 0x17),
    bg_secondary: Color32::from_rgb(0x16, 0x1b, 0x22),
    bg_tertiary: Color32::from_rgb(0x21, 0x26, 0x29),
    border: Color32::from_rgb(0x30, 0x36, 0x3d),
    text_primary: Color32::from_rgb(0xc9, 0xd1, 0xd9),
    text_secondary: Color32::from_rgb(0x8b, 0x94, 0x9e),
    text_muted: Color32::from_rgb(0x6e, 0x76, 0x81),
};

const LIGHT: Palette = Palette {
    bg_primary: Color32::WHITE,
    bg_secondary: Color32::from_rgb(0xfa, 0xfa, 0xfa),
    bg_tertiary: Color32::from_rgb(0xf0, 0xf2, 0xf4),
    border: Color32::from_rgb(0xd0, 0xd7, 0xde),
    text_primary: Color32::from_rgb(0x1f, 0x23, 0x28),
    text_secondary: Color32::from_rgb(0x59, 0x63, 0x6e),
    text_muted: Color32::from_rgb(0x8c, 0x95, 0x9f),
};

pub(super) fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

pub(super) fn egui_theme(theme: Theme) -> egui::Theme {
    match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    }
}

/// Map the host's reported color scheme onto the stored preference type.
pub(super) fn theme_from_egui(theme: egui::Theme) -> Theme {
    match theme {
        egui::Theme::Light => Theme::Light,
        egui::Theme::Dark => Theme::Dark,
    }
}

const fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Foreground color for a token category in `theme`.
pub(super) fn token_color(theme: Theme, category: TokenCategory) -> Color32 {
    use TokenCategory::*;
    match theme {
        Theme::Dark => match category {
            Comment => hex(0x6a9955),
            Punctuation | Operator | Plain => hex(0xd4d4d4),
            Number => hex(0xb5cea8),
            Constant | Keyword | Tag => hex(0x569cd6),
            String => hex(0xce9178),
            Function => hex(0xdcdcaa),
            Type => hex(0x4ec9b0),
            Regex => hex(0xd16969),
            Variable | Parameter | Attribute => hex(0x9cdcfe),
        },
        Theme::Light => match category {
            Comment => hex(0x999988),
            String => hex(0xe3116c),
            Punctuation | Operator | Plain | Parameter => hex(0x393a34),
            Number | Constant | Variable | Regex => hex(0x36acaa),
            Keyword | Tag => hex(0x00009f),
            Attribute => hex(0x00a4db),
            Function => hex(0xd73a49),
            Type => hex(0x6f42c1),
        },
    }
}

/// Font used by the editor and read view.
pub(super) fn code_font() -> FontId {
    FontId::new(14.0, FontFamily::Monospace)
}

fn widget_visuals(fill: Color32, stroke: Color32, fg: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(6),
        fg_stroke: Stroke::new(1.0, fg),
        expansion,
    }
}

fn build_style(base: &egui::Style, theme: Theme) -> egui::Style {
    let colors = palette(theme);
    let mut style = base.clone();
    style.visuals = match theme {
        Theme::Light => Visuals::light(),
        Theme::Dark => Visuals::dark(),
    };
    style.visuals.override_text_color = Some(colors.text_primary);
    style.visuals.window_fill = colors.bg_primary;
    style.visuals.panel_fill = colors.bg_secondary;
    style.visuals.extreme_bg_color = colors.bg_primary;
    style.visuals.faint_bg_color = colors.bg_tertiary;
    style.visuals.window_stroke = Stroke::new(1.0, colors.border);
    style.visuals.hyperlink_color = COLOR_ACCENT;
    style.visuals.text_edit_bg_color = Some(colors.bg_primary);

    style.visuals.widgets.noninteractive = widget_visuals(
        colors.bg_secondary,
        colors.border,
        colors.text_secondary,
        0.0,
    );
    style.visuals.widgets.inactive =
        widget_visuals(colors.bg_tertiary, colors.border, colors.text_primary, 0.0);
    style.visuals.widgets.hovered =
        widget_visuals(COLOR_ACCENT_HOVER, COLOR_ACCENT_HOVER, Color32::WHITE, 0.5);
    style.visuals.widgets.active =
        widget_visuals(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);
    style.visuals.widgets.open = widget_visuals(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.0);

    style.spacing.window_margin = Margin::same(12);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.interact_size.y = 30.0;
    style.spacing.combo_width = 180.0;

    style.text_styles.insert(
        TextStyle::Heading,
        FontId::new(22.0, FontFamily::Proportional),
    );
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    style.text_styles.insert(
        TextStyle::Button,
        FontId::new(14.0, FontFamily::Proportional),
    );
    style.text_styles.insert(TextStyle::Monospace, code_font());
    style.text_styles.insert(
        TextStyle::Small,
        FontId::new(12.0, FontFamily::Proportional),
    );
    style
}

impl CodeDropApp {
    /// Register the light and dark styles once per context.
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }
        let base = (*ctx.style()).clone();
        for theme in [Theme::Light, Theme::Dark] {
            ctx.set_style_of(egui_theme(theme), build_style(&base, theme));
        }
        self.style_applied = true;
    }
}
