use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Deck color palette
pub mod palette {
    use egui::Color32;

    pub const BG: Color32 = Color32::from_rgb(0, 4, 8);
    pub const PANEL: Color32 = Color32::from_rgb(8, 14, 22);
    pub const CYAN: Color32 = Color32::from_rgb(34, 211, 238);
    pub const CYAN_DIM: Color32 = Color32::from_rgb(14, 90, 102);
    pub const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
    pub const TEXT: Color32 = Color32::from_rgb(232, 238, 244);
    pub const TEXT_FAINT: Color32 = Color32::from_rgb(120, 132, 146);
    pub const LINE: Color32 = Color32::from_rgb(36, 48, 62);
}

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Orbit Dark".to_string(),
            dark_mode: true,
        }
    }
}

/// Apply the deck theme (near-black stage with a cyan accent)
pub fn apply_theme(ctx: &Context, _theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    visuals.window_fill = palette::PANEL;
    visuals.panel_fill = palette::BG;
    visuals.extreme_bg_color = palette::BG;
    visuals.faint_bg_color = palette::PANEL;

    visuals.widgets.noninteractive.bg_fill = palette::PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette::LINE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_fill = palette::PANEL;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, palette::LINE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_fill = palette::CYAN_DIM;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette::CYAN);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = palette::CYAN_DIM;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, palette::CYAN);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = palette::CYAN.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, palette::CYAN);
    visuals.hyperlink_color = palette::CYAN;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(10.0, FontFamily::Monospace));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(30.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    style.visuals = visuals;
    ctx.set_style(style);
}
