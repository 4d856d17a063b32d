//! Calculator theme
//!
//! Light blue display panel, round sky-blue keys, black bold labels.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const GRAY: Color32 = Color32::from_rgb(128, 128, 128);
    pub const LIGHT_BLUE: Color32 = Color32::from_rgb(173, 216, 230);
    pub const LIGHT_SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 250);
}

/// Sizes used by the calculator window
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_primary: f32,
    pub font_size_secondary: f32,
    pub font_size_key: f32,
    pub key_size: f32,
    pub key_spacing: f32,
    pub window_padding: f32,
    /// Bottom corner radius of the display panel
    pub display_rounding: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_primary: 50.0,
            font_size_secondary: 40.0,
            font_size_key: 32.0,
            key_size: 80.0,
            key_spacing: 10.0,
            window_padding: 20.0,
            display_rounding: 25.0,
        }
    }
}

impl CalcTheme {
    /// Apply the calculator style to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_body + 8.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = CalcColors::WHITE;
        visuals.panel_fill = CalcColors::WHITE;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.key_spacing, self.key_spacing);

        ctx.set_style(style);
    }

    /// Display panel: light blue, rounded bottom corners
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::LIGHT_BLUE)
            .rounding(Rounding {
                nw: 0.0,
                ne: 0.0,
                sw: self.display_rounding,
                se: self.display_rounding,
            })
            .inner_margin(egui::Margin::same(10.0))
    }

    /// A round keypad button covering `span` grid columns.
    pub fn key_button(&self, label: &str, span: usize) -> egui::Button<'static> {
        let span = span.max(1) as f32;
        let width = self.key_size * span + self.key_spacing * (span - 1.0);
        egui::Button::new(
            egui::RichText::new(label.to_owned())
                .size(self.font_size_key)
                .strong()
                .color(CalcColors::BLACK),
        )
        .fill(CalcColors::LIGHT_SKY_BLUE)
        .rounding(self.key_size / 2.0)
        .min_size(egui::vec2(width, self.key_size))
    }
}
