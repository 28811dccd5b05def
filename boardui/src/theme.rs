//! Board theme
//!
//! Flat squares, thin outlines, no rounding. Highlights are outlines drawn
//! on top of the square so the piece underneath stays readable.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Palette shared by every surface of the board window.
pub struct BoardColors;

impl BoardColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Dark squares
    pub const GRAY: Color32 = Color32::from_rgb(128, 128, 128);
    /// Outline of the selected square
    pub const YELLOW: Color32 = Color32::from_rgb(204, 204, 0);
    /// Outline of a legal destination
    pub const CYAN: Color32 = Color32::from_rgb(50, 255, 255);
    /// Fill of a placeholder piece tile
    pub const PLACEHOLDER: Color32 = Color32::from_rgb(200, 200, 200);

    /// Square fill for the given board coordinates. The top-left square is light.
    pub fn square(row: usize, col: usize) -> Color32 {
        if (row + col) % 2 == 0 {
            Self::WHITE
        } else {
            Self::GRAY
        }
    }
}

/// Theme configuration for the board window
pub struct BoardTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub item_spacing: f32,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 32.0,
            font_size_small: 16.0,
            item_spacing: 4.0,
        }
    }
}

impl BoardTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = BoardColors::WHITE;
        visuals.panel_fill = BoardColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, BoardColors::BLACK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::new(1.0, BoardColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, BoardColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Heading font for overlay messages
    pub fn heading_font(&self) -> FontId {
        FontId::proportional(self.font_size_heading)
    }

    /// Small font for overlay hints
    pub fn small_font(&self) -> FontId {
        FontId::proportional(self.font_size_small)
    }
}
