//! Custom widgets for the board window

use crate::dither;
use crate::theme::{BoardColors, BoardTheme};
use egui::{Align2, Painter, Rect, Ui};

/// Status bar: white bg, 1px black top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(BoardColors::WHITE)
        .stroke(egui::Stroke::new(1.0, BoardColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// Toolbar separator (vertical 1px black line)
pub fn toolbar_separator(ui: &mut Ui) {
    let height = ui.spacing().interact_size.y;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, height), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().vline(
            rect.center().x,
            rect.y_range(),
            egui::Stroke::new(1.0, BoardColors::BLACK),
        );
    }
}

/// Dim `rect` and print a centered message with a smaller hint line below it.
/// Nothing is drawn when `message` is empty.
pub fn message_overlay(
    painter: &Painter,
    rect: Rect,
    theme: &BoardTheme,
    message: &str,
    hint: &str,
) {
    if message.is_empty() {
        return;
    }

    dither::draw_dither_overlay(painter, rect);

    let center = rect.center();
    let text = painter.layout_no_wrap(message.to_owned(), theme.heading_font(), BoardColors::WHITE);
    let backdrop = Rect::from_center_size(center, text.size() + egui::vec2(16.0, 8.0));
    painter.rect_filled(backdrop, 0.0, BoardColors::BLACK);
    painter.text(center, Align2::CENTER_CENTER, message, theme.heading_font(), BoardColors::WHITE);

    let hint_pos = center + egui::vec2(0.0, 40.0);
    let hint_text = painter.layout_no_wrap(hint.to_owned(), theme.small_font(), BoardColors::WHITE);
    painter.rect_filled(
        Rect::from_center_size(hint_pos, hint_text.size() + egui::vec2(8.0, 4.0)),
        0.0,
        BoardColors::BLACK,
    );
    painter.text(hint_pos, Align2::CENTER_CENTER, hint, theme.small_font(), BoardColors::WHITE);
}
