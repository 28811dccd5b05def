//! Dither pattern drawing for translucent overlays.
//!
//! Instead of an opaque box we draw a checkerboard of single pixels, so the
//! board stays visible underneath the game-over message.

use egui::{Color32, Painter, Pos2, Rect};

/// Draw a checkerboard dither pattern over a rectangle.
/// `density` controls spacing: 1 = every other pixel, 2 = sparser, and so on.
///
/// Bounds are clamped once before iteration so the inner loop needs no
/// per-pixel bounds check.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let density = density.max(1) as i32;

    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let pixel = egui::Vec2::splat(1.0);
    for (y, offset) in dither_rows(y0, y1, density) {
        let mut x = x0 + offset;
        while x < x1 {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel),
                0.0,
                color,
            );
            x += x_step(density);
        }
    }
}

/// Dim everything under `rect` with a black dither.
pub fn draw_dither_overlay(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

fn x_step(density: i32) -> i32 {
    density * 2
}

/// Rows to paint and the horizontal offset of the first pixel in each.
fn dither_rows(y0: i32, y1: i32, density: i32) -> impl Iterator<Item = (i32, i32)> {
    (y0..y1).step_by(density as usize).map(move |y| {
        let band = (y - y0) / density;
        let offset = if band % 2 == 0 { 0 } else { density };
        (y, offset)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_alternate_offset() {
        let rows: Vec<_> = dither_rows(0, 4, 1).collect();
        assert_eq!(rows, vec![(0, 0), (1, 1), (2, 0), (3, 1)]);
    }

    #[test]
    fn test_sparse_rows() {
        let rows: Vec<_> = dither_rows(10, 16, 2).collect();
        assert_eq!(rows, vec![(10, 0), (12, 2), (14, 0)]);
        assert_eq!(x_step(2), 4);
    }
}
