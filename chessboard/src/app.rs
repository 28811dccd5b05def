//! Chessboard window

use crate::assets::PieceSprites;
use crate::config::BoardConfig;
use crate::coords::Cell;
use crate::oracle::{Piece, RulesOracle};
use crate::session::Session;
use boardui::safety::catch_or;
use boardui::theme::{BoardColors, BoardTheme};
use boardui::widgets::{message_overlay, status_bar, toolbar_separator};
use boardui::RepaintController;
use egui::{Align2, Context, FontId, Painter, Rect, Sense, Stroke, Vec2};
use tracing::info;

/// Height taken by the toolbar and status bar around the board.
pub const CHROME_HEIGHT: f32 = 56.0;

/// Moves shown in the status bar.
const RECENT_MOVES: usize = 6;

pub struct ChessBoardApp {
    session: Session,
    config: BoardConfig,
    theme: BoardTheme,
    /// Loaded on the first frame, once a context is available.
    sprites: Option<PieceSprites>,
    repaint: RepaintController,
}

impl ChessBoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        Self {
            session: Session::default(),
            repaint: RepaintController::with_fps(config.max_fps),
            config,
            theme: BoardTheme::default(),
            sprites: None,
        }
    }

    fn ensure_sprites(&mut self, ctx: &Context) {
        if self.sprites.is_none() {
            let dir = &self.config.images_dir;
            self.sprites = Some(PieceSprites::load(ctx, dir, self.config.square_size()));
        }
    }

    fn restart(&mut self) {
        self.session.reset();
        self.repaint.mark_needs_repaint();
    }

    fn status_text(&self) -> String {
        let oracle = self.session.oracle();
        let status = self.session.status();
        let state = if status.is_over() {
            status.message().to_string()
        } else if oracle.is_check() {
            format!("{} is in check!", oracle.side_to_move().name())
        } else {
            format!("{} to move", oracle.side_to_move().name())
        };
        format!("{}  |  Move {}", state, oracle.move_history().len())
    }

    fn recent_moves(&self) -> String {
        let history = self.session.oracle().move_history();
        let start = history.len().saturating_sub(RECENT_MOVES);
        history
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, san)| {
                if i % 2 == 0 {
                    format!("{}. {}", i / 2 + 1, san)
                } else {
                    san.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Draw the board and return the click position relative to its
    /// top-left corner, if the board was clicked this frame.
    fn render_board(&self, ui: &mut egui::Ui) -> Option<(i32, i32)> {
        let sq_size = self.config.square_size() as f32;
        let board_rect = Rect::from_min_size(
            ui.available_rect_before_wrap().min,
            Vec2::splat(self.config.board_size() as f32),
        );

        let response = ui.allocate_rect(board_rect, Sense::click());
        let painter = ui.painter_at(board_rect);
        let square_rect = |cell: Cell| {
            Rect::from_min_size(
                egui::pos2(
                    board_rect.min.x + f32::from(cell.col()) * sq_size,
                    board_rect.min.y + f32::from(cell.row()) * sq_size,
                ),
                Vec2::splat(sq_size),
            )
        };

        for cell in Cell::all() {
            let color = BoardColors::square(usize::from(cell.row()), usize::from(cell.col()));
            painter.rect_filled(square_rect(cell), 0.0, color);
        }

        // Selected square and its legal destinations
        if let Some(selected) = self.session.selection().pending() {
            painter.rect_stroke(square_rect(selected), 0.0, Stroke::new(2.0, BoardColors::YELLOW));
            for cell in self.session.highlighted_destinations() {
                painter.rect_stroke(square_rect(cell), 0.0, Stroke::new(2.0, BoardColors::CYAN));
            }
        }

        for cell in Cell::all() {
            if let Some(piece) = self.session.oracle().piece_at(cell) {
                self.draw_piece(&painter, &piece, square_rect(cell));
            }
        }

        message_overlay(
            &painter,
            board_rect,
            &self.theme,
            self.session.status().message(),
            "Press 'R' to restart",
        );

        if !response.clicked() {
            return None;
        }
        response.interact_pointer_pos().map(|pos| {
            let rel = pos - board_rect.min;
            (rel.x.floor() as i32, rel.y.floor() as i32)
        })
    }

    fn draw_piece(&self, painter: &Painter, piece: &Piece, rect: Rect) {
        if let Some(tex) = self.sprites.as_ref().and_then(|s| s.get(piece)) {
            painter.image(
                tex.id(),
                rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            // Placeholder tile with the piece glyph
            let tile = rect.shrink(rect.width() * 0.1);
            painter.rect_filled(tile, 0.0, BoardColors::PLACEHOLDER);
            painter.rect_stroke(tile, 0.0, Stroke::new(2.0, BoardColors::BLACK));
            painter.text(
                tile.center(),
                Align2::CENTER_CENTER,
                piece.symbol(),
                FontId::proportional(rect.height() * 0.6),
                BoardColors::BLACK,
            );
        }
    }
}

impl eframe::App for ChessBoardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame();
        self.ensure_sprites(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.restart();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("restart").clicked() {
                    self.restart();
                }
                toolbar_separator(ui);
                ui.label(self.recent_moves());
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &self.status_text());
        });

        let mut click = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BoardColors::WHITE))
            .show(ctx, |ui| {
                click = catch_or(None, || self.render_board(ui));
            });

        if let Some((x, y)) = click {
            if self.session.click_at(x, y, &self.config).changed() {
                self.repaint.mark_needs_repaint();
            }
        }

        self.repaint.end_frame(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(moves = self.session.oracle().move_history().len(), "window closed");
    }
}
