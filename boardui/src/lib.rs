//! boardui — drawing helpers shared by the chessboard window

pub mod dither;
pub mod repaint;
pub mod safety;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::{BoardColors, BoardTheme};
