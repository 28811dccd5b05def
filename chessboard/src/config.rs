//! Static window and board configuration

use std::path::PathBuf;

/// Window and board geometry plus where the sprites live. There are no
/// flags or config files; `Default` is the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub title: &'static str,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Squares per side
    pub dimension: u32,
    pub max_fps: u32,
    /// Directory holding `wp.png`, `bK.png`, ...
    pub images_dir: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Chess",
            width: 512,
            height: 512,
            dimension: 8,
            max_fps: 15,
            images_dir: PathBuf::from("images"),
        }
    }
}

impl BoardConfig {
    /// Side of one square in pixels; the board fills the shorter window edge.
    pub fn square_size(&self) -> u32 {
        self.width.min(self.height).checked_div(self.dimension).unwrap_or(0)
    }

    /// Side of the whole board in pixels.
    pub fn board_size(&self) -> u32 {
        self.square_size() * self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = BoardConfig::default();
        assert_eq!(config.square_size(), 64);
        assert_eq!(config.board_size(), 512);
    }

    #[test]
    fn test_square_size_uses_short_edge() {
        let config = BoardConfig { width: 800, height: 600, ..Default::default() };
        assert_eq!(config.square_size(), 75);
        let config = BoardConfig { dimension: 0, ..Default::default() };
        assert_eq!(config.square_size(), 0);
    }
}
