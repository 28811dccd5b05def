//! Piece sprites
//!
//! Sprites are read from `<images_dir>/<key>.png` once, scaled to one
//! square and uploaded as textures. A sprite that cannot be loaded is not
//! an error for the game: the board draws a placeholder tile instead.

use crate::error::{AssetError, Result};
use crate::oracle::Piece;
use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use image::imageops::FilterType;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Default)]
pub struct PieceSprites {
    textures: HashMap<String, TextureHandle>,
}

impl PieceSprites {
    /// Load all twelve sprites, skipping (and logging) the ones that fail.
    pub fn load(ctx: &Context, dir: &Path, square_size: u32) -> Self {
        let mut textures = HashMap::new();
        for piece in Piece::all() {
            let key = piece.image_key();
            let path = dir.join(format!("{}.png", key));
            match read_sprite(&path, square_size) {
                Ok(image) => {
                    let name = format!("piece_{}", key);
                    let tex = ctx.load_texture(name, image, TextureOptions::LINEAR);
                    textures.insert(key, tex);
                }
                Err(e) => info!(%key, error = %e, "could not load sprite, using placeholder"),
            }
        }
        debug!(loaded = textures.len(), "piece sprites ready");
        Self { textures }
    }

    pub fn get(&self, piece: &Piece) -> Option<&TextureHandle> {
        self.textures.get(&piece.image_key())
    }
}

fn read_sprite(path: &Path, square_size: u32) -> Result<ColorImage> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_sprite(&bytes, square_size)
}

/// Decode a PNG and scale it to a `square_size` square.
fn decode_sprite(bytes: &[u8], square_size: u32) -> Result<ColorImage> {
    let img = image::load_from_memory(bytes)?;
    let side = square_size.max(1);
    let rgba = img.resize_exact(side, side, FilterType::Triangle).to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw()))
}
