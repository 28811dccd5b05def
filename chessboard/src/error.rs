use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, AssetError>;
