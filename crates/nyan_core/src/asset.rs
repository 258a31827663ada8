//! Sprite image loading
//!
//! Images are decoded on the CPU into tightly packed RGBA8 rows, top row
//! first, ready to be copied into a GPU texture.

use std::io;
use std::path::Path;

use crate::AssetError;

/// Decoded RGBA8 pixels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Bytes per pixel row
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

/// Read and decode an image file
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData, AssetError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound(path.display().to_string()),
        _ => e.into(),
    })?;

    let image = decode_image(&bytes)?;
    log::debug!("Loaded {} ({}x{})", path.display(), image.width, image.height);
    Ok(image)
}

/// Decode an in-memory image (format is guessed from the header)
pub fn decode_image(bytes: &[u8]) -> Result<ImageData, AssetError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImageData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
