//! The image-loading collaborator: file path in, decoded pixels out.
//!
//! Decoding happens once, before the simulation loop ever sees the image;
//! the sampler only consumes the resulting [`PixelGrid`].

use crate::pixels::PixelGrid;
use bouncy_core::BounceError;
use std::path::Path;

/// Decodes the image at `path` into a [`PixelGrid`].
///
/// Returns `BounceError::Io` when the file cannot be read and
/// `BounceError::Decode` when the bytes are not a decodable image.
pub fn load_image(path: &Path) -> Result<PixelGrid, BounceError> {
    let img = image::open(path)
        .map_err(|e| match e {
            image::ImageError::IoError(io) => BounceError::Io(io.to_string()),
            other => BounceError::Decode(other.to_string()),
        })?
        .to_rgba8();
    let (width, height) = img.dimensions();
    PixelGrid::from_data(width, height, img.into_raw())
}
