//! PNG snapshots of a rendered frame.

use crate::pixmap::Pixmap;
use bouncy_core::BounceError;
use std::path::Path;

/// Writes a pixmap as a PNG image.
///
/// Returns `BounceError::Io` on encode or write failure.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), BounceError> {
    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
        .ok_or_else(|| BounceError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| BounceError::Io(e.to_string()))
}
