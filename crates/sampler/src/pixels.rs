//! Decoded RGBA8 pixel buffer with resampling.
//!
//! `PixelGrid` is what the loading collaborator hands the sampler: a
//! row-major RGBA8 buffer plus its dimensions. Resampling to the sampling
//! grid resolution uses bilinear filtering, the CPU analogue of drawing a
//! scaled image onto a canvas.

use bouncy_core::{BounceError, Rgba};
use image::imageops::{self, FilterType};

/// A decoded image: row-major RGBA8 data plus dimensions.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Creates a grid from raw RGBA8 data.
    ///
    /// Returns `BounceError::InvalidDimensions` if either dimension is zero
    /// or `data.len()` is not exactly `width * height * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BounceError> {
        if width == 0 || height == 0 {
            return Err(BounceError::InvalidDimensions);
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(BounceError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(BounceError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a grid filled with a single color.
    pub fn filled(width: u32, height: u32, colour: Rgba) -> Result<Self, BounceError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BounceError::InvalidDimensions)?;
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
        }
        Self::from_data(width, height, data)
    }

    /// Grid width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(col, row)`, or `None` outside the grid.
    pub fn pixel(&self, col: u32, row: u32) -> Option<Rgba> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let idx = ((row as usize * self.width as usize) + col as usize) * 4;
        Some(Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ))
    }

    /// Overwrites the pixel at `(col, row)`. Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, col: u32, row: u32, colour: Rgba) {
        if col >= self.width || row >= self.height {
            return;
        }
        let idx = ((row as usize * self.width as usize) + col as usize) * 4;
        self.data[idx] = colour.r;
        self.data[idx + 1] = colour.g;
        self.data[idx + 2] = colour.b;
        self.data[idx + 3] = colour.a;
    }

    /// Returns a bilinearly resampled copy at the given resolution.
    ///
    /// Identity resizes return a plain clone. Returns
    /// `BounceError::InvalidDimensions` when a target dimension is zero.
    pub fn resized(&self, width: u32, height: u32) -> Result<PixelGrid, BounceError> {
        if width == 0 || height == 0 {
            return Err(BounceError::InvalidDimensions);
        }
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| BounceError::Decode("RGBA buffer size mismatch".into()))?;
        let scaled = imageops::resize(&img, width, height, FilterType::Triangle);
        PixelGrid::from_data(width, height, scaled.into_raw())
    }
}
