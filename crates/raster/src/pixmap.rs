//! RGBA8 framebuffer implementing the core `Surface` trait.
//!
//! Circles are rasterized with pixel-center coverage and source-over alpha
//! blending; clears fill the clipped rectangle with the background color.

use bouncy_core::{BounceError, DVec2, Rect, Rgba, Surface};

/// A CPU framebuffer: `width * height` RGBA8 pixels over a background color.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    background: Rgba,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a pixmap filled with the background color.
    ///
    /// Returns `BounceError::InvalidDimensions` if either dimension is zero
    /// or the buffer size overflows.
    pub fn new(width: u32, height: u32, background: Rgba) -> Result<Self, BounceError> {
        if width == 0 || height == 0 {
            return Err(BounceError::InvalidDimensions);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BounceError::InvalidDimensions)?;
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&[background.r, background.g, background.b, background.a]);
        }
        Ok(Self {
            width,
            height,
            background,
            data,
        })
    }

    /// Framebuffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Framebuffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(x, y)`, or `None` outside the framebuffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        Some(Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ))
    }

    /// The viewport rectangle covering the whole framebuffer.
    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    fn write_pixel(&mut self, x: u32, y: u32, colour: Rgba) {
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        self.data[idx] = colour.r;
        self.data[idx + 1] = colour.g;
        self.data[idx + 2] = colour.b;
        self.data[idx + 3] = colour.a;
    }

    fn blend_pixel(&mut self, x: u32, y: u32, colour: Rgba) {
        if colour.a == 255 {
            self.write_pixel(x, y, colour);
            return;
        }
        if colour.a == 0 {
            return;
        }
        let idx = ((y as usize * self.width as usize) + x as usize) * 4;
        let sa = colour.a as f64 / 255.0;
        let blend = |src: u8, dst: u8| -> u8 {
            (src as f64 * sa + dst as f64 * (1.0 - sa)).round() as u8
        };
        self.data[idx] = blend(colour.r, self.data[idx]);
        self.data[idx + 1] = blend(colour.g, self.data[idx + 1]);
        self.data[idx + 2] = blend(colour.b, self.data[idx + 2]);
        let da = self.data[idx + 3] as f64 / 255.0;
        self.data[idx + 3] = ((sa + da * (1.0 - sa)) * 255.0).round() as u8;
    }

    /// Clips `[lo, hi)` in surface coordinates to `[0, max)` pixel indices.
    fn clip_span(lo: f64, hi: f64, max: u32) -> Option<(u32, u32)> {
        let start = lo.floor().max(0.0) as u32;
        let end = hi.ceil().min(max as f64) as u32;
        if hi <= 0.0 || start >= end {
            return None;
        }
        Some((start, end))
    }
}

impl Surface for Pixmap {
    fn clear(&mut self, rect: Rect) {
        let background = self.background;
        let Some((x0, x1)) = Self::clip_span(rect.x, rect.x + rect.width, self.width) else {
            return;
        };
        let Some((y0, y1)) = Self::clip_span(rect.y, rect.y + rect.height, self.height) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.write_pixel(x, y, background);
            }
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, colour: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let Some((x0, x1)) = Self::clip_span(center.x - radius, center.x + radius, self.width)
        else {
            return;
        };
        let Some((y0, y1)) = Self::clip_span(center.y - radius, center.y + radius, self.height)
        else {
            return;
        };
        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                // Pixel-center coverage.
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, colour);
                }
            }
        }
    }
}
