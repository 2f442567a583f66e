#![deny(unsafe_code)]
//! Image-to-point-field sampling for the bouncy-balls engine.
//!
//! The sampler turns a decoded image into a grid of spring-physics points:
//! it scales the image down to one pixel per grid cell, skips near-white
//! cells, and places one colored point per remaining cell, centered on a
//! configurable origin. The generated [`PointCollection`] is owned by the
//! sampler, which exposes it to the tick driver through the [`Scene`] trait
//! (composition in place of the source's prototype inheritance).

pub mod loader;
pub mod options;
pub mod pixels;

pub use loader::load_image;
pub use options::SamplerOptions;
pub use pixels::PixelGrid;

use bouncy_core::{BounceError, Point, PointCollection, Scene, Surface, Xorshift64};
use serde_json::Value;

/// Channel threshold above which a cell counts as background. A cell is kept
/// when any of r, g, b falls below this value.
const NEAR_WHITE_THRESHOLD: u8 = 250;

/// Computes the scaled grid resolution for a source image.
///
/// The longest source edge gets `floor(max_length / spacing)` cells; the
/// other edge scales proportionally; both are floored. Either dimension may
/// come out zero, which callers treat as "no points", not an error.
pub fn grid_dimensions(img_width: u32, img_height: u32, options: &SamplerOptions) -> (u32, u32) {
    let cells = (options.max_length / options.spacing).floor();
    let longest = u32::max(img_width, img_height) as f64;
    let mult = cells / longest;
    (
        (img_width as f64 * mult).floor() as u32,
        (img_height as f64 * mult).floor() as u32,
    )
}

/// Builds the point field for an already-resampled cell grid.
///
/// Scans row-major, keeping cells that are not near-white, and maps cell
/// `(col, row)` to canvas space so the whole field is centered on the
/// configured origin. Each point's size is `ball_size` plus a per-point
/// jitter of up to `variance` percent, drawn from `rng`.
pub fn sample_points(
    cells: &PixelGrid,
    options: &SamplerOptions,
    rng: &mut Xorshift64,
) -> Vec<Point> {
    let spacing = options.spacing;
    let left_margin = options.x_origin - spacing * cells.width() as f64 / 2.0;
    let top_margin = options.y_origin - spacing * cells.height() as f64 / 2.0;

    let mut points = Vec::new();
    for row in 0..cells.height() {
        for col in 0..cells.width() {
            let Some(colour) = cells.pixel(col, row) else {
                continue;
            };
            // Near-white cells are background, not subject.
            if colour.r >= NEAR_WHITE_THRESHOLD
                && colour.g >= NEAR_WHITE_THRESHOLD
                && colour.b >= NEAR_WHITE_THRESHOLD
            {
                continue;
            }
            let x = left_margin + (col as f64 + 0.5) * spacing;
            let y = top_margin + (row as f64 + 0.5) * spacing;
            let jitter = rng.next_f64() * options.variance / 100.0 * options.ball_size;
            let size = options.ball_size + jitter;
            points.push(Point::new(x, y, 0.0, size, colour));
        }
    }
    points
}

/// Generates and refreshes a [`PointCollection`] from a decoded image.
///
/// Holds the sampling configuration, the cached decoded image, and the
/// generated collection. The ready transition is [`set_image`]: generation
/// runs once, synchronously, when pixels arrive, and again on every option
/// patch — always against the cached pixels, never re-decoding.
///
/// [`set_image`]: ImageSampler::set_image
pub struct ImageSampler {
    options: SamplerOptions,
    seed: u64,
    source: Option<PixelGrid>,
    collection: PointCollection,
}

impl ImageSampler {
    /// Creates a sampler with no image attached yet.
    ///
    /// Returns `BounceError::InvalidOptions` if the configuration fails
    /// boundary validation.
    pub fn new(options: SamplerOptions, seed: u64) -> Result<Self, BounceError> {
        options.validate()?;
        Ok(Self {
            options,
            seed,
            source: None,
            collection: PointCollection::new(),
        })
    }

    /// Current sampling configuration.
    pub fn options(&self) -> &SamplerOptions {
        &self.options
    }

    /// The generated point field.
    pub fn collection(&self) -> &PointCollection {
        &self.collection
    }

    /// True once an image has been attached.
    pub fn is_ready(&self) -> bool {
        self.source.is_some()
    }

    /// Attaches decoded pixels and generates the point field from them.
    ///
    /// The collection's point sequence is replaced wholesale; between-tick
    /// readers see either the previous field or the new one.
    pub fn set_image(&mut self, pixels: PixelGrid) -> Result<(), BounceError> {
        self.source = Some(pixels);
        self.regenerate()
    }

    /// Merges `patch` over the current options and regenerates.
    ///
    /// Fields absent or zero in the patch retain their prior values. The
    /// merged configuration is validated before anything changes; on error
    /// the previous options and point field stay in place. Regeneration uses
    /// the cached pixels; before any image is attached only the options
    /// change.
    pub fn update_options(&mut self, patch: &Value) -> Result<(), BounceError> {
        let merged = self.options.merged(patch);
        merged.validate()?;
        self.options = merged;
        self.regenerate()
    }

    fn regenerate(&mut self) -> Result<(), BounceError> {
        let Some(source) = &self.source else {
            return Ok(());
        };
        let (width, height) = grid_dimensions(source.width(), source.height(), &self.options);
        if width == 0 || height == 0 {
            self.collection.replace_points(Vec::new());
            return Ok(());
        }
        let cells = source.resized(width, height)?;
        // A fresh rng per generation keeps (seed, image, options) fully
        // deterministic regardless of how many regenerations came before.
        let mut rng = Xorshift64::new(self.seed);
        let points = sample_points(&cells, &self.options, &mut rng);
        self.collection.replace_points(points);
        Ok(())
    }
}

impl Scene for ImageSampler {
    fn set_pointer(&mut self, x: f64, y: f64) {
        self.collection.set_pointer(x, y);
    }

    fn update(&mut self, friction: f64) {
        self.collection.update(friction);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.collection.draw(surface);
    }
}
