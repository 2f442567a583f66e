//! The abstract 2D rendering surface that points draw themselves onto.
//!
//! The trait is object-safe so the simulation can drive any backend through
//! `&mut dyn Surface` — the CPU pixmap in the raster crate, or a recording
//! mock in tests. Only the two operations the engine actually issues are
//! part of the contract: rectangular clear and filled circle.

use crate::color::Rgba;
use glam::DVec2;

/// An axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A 2D rendering surface.
///
/// This trait is **object-safe**: the tick driver holds `&mut dyn Surface`
/// and the same simulation state can be replayed against any backend.
pub trait Surface {
    /// Clears the given rectangle to the surface's background.
    fn clear(&mut self, rect: Rect);

    /// Fills a circle of the given radius and color, no stroke.
    fn fill_circle(&mut self, center: DVec2, radius: f64, colour: Rgba);
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Records every draw call for assertion in tests.
    #[derive(Debug, PartialEq)]
    pub enum Op {
        Clear(Rect),
        FillCircle {
            center: DVec2,
            radius: f64,
            colour: Rgba,
        },
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, rect: Rect) {
            self.ops.push(Op::Clear(rect));
        }

        fn fill_circle(&mut self, center: DVec2, radius: f64, colour: Rgba) {
            self.ops.push(Op::FillCircle {
                center,
                radius,
                colour,
            });
        }
    }

    impl RecordingSurface {
        /// Number of recorded fill_circle calls.
        pub fn circle_count(&self) -> usize {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::FillCircle { .. }))
                .count()
        }
    }
}
