//! The seam between the tick driver and anything that animates.
//!
//! `Scene` is the {update, draw} surface of the spec's Design Notes, plus
//! pointer fan-out: the driver pushes the shared pointer position into every
//! scene before each tick. Both `PointCollection` and the image sampler
//! implement it, so the driver never cares where a point field came from.

use crate::collection::PointCollection;
use crate::surface::Surface;

/// Anything the stage can tick: receives the pointer, advances one timestep,
/// and draws itself.
///
/// This trait is **object-safe**: the stage holds `Box<dyn Scene>`.
pub trait Scene {
    /// Updates the scene's view of the pointer position.
    fn set_pointer(&mut self, x: f64, y: f64);

    /// Advances the scene by one timestep with the given damping coefficient.
    fn update(&mut self, friction: f64);

    /// Draws the scene's current state.
    fn draw(&self, surface: &mut dyn Surface);
}

impl Scene for PointCollection {
    fn set_pointer(&mut self, x: f64, y: f64) {
        PointCollection::set_pointer(self, x, y);
    }

    fn update(&mut self, friction: f64) {
        PointCollection::update(self, friction);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        PointCollection::draw(self, surface);
    }
}
