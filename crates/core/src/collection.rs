//! An ordered, hole-tolerant set of points with pointer repulsion.
//!
//! The sequence may contain empty slots (`None`), which update and draw skip
//! silently. Each tick, every live point either gets pushed away from the
//! pointer (within the repulsion radius) or relaxes toward its anchor, then
//! runs its own physics step.

use crate::color::Rgba;
use crate::point::Point;
use crate::surface::Surface;
use glam::DVec3;

/// Distance from the pointer within which points are repelled instead of
/// relaxing home.
pub const REPULSION_RADIUS: f64 = 150.0;

/// The full set of points belonging to one rendered image.
#[derive(Debug, Default, Clone)]
pub struct PointCollection {
    /// Shared pointer position, written by the input driver and read by
    /// every point's update pass.
    pub mouse_pos: DVec3,
    points: Vec<Option<Point>>,
}

impl PointCollection {
    /// Creates an empty collection with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the shared pointer position.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.mouse_pos.x = x;
        self.mouse_pos.y = y;
    }

    /// Appends a fresh zero-size, transparent point and returns it for
    /// further configuration.
    pub fn new_point(&mut self, x: f64, y: f64, z: f64) -> &mut Point {
        self.points
            .push(Some(Point::new(x, y, z, 0.0, Rgba::TRANSPARENT)));
        // Just pushed Some, so the last slot is occupied.
        self.points
            .last_mut()
            .and_then(Option::as_mut)
            .unwrap_or_else(|| unreachable!("slot pushed above"))
    }

    /// Replaces the whole point sequence in one assignment.
    ///
    /// Callers between ticks observe either the old sequence or the new one,
    /// never a partially built state.
    pub fn replace_points(&mut self, points: Vec<Point>) {
        self.points = points.into_iter().map(Some).collect();
    }

    /// Removes the point at `index`, leaving a hole. Returns the point if the
    /// slot was occupied.
    pub fn take_point(&mut self, index: usize) -> Option<Point> {
        self.points.get_mut(index).and_then(Option::take)
    }

    /// Number of live (non-hole) points.
    pub fn len(&self) -> usize {
        self.points.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no live points remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the live points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter_map(Option::as_ref)
    }

    /// The raw slot sequence, holes included.
    pub fn slots(&self) -> &[Option<Point>] {
        &self.points
    }

    /// Advances every live point by one timestep.
    ///
    /// Within [`REPULSION_RADIUS`] of the pointer the target becomes the
    /// pointer's mirror image across the point (`cur - (mouse - cur)`) —
    /// the same expression on both sides of the pointer, preserving the
    /// source behavior. Outside the radius the target resets to the anchor.
    pub fn update(&mut self, friction: f64) {
        let mouse = self.mouse_pos;
        for point in self.points.iter_mut().filter_map(Option::as_mut) {
            let dx = mouse.x - point.cur_pos.x;
            let dy = mouse.y - point.cur_pos.y;
            let d = (dx * dx + dy * dy).sqrt();

            if d < REPULSION_RADIUS {
                point.target_pos.x = point.cur_pos.x - dx;
                point.target_pos.y = point.cur_pos.y - dy;
            } else {
                point.target_pos.x = point.original_pos.x;
                point.target_pos.y = point.original_pos.y;
            }

            point.update(friction);
        }
    }

    /// Draws every live point in order.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for point in self.iter() {
            point.draw(surface);
        }
    }
}
