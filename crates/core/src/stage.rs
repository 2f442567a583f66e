//! The driver-side tick loop state: many scenes, one pointer, one friction.
//!
//! A tick clears the viewport, draws every scene, then updates every scene —
//! draw before update, so the first frame shows the freshly sampled field
//! before any physics has run. Friction is held here as the driver's knob
//! and threaded into each update call explicitly.

use crate::scene::Scene;
use crate::surface::{Rect, Surface};

/// Velocity damping used when the driver does not configure one.
pub const DEFAULT_FRICTION: f64 = 0.2;

/// Aggregates scenes under a shared pointer and friction value.
pub struct Stage {
    scenes: Vec<Box<dyn Scene>>,
    friction: f64,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    /// Creates an empty stage with [`DEFAULT_FRICTION`].
    pub fn new() -> Self {
        Self {
            scenes: Vec::new(),
            friction: DEFAULT_FRICTION,
        }
    }

    /// Adds a scene to the tick loop.
    pub fn add_scene(&mut self, scene: Box<dyn Scene>) {
        self.scenes.push(scene);
    }

    /// Sets the damping coefficient used for subsequent ticks.
    pub fn set_friction(&mut self, friction: f64) {
        self.friction = friction;
    }

    /// Current damping coefficient.
    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Number of scenes on the stage.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Fans the pointer position out to every scene.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        for scene in &mut self.scenes {
            scene.set_pointer(x, y);
        }
    }

    /// Runs one tick: clear the viewport, draw all scenes, update all scenes.
    pub fn tick(&mut self, surface: &mut dyn Surface, viewport: Rect) {
        surface.clear(viewport);
        for scene in &self.scenes {
            scene.draw(surface);
        }
        let friction = self.friction;
        for scene in &mut self.scenes {
            scene.update(friction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::PointCollection;
    use crate::color::Rgba;
    use crate::point::Point;
    use crate::surface::mock::{Op, RecordingSurface};
    use glam::DVec2;

    fn single_point_collection() -> PointCollection {
        let mut col = PointCollection::new();
        col.replace_points(vec![Point::new(10.0, 10.0, 0.0, 5.0, Rgba::BLACK)]);
        col
    }

    #[test]
    fn new_stage_uses_default_friction() {
        let stage = Stage::new();
        assert!((stage.friction() - DEFAULT_FRICTION).abs() < f64::EPSILON);
        assert_eq!(stage.scene_count(), 0);
    }

    #[test]
    fn tick_clears_before_drawing() {
        let mut stage = Stage::new();
        stage.add_scene(Box::new(single_point_collection()));

        let mut mock = RecordingSurface::default();
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        stage.tick(&mut mock, viewport);

        assert!(matches!(mock.ops[0], Op::Clear(rect) if rect == viewport));
        assert_eq!(mock.circle_count(), 1);
    }

    #[test]
    fn first_tick_draws_the_pre_update_state() {
        // Draw happens before update: a freshly sampled point at z=0 still
        // renders with its construction radius on the first frame.
        let mut stage = Stage::new();
        stage.add_scene(Box::new(single_point_collection()));

        let mut mock = RecordingSurface::default();
        stage.tick(&mut mock, Rect::new(0.0, 0.0, 100.0, 100.0));

        match &mock.ops[1] {
            Op::FillCircle { center, radius, .. } => {
                assert_eq!(*center, DVec2::new(10.0, 10.0));
                assert!((radius - 5.0).abs() < 1e-12);
            }
            other => panic!("expected FillCircle, got {other:?}"),
        }
    }

    #[test]
    fn pointer_fans_out_to_every_scene() {
        let mut stage = Stage::new();
        stage.add_scene(Box::new(single_point_collection()));
        stage.add_scene(Box::new(single_point_collection()));
        stage.set_pointer(11.0, 10.0);

        // Both points sit within the repulsion radius of (11, 10), so both
        // targets become mirrors rather than anchors after one tick.
        let mut mock = RecordingSurface::default();
        stage.tick(&mut mock, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(mock.circle_count(), 2);
    }

    #[test]
    fn set_friction_changes_subsequent_updates() {
        let mut stage = Stage::new();
        stage.add_scene(Box::new(single_point_collection()));
        stage.set_friction(1.0);

        // friction 1 fully damps velocity, so the point cannot move.
        let mut mock = RecordingSurface::default();
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        stage.tick(&mut mock, viewport);
        stage.tick(&mut mock, viewport);

        let centers: Vec<DVec2> = mock
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(centers[0], centers[1]);
    }

    #[test]
    fn empty_stage_tick_only_clears() {
        let mut stage = Stage::new();
        let mut mock = RecordingSurface::default();
        stage.tick(&mut mock, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(mock.ops.len(), 1);
        assert!(matches!(mock.ops[0], Op::Clear(_)));
    }
}
