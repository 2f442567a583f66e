//! A single mass-spring particle.
//!
//! Each point carries three positions (current, original anchor, target) and
//! a velocity. `update` runs one fixed timestep of a spring/damper integrator
//! independently on the x and y axes, then derives a depth (z) target from the
//! lateral distance to the anchor and runs the same integrator on z. The
//! visual radius is the base size scaled by the current depth, so points
//! "lift" while displaced and settle back as they relax home.

use crate::color::Rgba;
use crate::surface::Surface;
use glam::{DVec2, DVec3};

/// Proportionality constant converting target displacement into acceleration.
pub const SPRING_STRENGTH: f64 = 0.1;

/// One simulated particle representing a pixel region of the source image.
#[derive(Debug, Clone)]
pub struct Point {
    /// Fill color, taken from the sampled pixel.
    pub colour: Rgba,
    /// Current simulated position.
    pub cur_pos: DVec3,
    /// Resting anchor. Never mutated after construction.
    pub original_pos: DVec3,
    /// Position the spring pulls toward; x/y set by the collection each tick,
    /// z derived from the lateral displacement.
    pub target_pos: DVec3,
    /// Per-axis velocity.
    pub velocity: DVec3,
    /// Current visual radius, `size * cur_pos.z` clamped to at least 1.
    pub radius: f64,
    /// Base radius at depth 1.
    pub size: f64,
}

impl Point {
    /// Creates a point at rest at `(x, y, z)` with the given base size and fill.
    pub fn new(x: f64, y: f64, z: f64, size: f64, colour: Rgba) -> Self {
        let pos = DVec3::new(x, y, z);
        Self {
            colour,
            cur_pos: pos,
            original_pos: pos,
            target_pos: pos,
            velocity: DVec3::ZERO,
            radius: size,
            size,
        }
    }

    /// Advances the simulation by one fixed timestep.
    ///
    /// `friction` is the velocity damping coefficient in [0, 1); it is
    /// re-supplied on every call rather than stored.
    pub fn update(&mut self, friction: f64) {
        let damping = 1.0 - friction;

        let ax = (self.target_pos.x - self.cur_pos.x) * SPRING_STRENGTH;
        self.velocity.x = (self.velocity.x + ax) * damping;
        self.cur_pos.x += self.velocity.x;

        let ay = (self.target_pos.y - self.cur_pos.y) * SPRING_STRENGTH;
        self.velocity.y = (self.velocity.y + ay) * damping;
        self.cur_pos.y += self.velocity.y;

        // Depth target grows with lateral distance from home, so pushed
        // points swell and relaxing points shrink back.
        let d = self.cur_pos.truncate().distance(self.original_pos.truncate());
        self.target_pos.z = d / 100.0 + 1.0;

        let az = (self.target_pos.z - self.cur_pos.z) * SPRING_STRENGTH;
        self.velocity.z = (self.velocity.z + az) * damping;
        self.cur_pos.z += self.velocity.z;

        self.radius = (self.size * self.cur_pos.z).max(1.0);
    }

    /// Paints the point as a filled circle at its current position.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(
            DVec2::new(self.cur_pos.x, self.cur_pos.y),
            self.radius,
            self.colour,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::mock::{Op, RecordingSurface};

    fn point_at(x: f64, y: f64, z: f64, size: f64) -> Point {
        Point::new(x, y, z, size, Rgba::BLACK)
    }

    // -- Fixed point --

    #[test]
    fn at_rest_point_at_depth_one_is_a_fixed_point() {
        // cur == target == original and z already at its equilibrium of 1:
        // update must change nothing but recompute the radius from z.
        let mut p = point_at(10.0, 20.0, 1.0, 5.0);
        for _ in 0..10 {
            p.update(0.2);
        }
        assert_eq!(p.cur_pos, DVec3::new(10.0, 20.0, 1.0));
        assert_eq!(p.velocity, DVec3::ZERO);
        assert!((p.radius - 5.0).abs() < 1e-12);
    }

    #[test]
    fn at_rest_fixed_point_holds_for_any_friction_below_one() {
        for friction in [0.0, 0.1, 0.5, 0.9, 0.99] {
            let mut p = point_at(-3.0, 7.0, 1.0, 2.0);
            p.update(friction);
            assert_eq!(p.cur_pos, DVec3::new(-3.0, 7.0, 1.0), "friction {friction}");
            assert_eq!(p.velocity, DVec3::ZERO, "friction {friction}");
        }
    }

    // -- Convergence --

    #[test]
    fn point_converges_to_displaced_target() {
        let mut p = point_at(0.0, 0.0, 1.0, 3.0);
        p.target_pos.x = 50.0;
        p.target_pos.y = -25.0;
        for _ in 0..500 {
            p.update(0.2);
        }
        assert!(
            (p.cur_pos.x - 50.0).abs() < 1e-6,
            "x did not converge: {}",
            p.cur_pos.x
        );
        assert!(
            (p.cur_pos.y + 25.0).abs() < 1e-6,
            "y did not converge: {}",
            p.cur_pos.y
        );
    }

    #[test]
    fn convergence_holds_across_friction_range() {
        for friction in [0.05, 0.2, 0.5, 0.9] {
            let mut p = point_at(0.0, 0.0, 1.0, 3.0);
            p.target_pos.x = 10.0;
            for _ in 0..2000 {
                p.update(friction);
            }
            assert!(
                (p.cur_pos.x - 10.0).abs() < 1e-4,
                "friction {friction}: x = {}",
                p.cur_pos.x
            );
        }
    }

    // -- Depth coupling --

    #[test]
    fn depth_target_derives_from_lateral_displacement() {
        let mut p = point_at(0.0, 0.0, 1.0, 3.0);
        // Displace laterally by moving cur away from home.
        p.cur_pos.x = 30.0;
        p.cur_pos.y = 40.0;
        p.target_pos.x = 30.0;
        p.target_pos.y = 40.0;
        p.update(0.0);
        // Distance from home is 50, so the z target is 50/100 + 1 = 1.5.
        assert!((p.target_pos.z - 1.5).abs() < 1e-12);
    }

    #[test]
    fn displaced_point_swells_then_relaxes_back() {
        let mut p = point_at(0.0, 0.0, 1.0, 4.0);
        p.cur_pos.x = 100.0;
        p.target_pos.x = 100.0;
        p.update(0.2);
        assert!(p.radius > 4.0, "displaced point should swell: {}", p.radius);

        // Let it spring home and settle.
        p.target_pos.x = 0.0;
        p.target_pos.y = 0.0;
        for _ in 0..2000 {
            p.target_pos.x = p.original_pos.x;
            p.target_pos.y = p.original_pos.y;
            p.update(0.2);
        }
        assert!((p.radius - 4.0).abs() < 1e-6, "radius at rest: {}", p.radius);
    }

    // -- Radius clamp --

    #[test]
    fn radius_is_clamped_to_one_for_tiny_sizes() {
        let mut p = point_at(5.0, 5.0, 0.0, 0.5);
        p.update(0.2);
        assert!(p.radius >= 1.0, "radius {} below clamp", p.radius);
    }

    #[test]
    fn original_pos_never_changes() {
        let mut p = point_at(1.0, 2.0, 0.0, 3.0);
        p.target_pos = DVec3::new(40.0, -10.0, 0.0);
        for _ in 0..100 {
            p.update(0.3);
        }
        assert_eq!(p.original_pos, DVec3::new(1.0, 2.0, 0.0));
    }

    // -- Draw --

    #[test]
    fn draw_fills_one_circle_at_current_position() {
        let p = point_at(7.0, 9.0, 1.0, 2.5);
        let mut mock = RecordingSurface::default();
        p.draw(&mut mock);
        assert_eq!(mock.ops.len(), 1);
        match &mock.ops[0] {
            Op::FillCircle {
                center,
                radius,
                colour,
            } => {
                assert_eq!(*center, DVec2::new(7.0, 9.0));
                assert!((radius - 2.5).abs() < 1e-12);
                assert_eq!(*colour, Rgba::BLACK);
            }
            other => panic!("expected FillCircle, got {other:?}"),
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn radius_never_below_one_after_any_update(
                size in 0.0_f64..20.0,
                friction in 0.0_f64..1.0,
                tx in -500.0_f64..500.0,
                ty in -500.0_f64..500.0,
                ticks in 1_usize..200,
            ) {
                let mut p = Point::new(0.0, 0.0, 0.0, size, Rgba::BLACK);
                p.target_pos.x = tx;
                p.target_pos.y = ty;
                for _ in 0..ticks {
                    p.update(friction);
                    prop_assert!(p.radius >= 1.0, "radius {} < 1", p.radius);
                }
            }

            #[test]
            fn update_keeps_state_finite(
                friction in 0.0_f64..1.0,
                tx in -1e4_f64..1e4,
                ty in -1e4_f64..1e4,
            ) {
                let mut p = Point::new(0.0, 0.0, 0.0, 3.0, Rgba::BLACK);
                p.target_pos.x = tx;
                p.target_pos.y = ty;
                for _ in 0..100 {
                    p.update(friction);
                }
                prop_assert!(p.cur_pos.is_finite());
                prop_assert!(p.velocity.is_finite());
                prop_assert!(p.radius.is_finite());
            }
        }
    }
}
