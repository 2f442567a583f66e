#![deny(unsafe_code)]
//! Core types for the bouncy-balls particle engine.
//!
//! Provides the `Point` mass-spring particle, the hole-tolerant
//! `PointCollection` with pointer repulsion, the `Scene` and `Surface` traits
//! that decouple simulation from rendering, the `Stage` tick driver,
//! the `Rgba` color type, `Xorshift64` PRNG, and JSON patch helpers.

pub mod collection;
pub mod color;
pub mod error;
pub mod params;
pub mod point;
pub mod prng;
pub mod scene;
pub mod stage;
pub mod surface;

pub use collection::PointCollection;
pub use color::Rgba;
pub use error::BounceError;
pub use point::Point;
pub use prng::Xorshift64;
pub use scene::Scene;
pub use stage::Stage;
pub use surface::{Rect, Surface};

// Positions, velocities, and the pointer all use glam's f64 vectors.
pub use glam::{DVec2, DVec3};
