#![deny(unsafe_code)]
//! CPU rendering backend for the bouncy-balls engine.
//!
//! Provides [`Pixmap`], an RGBA8 framebuffer implementing the core
//! [`Surface`](bouncy_core::Surface) trait, and PNG snapshot writing.

pub mod pixmap;
pub mod snapshot;

pub use pixmap::Pixmap;
pub use snapshot::write_png;
