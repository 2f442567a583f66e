//! Sampling configuration: point size, grid spacing, jitter, and placement.

use bouncy_core::params::patch_f64;
use bouncy_core::BounceError;
use serde_json::Value;

/// Default target point radius.
const DEFAULT_BALL_SIZE: f64 = 3.0;
/// Default pixel-to-grid-cell ratio in px.
const DEFAULT_SPACING: f64 = 14.0;
/// Default size jitter percentage.
const DEFAULT_VARIANCE: f64 = 0.0;
/// Default longest-edge target in px after scaling.
const DEFAULT_MAX_LENGTH: f64 = 200.0;

/// Configuration for one point-field generation.
///
/// Immutable per generation: patching options triggers a full regeneration
/// rather than mutating live points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerOptions {
    /// Target radius of each point.
    pub ball_size: f64,
    /// Spacing between grid cells in px.
    pub spacing: f64,
    /// Percentage jitter (0-100) on `ball_size`, re-rolled per point.
    pub variance: f64,
    /// Length of the longest edge of the scaled field, in px.
    pub max_length: f64,
    /// Canvas-space x of the field center.
    pub x_origin: f64,
    /// Canvas-space y of the field center.
    pub y_origin: f64,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            ball_size: DEFAULT_BALL_SIZE,
            spacing: DEFAULT_SPACING,
            variance: DEFAULT_VARIANCE,
            max_length: DEFAULT_MAX_LENGTH,
            x_origin: 0.0,
            y_origin: 0.0,
        }
    }
}

impl SamplerOptions {
    /// Builds options from a JSON object, falling back to defaults for
    /// missing or falsy fields.
    pub fn from_json(params: &Value) -> Self {
        Self::default().merged(params)
    }

    /// Returns a copy with `patch` merged over `self`.
    ///
    /// Fields absent, zero, or non-numeric in the patch retain their prior
    /// value (the falsy-retain rule of [`patch_f64`]).
    pub fn merged(&self, patch: &Value) -> Self {
        Self {
            ball_size: patch_f64(patch, "ball_size", self.ball_size),
            spacing: patch_f64(patch, "spacing", self.spacing),
            variance: patch_f64(patch, "variance", self.variance),
            max_length: patch_f64(patch, "max_length", self.max_length),
            x_origin: patch_f64(patch, "x_origin", self.x_origin),
            y_origin: patch_f64(patch, "y_origin", self.y_origin),
        }
    }

    /// Validates the configuration at the boundary.
    ///
    /// Rejects non-finite fields, non-positive spacing (which would divide
    /// by zero in grid sizing), negative sizes, and variance outside
    /// [0, 100].
    pub fn validate(&self) -> Result<(), BounceError> {
        let fields = [
            ("ball_size", self.ball_size),
            ("spacing", self.spacing),
            ("variance", self.variance),
            ("max_length", self.max_length),
            ("x_origin", self.x_origin),
            ("y_origin", self.y_origin),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(BounceError::InvalidOptions(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.spacing <= 0.0 {
            return Err(BounceError::InvalidOptions(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        if self.ball_size < 0.0 {
            return Err(BounceError::InvalidOptions(format!(
                "ball_size must not be negative, got {}",
                self.ball_size
            )));
        }
        if self.max_length < 0.0 {
            return Err(BounceError::InvalidOptions(format!(
                "max_length must not be negative, got {}",
                self.max_length
            )));
        }
        if !(0.0..=100.0).contains(&self.variance) {
            return Err(BounceError::InvalidOptions(format!(
                "variance must be in [0, 100], got {}",
                self.variance
            )));
        }
        Ok(())
    }
}
