//! Scripted pointer paths standing in for mousemove events.
//!
//! The simulation only sees a pointer coordinate per tick; in a terminal
//! there is no mouse to follow, so the driver scripts one of a few paths
//! across the canvas.

use clap::ValueEnum;

/// The pointer trajectory over the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PointerPath {
    /// Left-to-right across the vertical center.
    Sweep,
    /// A circle around the canvas center.
    Orbit,
    /// Fixed at the configured coordinates.
    Still,
}

/// The pointer position at `tick` of a `ticks`-long run.
///
/// `still` supplies the fixed coordinates for [`PointerPath::Still`].
pub fn pointer_position(
    path: PointerPath,
    tick: usize,
    ticks: usize,
    width: f64,
    height: f64,
    still: (f64, f64),
) -> (f64, f64) {
    // Progress through the run in [0, 1], complete on the last tick.
    let t = tick as f64 / ticks.saturating_sub(1).max(1) as f64;
    match path {
        PointerPath::Sweep => (t * width, height / 2.0),
        PointerPath::Orbit => {
            let angle = t * std::f64::consts::TAU;
            let radius = width.min(height) / 3.0;
            (
                width / 2.0 + radius * angle.cos(),
                height / 2.0 + radius * angle.sin(),
            )
        }
        PointerPath::Still => still,
    }
}
