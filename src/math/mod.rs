pub mod text;
pub mod vector2;

pub use text::*;
pub use vector2::*;

/// Below this, [`Vector2::rotate`] snaps a component to 0 and [`Vector2::lerp`]
/// snaps onto its target.
///
/// Compared against widened `f32` values, so `1e-4f32` (9.9999997e-5) still snaps.
pub const SNAP_EPSILON: f64 = 1e-4;
