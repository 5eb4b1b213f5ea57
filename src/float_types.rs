// Our Real scalar type for continuous coordinates:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Stored cell densities. The binary voxel format persists 32-bit floats,
/// so grids hold `f32` regardless of which `Real` is active.
pub type Density = f32;

/// A cell that is entirely outside the shape.
pub const EMPTY: Density = 0.0;

/// A cell that is entirely inside the shape.
pub const FULL: Density = 1.0;

/// Returns `true` if `value` is a legal optical density, i.e. lies in `[0, 1]`.
/// NaN is never legal.
#[inline]
pub fn is_density(value: Density) -> bool {
    (EMPTY..=FULL).contains(&value)
}
