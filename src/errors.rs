//! Validation errors

use crate::float_types::Real;

/// Grid axis, used to point at the offending component of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// All the invalid-parameter conditions that stop a grid from being built or composed.
///
/// These are reported before any cell is allocated, so an error never comes with a
/// partially populated grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VoxelError {
    /// (InvalidExtent) A grid extent is zero, or the composed extent does not fit in `u32`
    #[error("(InvalidExtent) extent along {axis} is invalid: {value}")]
    InvalidExtent { axis: Axis, value: u64 },

    /// (InvalidFrameCount) A grid must carry at least one frame
    #[error("(InvalidFrameCount) a grid needs at least one frame, got {0}")]
    InvalidFrameCount(u32),

    /// (InvalidResolution) The builder's cell resolution must be at least 1
    #[error("(InvalidResolution) resolution must be at least 1, got {0}")]
    InvalidResolution(u32),

    /// (InvalidDomain) The domain half-width must be finite, strictly positive, and give a
    /// representable non-zero cell size
    #[error("(InvalidDomain) domain half-width must be finite and > 0 with a non-zero cell size, got {0}")]
    InvalidDomain(Real),

    /// (InvalidShape) A shape dimension (radius, height) must be finite and strictly positive
    #[error("(InvalidShape) {name} must be finite and > 0, got {value}")]
    InvalidShape { name: &'static str, value: Real },

    /// (InvalidSubsampling) Sub-sample counts must be odd, at least 1, and multiply to at most `u32::MAX`
    #[error(
        "(InvalidSubsampling) sub-sample count along {axis} must be odd and >= 1 with a total within u32, got {value}"
    )]
    InvalidSubsampling { axis: Axis, value: i64 },

    /// (InvalidValues) An explicit value buffer must hold exactly one density per cell
    #[error("(InvalidValues) expected {expected} densities, got {found}")]
    InvalidValues { expected: usize, found: usize },

    /// (InvalidDensity) Densities lie in [0, 1]
    #[error("(InvalidDensity) value {value} at index {index} is outside [0, 1]")]
    InvalidDensity { index: usize, value: f32 },

    /// (NegativeOffset) Composition offsets are non-negative cell counts
    #[error("(NegativeOffset) offset along {axis} must be >= 0, got {value}")]
    NegativeOffset { axis: Axis, value: i64 },

    /// (UnsupportedOperation) Only union, intersection and the two subtractions exist
    #[error("(UnsupportedOperation) unknown boolean operation {0:?}")]
    UnsupportedOperation(String),

    /// (GridTooLarge) The number of cells does not fit in memory addressing
    #[error("(GridTooLarge) grid of {nx}x{ny}x{nz}x{frames} cells cannot be addressed")]
    GridTooLarge { nx: u32, ny: u32, nz: u32, frames: u32 },
}
