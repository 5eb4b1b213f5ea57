//! Sampling configuration.
//!
//! The sub-sample grid used by the [density sampler](crate::sampler) defaults to
//! 5×5×5 points per cell. The process-wide default can be overridden:
//!  1) **Build-time**: set env var `FUZZY_VOXELS_SUBSAMPLES` to an odd integer
//!     (e.g. `FUZZY_VOXELS_SUBSAMPLES=7 cargo build`)
//!  2) **Runtime**: call [`set_default_subsamples`] once before building any grid

use crate::errors::{Axis, VoxelError};
use std::sync::OnceLock;

/// Sub-samples per axis when nothing else is configured.
pub const DEFAULT_SUBSAMPLES: u32 = 5;

static SUBSAMPLES_CELL: OnceLock<Subsampling> = OnceLock::new();

/// Per-axis counts of the regular sub-grid used to estimate a cell's density.
///
/// Counts are odd so that the sub-grid is symmetric about the cell center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subsampling {
    nx: u32,
    ny: u32,
    nz: u32,
}

impl Subsampling {
    /// Build a sub-grid of `nx × ny × nz` points. Every count must be odd and at least 1,
    /// and the total point count must fit in a `u32`.
    pub fn new(nx: u32, ny: u32, nz: u32) -> Result<Self, VoxelError> {
        Axis::ALL
            .into_iter()
            .zip([nx, ny, nz])
            .try_fold(1u32, |total, (axis, value)| {
                let invalid = VoxelError::InvalidSubsampling { axis, value: value as i64 };
                if value == 0 || value % 2 == 0 {
                    return Err(invalid);
                }
                total.checked_mul(value).ok_or(invalid)
            })?;
        Ok(Self { nx, ny, nz })
    }

    /// The same count `n` on all three axes.
    pub fn uniform(n: u32) -> Result<Self, VoxelError> {
        Self::new(n, n, n)
    }

    #[inline]
    pub const fn counts(&self) -> [u32; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Total number of sample points per cell. Never overflows: [`new`](Self::new) rejects
    /// counts whose product exceeds `u32::MAX`.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.nx * self.ny * self.nz
    }
}

impl Default for Subsampling {
    fn default() -> Self {
        default_subsamples()
    }
}

#[inline]
const fn builtin_subsamples() -> Subsampling {
    Subsampling {
        nx: DEFAULT_SUBSAMPLES,
        ny: DEFAULT_SUBSAMPLES,
        nz: DEFAULT_SUBSAMPLES,
    }
}

/// Returns the process-wide default sub-sampling.
/// If not set yet, it tries `FUZZY_VOXELS_SUBSAMPLES` and falls back to 5×5×5.
pub fn default_subsamples() -> Subsampling {
    *SUBSAMPLES_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("FUZZY_VOXELS_SUBSAMPLES") {
            if let Some(sampling) = environment_variable
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|n| Subsampling::uniform(n).ok())
            {
                return sampling;
            }
            tracing::warn!(
                value = environment_variable,
                "ignoring invalid FUZZY_VOXELS_SUBSAMPLES, using {}",
                DEFAULT_SUBSAMPLES
            );
        }
        builtin_subsamples()
    })
}

/// Set the default sub-sample count programmatically once (subsequent calls are ignored).
/// Call near program start: `fuzzy_voxels::config::set_default_subsamples(7)?;`
pub fn set_default_subsamples(n: u32) -> Result<(), VoxelError> {
    let sampling = Subsampling::uniform(n)?;
    if SUBSAMPLES_CELL.set(sampling).is_err() {
        tracing::debug!(requested = n, "default sub-sampling already initialised");
    }
    Ok(())
}
