//! `DensityGrid`, the voxel model produced by the builder and the composition engine.

use crate::bounds::Extents;
use crate::errors::VoxelError;
use crate::float_types::{Density, EMPTY, FULL, is_density};

/// A dense 3D array of optical densities in `[0, 1]`.
///
/// Values are stored frame-major, then by z layer, y row and x column, the same
/// nesting the binary voxel format uses. Builders and composition always produce a
/// single frame; decoding may yield more.
///
/// A grid is never mutated after it is handed out: every operation allocates a
/// fresh output.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
    extents: Extents,
    frames: u32,
    values: Vec<Density>,
}

impl DensityGrid {
    /// A single-frame grid with every cell at zero.
    pub fn zeros(extents: Extents) -> Result<Self, VoxelError> {
        Self::zeros_with_frames(1, extents)
    }

    /// A grid of `frames` frames with every cell at zero.
    pub fn zeros_with_frames(frames: u32, extents: Extents) -> Result<Self, VoxelError> {
        if frames == 0 {
            return Err(VoxelError::InvalidFrameCount(frames));
        }
        let len = Self::storage_len(frames, extents)?;
        Ok(Self { extents, frames, values: vec![EMPTY; len] })
    }

    /// A single-frame grid from explicit densities in z, y, x nesting order (x fastest).
    ///
    /// ```
    /// # use fuzzy_voxels::{DensityGrid, Extents};
    /// let grid = DensityGrid::from_values(Extents::new(2, 1, 1)?, vec![0.25, 1.0])?;
    /// assert_eq!(grid.density(1, 0, 0), Some(1.0));
    /// # Ok::<(), fuzzy_voxels::errors::VoxelError>(())
    /// ```
    pub fn from_values(extents: Extents, values: Vec<Density>) -> Result<Self, VoxelError> {
        let expected = Self::storage_len(1, extents)?;
        if values.len() != expected {
            return Err(VoxelError::InvalidValues { expected, found: values.len() });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !is_density(**v)) {
            return Err(VoxelError::InvalidDensity { index, value });
        }
        Ok(Self { extents, frames: 1, values })
    }

    /// Fill a single-frame grid cell by cell. `f` receives `[x, y, z]`.
    ///
    /// Cells are visited in storage order and the grid is only returned once
    /// complete. Values are expected in `[0, 1]`.
    pub(crate) fn from_fn<F>(extents: Extents, mut f: F) -> Result<Self, VoxelError>
    where
        F: FnMut([u32; 3]) -> Density,
    {
        let len = Self::storage_len(1, extents)?;
        let values: Vec<Density> = (0..len)
            .map(|i| {
                let value = f(extents.delinearize(i));
                debug_assert!(is_density(value), "density {value} out of range");
                value
            })
            .collect();
        Ok(Self { extents, frames: 1, values })
    }

    /// Wrap decoded storage. Caller guarantees `values.len()` matches and every value is a density.
    #[cfg(feature = "binary-io")]
    pub(crate) fn from_raw(frames: u32, extents: Extents, values: Vec<Density>) -> Self {
        debug_assert_eq!(Some(values.len()), Self::storage_len(frames, extents).ok());
        Self { extents, frames, values }
    }

    pub(crate) fn storage_len(frames: u32, extents: Extents) -> Result<usize, VoxelError> {
        extents
            .cell_count()
            .and_then(|cells| cells.checked_mul(frames as usize))
            .ok_or(VoxelError::GridTooLarge {
                nx: extents.nx(),
                ny: extents.ny(),
                nz: extents.nz(),
                frames,
            })
    }

    #[inline]
    pub const fn extents(&self) -> Extents {
        self.extents
    }

    #[inline]
    pub const fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Density of cell `(x, y, z)` in `frame`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, frame: u32, x: u32, y: u32, z: u32) -> Option<Density> {
        if frame >= self.frames || !self.extents.contains([x, y, z]) {
            return None;
        }
        let frame_len = self.values.len() / self.frames as usize;
        self.values
            .get(frame as usize * frame_len + self.extents.linearize([x, y, z]))
            .copied()
    }

    /// Density of cell `(x, y, z)` in the first frame, or `None` outside the grid.
    #[inline]
    pub fn density(&self, x: u32, y: u32, z: u32) -> Option<Density> {
        self.get(0, x, y, z)
    }

    /// The values of one frame in z, y, x nesting order.
    pub fn frame(&self, frame: u32) -> Option<&[Density]> {
        if frame >= self.frames {
            return None;
        }
        let frame_len = self.values.len() / self.frames as usize;
        let start = frame as usize * frame_len;
        self.values.get(start..start + frame_len)
    }

    /// All values of all frames in serialization order.
    #[inline]
    pub fn values(&self) -> &[Density] {
        &self.values
    }

    /// Iterate `([x, y, z], density)` over the first frame.
    pub fn cells(&self) -> impl Iterator<Item = ([u32; 3], Density)> + '_ {
        let extents = self.extents;
        self.frame(0)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(move |(i, &v)| (extents.delinearize(i), v))
    }

    /// Sum of first-frame densities: the occupied volume measured in cells.
    pub fn total_density(&self) -> f64 {
        self.cells().map(|(_, v)| v as f64).sum()
    }

    /// Cells of the first frame that are partially occupied.
    pub fn boundary_cell_count(&self) -> usize {
        self.cells().filter(|&(_, v)| v > EMPTY && v < FULL).count()
    }

    /// Cells of the first frame that are entirely inside the shape.
    pub fn full_cell_count(&self) -> usize {
        self.cells().filter(|&(_, v)| v >= FULL).count()
    }

    /// `true` when no first-frame cell has any density.
    pub fn is_empty(&self) -> bool {
        self.cells().all(|(_, v)| v <= EMPTY)
    }
}
