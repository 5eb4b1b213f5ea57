//! Grid builder: voxelizes a shape predicate over an origin-centred cube.

use crate::bounds::Extents;
use crate::config::{Subsampling, default_subsamples};
use crate::errors::VoxelError;
use crate::float_types::Real;
use crate::grid::DensityGrid;
use crate::sampler::{centered_offset, density};
use crate::shapes::{Cone, Cylinder, Shape, ShapePredicate, Sphere};
use nalgebra::{Point3, Vector3};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Voxelizes shapes over the cube `[-R, R]³` split into `N` cells per axis.
///
/// ```
/// # use fuzzy_voxels::{builder::GridBuilder, shapes::Sphere};
/// let grid = GridBuilder::new(5.0, 21)
///     .build(&Sphere::new(5.0).unwrap())
///     .unwrap();
/// assert_eq!(grid.density(10, 10, 10), Some(1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBuilder {
    half_width: Real,
    resolution: u32,
    subsampling: Subsampling,
}

impl GridBuilder {
    /// `half_width` is R, `resolution` is N. Both are validated by [`build`](Self::build).
    pub fn new(half_width: Real, resolution: u32) -> Self {
        Self {
            half_width,
            resolution,
            subsampling: default_subsamples(),
        }
    }

    /// Use a specific sub-sample grid instead of the process default.
    pub const fn subsampling(mut self, subsampling: Subsampling) -> Self {
        self.subsampling = subsampling;
        self
    }

    fn validate(&self) -> Result<Extents, VoxelError> {
        if !(self.half_width.is_finite() && self.half_width > 0.0) {
            return Err(VoxelError::InvalidDomain(self.half_width));
        }
        if self.resolution == 0 {
            return Err(VoxelError::InvalidResolution(self.resolution));
        }
        let cell = self.cell_size();
        if !(cell.is_finite() && cell > 0.0) {
            return Err(VoxelError::InvalidDomain(self.half_width));
        }
        Extents::cube(self.resolution)
    }

    /// Edge length of one cell: `2R / N`.
    #[inline]
    pub fn cell_size(&self) -> Real {
        2.0 * self.half_width / self.resolution as Real
    }

    /// Physical center of cell `[i, j, k]`.
    #[inline]
    pub fn cell_center(&self, cell: [u32; 3]) -> Point3<Real> {
        let side = 2.0 * self.half_width;
        let n = self.resolution;
        Point3::new(
            centered_offset(cell[0], n, side),
            centered_offset(cell[1], n, side),
            centered_offset(cell[2], n, side),
        )
    }

    /// Sample `shape` into a single-frame `N×N×N` grid.
    pub fn build<P>(&self, shape: &P) -> Result<DensityGrid, VoxelError>
    where
        P: ShapePredicate + ?Sized,
    {
        let extents = self.validate()?;
        let start = Instant::now();
        let size = Vector3::repeat(self.cell_size());
        debug!(
            half_width = %self.half_width,
            resolution = self.resolution,
            cell_size = %size.x,
            subsamples = ?self.subsampling.counts(),
            "building density grid"
        );

        let layer = extents.nx() as usize * extents.ny() as usize;
        let mut visited = 0usize;
        let grid = DensityGrid::from_fn(extents, |cell| {
            visited += 1;
            if visited % layer == 0 {
                trace!(layer = cell[2], "sampled layer");
            }
            density(shape, &self.cell_center(cell), &size, &self.subsampling)
        })?;

        info!(
            extents = %extents,
            boundary_cells = grid.boundary_cell_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "density grid built"
        );
        Ok(grid)
    }
}

impl DensityGrid {
    /// Voxelize `shape` at `resolution` cells per axis over the cube given by its
    /// [`half_extent`](Shape::half_extent).
    pub fn from_shape<S>(shape: &S, resolution: u32) -> Result<Self, VoxelError>
    where
        S: Shape + ?Sized,
    {
        GridBuilder::new(shape.half_extent(), resolution).build(shape)
    }

    /// Origin-centred sphere of `radius`.
    pub fn sphere(radius: Real, resolution: u32) -> Result<Self, VoxelError> {
        Self::from_shape(&Sphere::new(radius)?, resolution)
    }

    /// Origin-centred z-axis cylinder.
    pub fn cylinder(radius: Real, height: Real, resolution: u32) -> Result<Self, VoxelError> {
        Self::from_shape(&Cylinder::new(radius, height)?, resolution)
    }

    /// Origin-centred z-axis cone with its apex up.
    pub fn cone(radius: Real, height: Real, resolution: u32) -> Result<Self, VoxelError> {
        Self::from_shape(&Cone::new(radius, height)?, resolution)
    }
}
