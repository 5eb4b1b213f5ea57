//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use fuzzy_voxels::{DensityGrid, Extents, GridBuilder, float_types::Real};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Build a single-frame grid from explicit values in z, y, x order.
pub fn grid_from_values(nx: u32, ny: u32, nz: u32, values: &[f32]) -> DensityGrid {
    let extents = Extents::new(nx, ny, nz).expect("non-zero extents");
    DensityGrid::from_values(extents, values.to_vec()).expect("valid densities")
}

/// A grid whose every cell is fully occupied.
pub fn solid(nx: u32, ny: u32, nz: u32) -> DensityGrid {
    grid_from_values(nx, ny, nz, &vec![1.0; (nx * ny * nz) as usize])
}

/// Cube of side `n` with every cell full, built by voxelizing all of space.
pub fn solid_cube(n: u32) -> DensityGrid {
    let everything = |_: &Point3<Real>| true;
    GridBuilder::new(1.0, n).build(&everything).expect("valid builder")
}

/// Every `[x, y, z]` inside `extents`.
pub fn coords(extents: Extents) -> impl Iterator<Item = [u32; 3]> {
    let [nx, ny, nz] = extents.as_array();
    (0..nz).flat_map(move |z| (0..ny).flat_map(move |y| (0..nx).map(move |x| [x, y, z])))
}
