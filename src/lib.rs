//! **Fuzzy voxel models**: implicit 3D shapes sampled into density grids, and
//! Boolean operations (*union*, *intersection*, *difference* both ways) between
//! grids placed at an integer offset from one another.
//!
//! Every cell stores an *optical density* in `[0, 1]`: the fraction of a regular
//! sub-grid of points inside the shape. Boundary cells therefore carry partial
//! values instead of a hard in/out bit.
//!
//! ```
//! use fuzzy_voxels::{DensityGrid, Offset, traits::BooleanOps};
//!
//! let a = DensityGrid::sphere(5.0, 21)?;
//! let b = DensityGrid::sphere(5.0, 21)?;
//! let g = a.union_at(&b, Offset::uniform(5))?;
//! assert_eq!(g.extents().as_array(), [26, 26, 26]);
//! # Ok::<(), fuzzy_voxels::errors::VoxelError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **binary-io**: read and write the binary voxel format (16-byte header, little-endian `f32` cells)
//! - **script-io**: export a Python script that rebuilds the model in [Blender](https://www.blender.org/)
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **cli**: build the `fuzzy-voxels` command-line binary
//!
//! # Logging
//! Building and composing emit [`tracing`] events: `info` summaries, `debug` parameters and
//! per-region cell counts, `trace` per-layer progress.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bounds;
pub mod builder;
pub mod compose;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod grid;
pub mod io;
pub mod sampler;
pub mod shapes;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bounds::{Extents, Offset};
pub use builder::GridBuilder;
pub use compose::{BooleanOp, compose};
pub use grid::DensityGrid;
