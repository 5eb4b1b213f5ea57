//! Grid extents, translation offsets, and the footprint arithmetic shared by
//! the builder and the boolean composition engine.

use crate::errors::{Axis, VoxelError};

/// Number of cells along each axis of a density grid. All three are non-zero.
///
/// Cells are linearized x-fastest, then y, then z, which is also the nesting
/// order of the binary voxel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extents {
    nx: u32,
    ny: u32,
    nz: u32,
}

impl Extents {
    pub fn new(nx: u32, ny: u32, nz: u32) -> Result<Self, VoxelError> {
        for (axis, value) in Axis::ALL.into_iter().zip([nx, ny, nz]) {
            if value == 0 {
                return Err(VoxelError::InvalidExtent { axis, value: 0 });
            }
        }
        Ok(Self { nx, ny, nz })
    }

    /// `n` cells on every axis.
    pub fn cube(n: u32) -> Result<Self, VoxelError> {
        Self::new(n, n, n)
    }

    #[inline]
    pub const fn nx(&self) -> u32 {
        self.nx
    }

    #[inline]
    pub const fn ny(&self) -> u32 {
        self.ny
    }

    #[inline]
    pub const fn nz(&self) -> u32 {
        self.nz
    }

    #[inline]
    pub const fn as_array(&self) -> [u32; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Cells in one frame, or `None` if that count does not fit in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        (self.nx as usize)
            .checked_mul(self.ny as usize)?
            .checked_mul(self.nz as usize)
    }

    #[inline]
    pub const fn contains(&self, coords: [u32; 3]) -> bool {
        coords[0] < self.nx && coords[1] < self.ny && coords[2] < self.nz
    }

    #[inline]
    pub const fn linearize(&self, coords: [u32; 3]) -> usize {
        let [x, y, z] = coords;
        (z as usize * self.ny as usize + y as usize) * self.nx as usize + x as usize
    }

    #[inline]
    pub const fn delinearize(&self, i: usize) -> [u32; 3] {
        let x = i % self.nx as usize;
        let yz = i / self.nx as usize;
        let y = yz % self.ny as usize;
        let z = yz / self.ny as usize;
        [x as u32, y as u32, z as u32]
    }

    /// Extents of the grid that holds `a` at the origin and `b` translated by `offset`.
    ///
    /// Per axis: `d + max(a_n - d, b_n)`, where `a_n - d` saturates at zero once
    /// the offset pushes `b` entirely past `a`.
    pub fn composed(a: Extents, b: Extents, offset: Offset) -> Result<Extents, VoxelError> {
        let mut out = [0u32; 3];
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            let (a_n, b_n, d) = (a.as_array()[i], b.as_array()[i], offset.as_array()[i]);
            out[i] = composed_extent(a_n, b_n, d).ok_or(VoxelError::InvalidExtent {
                axis,
                value: d as u64 + a_n.saturating_sub(d).max(b_n) as u64,
            })?;
        }
        Extents::new(out[0], out[1], out[2])
    }
}

impl std::fmt::Display for Extents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}

/// One-axis output extent for composing an operand of `a_n` cells at the origin with one
/// of `b_n` cells starting at `d`. `None` on `u32` overflow.
#[inline]
pub fn composed_extent(a_n: u32, b_n: u32, d: u32) -> Option<u32> {
    d.checked_add(a_n.saturating_sub(d).max(b_n))
}

/// Translation of the second operand relative to the first, in whole cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: u32,
    pub dy: u32,
    pub dz: u32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0, dy: 0, dz: 0 };

    /// Validate signed components; any negative component is rejected.
    pub fn new(dx: i64, dy: i64, dz: i64) -> Result<Self, VoxelError> {
        let mut out = [0u32; 3];
        for (i, (axis, value)) in Axis::ALL.into_iter().zip([dx, dy, dz]).enumerate() {
            if value < 0 {
                return Err(VoxelError::NegativeOffset { axis, value });
            }
            out[i] = u32::try_from(value)
                .map_err(|_| VoxelError::InvalidExtent { axis, value: value as u64 })?;
        }
        Ok(Self { dx: out[0], dy: out[1], dz: out[2] })
    }

    /// Same translation on every axis.
    pub const fn uniform(d: u32) -> Self {
        Self { dx: d, dy: d, dz: d }
    }

    #[inline]
    pub const fn as_array(&self) -> [u32; 3] {
        [self.dx, self.dy, self.dz]
    }

    /// Map an output cell into the translated operand's local coordinates,
    /// or `None` when the cell lies outside that operand's footprint.
    #[inline]
    pub fn local(&self, cell: [u32; 3], extents: Extents) -> Option<[u32; 3]> {
        let local = [
            cell[0].checked_sub(self.dx)?,
            cell[1].checked_sub(self.dy)?,
            cell[2].checked_sub(self.dz)?,
        ];
        extents.contains(local).then_some(local)
    }
}

impl From<[u32; 3]> for Offset {
    fn from([dx, dy, dz]: [u32; 3]) -> Self {
        Self { dx, dy, dz }
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.dx, self.dy, self.dz)
    }
}

/// Which operands cover an output cell of a composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Outside both footprints.
    Neither,
    /// Inside the untranslated operand only.
    OnlyA,
    /// Inside the translated operand only.
    OnlyB,
    /// Where both operands are defined.
    Both,
}

impl Region {
    #[inline]
    pub const fn from_coverage(in_a: bool, in_b: bool) -> Self {
        match (in_a, in_b) {
            (true, true) => Region::Both,
            (true, false) => Region::OnlyA,
            (false, true) => Region::OnlyB,
            (false, false) => Region::Neither,
        }
    }

    /// Classify `cell` against `a` at the origin and `b` translated by `offset`.
    pub fn classify(cell: [u32; 3], a: Extents, b: Extents, offset: Offset) -> Self {
        Self::from_coverage(a.contains(cell), offset.local(cell, b).is_some())
    }
}
