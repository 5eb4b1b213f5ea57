//! Boolean composition of two density grids under an integer translation.

use crate::bounds::{Extents, Offset, Region};
use crate::errors::VoxelError;
use crate::float_types::{Density, EMPTY};
use crate::grid::DensityGrid;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

/// Rule for combining the densities of the two operands in one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// `max(a, b)`
    Union,
    /// `min(a, b)`
    Intersection,
    /// `a - b` where `a > b`, else `0`
    AMinusB,
    /// `b - a` where `b > a`, else `0`
    BMinusA,
}

impl BooleanOp {
    pub const ALL: [BooleanOp; 4] = [
        BooleanOp::Union,
        BooleanOp::Intersection,
        BooleanOp::AMinusB,
        BooleanOp::BMinusA,
    ];

    #[inline]
    pub fn apply(self, a: Density, b: Density) -> Density {
        match self {
            BooleanOp::Union => a.max(b),
            BooleanOp::Intersection => a.min(b),
            BooleanOp::AMinusB => {
                if a > b {
                    a - b
                } else {
                    EMPTY
                }
            },
            BooleanOp::BMinusA => {
                if b > a {
                    b - a
                } else {
                    EMPTY
                }
            },
        }
    }

    /// `true` when swapping the operands never changes the result.
    pub const fn is_commutative(self) -> bool {
        matches!(self, BooleanOp::Union | BooleanOp::Intersection)
    }

    pub const fn name(self) -> &'static str {
        match self {
            BooleanOp::Union => "union",
            BooleanOp::Intersection => "intersection",
            BooleanOp::AMinusB => "a-minus-b",
            BooleanOp::BMinusA => "b-minus-a",
        }
    }
}

impl std::fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BooleanOp {
    type Err = VoxelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" => Ok(BooleanOp::Union),
            "intersection" => Ok(BooleanOp::Intersection),
            "a-minus-b" | "difference" => Ok(BooleanOp::AMinusB),
            "b-minus-a" => Ok(BooleanOp::BMinusA),
            _ => Err(VoxelError::UnsupportedOperation(s.to_string())),
        }
    }
}

/// Combine `a` (at the origin) with `b` translated by `offset`.
///
/// The output is the smallest grid holding both footprints. Each cell is evaluated
/// from the operands that cover it: where only one does, the other contributes
/// zero, and where neither does the cell stays empty. Only the first frame of each
/// input is read; the output has exactly one frame. Inputs are never modified.
pub fn compose(
    a: &DensityGrid,
    b: &DensityGrid,
    offset: Offset,
    op: BooleanOp,
) -> Result<DensityGrid, VoxelError> {
    let (ea, eb) = (a.extents(), b.extents());
    let extents = Extents::composed(ea, eb, offset)?;
    let start = Instant::now();

    let mut counts = [0usize; 4];
    let grid = DensityGrid::from_fn(extents, |cell| {
        let local_b = offset.local(cell, eb);
        let region = Region::from_coverage(ea.contains(cell), local_b.is_some());
        let ro_a = || a.density(cell[0], cell[1], cell[2]).unwrap_or(EMPTY);
        let ro_b = || {
            local_b
                .and_then(|[x, y, z]| b.density(x, y, z))
                .unwrap_or(EMPTY)
        };
        match region {
            Region::Both => {
                counts[0] += 1;
                op.apply(ro_a(), ro_b())
            },
            Region::OnlyA => {
                counts[1] += 1;
                op.apply(ro_a(), EMPTY)
            },
            Region::OnlyB => {
                counts[2] += 1;
                op.apply(EMPTY, ro_b())
            },
            Region::Neither => {
                counts[3] += 1;
                EMPTY
            },
        }
    })?;

    debug!(
        overlap = counts[0],
        only_a = counts[1],
        only_b = counts[2],
        neither = counts[3],
        "composition regions"
    );
    info!(
        op = %op,
        offset = %offset,
        a = %ea,
        b = %eb,
        out = %extents,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "grids composed"
    );
    Ok(grid)
}
