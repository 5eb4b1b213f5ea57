use crate::bounds::Offset;
use crate::compose::{BooleanOp, compose};
use crate::errors::VoxelError;
use crate::grid::DensityGrid;

/// Boolean operations between voxel models, `other` translated by an offset
pub trait BooleanOps: Sized {
    fn combine(&self, other: &Self, offset: Offset, op: BooleanOp) -> Result<Self, VoxelError>;

    /// Cells occupied by either model: `max(a, b)`.
    fn union_at(&self, other: &Self, offset: Offset) -> Result<Self, VoxelError> {
        self.combine(other, offset, BooleanOp::Union)
    }

    /// Cells occupied by both models: `min(a, b)`.
    fn intersection_at(&self, other: &Self, offset: Offset) -> Result<Self, VoxelError> {
        self.combine(other, offset, BooleanOp::Intersection)
    }

    /// `self` with `other` carved out.
    fn difference_at(&self, other: &Self, offset: Offset) -> Result<Self, VoxelError> {
        self.combine(other, offset, BooleanOp::AMinusB)
    }

    /// `other` with `self` carved out; the result keeps `self`'s origin.
    fn reverse_difference_at(&self, other: &Self, offset: Offset) -> Result<Self, VoxelError> {
        self.combine(other, offset, BooleanOp::BMinusA)
    }

    fn union(&self, other: &Self) -> Result<Self, VoxelError> {
        self.union_at(other, Offset::ZERO)
    }

    fn intersection(&self, other: &Self) -> Result<Self, VoxelError> {
        self.intersection_at(other, Offset::ZERO)
    }

    fn difference(&self, other: &Self) -> Result<Self, VoxelError> {
        self.difference_at(other, Offset::ZERO)
    }

    fn reverse_difference(&self, other: &Self) -> Result<Self, VoxelError> {
        self.reverse_difference_at(other, Offset::ZERO)
    }
}

impl BooleanOps for DensityGrid {
    fn combine(&self, other: &Self, offset: Offset, op: BooleanOp) -> Result<Self, VoxelError> {
        compose(self, other, offset, op)
    }
}
