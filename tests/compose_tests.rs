mod support;

use fuzzy_voxels::{
    BooleanOp, DensityGrid, Extents, Offset, compose,
    bounds::{Region, composed_extent},
    errors::VoxelError,
    traits::BooleanOps,
};
use proptest::prelude::*;

use crate::support::{coords, grid_from_values, solid, solid_cube};

#[test]
fn identity_laws_at_zero_offset() {
    let a = DensityGrid::sphere(5.0, 11).unwrap();

    assert_eq!(a.union(&a).unwrap(), a);
    assert_eq!(a.intersection(&a).unwrap(), a);

    let empty = a.difference(&a).unwrap();
    assert_eq!(empty.extents(), a.extents());
    assert!(empty.is_empty());

    let empty = a.reverse_difference(&a).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn disjoint_translation_keeps_each_footprint() {
    let a = solid_cube(3);
    let b = solid_cube(3);
    let g = a.union_at(&b, Offset::uniform(5)).unwrap();

    assert_eq!(g.extents(), Extents::cube(8).unwrap());
    for [x, y, z] in coords(g.extents()) {
        let in_a = x < 3 && y < 3 && z < 3;
        let in_b = (5..8).contains(&x) && (5..8).contains(&y) && (5..8).contains(&z);
        let expected = if in_a || in_b { 1.0 } else { 0.0 };
        assert_eq!(g.density(x, y, z), Some(expected), "cell {x},{y},{z}");
    }
    assert_eq!(g.full_cell_count(), 54);
}

#[test]
fn disjoint_intersection_is_empty() {
    let a = solid_cube(3);
    let g = a.intersection_at(&a, Offset::uniform(5)).unwrap();
    assert_eq!(g.extents(), Extents::cube(8).unwrap());
    assert!(g.is_empty());
}

#[test]
fn partial_overlap_blends_values() {
    // a: 3x1x1 at 0.5, b: 3x1x1 at 0.75 shifted by 2 on x.
    let a = grid_from_values(3, 1, 1, &[0.5, 0.5, 0.5]);
    let b = grid_from_values(3, 1, 1, &[0.75, 0.75, 0.75]);
    let offset = Offset::new(2, 0, 0).unwrap();

    let row = |op: BooleanOp| -> Vec<f32> {
        let g = compose(&a, &b, offset, op).unwrap();
        assert_eq!(g.extents().as_array(), [5, 1, 1]);
        (0..5).map(|x| g.density(x, 0, 0).unwrap()).collect()
    };

    assert_eq!(row(BooleanOp::Union), vec![0.5, 0.5, 0.75, 0.75, 0.75]);
    assert_eq!(row(BooleanOp::Intersection), vec![0.0, 0.0, 0.5, 0.0, 0.0]);
    assert_eq!(row(BooleanOp::AMinusB), vec![0.5, 0.5, 0.0, 0.0, 0.0]);
    assert_eq!(row(BooleanOp::BMinusA), vec![0.0, 0.0, 0.25, 0.75, 0.75]);
}

#[test]
fn offset_on_one_axis_only() {
    let a = solid(2, 2, 2);
    let b = solid(1, 4, 1);
    let g = a.union_at(&b, Offset::new(0, 1, 0).unwrap()).unwrap();
    assert_eq!(g.extents().as_array(), [2, 5, 2]);
    // b's column past a
    assert_eq!(g.density(0, 4, 0), Some(1.0));
    // next to b's column, past a: nobody
    assert_eq!(g.density(1, 4, 0), Some(0.0));
    assert_eq!(g.density(0, 4, 1), Some(0.0));
}

#[test]
fn asymmetric_subtraction_orders() {
    let big = DensityGrid::sphere(5.0, 15).unwrap();
    let small = DensityGrid::sphere(2.0, 5).unwrap();
    let offset = Offset::uniform(5);

    let carved = big.difference_at(&small, offset).unwrap();
    assert_eq!(carved.extents(), big.extents());
    assert!(carved.total_density() < big.total_density());

    // small sits entirely inside big, so nothing of it survives big's removal
    let leftover = big.reverse_difference_at(&small, offset).unwrap();
    assert!(leftover.total_density() < 1.0);
}

#[test]
fn negative_offset_and_unknown_op_are_rejected() {
    assert_eq!(
        Offset::new(-1, 0, 0),
        Err(VoxelError::NegativeOffset { axis: fuzzy_voxels::errors::Axis::X, value: -1 })
    );
    assert!(matches!(
        "subtract".parse::<BooleanOp>(),
        Err(VoxelError::UnsupportedOperation(_))
    ));
}

#[test]
fn output_is_single_frame_even_for_multi_frame_inputs() {
    let mut bytes = Vec::new();
    for word in [1u32, 1, 1, 2] {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes.extend_from_slice(&0.25f32.to_le_bytes());
    bytes.extend_from_slice(&1.0f32.to_le_bytes());
    let two_frames = DensityGrid::from_bytes(&bytes).unwrap();

    let g = two_frames.union(&two_frames).unwrap();
    assert_eq!(g.frame_count(), 1);
    assert_eq!(g.density(0, 0, 0), Some(0.25));
}

fn arb_grid(max: u32) -> impl Strategy<Value = DensityGrid> {
    (1..=max, 1..=max, 1..=max).prop_flat_map(|(nx, ny, nz)| {
        prop::collection::vec(0.0f32..=1.0, (nx * ny * nz) as usize)
            .prop_map(move |values| grid_from_values(nx, ny, nz, &values))
    })
}

fn arb_op() -> impl Strategy<Value = BooleanOp> {
    prop::sample::select(BooleanOp::ALL.to_vec())
}

proptest! {
    #[test]
    fn composed_extents_follow_sizing_law(
        a in arb_grid(5),
        b in arb_grid(5),
        d in prop::array::uniform3(0u32..8),
        op in arb_op(),
    ) {
        let offset = Offset::from(d);
        let g = compose(&a, &b, offset, op).unwrap();
        let (ea, eb, eg) = (a.extents().as_array(), b.extents().as_array(), g.extents().as_array());
        for i in 0..3 {
            prop_assert_eq!(eg[i], d[i] + ea[i].saturating_sub(d[i]).max(eb[i]));
            prop_assert_eq!(Some(eg[i]), composed_extent(ea[i], eb[i], d[i]));
            prop_assert!(eg[i] >= ea[i]);
            prop_assert!(eg[i] >= d[i] + eb[i]);
        }
    }

    #[test]
    fn every_cell_matches_bounds_zeroed_operands(
        a in arb_grid(4),
        b in arb_grid(4),
        d in prop::array::uniform3(0u32..5),
        op in arb_op(),
    ) {
        let offset = Offset::from(d);
        let g = compose(&a, &b, offset, op).unwrap();
        for [x, y, z] in coords(g.extents()) {
            let ro_a = a.density(x, y, z).unwrap_or(0.0);
            let ro_b = offset
                .local([x, y, z], b.extents())
                .and_then(|[bx, by, bz]| b.density(bx, by, bz))
                .unwrap_or(0.0);
            let v = g.density(x, y, z).unwrap();
            prop_assert_eq!(v, op.apply(ro_a, ro_b));
            prop_assert!((0.0..=1.0).contains(&v));
            if Region::classify([x, y, z], a.extents(), b.extents(), offset) == Region::Neither {
                prop_assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn commutative_ops_swap_at_zero_offset(a in arb_grid(4), b in arb_grid(4)) {
        prop_assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
        prop_assert_eq!(a.intersection(&b).unwrap(), b.intersection(&a).unwrap());
        prop_assert_eq!(a.difference(&b).unwrap(), b.reverse_difference(&a).unwrap());
    }
}
