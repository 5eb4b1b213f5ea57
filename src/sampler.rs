//! Density sampler: estimates how much of a cell a shape occupies.

use crate::config::Subsampling;
use crate::float_types::{Density, Real};
use crate::shapes::ShapePredicate;
use nalgebra::{Point3, Vector3};

/// Position of sample `i` out of `n` along an axis of length `len`, relative to the
/// axis center: `(i - (n-1)/2) * len / n`, with `(n-1)/2` in integer arithmetic.
///
/// The same placement rule maps grid cells to their centers in the builder.
#[inline]
pub fn centered_offset(i: u32, n: u32, len: Real) -> Real {
    let half = (n as i64 - 1) / 2;
    (i as i64 - half) as Real * len / n as Real
}

/// Fraction of a regular sub-grid of points inside `shape`, for the cell centred on
/// `center` with edge lengths `size`.
///
/// Returns `0` for a cell entirely outside, `1` for a cell entirely inside, and
/// anything in between for a boundary cell. `size` components are expected to be
/// positive.
pub fn density<P>(
    shape: &P,
    center: &Point3<Real>,
    size: &Vector3<Real>,
    subsampling: &Subsampling,
) -> Density
where
    P: ShapePredicate + ?Sized,
{
    debug_assert!(size.iter().all(|&l| l > 0.0), "cell size must be positive");

    let [nx, ny, nz] = subsampling.counts();
    let xs: Vec<Real> = (0..nx).map(|i| center.x + centered_offset(i, nx, size.x)).collect();
    let ys: Vec<Real> = (0..ny).map(|j| center.y + centered_offset(j, ny, size.y)).collect();
    let zs: Vec<Real> = (0..nz).map(|k| center.z + centered_offset(k, nz, size.z)).collect();

    let mut inside = 0u32;
    for &z in &zs {
        for &y in &ys {
            for &x in &xs {
                if shape.contains(&Point3::new(x, y, z)) {
                    inside += 1;
                }
            }
        }
    }

    inside as Density / subsampling.total() as Density
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Sphere;

    fn five() -> Subsampling {
        Subsampling::uniform(5).unwrap()
    }

    #[test]
    fn offsets_are_symmetric_for_odd_counts() {
        let offsets: Vec<Real> = (0..5).map(|i| centered_offset(i, 5, 1.0)).collect();
        assert_eq!(offsets, vec![-0.4, -0.2, 0.0, 0.2, 0.4]);
        assert_eq!(centered_offset(0, 1, 3.0), 0.0);
    }

    #[test]
    fn fully_inside_and_outside() {
        let sphere = Sphere::new(10.0).unwrap();
        let size = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(density(&sphere, &Point3::origin(), &size, &five()), 1.0);
        assert_eq!(density(&sphere, &Point3::new(20.0, 0.0, 0.0), &size, &five()), 0.0);
    }

    #[test]
    fn half_space_splits_cell() {
        // Samples at x offsets -0.4..0.4; x >= 0 keeps three of the five columns.
        let half = |p: &Point3<Real>| p.x >= 0.0;
        let size = Vector3::new(1.0, 1.0, 1.0);
        let d = density(&half, &Point3::origin(), &size, &five());
        assert!((d - 0.6).abs() < 1e-6);
    }

    #[test]
    fn single_sample_is_binary() {
        let one = Subsampling::uniform(1).unwrap();
        let sphere = Sphere::new(1.0).unwrap();
        let size = Vector3::new(4.0, 4.0, 4.0);
        assert_eq!(density(&sphere, &Point3::origin(), &size, &one), 1.0);
        assert_eq!(density(&sphere, &Point3::new(1.5, 0.0, 0.0), &size, &one), 0.0);
    }
}
