//! Implicit solids described by membership tests.

use crate::errors::VoxelError;
use crate::float_types::Real;
use nalgebra::Point3;

/// A pure, total membership test over continuous 3D space.
///
/// Any `Fn(&Point3<Real>) -> bool` closure is a predicate, so ad-hoc shapes need no
/// wrapper type. Sampling runs on one thread, so closures need not be `Sync`:
///
/// ```
/// # use fuzzy_voxels::shapes::ShapePredicate;
/// # use nalgebra::Point3;
/// let slab = |p: &Point3<f64>| p.z.abs() <= 1.0;
/// assert!(slab.contains(&Point3::new(3.0, -7.0, 0.5)));
/// ```
pub trait ShapePredicate {
    fn contains(&self, p: &Point3<Real>) -> bool;
}

impl<F> ShapePredicate for F
where
    F: Fn(&Point3<Real>) -> bool,
{
    #[inline]
    fn contains(&self, p: &Point3<Real>) -> bool {
        self(p)
    }
}

/// A predicate that also knows how big a domain it needs.
pub trait Shape: ShapePredicate {
    /// Half-width of the origin-centred cube that bounds the shape.
    fn half_extent(&self) -> Real;
}

fn positive(name: &'static str, value: Real) -> Result<Real, VoxelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(VoxelError::InvalidShape { name, value })
    }
}

/// Ball of `radius` around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3<Real>,
    pub radius: Real,
}

impl Sphere {
    /// A sphere centred at the origin.
    pub fn new(radius: Real) -> Result<Self, VoxelError> {
        Self::at(Point3::origin(), radius)
    }

    pub fn at(center: Point3<Real>, radius: Real) -> Result<Self, VoxelError> {
        Ok(Self { center, radius: positive("radius", radius)? })
    }
}

impl ShapePredicate for Sphere {
    #[inline]
    fn contains(&self, p: &Point3<Real>) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }
}

impl Shape for Sphere {
    fn half_extent(&self) -> Real {
        self.center.coords.amax() + self.radius
    }
}

/// Right circular cylinder with its axis along z, `height` long, centred on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub center: Point3<Real>,
    pub radius: Real,
    pub height: Real,
}

impl Cylinder {
    pub fn new(radius: Real, height: Real) -> Result<Self, VoxelError> {
        Self::at(Point3::origin(), radius, height)
    }

    pub fn at(center: Point3<Real>, radius: Real, height: Real) -> Result<Self, VoxelError> {
        Ok(Self {
            center,
            radius: positive("radius", radius)?,
            height: positive("height", height)?,
        })
    }
}

impl ShapePredicate for Cylinder {
    #[inline]
    fn contains(&self, p: &Point3<Real>) -> bool {
        let d = p - self.center;
        d.x * d.x + d.y * d.y <= self.radius * self.radius && d.z.abs() <= self.height / 2.0
    }
}

impl Shape for Cylinder {
    fn half_extent(&self) -> Real {
        self.center.coords.amax() + self.radius.max(self.height / 2.0)
    }
}

/// Right circular cone with its axis along z: base disc of `radius` at
/// `center.z - height/2`, apex at `center.z + height/2`.
///
/// A single nappe, not the double cone `x² + y² ≤ (z·r/h)²` over `|z| ≤ h/2`
/// that pinches to a point at the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    pub center: Point3<Real>,
    pub radius: Real,
    pub height: Real,
}

impl Cone {
    pub fn new(radius: Real, height: Real) -> Result<Self, VoxelError> {
        Self::at(Point3::origin(), radius, height)
    }

    pub fn at(center: Point3<Real>, radius: Real, height: Real) -> Result<Self, VoxelError> {
        Ok(Self {
            center,
            radius: positive("radius", radius)?,
            height: positive("height", height)?,
        })
    }
}

impl ShapePredicate for Cone {
    #[inline]
    fn contains(&self, p: &Point3<Real>) -> bool {
        let d = p - self.center;
        let half = self.height / 2.0;
        if d.z.abs() > half {
            return false;
        }
        let r = self.radius * (half - d.z) / self.height;
        d.x * d.x + d.y * d.y <= r * r
    }
}

impl Shape for Cone {
    fn half_extent(&self) -> Real {
        self.center.coords.amax() + self.radius.max(self.height / 2.0)
    }
}
