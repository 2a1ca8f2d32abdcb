use crate::math::{Point3, Vector3};

use super::Path3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from two corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Slab test: returns the entry and exit parameters of `ray`, or `None`
    /// if the ray misses the box.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, f64)> {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;
        for i in 0..3 {
            let inv = 1.0 / ray.direction[i];
            let mut t0 = (self.min[i] - ray.origin[i]) * inv;
            let mut t1 = (self.max[i] - ray.origin[i]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            // NaN arises for an axis-parallel ray starting on a slab plane.
            if t0.is_nan() || t1.is_nan() {
                continue;
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
        }
        (t_min <= t_max && t_max >= 0.0).then_some((t_min, t_max))
    }
}

/// A half-line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Vector3,
}

impl Ray {
    /// Creates a ray; `direction` is expected to be unit length.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }
}

/// Result of a ray query: the ray parameter of the closest hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the hit; infinite when nothing was hit.
    pub t: f64,
}

impl Hit {
    /// The "nothing was hit" result.
    pub const NONE: Self = Self { t: f64::INFINITY };

    /// Returns whether this is an actual hit.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.t.is_finite()
    }

    /// Returns the closer of two hits.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other.t < self.t {
            other
        } else {
            self
        }
    }
}

/// Something the renderer can place in a [`Scene`](super::Scene).
pub trait Shape {
    /// Box used to cull ray queries before calling [`Shape::intersect`].
    fn bounding_box(&self) -> Aabb;

    /// Prepares acceleration data before rendering.
    fn compile(&mut self);

    /// Returns whether `point` lies inside the shape, within tolerance `f`.
    fn contains(&self, point: &Point3, f: f64) -> bool;

    /// Returns the closest hit of `ray` on the shape.
    fn intersect(&self, ray: &Ray) -> Hit;

    /// Returns the shape's outline as 3D paths.
    fn paths(&self) -> Vec<Path3>;
}
