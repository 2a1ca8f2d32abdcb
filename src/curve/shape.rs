use crate::math::Point3;
use crate::render::{Aabb, Hit, Path3, Ray, Shape};

use super::Curve;

/// Which corners a curve reports as its bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoxPolicy {
    /// Both corners are the extent's maximum, giving a zero-volume box.
    /// Matches historical renderer input.
    #[default]
    Legacy,
    /// The true minimum and maximum corners.
    Exact,
}

/// Renderer view of a [`Curve`]: a wire with no interior.
///
/// The curve is only ever projected, never ray traced against, so it contains
/// nothing and is hit by nothing.
#[derive(Debug, Clone, Copy)]
pub struct WireframeShape<'a> {
    curve: &'a Curve,
}

impl<'a> WireframeShape<'a> {
    /// Wraps `curve`.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve }
    }
}

impl Shape for WireframeShape<'_> {
    fn bounding_box(&self) -> Aabb {
        let max = *self.curve.max();
        match self.curve.box_policy() {
            BoxPolicy::Legacy => Aabb::new(max, max),
            BoxPolicy::Exact => Aabb::new(*self.curve.min(), max),
        }
    }

    fn compile(&mut self) {}

    fn contains(&self, _point: &Point3, _f: f64) -> bool {
        false
    }

    fn intersect(&self, _ray: &Ray) -> Hit {
        Hit::NONE
    }

    fn paths(&self) -> Vec<Path3> {
        vec![self.curve.points().as_slice().to_vec()]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Xyzs;
    use crate::math::Vector3;

    fn curve() -> Curve {
        Curve::new(&Xyzs(vec![
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(3.0, -2.0, 1.0),
            Point3::new(0.0, 5.0, 0.0),
        ]))
        .unwrap()
    }

    #[test]
    fn legacy_box_collapses_to_max_corner() {
        let c = curve();
        let bbox = c.shape().bounding_box();
        assert_eq!(bbox.min, Point3::new(3.0, 5.0, 2.0));
        assert_eq!(bbox.min, bbox.max);
    }

    #[test]
    fn exact_box_spans_extent() {
        let c = curve().with_box_policy(BoxPolicy::Exact);
        let bbox = c.shape().bounding_box();
        assert_eq!(bbox.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(bbox.max, Point3::new(3.0, 5.0, 2.0));
    }

    #[test]
    fn wire_has_no_interior_and_no_hits() {
        let c = curve();
        let mut shape = c.shape();
        shape.compile();
        assert!(!shape.contains(&Point3::new(0.0, 0.0, 1.0), 1.0));
        let ray = Ray::new(Point3::new(3.0, -2.0, 10.0), -Vector3::z());
        assert!(!shape.intersect(&ray).is_hit());
    }

    #[test]
    fn paths_are_the_point_sequence() {
        let c = curve();
        let paths = c.shape().paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].as_slice(), c.points().as_slice());
    }
}
