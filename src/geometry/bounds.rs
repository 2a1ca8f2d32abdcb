use crate::math::Point3;

/// Axis-aligned extent of a point sequence, grown one point at a time.
///
/// `min` and `max` are per-axis extremes. They generally do not describe
/// points of the sequence: each component may come from a different point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    min: Point3,
    max: Point3,
}

impl Extent {
    /// Seeds both corners with the first point of a sequence.
    #[must_use]
    pub fn from_point(first: Point3) -> Self {
        Self {
            min: first,
            max: first,
        }
    }

    /// Grows the extent so it includes `point`. Never shrinks.
    pub fn update(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Returns the per-axis minimum.
    #[must_use]
    pub fn min(&self) -> &Point3 {
        &self.min
    }

    /// Returns the per-axis maximum.
    #[must_use]
    pub fn max(&self) -> &Point3 {
        &self.max
    }

    /// Length of the box diagonal, `|max - min|`.
    ///
    /// This is the longest straight line that fits in the box, and serves as
    /// the scale of the curve for viewing distance and default image size.
    #[must_use]
    pub fn characteristic_length(&self) -> f64 {
        (self.max - self.min).norm()
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns whether `point` lies inside the box on every axis (inclusive).
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seed_sets_both_corners() {
        let p = Point3::new(1.0, -2.0, 3.0);
        let extent = Extent::from_point(p);
        assert_eq!(*extent.min(), p);
        assert_eq!(*extent.max(), p);
        assert_relative_eq!(extent.characteristic_length(), 0.0);
    }

    #[test]
    fn update_tracks_per_axis_extremes() {
        let mut extent = Extent::from_point(Point3::new(0.0, 0.0, 0.0));
        extent.update(&Point3::new(5.0, -1.0, 2.0));
        extent.update(&Point3::new(-3.0, 4.0, 1.0));
        assert_eq!(*extent.min(), Point3::new(-3.0, -1.0, 0.0));
        assert_eq!(*extent.max(), Point3::new(5.0, 4.0, 2.0));
    }

    #[test]
    fn corners_need_not_be_points_of_the_sequence() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(0.0, 1.0, 0.0);
        let mut extent = Extent::from_point(a);
        extent.update(&b);
        assert_eq!(*extent.max(), Point3::new(1.0, 1.0, 0.0));
        assert_ne!(*extent.max(), a);
        assert_ne!(*extent.max(), b);
    }

    #[test]
    fn never_shrinks() {
        let mut extent = Extent::from_point(Point3::new(-1.0, -1.0, -1.0));
        extent.update(&Point3::new(1.0, 1.0, 1.0));
        let before = extent;
        extent.update(&Point3::origin());
        assert_eq!(extent, before);
    }

    #[test]
    fn characteristic_length_of_3_4_5_box() {
        let mut extent = Extent::from_point(Point3::origin());
        extent.update(&Point3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(extent.characteristic_length(), 5.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let mut extent = Extent::from_point(Point3::origin());
        extent.update(&Point3::new(2.0, 2.0, 2.0));
        assert!(extent.contains(&Point3::new(2.0, 0.0, 1.0)));
        assert!(!extent.contains(&Point3::new(2.1, 0.0, 1.0)));
        assert_eq!(extent.center(), Point3::new(1.0, 1.0, 1.0));
    }
}
