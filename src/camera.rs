//! Camera placement derived from a curve's extent.

use crate::geometry::Extent;
use crate::math::{Point3, Vector3};

/// Camera placement handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Camera position.
    pub eye: Point3,
    /// Point the camera looks at.
    pub center: Point3,
    /// Vertical hint for the camera orientation.
    pub up: Vector3,
    /// Scale of the scene along the view direction.
    ///
    /// The renderer uses it to size the depth range, not as the actual
    /// camera-to-object distance.
    pub distance: f64,
}

/// Derives a [`ViewConfig`] from an extent.
///
/// Implementations must be pure: the same extent always yields the same view.
pub trait ViewStrategy: std::fmt::Debug {
    /// Computes the camera placement for `extent`.
    fn derive(&self, extent: &Extent) -> ViewConfig;
}

/// Fixed isometric view looking at the origin.
///
/// The eye sits at `(m, m, m)` where `m` is the largest of the three per-axis
/// maxima. Minima are not consulted and the view always targets the origin,
/// so curves far from the origin render off-center and curves lying entirely
/// in negative space put the eye at or behind the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoView;

impl ViewStrategy for IsoView {
    fn derive(&self, extent: &Extent) -> ViewConfig {
        let max = extent.max();
        let m = max.x.max(max.y).max(max.z);
        ViewConfig {
            eye: Point3::new(m, m, m),
            center: Point3::origin(),
            up: Vector3::z(),
            distance: extent.characteristic_length(),
        }
    }
}

/// Isometric view aimed at the middle of the extent.
///
/// The eye sits one characteristic length from the extent center along
/// `(1, 1, 1)`. Unlike [`IsoView`] this frames curves regardless of where
/// they lie, at the cost of different output for the same points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FittedIsoView;

impl ViewStrategy for FittedIsoView {
    fn derive(&self, extent: &Extent) -> ViewConfig {
        let center = extent.center();
        // Keep the eye off the center for single-point curves.
        let length = extent.characteristic_length().max(1.0);
        let eye = center + Vector3::repeat(1.0).normalize() * length;
        ViewConfig {
            eye,
            center,
            up: Vector3::z(),
            distance: length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn extent(min: Point3, max: Point3) -> Extent {
        let mut e = Extent::from_point(min);
        e.update(&max);
        e
    }

    #[test]
    fn iso_eye_uses_largest_maximum() {
        let view = IsoView.derive(&extent(
            Point3::new(-100.0, 0.0, 0.0),
            Point3::new(1.0, 7.0, 3.0),
        ));
        assert_eq!(view.eye, Point3::new(7.0, 7.0, 7.0));
        assert_eq!(view.center, Point3::origin());
        assert_eq!(view.up, Vector3::z());
    }

    #[test]
    fn iso_distance_is_diagonal() {
        let view = IsoView.derive(&extent(Point3::origin(), Point3::new(3.0, 4.0, 0.0)));
        assert_relative_eq!(view.distance, 5.0);
    }

    #[test]
    fn iso_is_deterministic() {
        let e = extent(Point3::new(-1.0, -2.0, -3.0), Point3::new(4.0, 5.0, 6.0));
        assert_eq!(IsoView.derive(&e), IsoView.derive(&e));
    }

    #[test]
    fn iso_negative_curve_puts_eye_behind_origin() {
        let view = IsoView.derive(&extent(
            Point3::new(-5.0, -5.0, -5.0),
            Point3::new(-1.0, -2.0, -3.0),
        ));
        assert_eq!(view.eye, Point3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn fitted_targets_extent_center() {
        let e = extent(Point3::new(10.0, 10.0, 10.0), Point3::new(12.0, 12.0, 12.0));
        let view = FittedIsoView.derive(&e);
        assert_eq!(view.center, Point3::new(11.0, 11.0, 11.0));
        assert_relative_eq!((view.eye - view.center).norm(), e.characteristic_length());
        assert_ne!(view, IsoView.derive(&e));
    }
}
