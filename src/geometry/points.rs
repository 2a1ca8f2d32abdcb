use crate::error::{Result, SourceError};
use crate::math::Point3;

use super::{Extent, XyzSource};

/// Ordered, owned copy of a curve's points.
///
/// Point `i` connects to point `i + 1`, so the order is the polyline's
/// connectivity and is never changed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    points: Vec<Point3>,
}

impl PointSequence {
    /// Copies every point of `source` in index order and computes their extent
    /// in the same pass.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] if the source has no points, or
    /// [`SourceError::IndexOutOfRange`] if it fails to produce a point below
    /// its own reported length.
    pub fn build(source: &(impl XyzSource + ?Sized)) -> Result<(Self, Extent)> {
        let len = source.len();
        if len == 0 {
            return Err(SourceError::Empty.into());
        }
        let first = source
            .xyz(0)
            .ok_or(SourceError::IndexOutOfRange { index: 0, len })?;

        let mut extent = Extent::from_point(first);
        let mut points = Vec::with_capacity(len);
        points.push(first);
        for index in 1..len {
            let p = source
                .xyz(index)
                .ok_or(SourceError::IndexOutOfRange { index, len })?;
            extent.update(&p);
            points.push(p);
        }
        debug_assert!(points.iter().all(|p| extent.contains(p)));

        Ok((Self { points }, extent))
    }

    /// Wraps points whose extent the caller has already tracked.
    pub(crate) fn from_parts(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the sequence has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point3> {
        self.points.get(index)
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }
}

impl XyzSource for PointSequence {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn xyz(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied()
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Plot3Error;
    use crate::geometry::Xyzs;

    fn sample() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, -1.0, 2.0),
            Point3::new(-2.0, 4.0, 1.0),
            Point3::new(1.0, 1.0, -5.0),
        ]
    }

    #[test]
    fn preserves_source_order() {
        let source = sample();
        let (seq, _) = PointSequence::build(&source).unwrap();
        assert_eq!(seq.len(), source.len());
        for (i, p) in source.iter().enumerate() {
            assert_eq!(seq.get(i), Some(p));
        }
    }

    #[test]
    fn extent_matches_true_extrema() {
        let (seq, extent) = PointSequence::build(&sample()).unwrap();
        assert_eq!(*extent.min(), Point3::new(-2.0, -1.0, -5.0));
        assert_eq!(*extent.max(), Point3::new(3.0, 4.0, 2.0));
        assert!(seq.iter().all(|p| extent.contains(p)));
    }

    #[test]
    fn single_point_is_enough() {
        let (seq, extent) = PointSequence::build(&[Point3::new(1.0, 2.0, 3.0)][..]).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(extent.min(), extent.max());
    }

    #[test]
    fn empty_source_is_rejected() {
        let err = PointSequence::build(&Xyzs::default()).unwrap_err();
        assert!(matches!(err, Plot3Error::Source(SourceError::Empty)));
    }
}
