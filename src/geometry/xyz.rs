use crate::error::{Result, SourceError};
use crate::math::Point3;

/// A source of ordered `(x, y, z)` triples.
///
/// Consumers only ever probe indices in `0..len()`. Returning `None` for an
/// index inside that range breaks the contract and is reported as
/// [`SourceError::IndexOutOfRange`] by the copying side.
pub trait XyzSource {
    /// Returns the number of triples.
    fn len(&self) -> usize;

    /// Returns the triple at `index`, or `None` if there is none.
    fn xyz(&self, index: usize) -> Option<Point3>;

    /// Returns whether the source holds no triples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An owned, ordered list of points that itself acts as a point source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Xyzs(pub Vec<Point3>);

impl Xyzs {
    /// Deep-copies every triple of `source` in index order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::IndexOutOfRange`] if the source has no triple
    /// at an index below its own reported length.
    pub fn copy_from(source: &(impl XyzSource + ?Sized)) -> Result<Self> {
        let len = source.len();
        let mut points = Vec::with_capacity(len);
        for index in 0..len {
            let p = source
                .xyz(index)
                .ok_or(SourceError::IndexOutOfRange { index, len })?;
            points.push(p);
        }
        Ok(Self(points))
    }

    /// Zips three parallel coordinate slices into points (`x[i]`, `y[i]`, `z[i]`).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::LengthMismatch`] if the slices differ in length.
    /// Nothing is copied in that case.
    pub fn from_slices(x: &[f64], y: &[f64], z: &[f64]) -> Result<Self> {
        if x.len() != y.len() || y.len() != z.len() {
            return Err(SourceError::LengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            }
            .into());
        }
        let points = x
            .iter()
            .zip(y)
            .zip(z)
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
            .collect();
        Ok(Self(points))
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3] {
        &self.0
    }
}

impl From<Vec<Point3>> for Xyzs {
    fn from(points: Vec<Point3>) -> Self {
        Self(points)
    }
}

impl XyzSource for Xyzs {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn xyz(&self, index: usize) -> Option<Point3> {
        self.0.get(index).copied()
    }
}

impl XyzSource for [Point3] {
    fn len(&self) -> usize {
        <[Point3]>::len(self)
    }

    fn xyz(&self, index: usize) -> Option<Point3> {
        self.get(index).copied()
    }
}

impl XyzSource for Vec<Point3> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn xyz(&self, index: usize) -> Option<Point3> {
        self.get(index).copied()
    }
}
