use crate::math::{Point2, Point3};

/// An ordered 3D polyline.
pub type Path3 = Vec<Point3>;

/// An ordered 2D polyline in device coordinates.
pub type Path2 = Vec<Point2>;

/// Axis-aligned 2D rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

/// Output of a render call: zero or more disjoint 2D polylines.
///
/// A single continuous input usually yields one inner path, but clipping and
/// occlusion can split it into several or remove it entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedPath {
    paths: Vec<Path2>,
}

impl ProjectedPath {
    /// Wraps already projected paths.
    #[must_use]
    pub fn new(paths: Vec<Path2>) -> Self {
        Self { paths }
    }

    /// Returns the inner paths.
    #[must_use]
    pub fn paths(&self) -> &[Path2] {
        &self.paths
    }

    /// Returns the number of inner paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns whether there are no inner paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the inner paths.
    pub fn iter(&self) -> std::slice::Iter<'_, Path2> {
        self.paths.iter()
    }

    /// Total number of points across every inner path.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }

    /// Returns the 2D box around every point, or `None` if there are none.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingRect> {
        let mut points = self.paths.iter().flatten();
        let first = *points.next()?;
        let rect = points.fold(
            BoundingRect {
                min: first,
                max: first,
            },
            |rect, p| BoundingRect {
                min: rect.min.inf(p),
                max: rect.max.sup(p),
            },
        );
        Some(rect)
    }
}

impl<'a> IntoIterator for &'a ProjectedPath {
    type Item = &'a Path2;
    type IntoIter = std::slice::Iter<'a, Path2>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Subdivides every segment so no piece is longer than `step`.
///
/// Paths with fewer than two points have no segments and come back empty.
pub(crate) fn chop(path: &[Point3], step: f64) -> Path3 {
    let mut result = Vec::new();
    for (i, pair) in path.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let v = b - a;
        let len = v.norm();
        if i == 0 {
            result.push(a);
        }
        let mut d = step;
        while d < len {
            result.push(a + v * (d / len));
            d += step;
        }
        result.push(b);
    }
    result
}

/// Maps every point through `filter`, splitting the path wherever a point is
/// rejected. Pieces shorter than two points are discarded.
pub(crate) fn split_filter<F>(path: &[Point3], mut filter: F) -> Vec<Path3>
where
    F: FnMut(&Point3) -> Option<Point3>,
{
    let mut result = Vec::new();
    let mut current = Vec::new();
    for p in path {
        if let Some(q) = filter(p) {
            current.push(q);
        } else {
            if current.len() > 1 {
                result.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }
    if current.len() > 1 {
        result.push(current);
    }
    result
}

/// Ramer–Douglas–Peucker simplification.
///
/// Keeps the endpoints and every point farther than `threshold` from the
/// chord of its enclosing range. Runs on an explicit stack since chopped
/// paths can hold tens of thousands of points.
pub(crate) fn simplify(path: &[Point3], threshold: f64) -> Path3 {
    let n = path.len();
    if n < 3 {
        return path.to_vec();
    }
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut ranges = vec![(0, n - 1)];
    while let Some((start, end)) = ranges.pop() {
        let (a, b) = (&path[start], &path[end]);
        let mut index = 0;
        let mut distance = 0.0;
        for (i, p) in path.iter().enumerate().take(end).skip(start + 1) {
            let d = segment_distance(p, a, b);
            if d > distance {
                index = i;
                distance = d;
            }
        }
        if distance > threshold {
            keep[index] = true;
            ranges.push((start, index));
            ranges.push((index, end));
        }
    }

    path.iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

/// Distance from `p` to the segment `a`–`b`.
fn segment_distance(p: &Point3, a: &Point3, b: &Point3) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < f64::EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn chop_subdivides_by_step() {
        let path = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let chopped = chop(&path, 0.25);
        assert_eq!(chopped.len(), 5);
        assert_relative_eq!(chopped[1].x, 0.25);
        assert_eq!(*chopped.last().unwrap(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn chop_keeps_every_original_vertex() {
        let path = vec![
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let chopped = chop(&path, 0.3);
        for v in &path {
            assert!(chopped.contains(v));
        }
    }

    #[test]
    fn chop_single_point_is_empty() {
        assert!(chop(&[Point3::origin()], 0.1).is_empty());
    }

    #[test]
    fn split_filter_breaks_at_rejected_points() {
        let path: Vec<_> = (0..7).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        // Reject x == 2 and x == 5; the lone point at x == 6 is dropped.
        let pieces = split_filter(&path, |p| {
            (p.x != 2.0 && p.x != 5.0).then_some(*p)
        });
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].len(), 2);
        assert_eq!(pieces[1].len(), 2);
    }

    #[test]
    fn simplify_removes_collinear_points() {
        let chopped = chop(
            &[Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)],
            0.01,
        );
        let simple = simplify(&chopped, 1e-6);
        assert_eq!(
            simple,
            vec![
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0)
            ]
        );
    }

    #[test]
    fn bounding_box_spans_all_paths() {
        let projected = ProjectedPath::new(vec![
            vec![Point2::new(1.0, 5.0), Point2::new(2.0, 3.0)],
            vec![Point2::new(-1.0, 4.0)],
        ]);
        let rect = projected.bounding_box().unwrap();
        assert_eq!(rect.min, Point2::new(-1.0, 3.0));
        assert_eq!(rect.max, Point2::new(2.0, 5.0));
        assert_eq!(projected.point_count(), 3);
    }

    #[test]
    fn bounding_box_of_nothing() {
        assert!(ProjectedPath::default().bounding_box().is_none());
    }
}
