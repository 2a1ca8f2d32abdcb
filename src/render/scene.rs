use tracing::trace;

use crate::math::frustum::{project_point, view_projection};
use crate::math::{Point2, Point3, Vector3};

use super::paths::{chop, simplify, split_filter};
use super::{Hit, Path2, ProjectedPath, Ray, Shape};

/// Simplification threshold applied in clip space after chopping.
const SIMPLIFY_THRESHOLD: f64 = 1e-6;

/// A collection of shapes rendered together from one camera.
#[derive(Default)]
pub struct Scene<'a> {
    shapes: Vec<Box<dyn Shape + 'a>>,
}

impl<'a> Scene<'a> {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a shape to the scene.
    pub fn add(&mut self, shape: Box<dyn Shape + 'a>) {
        self.shapes.push(shape);
    }

    /// Lets every shape build its acceleration data.
    pub fn compile(&mut self) {
        for shape in &mut self.shapes {
            shape.compile();
        }
    }

    /// Collects the 3D paths of every shape.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<Point3>> {
        self.shapes.iter().flat_map(|s| s.paths()).collect()
    }

    /// Closest hit of `ray` against every shape whose bounding box it crosses.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Hit {
        self.shapes
            .iter()
            .filter(|s| s.bounding_box().intersect(ray).is_some())
            .fold(Hit::NONE, |best, s| best.min(s.intersect(ray)))
    }

    /// Returns whether `point` can be seen from `eye` without any shape in between.
    #[must_use]
    pub fn visible(&self, eye: &Point3, point: &Point3) -> bool {
        let v = eye - point;
        let len = v.norm();
        if len < crate::math::TOLERANCE {
            return true;
        }
        let hit = self.intersect(&Ray::new(*point, v / len));
        hit.t >= len
    }

    /// Renders the scene into device-space 2D paths.
    ///
    /// The camera looks from `eye` at `center` with a vertical field of view
    /// of `fov_degrees`. The depth range runs from `near` to
    /// `|eye - center| + distance`. Paths are chopped into pieces of at most
    /// `step` before clipping so that partially visible segments keep their
    /// visible part. Output coordinates span `[0, width] x [0, height]` with
    /// the origin at the bottom left.
    ///
    /// Parameters are expected to be validated by the caller: positive
    /// finite sizes, `near`, and `step`, and a field of view inside `(0, 180)`.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn render(
        &mut self,
        eye: &Point3,
        center: &Point3,
        up: &Vector3,
        width: f64,
        height: f64,
        fov_degrees: f64,
        near: f64,
        distance: f64,
        step: f64,
    ) -> ProjectedPath {
        let far = (eye - center).norm() + distance;
        let far = far.max(near * 2.0);
        let matrix = view_projection(eye, center, up, fov_degrees, width / height, near, far);

        self.compile();
        let mut out: Vec<Path2> = Vec::new();
        for path in self.paths() {
            let chopped = chop(&path, step);
            let clipped = split_filter(&chopped, |p| {
                if !self.visible(eye, p) {
                    return None;
                }
                project_point(&matrix, p).filter(in_clip_cube)
            });
            for piece in clipped {
                let piece = simplify(&piece, SIMPLIFY_THRESHOLD);
                out.push(
                    piece
                        .iter()
                        .map(|p| Point2::new((p.x + 1.0) * width / 2.0, (p.y + 1.0) * height / 2.0))
                        .collect(),
                );
            }
        }

        trace!(
            shapes = self.shapes.len(),
            paths = out.len(),
            far,
            "rendered scene"
        );
        ProjectedPath::new(out)
    }
}

fn in_clip_cube(p: &Point3) -> bool {
    (-1.0..=1.0).contains(&p.x) && (-1.0..=1.0).contains(&p.y) && (-1.0..=1.0).contains(&p.z)
}
