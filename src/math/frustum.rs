use nalgebra::Perspective3;

use super::{Matrix4, Point3, Vector3, TOLERANCE};

/// Builds the combined view-projection matrix for a perspective camera.
///
/// The view looks from `eye` toward `center` with `up` as the vertical hint.
/// The projection is a right-handed OpenGL style frustum, so visible points
/// land inside the `[-1, 1]` cube after the perspective divide.
#[must_use]
pub fn view_projection(
    eye: &Point3,
    center: &Point3,
    up: &Vector3,
    fov_degrees: f64,
    aspect: f64,
    near: f64,
    far: f64,
) -> Matrix4 {
    let view = Matrix4::look_at_rh(eye, center, up);
    let projection = Perspective3::new(aspect, fov_degrees.to_radians(), near, far);
    projection.as_matrix() * view
}

/// Transforms `point` by `matrix` and applies the perspective divide.
///
/// Returns `None` when the point sits on or behind the camera plane
/// (`w <= 0`) or the matrix is degenerate, where the divide has no
/// meaningful result.
#[must_use]
pub fn project_point(matrix: &Matrix4, point: &Point3) -> Option<Point3> {
    let h = matrix * point.to_homogeneous();
    if h.w.is_nan() || h.w <= TOLERANCE {
        return None;
    }
    Some(Point3::new(h.x / h.w, h.y / h.w, h.z / h.w))
}
