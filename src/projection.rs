//! Curve → camera → renderer pipeline, and the walk from projected paths to
//! line segments.

use tracing::debug;

use crate::curve::Curve;
use crate::error::{RenderError, Result};
use crate::math::{Point2, TOLERANCE};
use crate::render::{ProjectedPath, Scene};

/// Most extreme viewport aspect ratio (either way) the camera accepts.
const MAX_ASPECT: f64 = 1e9;

/// Lens and tessellation settings for a projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Distance of the near clipping plane from the eye.
    pub near: f64,
    /// Maximum length of a chopped piece before clipping. Smaller values
    /// give smoother output at higher cost.
    pub step: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            near: 0.1,
            step: 0.01,
        }
    }
}

impl ProjectionParams {
    /// Checks the parameters against a viewport size.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameters`] if the viewport is not
    /// positive and finite or its aspect ratio is beyond 1e9 either way, the
    /// field of view is outside `(0, 180)`, `near` is not above
    /// [`TOLERANCE`], or `step` is not positive.
    pub fn validate(&self, width: f64, height: f64) -> Result<()> {
        let invalid =
            |msg: String| -> Result<()> { Err(RenderError::InvalidParameters(msg).into()) };
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return invalid(format!("viewport must be positive, got {width}x{height}"));
        }
        let aspect = width / height;
        if !(aspect.is_finite() && (MAX_ASPECT.recip()..=MAX_ASPECT).contains(&aspect)) {
            return invalid(format!("viewport aspect ratio is degenerate, got {width}x{height}"));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return invalid(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov_degrees
            ));
        }
        if !(self.near.is_finite() && self.near > TOLERANCE) {
            return invalid(format!("near plane must be positive, got {}", self.near));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return invalid(format!("step must be positive, got {}", self.step));
        }
        Ok(())
    }
}

/// Projects `curve` onto a `width` x `height` viewport.
///
/// The curve is wrapped as the only shape of a fresh scene, the camera is
/// derived from its extent, and the renderer does the rest. Nothing is
/// cached; every call recomputes the whole pipeline.
///
/// # Errors
///
/// Returns [`RenderError::InvalidParameters`] if `params` or the viewport
/// size are unusable.
pub fn project(
    curve: &Curve,
    params: &ProjectionParams,
    width: f64,
    height: f64,
) -> Result<ProjectedPath> {
    params.validate(width, height)?;

    let mut scene = Scene::new();
    scene.add(Box::new(curve.shape()));

    let view = curve.view();
    let projected = scene.render(
        &view.eye,
        &view.center,
        &view.up,
        width,
        height,
        params.fov_degrees,
        params.near,
        view.distance,
        params.step,
    );

    debug!(
        points = curve.len(),
        paths = projected.len(),
        projected_points = projected.point_count(),
        width,
        height,
        "projected curve"
    );
    Ok(projected)
}

/// How a projected path is turned into line segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentPolicy {
    /// Pairs `(i, i + 1)` for `i` in `0..n - 2`: the last segment of every
    /// path is never drawn. Matches historical plot output.
    #[default]
    Legacy,
    /// Every consecutive pair is connected.
    Complete,
}

impl SegmentPolicy {
    /// Number of segments emitted for a path of `n` points.
    #[must_use]
    pub fn segment_count(self, n: usize) -> usize {
        match self {
            Self::Legacy => n.saturating_sub(2),
            Self::Complete => n.saturating_sub(1),
        }
    }
}

/// Walks `path` pairwise according to `policy`.
pub fn segments(
    path: &[Point2],
    policy: SegmentPolicy,
) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    path.windows(2)
        .take(policy.segment_count(path.len()))
        .map(|pair| (pair[0], pair[1]))
}
