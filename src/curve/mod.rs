//! The public 3D curve and its adapters to the renderer and plot surface.

mod plotter;
mod shape;

pub use shape::{BoxPolicy, WireframeShape};

use std::sync::Arc;

use tracing::debug;

use crate::camera::{IsoView, ViewConfig, ViewStrategy};
use crate::error::{Result, SourceError};
use crate::geometry::{Extent, PointSequence, XyzSource};
use crate::math::Point3;
use crate::plot::Color;
use crate::projection::{project, ProjectionParams, SegmentPolicy};
use crate::render::ProjectedPath;

/// An ordered 3D polyline ready to be projected.
///
/// The points and their extent are built together and never change
/// afterwards. Use [`CurveBuilder`] to accumulate points one by one.
#[derive(Debug, Clone)]
pub struct Curve {
    points: PointSequence,
    extent: Extent,
    color: Option<Color>,
    segment_policy: SegmentPolicy,
    box_policy: BoxPolicy,
    view: Arc<dyn ViewStrategy + Send + Sync>,
}

impl Curve {
    /// Copies `source` into a new curve.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] for a source without points, or
    /// [`SourceError::IndexOutOfRange`] if the source breaks its own length
    /// contract.
    pub fn new(source: &(impl XyzSource + ?Sized)) -> Result<Self> {
        let (points, extent) = PointSequence::build(source)?;
        debug!(
            points = points.len(),
            min = ?extent.min(),
            max = ?extent.max(),
            "built curve"
        );
        Ok(Self::from_parts(points, extent))
    }

    fn from_parts(points: PointSequence, extent: Extent) -> Self {
        Self {
            points,
            extent,
            color: None,
            segment_policy: SegmentPolicy::default(),
            box_policy: BoxPolicy::default(),
            view: Arc::new(IsoView),
        }
    }

    /// Sets the stroke color passed to the drawing layer.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets how projected paths are walked into segments when plotting.
    #[must_use]
    pub fn with_segment_policy(mut self, policy: SegmentPolicy) -> Self {
        self.segment_policy = policy;
        self
    }

    /// Sets which bounding box the curve reports to the renderer.
    #[must_use]
    pub fn with_box_policy(mut self, policy: BoxPolicy) -> Self {
        self.box_policy = policy;
        self
    }

    /// Replaces the default [`IsoView`] camera derivation.
    #[must_use]
    pub fn with_view_strategy(
        mut self,
        strategy: impl ViewStrategy + Send + Sync + 'static,
    ) -> Self {
        self.view = Arc::new(strategy);
        self
    }

    /// Returns the stroke color, if one was set.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the segment policy used when plotting.
    #[must_use]
    pub fn segment_policy(&self) -> SegmentPolicy {
        self.segment_policy
    }

    /// Returns the bounding box policy reported to the renderer.
    #[must_use]
    pub fn box_policy(&self) -> BoxPolicy {
        self.box_policy
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    /// Returns the extent of the points.
    #[must_use]
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Per-axis minimum. Not necessarily a point of the curve.
    #[must_use]
    pub fn min(&self) -> &Point3 {
        self.extent.min()
    }

    /// Per-axis maximum. Not necessarily a point of the curve.
    #[must_use]
    pub fn max(&self) -> &Point3 {
        self.extent.max()
    }

    /// Diagonal length of the extent.
    #[must_use]
    pub fn characteristic_length(&self) -> f64 {
        self.extent.characteristic_length()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the curve has no points. Built curves always have one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Camera placement for the current extent. Recomputed on every call.
    #[must_use]
    pub fn view(&self) -> ViewConfig {
        self.view.derive(&self.extent)
    }

    /// Wraps the curve for the renderer.
    #[must_use]
    pub fn shape(&self) -> WireframeShape<'_> {
        WireframeShape::new(self)
    }

    /// Projects the curve onto a `width` x `height` viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or viewport are unusable.
    pub fn project(
        &self,
        params: &ProjectionParams,
        width: f64,
        height: f64,
    ) -> Result<ProjectedPath> {
        project(self, params, width, height)
    }
}

/// Accumulates points and finalizes them into an immutable [`Curve`].
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    points: Vec<Point3>,
    extent: Option<Extent>,
}

impl CurveBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point at the end of the curve.
    pub fn push(&mut self, point: Point3) -> &mut Self {
        self.extent
            .get_or_insert_with(|| Extent::from_point(point))
            .update(&point);
        self.points.push(point);
        self
    }

    /// Returns the number of points pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether no point has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finalizes the curve.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] if no point was pushed.
    pub fn build(self) -> Result<Curve> {
        let extent = self.extent.ok_or(SourceError::Empty)?;
        Ok(Curve::from_parts(
            PointSequence::from_parts(self.points),
            extent,
        ))
    }
}

impl Extend<Point3> for CurveBuilder {
    fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}
