use crate::error::Result;
use crate::math::Point2;
use crate::plot::{Canvas, CanvasPath, DataRange, DataRanger, PlotContext, Plotter};
use crate::projection::{project, segments, ProjectionParams};

use super::Curve;

impl Plotter for Curve {
    /// Projects at the canvas size and strokes every path through the plot's
    /// data-to-canvas transforms.
    ///
    /// Projected points are mapped back into the frame
    /// [`DataRanger::data_range`] measures in (a square viewport one
    /// characteristic length wide) before the transforms apply. The
    /// perspective divides x by the viewport aspect ratio, so x is scaled by
    /// `width / height` around the viewport center on the way back.
    fn plot(&self, canvas: &mut dyn Canvas, ctx: &PlotContext) -> Result<()> {
        let (width, height) = canvas.size();
        let projected = project(self, &ProjectionParams::default(), width, height)?;
        if let Some(color) = self.color() {
            canvas.set_color(color);
        }

        let to_probe = probe_frame(self.characteristic_length(), width, height);
        let to_canvas = |p: Point2| {
            let q = to_probe(p);
            Point2::new(ctx.transform_x(q.x), ctx.transform_y(q.y))
        };
        for path in &projected {
            let mut stroke = CanvasPath::new();
            for (a, b) in segments(path, self.segment_policy()) {
                stroke.move_to(to_canvas(a));
                stroke.line_to(to_canvas(b));
            }
            canvas.stroke(&stroke);
        }
        Ok(())
    }

    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        Some(self)
    }
}

impl DataRanger for Curve {
    /// Projects at a square viewport one characteristic length wide and
    /// returns the 2D box of the result.
    ///
    /// Curves whose points all coincide have nothing to project and report
    /// no range.
    fn data_range(&self) -> Result<Option<DataRange>> {
        let size = self.characteristic_length();
        if size <= crate::math::TOLERANCE {
            return Ok(None);
        }
        let projected = project(self, &ProjectionParams::default(), size, size)?;
        Ok(projected
            .bounding_box()
            .map(|rect| DataRange::new(rect.min.x, rect.max.x, rect.min.y, rect.max.y)))
    }
}

/// Maps device points of a `width` x `height` projection onto the
/// `size` x `size` square viewport used for data ranges.
fn probe_frame(size: f64, width: f64, height: f64) -> impl Fn(Point2) -> Point2 {
    let aspect = width / height;
    move |p: Point2| {
        let ndc_x = (2.0 * p.x / width - 1.0) * aspect;
        Point2::new((ndc_x + 1.0) * size / 2.0, p.y * size / height)
    }
}
