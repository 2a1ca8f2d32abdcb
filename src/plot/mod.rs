//! A small 2D plotting surface: plottable items, axis ranges, and canvases.

mod canvas;
mod color;

pub use canvas::{Canvas, CanvasPath, PathCommand, RasterCanvas, DEFAULT_LINE_WIDTH};
pub use color::Color;

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::math::Point2;

/// Smallest axis span used when mapping data to the canvas.
const MIN_SPAN: f64 = 1e-12;

/// Something that can draw itself onto a canvas.
pub trait Plotter {
    /// Draws onto `canvas`, mapping data coordinates through `ctx`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item cannot be prepared for the canvas size.
    fn plot(&self, canvas: &mut dyn Canvas, ctx: &PlotContext) -> Result<()>;

    /// Returns the item's axis-range view, if it reports one.
    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        None
    }
}

/// Something that knows which data ranges its drawing needs.
pub trait DataRanger {
    /// Returns the axis ranges to reserve, or `None` if there is nothing to show.
    ///
    /// # Errors
    ///
    /// Returns an error if computing the range fails.
    fn data_range(&self) -> Result<Option<DataRange>>;
}

/// Minimum and maximum along both plot axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRange {
    /// Left edge of the x axis.
    pub x_min: f64,
    /// Right edge of the x axis.
    pub x_max: f64,
    /// Bottom edge of the y axis.
    pub y_min: f64,
    /// Top edge of the y axis.
    pub y_max: f64,
}

impl DataRange {
    /// Creates a range from explicit bounds.
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

impl Default for DataRange {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// Maps data coordinates onto a canvas of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotContext {
    range: DataRange,
    width: f64,
    height: f64,
}

impl PlotContext {
    /// Creates a context that stretches `range` over a `width` x `height` canvas.
    #[must_use]
    pub fn new(range: DataRange, width: f64, height: f64) -> Self {
        Self {
            range,
            width,
            height,
        }
    }

    /// Returns the data range being displayed.
    #[must_use]
    pub fn range(&self) -> &DataRange {
        &self.range
    }

    /// Maps a data-space x value to a canvas x coordinate.
    #[must_use]
    pub fn transform_x(&self, x: f64) -> f64 {
        let span = (self.range.x_max - self.range.x_min).max(MIN_SPAN);
        (x - self.range.x_min) / span * self.width
    }

    /// Maps a data-space y value to a canvas y coordinate (y up).
    #[must_use]
    pub fn transform_y(&self, y: f64) -> f64 {
        let span = (self.range.y_max - self.range.y_min).max(MIN_SPAN);
        (y - self.range.y_min) / span * self.height
    }
}

/// A set of plottable items sharing one pair of axes.
pub struct Plot {
    items: Vec<Box<dyn Plotter>>,
    background: Color,
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

impl Plot {
    /// Creates an empty plot with a white background.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            background: Color::WHITE,
        }
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Adds an item to the plot.
    pub fn add(&mut self, item: impl Plotter + 'static) {
        self.items.push(Box::new(item));
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the plot has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Union of every item's reported range; `[0, 1] x [0, 1]` when no item
    /// reports one.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an item's [`DataRanger`].
    pub fn data_range(&self) -> Result<DataRange> {
        let mut range: Option<DataRange> = None;
        for ranger in self.items.iter().filter_map(|item| item.as_data_ranger()) {
            if let Some(r) = ranger.data_range()? {
                range = Some(range.map_or(r, |acc| acc.union(&r)));
            }
        }
        Ok(range.unwrap_or_default())
    }

    /// Paints the background and every item onto `canvas`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while ranging or drawing an item.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        let (width, height) = canvas.size();
        let ctx = PlotContext::new(self.data_range()?, width, height);

        let mut background = CanvasPath::new();
        background.move_to(Point2::new(0.0, 0.0));
        background.line_to(Point2::new(width, 0.0));
        background.line_to(Point2::new(width, height));
        background.line_to(Point2::new(0.0, height));
        background.close();
        canvas.set_color(self.background);
        canvas.fill(&background);

        for item in &self.items {
            canvas.set_color(Color::BLACK);
            canvas.set_line_width(DEFAULT_LINE_WIDTH);
            item.plot(canvas, &ctx)?;
        }
        debug!(items = self.items.len(), width, height, "drew plot");
        Ok(())
    }

    /// Draws the plot onto a `width` x `height` pixel canvas and writes it as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is unusable, an item fails to draw, or
    /// the file cannot be written.
    pub fn save_png(&self, width: f64, height: f64, path: impl AsRef<Path>) -> Result<()> {
        let mut canvas = RasterCanvas::new(width, height)?;
        self.draw(&mut canvas)?;
        canvas.save_png(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Draws a diagonal across its fixed range.
    struct Diagonal(DataRange);

    impl Plotter for Diagonal {
        fn plot(&self, canvas: &mut dyn Canvas, ctx: &PlotContext) -> Result<()> {
            let mut path = CanvasPath::new();
            path.move_to(Point2::new(
                ctx.transform_x(self.0.x_min),
                ctx.transform_y(self.0.y_min),
            ));
            path.line_to(Point2::new(
                ctx.transform_x(self.0.x_max),
                ctx.transform_y(self.0.y_max),
            ));
            canvas.stroke(&path);
            Ok(())
        }

        fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
            Some(self)
        }
    }

    impl DataRanger for Diagonal {
        fn data_range(&self) -> Result<Option<DataRange>> {
            Ok(Some(self.0))
        }
    }

    /// Draws nothing and reports no range.
    struct Silent;

    impl Plotter for Silent {
        fn plot(&self, _: &mut dyn Canvas, _: &PlotContext) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn context_maps_range_onto_canvas() {
        let ctx = PlotContext::new(DataRange::new(-1.0, 1.0, 10.0, 20.0), 200.0, 100.0);
        assert_relative_eq!(ctx.transform_x(-1.0), 0.0);
        assert_relative_eq!(ctx.transform_x(0.0), 100.0);
        assert_relative_eq!(ctx.transform_y(20.0), 100.0);
    }

    #[test]
    fn context_survives_zero_span() {
        let ctx = PlotContext::new(DataRange::new(3.0, 3.0, 3.0, 3.0), 10.0, 10.0);
        assert!(ctx.transform_x(3.0).is_finite());
    }

    #[test]
    fn data_range_is_union_of_rangers() {
        let mut plot = Plot::new();
        plot.add(Diagonal(DataRange::new(0.0, 1.0, 0.0, 1.0)));
        plot.add(Diagonal(DataRange::new(-2.0, 0.5, 0.5, 3.0)));
        plot.add(Silent);
        assert_eq!(plot.data_range().unwrap(), DataRange::new(-2.0, 1.0, 0.0, 3.0));
    }

    #[test]
    fn empty_plot_uses_unit_range() {
        assert_eq!(Plot::new().data_range().unwrap(), DataRange::default());
    }

    #[test]
    fn draw_paints_background_and_items() {
        let mut plot = Plot::new().with_background(Color::rgb(0, 0, 255));
        plot.add(Diagonal(DataRange::new(0.0, 1.0, 0.0, 1.0)));
        let mut canvas = RasterCanvas::new(20.0, 20.0).unwrap();
        plot.draw(&mut canvas).unwrap();
        let image = canvas.raster().image();
        // Top-left stays background, the diagonal crosses the middle.
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(10, 9).0[..3], [0, 0, 0]);
    }
}
