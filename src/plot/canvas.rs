use std::path::Path;

use crate::error::Result;
use crate::math::Point2;
use crate::raster::Raster;

use super::Color;

/// Default stroke width, in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// A single path-building command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path at the point.
    MoveTo(Point2),
    /// Extend the current sub-path to the point.
    LineTo(Point2),
    /// Connect the current sub-path back to its start.
    Close,
}

/// A path built from move/line commands, in canvas coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasPath {
    commands: Vec<PathCommand>,
}

impl CanvasPath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sub-path at `p`.
    pub fn move_to(&mut self, p: Point2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    /// Extends the current sub-path to `p`.
    pub fn line_to(&mut self, p: Point2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Closes the current sub-path.
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Returns the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns whether no command has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Splits the path into polylines, one per sub-path.
    ///
    /// A `LineTo` without a preceding `MoveTo` starts a sub-path at its own
    /// point. Closed sub-paths repeat their first point at the end.
    #[must_use]
    pub fn subpaths(&self) -> Vec<Vec<Point2>> {
        let mut out = Vec::new();
        let mut current: Vec<Point2> = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if !current.is_empty() {
                        out.push(std::mem::take(&mut current));
                    }
                    current.push(p);
                }
                PathCommand::LineTo(p) => current.push(p),
                PathCommand::Close => {
                    if let Some(&first) = current.first() {
                        current.push(first);
                        out.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
        out
    }
}

/// A 2D drawing surface with a y-up coordinate system.
pub trait Canvas {
    /// Returns the drawable `(width, height)` in canvas units.
    fn size(&self) -> (f64, f64);

    /// Sets the color used by subsequent strokes and fills.
    fn set_color(&mut self, color: Color);

    /// Sets the width used by subsequent strokes.
    fn set_line_width(&mut self, width: f64);

    /// Strokes every sub-path of `path`.
    fn stroke(&mut self, path: &CanvasPath);

    /// Fills every sub-path of `path` as a polygon.
    fn fill(&mut self, path: &CanvasPath);
}

/// A [`Canvas`] that rasterizes into an RGBA image.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    raster: Raster,
    color: Color,
    line_width: f64,
}

impl RasterCanvas {
    /// Creates a `width` x `height` pixel canvas with a white background.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::InvalidSize`](crate::error::OutputError::InvalidSize)
    /// if the size is not a usable pixel count.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            raster: Raster::new(width, height, Color::WHITE)?,
            color: Color::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
        })
    }

    /// Returns the rasterized pixels.
    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Writes the canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be encoded or written.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.raster.save_png(path)
    }
}

impl Canvas for RasterCanvas {
    fn size(&self) -> (f64, f64) {
        let (w, h) = self.raster.size();
        (f64::from(w), f64::from(h))
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke(&mut self, path: &CanvasPath) {
        for sub in path.subpaths() {
            self.raster.draw_polyline(&sub, self.line_width, self.color);
        }
    }

    fn fill(&mut self, path: &CanvasPath) {
        for sub in path.subpaths() {
            self.raster.fill_polygon(&sub, self.color);
        }
    }
}
