//! Standalone "points in, PNG out" rendering.

use std::path::Path;

use tracing::info;

use crate::curve::Curve;
use crate::error::Result;
use crate::geometry::XyzSource;
use crate::plot::Color;
use crate::projection::{segments, ProjectionParams, SegmentPolicy};
use crate::raster::Raster;
use crate::render::ProjectedPath;

/// Side length of the standalone output image, in pixels.
pub const DEFAULT_IMAGE_SIZE: f64 = 750.0;

/// Pen and paper for direct PNG output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterStyle {
    /// Stroke width in pixels.
    pub line_width: f64,
    /// Color of the lines.
    pub foreground: Color,
    /// Color of the paper.
    pub background: Color,
}

impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

/// Everything [`render_curve_to_file`] needs besides the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
    /// Lens and tessellation settings.
    pub params: ProjectionParams,
    /// Stroke settings. A curve color overrides `style.foreground`.
    pub style: RasterStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
            params: ProjectionParams::default(),
            style: RasterStyle::default(),
        }
    }
}

/// Builds a curve from `source` and writes a 750x750 PNG of its projection
/// to `path`.
///
/// # Errors
///
/// Returns an error if the source is empty or inconsistent, or if the file
/// cannot be written.
pub fn render_to_file(path: impl AsRef<Path>, source: &(impl XyzSource + ?Sized)) -> Result<()> {
    let curve = Curve::new(source)?;
    render_curve_to_file(path, &curve, &RenderOptions::default())
}

/// Projects `curve` with `options` and writes the result as a PNG file.
///
/// # Errors
///
/// Returns an error if the options are unusable or the file cannot be written.
pub fn render_curve_to_file(
    path: impl AsRef<Path>,
    curve: &Curve,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    let projected = curve.project(&options.params, options.width, options.height)?;
    let style = RasterStyle {
        foreground: curve.color().unwrap_or(options.style.foreground),
        ..options.style
    };
    write_png(&projected, options.width, options.height, path, &style)?;
    info!(
        path = %path.display(),
        points = curve.len(),
        paths = projected.len(),
        "rendered curve"
    );
    Ok(())
}

/// Rasterizes every inner path of `projected`, fully connected, and writes
/// the image as PNG.
///
/// Coordinates are device pixels with the origin at the bottom left.
///
/// # Errors
///
/// Returns [`OutputError::InvalidSize`](crate::error::OutputError::InvalidSize)
/// for an unusable image size, or an I/O or encoding error from writing.
pub fn write_png(
    projected: &ProjectedPath,
    width: f64,
    height: f64,
    path: impl AsRef<Path>,
    style: &RasterStyle,
) -> Result<()> {
    let mut raster = Raster::new(width, height, style.background)?;
    for inner in projected {
        for (a, b) in segments(inner, SegmentPolicy::Complete) {
            raster.draw_line(a, b, style.line_width, style.foreground);
        }
    }
    raster.save_png(path)
}
