//! Software rasterizer over an RGBA image.
//!
//! Coordinates are y-up with the origin at the bottom-left corner of the
//! image, the same convention the renderer and plot canvases use.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::math::Point2;
use crate::plot::Color;

/// Largest accepted image side, in pixels.
const MAX_SIDE: f64 = 65_535.0;

/// An RGBA pixel buffer with line and polygon primitives.
#[derive(Debug, Clone)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    /// Creates a `width` x `height` raster filled with `background`.
    ///
    /// Fractional sizes are rounded to the nearest pixel.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::InvalidSize`] unless both sides round to a
    /// positive pixel count no larger than 65535.
    pub fn new(width: f64, height: f64, background: Color) -> Result<Self> {
        let w = pixel_count(width).ok_or(OutputError::InvalidSize { width, height })?;
        let h = pixel_count(height).ok_or(OutputError::InvalidSize { width, height })?;
        Ok(Self {
            image: RgbaImage::from_pixel(w, h, background.into()),
        })
    }

    /// Returns the size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Returns the underlying image (rows run top to bottom).
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Draws an anti-aliased segment of the given width with round caps.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn draw_line(&mut self, a: Point2, b: Point2, width: f64, color: Color) {
        let (w, h) = self.image.dimensions();
        let half = (width / 2.0).max(0.5);
        let (a, b) = (self.flip(a), self.flip(b));

        let x0 = (a.x.min(b.x) - half - 1.0).floor().max(0.0);
        let y0 = (a.y.min(b.y) - half - 1.0).floor().max(0.0);
        let x1 = (a.x.max(b.x) + half + 1.0).ceil().min(f64::from(w) - 1.0);
        let y1 = (a.y.max(b.y) + half + 1.0).ceil().min(f64::from(h) - 1.0);
        if x0 > x1 || y0 > y1 {
            return;
        }

        for py in (y0 as u32)..=(y1 as u32) {
            for px in (x0 as u32)..=(x1 as u32) {
                let center = Point2::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
                let coverage = (half + 0.5 - segment_distance(&center, &a, &b)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    blend(self.image.get_pixel_mut(px, py), color, coverage);
                }
            }
        }
    }

    /// Draws every consecutive pair of `points` as a segment.
    pub fn draw_polyline(&mut self, points: &[Point2], width: f64, color: Color) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], width, color);
        }
    }

    /// Fills a polygon with the even-odd rule, sampling pixel centers.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn fill_polygon(&mut self, points: &[Point2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let (w, h) = self.image.dimensions();
        let flipped: Vec<Point2> = points.iter().map(|p| self.flip(*p)).collect();
        let px_color: Rgba<u8> = color.into();

        let mut crossings = Vec::new();
        for py in 0..h {
            let y = f64::from(py) + 0.5;
            crossings.clear();
            for (i, a) in flipped.iter().enumerate() {
                let b = &flipped[(i + 1) % flipped.len()];
                if (a.y <= y) != (b.y <= y) {
                    crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().max(0.0);
                let end = (span[1] - 0.5).floor().min(f64::from(w) - 1.0);
                if start > end {
                    continue;
                }
                for px in (start as u32)..=(end as u32) {
                    if color.a == u8::MAX {
                        self.image.put_pixel(px, py, px_color);
                    } else {
                        blend(self.image.get_pixel_mut(px, py), color, 1.0);
                    }
                }
            }
        }
    }

    /// Encodes the raster as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Image`] if encoding or writing the file fails.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(OutputError::from)?;
        let (w, h) = self.size();
        debug!(path = %path.display(), width = w, height = h, "wrote png");
        Ok(())
    }

    /// Converts a y-up point to image row coordinates.
    fn flip(&self, p: Point2) -> Point2 {
        Point2::new(p.x, f64::from(self.image.height()) - p.y)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_count(side: f64) -> Option<u32> {
    let rounded = side.round();
    (1.0..=MAX_SIDE).contains(&rounded).then_some(rounded as u32)
}

/// Source-over blend of `color` scaled by `coverage` onto `dst`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(dst: &mut Rgba<u8>, color: Color, coverage: f64) {
    let alpha = f64::from(color.a) / 255.0 * coverage;
    let src = [color.r, color.g, color.b];
    for (d, s) in dst.0.iter_mut().zip(src) {
        *d = (f64::from(s) * alpha + f64::from(*d) * (1.0 - alpha)).round() as u8;
    }
    let da = f64::from(dst.0[3]) / 255.0;
    dst.0[3] = ((alpha + da * (1.0 - alpha)) * 255.0).round() as u8;
}

fn segment_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
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
    use crate::error::Plot3Error;

    fn is_black(raster: &Raster, x: u32, row: u32) -> bool {
        raster.image().get_pixel(x, row).0 == [0, 0, 0, 255]
    }

    #[test]
    fn rejects_empty_and_huge_sizes() {
        assert!(matches!(
            Raster::new(0.0, 10.0, Color::WHITE),
            Err(Plot3Error::Output(OutputError::InvalidSize { .. }))
        ));
        assert!(Raster::new(10.0, 1e9, Color::WHITE).is_err());
        assert!(Raster::new(f64::NAN, 10.0, Color::WHITE).is_err());
    }

    #[test]
    fn rounds_fractional_sizes() {
        let raster = Raster::new(287.9, 288.2, Color::WHITE).unwrap();
        assert_eq!(raster.size(), (288, 288));
    }

    #[test]
    fn horizontal_line_is_drawn_y_up() {
        let mut raster = Raster::new(20.0, 20.0, Color::WHITE).unwrap();
        raster.draw_line(
            Point2::new(2.0, 2.5),
            Point2::new(18.0, 2.5),
            3.0,
            Color::BLACK,
        );
        // y = 2.5 from the bottom is image row 17.
        assert!(is_black(&raster, 10, 17));
        assert_eq!(raster.image().get_pixel(10, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn fill_covers_interior_only() {
        let mut raster = Raster::new(10.0, 10.0, Color::WHITE).unwrap();
        raster.fill_polygon(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 0.0),
                Point2::new(5.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            Color::BLACK,
        );
        assert!(is_black(&raster, 2, 5));
        assert!(!is_black(&raster, 7, 5));
    }
}
