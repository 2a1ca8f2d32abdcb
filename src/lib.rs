//! Projects ordered 3D point sequences through an isometric perspective
//! camera and draws the result, either straight to a PNG file or as an item
//! on a small 2D plotting surface.

pub mod camera;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod math;
pub mod output;
pub mod plot;
pub mod projection;
pub mod raster;
pub mod render;

pub use camera::{FittedIsoView, IsoView, ViewConfig, ViewStrategy};
pub use curve::{BoxPolicy, Curve, CurveBuilder, WireframeShape};
pub use error::{OutputError, Plot3Error, RenderError, Result, SourceError};
pub use geometry::{Extent, PointSequence, XyzSource, Xyzs};
pub use output::{render_curve_to_file, render_to_file, write_png, RasterStyle, RenderOptions};
pub use plot::{Canvas, Color, DataRange, DataRanger, Plot, PlotContext, Plotter, RasterCanvas};
pub use projection::{project, segments, ProjectionParams, SegmentPolicy};
pub use render::ProjectedPath;
