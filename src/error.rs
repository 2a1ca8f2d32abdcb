use thiserror::Error;

/// Top-level error type for curve projection and output.
#[derive(Debug, Error)]
pub enum Plot3Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors raised while copying points out of a point source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("point source is empty; at least one point is required")]
    Empty,

    #[error("coordinate slices differ in length (x = {x}, y = {y}, z = {z})")]
    LengthMismatch { x: usize, y: usize, z: usize },

    #[error("point source has no point at index {index} despite reporting length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to projection parameters handed to the renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to writing rendered output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Convenience type alias for results using [`Plot3Error`].
pub type Result<T> = std::result::Result<T, Plot3Error>;
