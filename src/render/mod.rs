//! Minimal wireframe path renderer.
//!
//! Shapes hand the renderer their native 3D paths; the renderer chops them
//! into small steps, drops the parts that are hidden or fall outside the
//! view frustum, simplifies what is left, and maps it to device pixels.

mod paths;
mod scene;
mod shape;

pub use paths::{BoundingRect, Path2, Path3, ProjectedPath};
pub use scene::Scene;
pub use shape::{Aabb, Hit, Ray, Shape};
