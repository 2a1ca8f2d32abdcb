pub mod bounds;
pub mod points;
pub mod xyz;

pub use bounds::Extent;
pub use points::PointSequence;
pub use xyz::{XyzSource, Xyzs};
