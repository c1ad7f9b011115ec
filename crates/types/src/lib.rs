pub mod geometry;

pub use geometry::Size;
