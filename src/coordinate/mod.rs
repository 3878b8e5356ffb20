//! Extent handling for rasters, images and point clouds
//!
//! This module provides the bounding box value type, the spatial reference
//! tag attached to it, and aggregations over collections of boxes.

mod aggregate;
mod bbox;
mod padding;
mod point;
mod srs;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::aggregate::{bounding_of_points, intersection, overlapping_pairs, union, Overlap};
pub use self::bbox::Bbox;
pub use self::padding::Padding;
pub use self::point::Point;
pub use self::srs::SpatialReference;
