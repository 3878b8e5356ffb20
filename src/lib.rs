//! Bounding box algebra for satellite stereo photogrammetry pipelines
//!
//! Extents of rasters, images and point clouds are represented by [`Bbox`],
//! an immutable, always-valid axis-aligned box tagged with a
//! [`SpatialReference`]. The aggregation functions compute the common area
//! and the enclosing extent of several boxes, which is how a pipeline decides
//! which products overlap and what region to process.

pub mod errors;
pub mod coordinate;
pub mod io;
pub mod config;
pub mod utils;
pub mod commands;

pub use coordinate::{bounding_of_points, intersection, overlapping_pairs, union};
pub use coordinate::{Bbox, Overlap, Padding, Point, SpatialReference};
pub use errors::{ExtentError, ExtentResult};
pub use io::BboxRecord;
