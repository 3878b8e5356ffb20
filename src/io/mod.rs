//! Persistence of extents
//!
//! This module reads and writes bbox records on disk.

pub mod record;

pub use record::{load_bbox, save_bbox, BboxRecord};
