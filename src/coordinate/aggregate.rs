//! Aggregations over collections of extents
//!
//! These functions decide which products overlap and what extent to process:
//! the common area of several footprints, the extent enclosing all of them,
//! and the extent of a point cloud. They are pure functions of their inputs.
//!
//! All boxes handed to one aggregation must carry the same spatial reference
//! (or all carry none). Mixed references are refused with `CrsMismatch`, as
//! combining bounds from different frames has no geometric meaning.

use log::debug;

use super::bbox::Bbox;
use super::point::Point;
use super::srs::SpatialReference;
use crate::errors::{ExtentError, ExtentResult};

/// Overlap between two footprints of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    /// Index of the first footprint
    pub first: usize,
    /// Index of the second footprint (always greater than `first`)
    pub second: usize,
    /// Common extent of the two footprints
    pub extent: Bbox,
}

/// Common area of all boxes
///
/// # Returns
/// * `Ok(Some(bbox))` - the region shared by every box (possibly degenerate when boxes only touch)
/// * `Ok(None)` - the boxes share no common area
/// * `Err(EmptyInput)` / `Err(CrsMismatch)` - caller errors
pub fn intersection(boxes: &[Bbox]) -> ExtentResult<Option<Bbox>> {
    let srs = common_srs(boxes)?;

    let xmin = boxes.iter().map(Bbox::xmin).fold(f64::NEG_INFINITY, f64::max);
    let xmax = boxes.iter().map(Bbox::xmax).fold(f64::INFINITY, f64::min);
    let ymin = boxes.iter().map(Bbox::ymin).fold(f64::NEG_INFINITY, f64::max);
    let ymax = boxes.iter().map(Bbox::ymax).fold(f64::INFINITY, f64::min);

    if xmin > xmax || ymin > ymax {
        debug!("No common area between {} boxes (x {}..{}, y {}..{})", boxes.len(), xmin, xmax, ymin, ymax);
        return Ok(None);
    }

    Bbox::new(xmin, xmax, ymin, ymax, srs).map(Some)
}

/// Smallest box enclosing all boxes
pub fn union(boxes: &[Bbox]) -> ExtentResult<Bbox> {
    let srs = common_srs(boxes)?;

    let xmin = boxes.iter().map(Bbox::xmin).fold(f64::INFINITY, f64::min);
    let xmax = boxes.iter().map(Bbox::xmax).fold(f64::NEG_INFINITY, f64::max);
    let ymin = boxes.iter().map(Bbox::ymin).fold(f64::INFINITY, f64::min);
    let ymax = boxes.iter().map(Bbox::ymax).fold(f64::NEG_INFINITY, f64::max);

    Bbox::new(xmin, xmax, ymin, ymax, srs)
}

/// Extent of a set of points, e.g. a point cloud
///
/// A single point yields a degenerate box with `xmin == xmax` and `ymin == ymax`.
/// Z values are ignored.
///
/// # Arguments
/// * `points` - Anything convertible to `Point`, such as `(x, y)` tuples
/// * `srs` - Spatial reference of the point coordinates
pub fn bounding_of_points<I, P>(points: I, srs: Option<SpatialReference>) -> ExtentResult<Bbox>
where
    I: IntoIterator<Item = P>,
    P: Into<Point>,
{
    let mut bounds: Option<(f64, f64, f64, f64)> = None;

    for point in points {
        let point = point.into();
        if point.x.is_nan() || point.y.is_nan() {
            return Err(ExtentError::InvalidExtent {
                xmin: point.x,
                xmax: point.x,
                ymin: point.y,
                ymax: point.y,
            });
        }

        bounds = Some(match bounds {
            None => (point.x, point.x, point.y, point.y),
            Some((xmin, xmax, ymin, ymax)) => (
                xmin.min(point.x),
                xmax.max(point.x),
                ymin.min(point.y),
                ymax.max(point.y),
            ),
        });
    }

    let (xmin, xmax, ymin, ymax) = bounds.ok_or(ExtentError::EmptyInput)?;
    Bbox::new(xmin, xmax, ymin, ymax, srs)
}

/// Every pair of footprints sharing a common area
///
/// Pairs are returned in input order: `(0, 1), (0, 2), ..., (1, 2), ...`.
/// This is the candidate search for stereo correlation regions.
pub fn overlapping_pairs(footprints: &[Bbox]) -> ExtentResult<Vec<Overlap>> {
    if footprints.len() < 2 {
        return Ok(Vec::new());
    }
    common_srs(footprints)?;

    let mut overlaps = Vec::new();
    for (first, a) in footprints.iter().enumerate() {
        for (second, b) in footprints.iter().enumerate().skip(first + 1) {
            if let Some(extent) = intersection(&[a.clone(), b.clone()])? {
                overlaps.push(Overlap { first, second, extent });
            }
        }
    }

    debug!("{} overlapping pairs among {} footprints", overlaps.len(), footprints.len());
    Ok(overlaps)
}

/// Spatial reference shared by all boxes
fn common_srs(boxes: &[Bbox]) -> ExtentResult<Option<SpatialReference>> {
    let (first, rest) = boxes.split_first().ok_or(ExtentError::EmptyInput)?;

    for other in rest {
        if other.srs() != first.srs() {
            return Err(ExtentError::CrsMismatch {
                expected: srs_label(first.srs()),
                found: srs_label(other.srs()),
            });
        }
    }

    Ok(first.srs().cloned())
}

fn srs_label(srs: Option<&SpatialReference>) -> String {
    srs.map_or_else(|| "none".to_string(), SpatialReference::identifier)
}
