//! Bounding box structure for raster, image and point cloud extents

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::padding::Padding;
use super::point::Point;
use super::srs::SpatialReference;
use crate::errors::{ExtentError, ExtentResult};

/// An axis-aligned extent tagged with the spatial reference of its bounds
///
/// A `Bbox` always satisfies `xmin <= xmax` and `ymin <= ymax`. Every
/// constructor validates this, and every transformation returns a new,
/// validated value. Equality compares the four bounds exactly and the
/// spatial reference by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Bbox {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    srs: Option<SpatialReference>,
}

impl Bbox {
    /// Create a new bounding box from its canonical bounds
    ///
    /// # Arguments
    /// * `xmin`, `xmax` - Bounds on the x axis
    /// * `ymin`, `ymax` - Bounds on the y axis
    /// * `srs` - Spatial reference of the bounds, if known
    ///
    /// # Returns
    /// The bbox, or `InvalidExtent` if a minimum exceeds its maximum or a
    /// bound is NaN
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, srs: Option<SpatialReference>) -> ExtentResult<Self> {
        // negated so NaN bounds are rejected too
        if !(xmin <= xmax) || !(ymin <= ymax) {
            return Err(ExtentError::InvalidExtent { xmin, xmax, ymin, ymax });
        }

        Ok(Bbox { xmin, xmax, ymin, ymax, srs })
    }

    /// Create a bounding box from raster corners (origin top-left, y decreasing downward)
    pub fn from_upper_left_lower_right(ulx: f64, uly: f64, lrx: f64, lry: f64, srs: Option<SpatialReference>) -> ExtentResult<Self> {
        Bbox::new(ulx, lrx, lry, uly, srs)
    }

    /// Create the extent covered by a raster from its geotransform
    ///
    /// # Arguments
    /// * `geotransform` - GDAL-style coefficients: [origin_x, pixel_width, row_rotation, origin_y, column_rotation, pixel_height]
    /// * `width`, `height` - Raster size in pixels
    /// * `srs` - Spatial reference of the raster
    ///
    /// # Returns
    /// The raster footprint. Rotated geotransforms are refused since their
    /// footprint is not axis-aligned.
    pub fn from_geotransform(geotransform: &[f64; 6], width: u32, height: u32, srs: Option<SpatialReference>) -> ExtentResult<Self> {
        let [origin_x, pixel_width, row_rotation, origin_y, column_rotation, pixel_height] = *geotransform;
        if row_rotation != 0.0 || column_rotation != 0.0 {
            return Err(ExtentError::GenericError(format!(
                "Rotated geotransform is not supported: {:?}", geotransform
            )));
        }

        let far_x = origin_x + width as f64 * pixel_width;
        // pixel_height is usually negative (north-up)
        let far_y = origin_y + height as f64 * pixel_height;

        debug!("Geotransform footprint: x {}..{}, y {}..{}", origin_x, far_x, origin_y, far_y);

        Bbox::new(
            origin_x.min(far_x),
            origin_x.max(far_x),
            origin_y.min(far_y),
            origin_y.max(far_y),
            srs,
        )
    }

    /// Corners in raster convention: `(ulx, uly, lrx, lry)`
    pub fn to_upper_left_lower_right(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.ymax, self.xmax, self.ymin)
    }

    /// Bounds in canonical order: `(xmin, xmax, ymin, ymax)`
    pub fn to_extents(&self) -> (f64, f64, f64, f64) {
        (self.xmin, self.xmax, self.ymin, self.ymax)
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Spatial reference of the bounds
    pub fn srs(&self) -> Option<&SpatialReference> {
        self.srs.as_ref()
    }

    /// Same bounds tagged with another spatial reference
    ///
    /// This only relabels the box; the bounds are not reprojected.
    pub fn with_srs(&self, srs: Option<SpatialReference>) -> Self {
        Bbox { srs, ..self.clone() }
    }

    /// Width of the box along x
    pub fn x_amplitude(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height of the box along y
    pub fn y_amplitude(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn area(&self) -> f64 {
        self.x_amplitude() * self.y_amplitude()
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.xmin + self.x_amplitude() / 2.0,
            self.ymin + self.y_amplitude() / 2.0,
        )
    }

    /// Check if this bounding box contains a point (edges included)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.xmin && point.x <= self.xmax &&
            point.y >= self.ymin && point.y <= self.ymax
    }

    /// Check if two boxes share at least one point (touching edges count)
    ///
    /// Only the bounds are compared; both boxes are taken to be in the same
    /// spatial reference.
    pub fn intersects(&self, other: &Bbox) -> bool {
        self.xmin <= other.xmax && other.xmin <= self.xmax &&
            self.ymin <= other.ymax && other.ymin <= self.ymax
    }

    /// Grow the box by an absolute amount on each side
    ///
    /// A scalar pads both axes by the same amount. Negative amounts shrink
    /// the box; shrinking past zero width or height yields `InvalidExtent`.
    ///
    /// # Example
    /// ```
    /// use extentkit::Bbox;
    ///
    /// let bbox = Bbox::new(0.0, 10.0, 0.0, 10.0, None).unwrap();
    /// let padded = bbox.pad_absolute((2.0, 3.0)).unwrap();
    /// assert_eq!(padded.to_extents(), (-2.0, 12.0, -3.0, 13.0));
    /// ```
    pub fn pad_absolute<P: Into<Padding>>(&self, padding: P) -> ExtentResult<Self> {
        let padding = padding.into();
        let (dx, dy) = (padding.x(), padding.y());
        debug!("Padding bbox {} by dx={}, dy={}", self, dx, dy);

        Bbox::new(
            self.xmin - dx,
            self.xmax + dx,
            self.ymin - dy,
            self.ymax + dy,
            self.srs.clone(),
        )
    }

    /// Grow the box on each side by a fraction of its own amplitude
    pub fn pad_ratio<P: Into<Padding>>(&self, ratio: P) -> ExtentResult<Self> {
        let absolute = ratio.into().scaled(self.x_amplitude(), self.y_amplitude());
        self.pad_absolute(absolute)
    }

    /// Grow the box on each side by a percentage of its own amplitude
    pub fn pad_percent<P: Into<Padding>>(&self, percent: P) -> ExtentResult<Self> {
        let percent = percent.into();
        self.pad_ratio(Padding::PerAxis(percent.x() / 100.0, percent.y() / 100.0))
    }
}

impl fmt::Display for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*},{:.*},{:.*}", p, self.xmin, p, self.xmax, p, self.ymin, p, self.ymax)?,
            None => write!(f, "{},{},{},{}", self.xmin, self.xmax, self.ymin, self.ymax)?,
        }
        if let Some(srs) = &self.srs {
            write!(f, ",{}", srs)?;
        }
        Ok(())
    }
}

impl FromStr for Bbox {
    type Err = ExtentError;

    /// Parse a bounding box from "xmin,xmax,ymin,ymax[,SRS]"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 && parts.len() != 5 {
            return Err(ExtentError::GenericError(
                "Bounding box must be 'xmin,xmax,ymin,ymax' with an optional spatial reference".to_string()));
        }

        let mut bounds = [0.0; 4];
        for (bound, (name, value)) in bounds.iter_mut().zip(["xmin", "xmax", "ymin", "ymax"].iter().zip(&parts)) {
            *bound = value.parse::<f64>()
                .map_err(|_| ExtentError::GenericError(format!("Invalid {} value: {}", name, value)))?;
        }

        let srs = match parts.get(4) {
            Some(s) => Some(SpatialReference::parse(s)?),
            None => None,
        };

        Bbox::new(bounds[0], bounds[1], bounds[2], bounds[3], srs)
    }
}
