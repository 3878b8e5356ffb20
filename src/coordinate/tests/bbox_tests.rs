//! Tests for the bbox value type

extern crate std;

use crate::coordinate::{Bbox, Padding, Point, SpatialReference};
use crate::errors::ExtentError;

fn bbox(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Bbox {
    Bbox::new(xmin, xmax, ymin, ymax, None).unwrap()
}

fn utm31() -> Option<SpatialReference> {
    Some(SpatialReference::Utm(31, true))
}

#[test]
fn test_new_accepts_ordered_bounds() {
    let values = [-1000.5, -1.0, 0.0, 0.25, 3.0, 1e9];
    for &a in &values {
        for &b in values.iter().filter(|&&b| b >= a) {
            std::assert!(Bbox::new(a, b, a, b, None).is_ok());
            std::assert!(Bbox::new(a, b, -5.0, 5.0, utm31()).is_ok());
        }
    }
}

#[test]
fn test_new_rejects_inverted_bounds() {
    let result = Bbox::new(10.0, 0.0, 0.0, 10.0, None);
    std::assert!(std::matches!(result, Err(ExtentError::InvalidExtent { .. })));

    let result = Bbox::new(0.0, 10.0, 10.0, 0.0, None);
    std::assert!(std::matches!(result, Err(ExtentError::InvalidExtent { .. })));
}

#[test]
fn test_new_rejects_nan() {
    std::assert!(Bbox::new(f64::NAN, 1.0, 0.0, 1.0, None).is_err());
    std::assert!(Bbox::new(0.0, 1.0, 0.0, f64::NAN, None).is_err());
}

#[test]
fn test_degenerate_box_is_valid() {
    let point_box = bbox(3.0, 3.0, -2.0, -2.0);
    std::assert_eq!(point_box.x_amplitude(), 0.0);
    std::assert_eq!(point_box.y_amplitude(), 0.0);
    std::assert_eq!(point_box.area(), 0.0);
}

#[test]
fn test_upper_left_lower_right_round_trip() {
    let corners = [
        (0.0, 10.0, 10.0, 0.0),
        (650000.0, 4850000.0, 660000.0, 4840000.0),
        (-3.5, 2.0, -3.5, 2.0),
        (-180.0, 90.0, 180.0, -90.0),
    ];

    for &(ulx, uly, lrx, lry) in &corners {
        let b = Bbox::from_upper_left_lower_right(ulx, uly, lrx, lry, utm31()).unwrap();
        std::assert_eq!(b.to_upper_left_lower_right(), (ulx, uly, lrx, lry));
    }
}

#[test]
fn test_upper_left_lower_right_maps_to_min_max() {
    let b = Bbox::from_upper_left_lower_right(100.0, 50.0, 200.0, 20.0, None).unwrap();
    std::assert_eq!(b.to_extents(), (100.0, 200.0, 20.0, 50.0));
    std::assert_eq!(b.x_amplitude(), 100.0);
    std::assert_eq!(b.y_amplitude(), 30.0);
}

#[test]
fn test_upper_left_lower_right_rejects_bottom_up_corners() {
    // lower right above upper left
    let result = Bbox::from_upper_left_lower_right(0.0, 0.0, 10.0, 10.0, None);
    std::assert!(std::matches!(result, Err(ExtentError::InvalidExtent { .. })));
}

#[test]
fn test_pad_absolute() {
    let padded = bbox(0.0, 10.0, 0.0, 10.0).pad_absolute((2.0, 3.0)).unwrap();
    std::assert_eq!(padded, bbox(-2.0, 12.0, -3.0, 13.0));
}

#[test]
fn test_pad_scalar_broadcasts_to_both_axes() {
    let b = bbox(0.0, 10.0, 5.0, 7.0);
    std::assert_eq!(b.pad_absolute(1.5).unwrap(), b.pad_absolute((1.5, 1.5)).unwrap());
    std::assert_eq!(b.pad_ratio(0.1).unwrap(), b.pad_ratio(Padding::PerAxis(0.1, 0.1)).unwrap());
    std::assert_eq!(b.pad_percent(20.0).unwrap(), b.pad_percent([20.0, 20.0]).unwrap());
}

#[test]
fn test_pad_ratio_uses_amplitudes() {
    let b = bbox(0.0, 10.0, 0.0, 20.0);
    let padded = b.pad_ratio((0.5, 0.25)).unwrap();
    std::assert_eq!(padded, b.pad_absolute((5.0, 5.0)).unwrap());
    std::assert_eq!(padded.to_extents(), (-5.0, 15.0, -5.0, 25.0));
}

#[test]
fn test_pad_percent_matches_ratio() {
    let b = bbox(-3.0, 17.0, 100.0, 180.0);
    for &p in &[-40.0, -12.5, -1.0, 0.0, 3.0, 7.0, 33.3, 150.0] {
        let by_percent = b.pad_percent((p, p)).unwrap();
        let by_ratio = b.pad_ratio((p / 100.0, p / 100.0)).unwrap();
        std::assert_eq!(by_percent.to_extents(), by_ratio.to_extents());
    }
}

#[test]
fn test_negative_padding_shrinks() {
    let shrunk = bbox(0.0, 10.0, 0.0, 10.0).pad_absolute(-2.0).unwrap();
    std::assert_eq!(shrunk, bbox(2.0, 8.0, 2.0, 8.0));

    // collapsing to a line or point is still valid
    let collapsed = bbox(0.0, 10.0, 0.0, 4.0).pad_percent(-50.0).unwrap();
    std::assert_eq!(collapsed, bbox(5.0, 5.0, 2.0, 2.0));
}

#[test]
fn test_padding_cannot_invert() {
    let b = bbox(0.0, 10.0, 0.0, 10.0);
    std::assert!(std::matches!(b.pad_absolute(-6.0), Err(ExtentError::InvalidExtent { .. })));
    std::assert!(std::matches!(b.pad_absolute((0.0, -5.5)), Err(ExtentError::InvalidExtent { .. })));
    std::assert!(std::matches!(b.pad_ratio(-0.6), Err(ExtentError::InvalidExtent { .. })));
    std::assert!(std::matches!(b.pad_percent(-51.0), Err(ExtentError::InvalidExtent { .. })));
}

#[test]
fn test_padding_keeps_srs_and_original() {
    let b = Bbox::new(0.0, 10.0, 0.0, 10.0, utm31()).unwrap();
    let padded = b.pad_absolute(1.0).unwrap();
    std::assert_eq!(padded.srs(), utm31().as_ref());
    std::assert_eq!(b.to_extents(), (0.0, 10.0, 0.0, 10.0));
}

#[test]
fn test_equality_includes_srs() {
    let untagged = bbox(0.0, 1.0, 0.0, 1.0);
    let utm = Bbox::new(0.0, 1.0, 0.0, 1.0, utm31()).unwrap();
    let epsg = Bbox::new(0.0, 1.0, 0.0, 1.0, Some(SpatialReference::Epsg(32631))).unwrap();
    let other = Bbox::new(0.0, 1.0, 0.0, 1.0, Some(SpatialReference::Wgs84)).unwrap();

    std::assert_ne!(untagged, utm);
    std::assert_ne!(utm, other);
    std::assert_eq!(utm, epsg);
    std::assert_eq!(untagged.with_srs(utm31()), utm);
}

#[test]
fn test_from_geotransform_north_up() {
    let gt = [600000.0, 10.0, 0.0, 5000000.0, 0.0, -10.0];
    let b = Bbox::from_geotransform(&gt, 100, 50, utm31()).unwrap();
    std::assert_eq!(b.to_upper_left_lower_right(), (600000.0, 5000000.0, 601000.0, 4999500.0));
    std::assert_eq!(b.srs(), utm31().as_ref());
}

#[test]
fn test_from_geotransform_south_up() {
    let gt = [0.0, 1.0, 0.0, 0.0, 0.0, 2.0];
    let b = Bbox::from_geotransform(&gt, 4, 3, None).unwrap();
    std::assert_eq!(b.to_extents(), (0.0, 4.0, 0.0, 6.0));
}

#[test]
fn test_from_geotransform_rejects_rotation() {
    let gt = [0.0, 1.0, 0.2, 0.0, 0.0, -1.0];
    std::assert!(Bbox::from_geotransform(&gt, 4, 3, None).is_err());
}

#[test]
fn test_center_and_contains() {
    let b = bbox(0.0, 10.0, -4.0, 4.0);
    std::assert_eq!(b.center(), Point::new(5.0, 0.0));
    std::assert!(b.contains(&Point::new(10.0, 4.0)));
    std::assert!(!b.contains(&Point::new(10.1, 0.0)));
}

#[test]
fn test_parse_and_display() {
    let b: Bbox = "0, 10, -5.5, 5, EPSG:32631".parse().unwrap();
    std::assert_eq!(b, Bbox::new(0.0, 10.0, -5.5, 5.0, utm31()).unwrap());
    std::assert_eq!(b.to_string(), "0,10,-5.5,5,EPSG:32631");
    std::assert_eq!(format!("{:.2}", bbox(0.0, 1.0, 2.0, 3.0)), "0.00,1.00,2.00,3.00");

    std::assert!("1,2,3".parse::<Bbox>().is_err());
    std::assert!("10,0,0,1".parse::<Bbox>().is_err());
    std::assert!("a,1,0,1".parse::<Bbox>().is_err());
}

#[test]
fn test_padding_from_str() {
    std::assert_eq!("2.5".parse::<Padding>().unwrap(), Padding::Scalar(2.5));
    std::assert_eq!("1, -3".parse::<Padding>().unwrap(), Padding::PerAxis(1.0, -3.0));
    std::assert!("x".parse::<Padding>().is_err());
}

#[test]
fn test_intersects() {
    let b = bbox(0.0, 10.0, 0.0, 10.0);

    std::assert!(b.intersects(&bbox(5.0, 15.0, 5.0, 15.0)));
    std::assert!(b.intersects(&bbox(2.0, 3.0, 2.0, 3.0)));
    // shared edge or corner
    std::assert!(b.intersects(&bbox(10.0, 20.0, 0.0, 10.0)));
    std::assert!(b.intersects(&bbox(10.0, 20.0, 10.0, 20.0)));
    std::assert!(!b.intersects(&bbox(20.0, 30.0, 20.0, 30.0)));
    // overlapping on one axis only
    std::assert!(!b.intersects(&bbox(5.0, 15.0, 10.5, 12.0)));
}

#[test]
fn test_intersects_agrees_with_intersection() {
    let b = bbox(0.0, 10.0, 0.0, 10.0);
    let others = [
        bbox(5.0, 15.0, 5.0, 15.0),
        bbox(10.0, 20.0, 0.0, 10.0),
        bbox(10.0001, 20.0, 0.0, 10.0),
        bbox(-5.0, -1.0, -5.0, 20.0),
    ];

    for other in &others {
        let common = crate::coordinate::intersection(&[b.clone(), other.clone()]).unwrap();
        std::assert_eq!(b.intersects(other), common.is_some());
        std::assert_eq!(other.intersects(&b), common.is_some());
    }
}
