//! Course between consecutive track points
//!
//! Uses the initial-bearing form that historical BON4 conversions were
//! produced with:
//!
//! `course = -atan2(cos(lat1) * tan(lat2) - sin(lat1) * cos(dlon), sin(dlon))`
//!
//! normalized into `[0, 2pi)`. This is measured a quarter turn away from the
//! textbook north-clockwise bearing (due north comes out as 270.00 degrees).
//! Existing NMEA archives depend on the exact values, so it is kept as is.

use crate::conversion::micro_to_radians;
use crate::types::Point;
use std::f64::consts::PI;

/// Course values are stored in hundredths of a degree, 0..36000
pub const FULL_CIRCLE_CENTIDEGREES: u16 = 36_000;

/// Compute the course from `prev` to `current` in hundredths of a degree.
///
/// When both points share exactly the same position the formula is
/// indeterminate and `prev`'s own course is carried forward (0 if it has
/// none).
pub fn compute_course(prev: &Point, current: &Point) -> u16 {
    let carried = prev.course_centidegrees.unwrap_or(0);
    if prev.same_position(current) {
        return carried;
    }

    let lat1 = micro_to_radians(prev.latitude_micro);
    let lon1 = micro_to_radians(prev.longitude_micro);
    let lat2 = micro_to_radians(current.latitude_micro);
    let lon2 = micro_to_radians(current.longitude_micro);

    let course = initial_course_radians(lat1, lon1, lat2, lon2);
    if !course.is_finite() {
        log::debug!("Non-finite course between consecutive points, carrying {carried}");
        return carried;
    }

    radians_to_centidegrees(course)
}

/// Raw course in radians, normalized into `[0, 2pi)`
pub fn initial_course_radians(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta = lon2 - lon1;
    let mut course = -(lat1.cos() * lat2.tan() - lat1.sin() * delta.cos()).atan2(delta.sin());

    while course < 0.0 {
        course += 2.0 * PI;
    }
    while course >= 2.0 * PI {
        course -= 2.0 * PI;
    }
    course
}

/// Truncate a normalized course to hundredths of a degree
fn radians_to_centidegrees(course: f64) -> u16 {
    let centi = (course * 18000.0 / PI).floor() as u32;
    // float rounding just below 2pi can land on the full circle
    (centi % FULL_CIRCLE_CENTIDEGREES as u32) as u16
}
