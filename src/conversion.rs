//! Unit conversions for decoded BON fields
//!
//! Positions are carried as micro-minutes of arc (degrees x 60,000,000),
//! speed as the raw centimetres-per-second value from the record.

use std::f64::consts::PI;

/// Micro-minutes in one degree
pub const MICRO_PER_DEGREE: i64 = 60_000_000;
/// Micro-minutes in one minute of arc
pub const MICRO_PER_MINUTE: i64 = 1_000_000;
/// Knots per raw speed unit (1 cm/s)
pub const KNOTS_PER_RAW_SPEED: f32 = 0.0194384;

/// Convert micro-minutes to decimal degrees
pub fn micro_to_degrees(micro: i64) -> f64 {
    micro as f64 / MICRO_PER_DEGREE as f64
}

/// Convert micro-minutes to radians
pub fn micro_to_radians(micro: i64) -> f64 {
    micro_to_degrees(micro) * PI / 180.0
}

/// Convert raw speed to knots.
///
/// Computed in single precision; archived NMEA output was produced that way
/// and the last printed digit depends on it.
pub fn convert_speed_to_knots(speed_raw: u32) -> f32 {
    speed_raw as f32 * KNOTS_PER_RAW_SPEED
}

/// Convert a course in hundredths of a degree to degrees
pub fn convert_course_to_degrees(course_centidegrees: u16) -> f64 {
    course_centidegrees as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_to_degrees() {
        assert_eq!(micro_to_degrees(60_000_000), 1.0);
        assert_eq!(micro_to_degrees(2_130_000_000), 35.5);
        assert_eq!(micro_to_degrees(0), 0.0);
    }

    #[test]
    fn test_micro_to_radians() {
        assert!((micro_to_radians(180 * MICRO_PER_DEGREE) - PI).abs() < 1e-12);
        assert!((micro_to_radians(90 * MICRO_PER_DEGREE) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_convert_speed_to_knots() {
        assert!((convert_speed_to_knots(1000) - 19.4384).abs() < 1e-4);
        assert_eq!(convert_speed_to_knots(12411), 241.25);
        assert_eq!(convert_speed_to_knots(0), 0.0);
    }

    #[test]
    fn test_convert_course_to_degrees() {
        assert_eq!(convert_course_to_degrees(27000), 270.0);
        assert_eq!(convert_course_to_degrees(35999), 359.99);
    }
}
