use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One decoded GPS fix from a BON record
///
/// Positions are in micro-minutes (1/1,000,000 of a minute of arc), so that
/// dividing by 60,000,000 gives degrees.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub timestamp: NaiveDateTime,
    pub latitude_micro: i64,
    pub longitude_micro: i64,
    pub elevation: i32,
    pub speed_raw: u32,
    /// Hundredths of a degree (0..36000), only set for layouts with a course
    pub course_centidegrees: Option<u16>,
}

impl Point {
    /// Same point with the given course attached
    pub fn with_course(self, course_centidegrees: u16) -> Self {
        Self {
            course_centidegrees: Some(course_centidegrees),
            ..self
        }
    }

    /// Whether both points sit on exactly the same micro-minute position
    pub fn same_position(&self, other: &Point) -> bool {
        self.latitude_micro == other.latitude_micro && self.longitude_micro == other.longitude_micro
    }
}
