//! Fixed-size BON record decoding
//!
//! Every record is 26 bytes, all multi-byte fields little-endian:
//!
//! | Field     | Offset | Width |
//! |-----------|--------|-------|
//! | speed     | 2      | 2     |
//! | latitude  | 4      | 4     |
//! | longitude | 8      | 4     |
//! | elevation | 12     | 2     |
//! | year      | 18     | 2     |
//! | month     | 20     | 1     |
//! | day       | 21     | 1     |
//! | hour      | 22     | 1     |
//! | minute    | 23     | 1     |
//! | second    | 24     | 1     |
//! | tenths    | 25     | 1     |
//!
//! Bytes 0-1 and 14-17 are not interpreted.

use crate::bearing::compute_course;
use crate::error::{BonError, Result};
use crate::parser::decoder::{read_u16_le, read_u32_le};
use crate::types::{LayoutVariant, Point};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Size of the file header that precedes the first record
pub const HEADER_SIZE: usize = 8;
/// Size of one track record
pub const RECORD_SIZE: usize = 26;

const OFFSET_SPEED: usize = 2;
const OFFSET_LATITUDE: usize = 4;
const OFFSET_LONGITUDE: usize = 8;
const OFFSET_ELEVATION: usize = 12;
const OFFSET_YEAR: usize = 18;
const OFFSET_MONTH: usize = 20;
const OFFSET_DAY: usize = 21;
const OFFSET_HOUR: usize = 22;
const OFFSET_MINUTE: usize = 23;
const OFFSET_SECOND: usize = 24;
const OFFSET_TENTHS: usize = 25;

// Raw coordinates are in 1e-7 degrees; x6 gives micro-minutes
const COORDINATE_SCALE: i64 = 6;
const NANOS_PER_TENTH: u32 = 100_000_000;

/// Decode one record into a [`Point`] without a course.
///
/// `index` is the zero-based record position, used only for error reporting.
/// Fails with [`BonError::MalformedRecord`] when the calendar fields do not
/// form a valid date-time.
pub fn parse_record(record: &[u8; RECORD_SIZE], index: usize) -> Result<Point> {
    let timestamp = parse_timestamp(record, index)?;

    Ok(Point {
        timestamp,
        latitude_micro: read_u32_le(record, OFFSET_LATITUDE) as i64 * COORDINATE_SCALE,
        longitude_micro: read_u32_le(record, OFFSET_LONGITUDE) as i64 * COORDINATE_SCALE,
        elevation: read_u16_le(record, OFFSET_ELEVATION) as i32,
        speed_raw: read_u16_le(record, OFFSET_SPEED) as u32,
        course_centidegrees: None,
    })
}

/// Decode one record under `layout`.
///
/// For [`LayoutVariant::Bon4`] the course toward this point is computed from
/// `previous` when there is one. The first point of a BON4 track and every
/// BON1 point carry no course.
pub fn parse_record_with_layout(
    record: &[u8; RECORD_SIZE],
    index: usize,
    layout: LayoutVariant,
    previous: Option<&Point>,
) -> Result<Point> {
    let point = parse_record(record, index)?;

    match (layout, previous) {
        (LayoutVariant::Bon4, Some(prev)) => {
            let course = compute_course(prev, &point);
            Ok(point.with_course(course))
        }
        _ => Ok(point),
    }
}

fn parse_timestamp(record: &[u8; RECORD_SIZE], index: usize) -> Result<NaiveDateTime> {
    let year = read_u16_le(record, OFFSET_YEAR);
    let month = record[OFFSET_MONTH];
    let day = record[OFFSET_DAY];
    let hour = record[OFFSET_HOUR];
    let minute = record[OFFSET_MINUTE];
    let second = record[OFFSET_SECOND];
    let tenths = record[OFFSET_TENTHS];

    let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32).ok_or_else(|| {
        BonError::malformed(
            index,
            format!("invalid date {year:04}-{month:02}-{day:02}"),
        )
    })?;

    // chrono would accept tenths >= 10 as a leap second on :59; the log format does not
    if tenths > 9 {
        return Err(BonError::malformed(
            index,
            format!("invalid sub-second field {tenths}"),
        ));
    }

    let time = NaiveTime::from_hms_nano_opt(
        hour as u32,
        minute as u32,
        second as u32,
        tenths as u32 * NANOS_PER_TENTH,
    )
    .ok_or_else(|| {
        BonError::malformed(
            index,
            format!("invalid time {hour:02}:{minute:02}:{second:02}"),
        )
    })?;

    Ok(NaiveDateTime::new(date, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn build_record(speed: u16, lat_raw: u32, lon_raw: u32, date: [u8; 8]) -> [u8; RECORD_SIZE] {
        let mut record = [0u8; RECORD_SIZE];
        record[2..4].copy_from_slice(&speed.to_le_bytes());
        record[4..8].copy_from_slice(&lat_raw.to_le_bytes());
        record[8..12].copy_from_slice(&lon_raw.to_le_bytes());
        record[12..14].copy_from_slice(&42u16.to_le_bytes());
        record[18..26].copy_from_slice(&date);
        record
    }

    // 2023-06-15 10:30:00.0
    const JUNE_15: [u8; 8] = [0xE7, 0x07, 6, 15, 10, 30, 0, 0];

    #[test]
    fn test_parse_record_fields() {
        let record = build_record(1000, 10_000_000, 20_000_000, JUNE_15);
        let point = parse_record(&record, 0).unwrap();

        assert_eq!(point.speed_raw, 1000);
        assert_eq!(point.latitude_micro, 60_000_000);
        assert_eq!(point.longitude_micro, 120_000_000);
        assert_eq!(point.elevation, 42);
        assert_eq!(point.course_centidegrees, None);
        assert_eq!(point.timestamp.year(), 2023);
        assert_eq!(point.timestamp.month(), 6);
        assert_eq!(point.timestamp.day(), 15);
        assert_eq!(point.timestamp.hour(), 10);
        assert_eq!(point.timestamp.minute(), 30);
        assert_eq!(point.timestamp.second(), 0);
        assert_eq!(point.timestamp.nanosecond(), 0);
    }

    #[test]
    fn test_parse_record_tenths_to_nanoseconds() {
        let record = build_record(0, 0, 0, [0xE7, 0x07, 6, 15, 10, 30, 1, 7]);
        let point = parse_record(&record, 0).unwrap();
        assert_eq!(point.timestamp.nanosecond(), 700_000_000);
    }

    #[test]
    fn test_parse_record_ignores_unused_bytes() {
        let mut record = build_record(1000, 10_000_000, 20_000_000, JUNE_15);
        let reference = parse_record(&record, 0).unwrap();
        record[0] = 0xAA;
        record[1] = 0x55;
        record[14..18].copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(parse_record(&record, 0).unwrap(), reference);
    }

    #[test]
    fn test_parse_record_rejects_month_zero() {
        let record = build_record(0, 0, 0, [0xE7, 0x07, 0, 15, 10, 30, 0, 0]);
        match parse_record(&record, 3) {
            Err(BonError::MalformedRecord { index, .. }) => assert_eq!(index, 3),
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_record_rejects_invalid_calendar() {
        let cases: [[u8; 8]; 6] = [
            [0xE7, 0x07, 13, 1, 0, 0, 0, 0],  // month 13
            [0xE7, 0x07, 2, 29, 0, 0, 0, 0],  // 2023 is not a leap year
            [0xE7, 0x07, 6, 0, 0, 0, 0, 0],   // day 0
            [0xE7, 0x07, 6, 15, 24, 0, 0, 0], // hour 24
            [0xE7, 0x07, 6, 15, 10, 60, 0, 0],
            [0xE7, 0x07, 6, 15, 10, 30, 60, 0],
        ];
        for date in cases {
            let record = build_record(0, 0, 0, date);
            assert!(
                parse_record(&record, 0).is_err(),
                "calendar fields {date:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_record_rejects_tenths_overflow() {
        let record = build_record(0, 0, 0, [0xE7, 0x07, 6, 15, 10, 30, 59, 10]);
        assert!(parse_record(&record, 0).is_err());
    }

    #[test]
    fn test_parse_record_accepts_leap_day() {
        let record = build_record(0, 0, 0, [0xE8, 0x07, 2, 29, 0, 0, 0, 0]);
        assert!(parse_record(&record, 0).is_ok());
    }

    #[test]
    fn test_layout_course_attachment() {
        let first = build_record(0, 10_000_000, 20_000_000, JUNE_15);
        let second = build_record(0, 10_100_000, 20_000_000, JUNE_15);

        let p1 = parse_record_with_layout(&first, 0, LayoutVariant::Bon4, None).unwrap();
        assert_eq!(p1.course_centidegrees, None);

        let p2 = parse_record_with_layout(&second, 1, LayoutVariant::Bon4, Some(&p1)).unwrap();
        assert_eq!(p2.course_centidegrees, Some(27000));

        let p2_bon1 = parse_record_with_layout(&second, 1, LayoutVariant::Bon1, Some(&p1)).unwrap();
        assert_eq!(p2_bon1.course_centidegrees, None);
    }
}
