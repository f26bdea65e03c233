//! NMEA 0183 `GPRMC` sentence encoding
//!
//! Sentences are emitted as
//! `$GPRMC,hhmmss.s,A,ddmm.mmmmmm,N,dddmm.mmmmmm,E,knots,course,ddmmyy,,,A*CS`.
//! Hemisphere letters are always `N` and `E`; the sign of the position is
//! not consulted.

use crate::conversion::{
    convert_course_to_degrees, convert_speed_to_knots, MICRO_PER_DEGREE, MICRO_PER_MINUTE,
};
use crate::types::Point;
use chrono::{NaiveDateTime, Timelike};

pub const GPRMC_TALKER: &str = "GPRMC";

/// Encode one point as a complete `$GPRMC...*CS` sentence (no line terminator)
pub fn encode_gprmc(point: &Point) -> String {
    let body = gprmc_body(point);
    let checksum = nmea_checksum(&body);
    format!("${body}*{checksum:02X}")
}

/// Sentence body between `$` and `*`
pub fn gprmc_body(point: &Point) -> String {
    format!(
        "{},{},A,{},N,{},E,{},{},{},,,A",
        GPRMC_TALKER,
        format_time(&point.timestamp),
        format_coordinate(point.latitude_micro),
        format_coordinate(point.longitude_micro),
        format_speed(point.speed_raw),
        format_course(point.course_centidegrees),
        format_date(&point.timestamp),
    )
}

/// XOR of every byte of `body`
pub fn nmea_checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |sum, b| sum ^ b)
}

/// Check that the trailing checksum of a `$...*CS` sentence matches its body
pub fn verify_checksum(sentence: &str) -> bool {
    let Some(rest) = sentence.trim_end().strip_prefix('$') else {
        return false;
    };
    let Some((body, checksum)) = rest.rsplit_once('*') else {
        return false;
    };
    if checksum.len() != 2 || !checksum.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    u8::from_str_radix(checksum, 16).is_ok_and(|expected| nmea_checksum(body) == expected)
}

/// `hhmmss.s` with exactly one fractional digit
pub fn format_time(timestamp: &NaiveDateTime) -> String {
    let tenths = (timestamp.nanosecond() % 1_000_000_000) / 100_000_000;
    format!("{}.{}", timestamp.format("%H%M%S"), tenths)
}

/// `ddmmyy`
pub fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%d%m%y").to_string()
}

/// Degrees followed by zero-padded minutes with six decimals (`dddmm.mmmmmm`)
pub fn format_coordinate(micro: i64) -> String {
    let degrees = micro / MICRO_PER_DEGREE;
    let minutes = micro - degrees * MICRO_PER_DEGREE;
    let minutes_whole = minutes / MICRO_PER_MINUTE;
    let minutes_frac = minutes - minutes_whole * MICRO_PER_MINUTE;
    format!("{degrees}{minutes_whole:02}.{minutes_frac:06}")
}

/// Speed over ground in knots, one decimal, halves rounded up
pub fn format_speed(speed_raw: u32) -> String {
    let knots = convert_speed_to_knots(speed_raw) as f64;
    format!("{:.1}", (knots * 10.0 + 0.5).floor() / 10.0)
}

/// Course in degrees with one decimal, or an empty field
pub fn format_course(course_centidegrees: Option<u16>) -> String {
    course_centidegrees
        .map(|c| format!("{:.1}", convert_course_to_degrees(c)))
        .unwrap_or_default()
}
