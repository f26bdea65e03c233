//! BON to NMEA stream conversion
//!
//! Skips the header, decodes records in file order and writes one `GPRMC`
//! sentence per record. The only state carried between records is the
//! previously emitted point, used for the BON4 course.

use crate::error::Result;
use crate::nmea::encode_gprmc;
use crate::parser::record::parse_record_with_layout;
use crate::parser::stream::BonRecordStream;
use crate::types::{LayoutVariant, Point};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Line terminator written after each sentence (the platform's native one)
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Outcome of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub layout: LayoutVariant,
    pub records_written: usize,
    /// Bytes of a trailing partial record that were dropped
    pub truncated_tail_bytes: usize,
}

/// Convert a BON byte stream into newline-terminated `GPRMC` sentences.
///
/// Stops at the first malformed record or I/O error; lines written before
/// that point remain in `writer`.
pub fn convert_stream<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    layout: LayoutVariant,
) -> Result<ConversionSummary> {
    log::debug!("Converting stream with layout {layout}");

    let mut records = BonRecordStream::new(reader);
    let mut previous: Option<Point> = None;
    let mut records_written = 0;

    while let Some(record) = records.next_record()? {
        let point = parse_record_with_layout(&record, records_written, layout, previous.as_ref())?;
        let sentence = encode_gprmc(&point);
        log::trace!("record {records_written}: {sentence}");

        writer.write_all(sentence.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;

        records_written += 1;
        previous = Some(point);
    }
    writer.flush()?;

    Ok(ConversionSummary {
        layout,
        records_written,
        truncated_tail_bytes: records.truncated_tail,
    })
}

/// Convert BON data held in memory and return the NMEA text
pub fn convert_bon_bytes(data: &[u8], layout: LayoutVariant) -> Result<String> {
    let mut output = Vec::with_capacity(data.len() * 3);
    convert_stream(data, &mut output, layout)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Convert `input` into a new NMEA file at `output`
pub fn convert_bon_file(
    input: &Path,
    output: &Path,
    layout: LayoutVariant,
) -> Result<ConversionSummary> {
    log::debug!(
        "convert: source={}, destination={}",
        input.display(),
        output.display()
    );

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    let summary = convert_stream(reader, writer, layout)?;

    log::info!(
        "Converted {} records from {}",
        summary.records_written,
        input.display()
    );
    Ok(summary)
}
