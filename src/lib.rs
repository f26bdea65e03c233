//! BON to NMEA converter library
//!
//! Converts BON1/BON3/BON4 binary GPS track logs into NMEA 0183 `GPRMC`
//! sentences, one sentence per track record.
//!
//! # Features
//!
//! - **`cli`** (default): Build the `bon2nmea` command-line binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Convert a file next to its source:
//! ```rust,no_run
//! use bon2nmea::{export_to_nmea, ExportOptions};
//! use std::path::Path;
//!
//! let report = export_to_nmea(Path::new("track.BON4"), &ExportOptions::default()).unwrap();
//! println!(
//!     "Wrote {} sentences to {}",
//!     report.summary.records_written,
//!     report.nmea_path.display()
//! );
//! ```
//!
//! Convert data already in memory:
//! ```rust
//! use bon2nmea::{convert_bon_bytes, LayoutVariant};
//!
//! let mut data = vec![0u8; 8]; // header
//! let mut record = [0u8; 26];
//! record[2..4].copy_from_slice(&1000u16.to_le_bytes());
//! record[4..8].copy_from_slice(&10_000_000u32.to_le_bytes());
//! record[18..26].copy_from_slice(&[0xE7, 0x07, 6, 15, 10, 30, 0, 0]);
//! data.extend_from_slice(&record);
//!
//! let text = convert_bon_bytes(&data, LayoutVariant::Bon1).unwrap();
//! assert!(text.starts_with("$GPRMC,103000.0,A,100.000000,N,"));
//! ```
//!
//! # Public API
//!
//! ## Conversion Functions
//! - [`export_to_nmea`] - Convert a file, choosing layout and output path
//! - [`convert_bon_file`] - Convert between explicit paths
//! - [`convert_bon_bytes`] - Convert BON data from memory
//! - [`convert_stream`] - Convert any reader into any writer
//!
//! ## Decoding
//! - [`decode_uint_le`] - Little-endian field decoding
//! - [`parse_record`] / [`parse_record_with_layout`] - Decode one 26-byte record
//! - [`BonRecordStream`] - Fixed-size record reader
//! - [`compute_course`] - Course between consecutive points
//!
//! ## Encoding
//! - [`encode_gprmc`] - Format a point as a `GPRMC` sentence
//! - [`nmea_checksum`] / [`verify_checksum`] - Sentence checksums

pub mod bearing;
pub mod conversion;
pub mod converter;
pub mod error;
pub mod export;
pub mod nmea;
pub mod parser;
pub mod types;

pub use bearing::compute_course;
pub use conversion::*;
pub use converter::*;
pub use error::{BonError, Result};
pub use export::*;
pub use nmea::{encode_gprmc, nmea_checksum, verify_checksum};
pub use parser::*;
pub use types::*;
