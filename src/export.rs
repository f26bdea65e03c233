//! File-level export of BON tracks to NMEA
//!
//! Resolves the layout from the input extension, derives the output path and
//! runs the conversion for one file.

use crate::converter::{convert_bon_file, ConversionSummary};
use crate::error::Result;
use crate::types::LayoutVariant;
use std::fs;
use std::path::{Path, PathBuf};

/// Output file extension
pub const NMEA_EXTENSION: &str = "nmea";

/// Export options for controlling output location
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Directory for `.nmea` files (default: same as input file)
    pub output_dir: Option<String>,
}

/// Result of exporting one file
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub nmea_path: PathBuf,
    pub summary: ConversionSummary,
}

/// Compute the `.nmea` path for `input_path`: `<stem>.nmea` inside the
/// output directory, or next to the input when none is configured.
pub fn compute_output_path(input_path: &Path, export_options: &ExportOptions) -> PathBuf {
    let base_name = input_path
        .file_stem()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "unknown".into());

    let output_dir = match export_options.output_dir.as_deref() {
        Some(dir) => PathBuf::from(dir),
        None => input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let mut file_name = base_name;
    file_name.push(".");
    file_name.push(NMEA_EXTENSION);
    output_dir.join(file_name)
}

/// Export one BON file to NMEA, selecting the layout from its extension
pub fn export_to_nmea(input_path: &Path, export_options: &ExportOptions) -> Result<ExportReport> {
    let layout = LayoutVariant::from_path(input_path)?;
    let nmea_path = compute_output_path(input_path, export_options);

    if let Some(dir) = nmea_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let summary = convert_bon_file(input_path, &nmea_path, layout)?;
    Ok(ExportReport { nmea_path, summary })
}
