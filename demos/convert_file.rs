//! NMEA Export Example
//!
//! Demonstrates converting one BON track log and inspecting the result.

use bon2nmea::{export_to_nmea, ExportOptions};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let input_file = std::env::args().nth(1).unwrap_or_else(|| {
        println!("Usage: convert_file <input.BON> [output_dir]");
        println!("Example: convert_file track.BON4 ./output");
        std::process::exit(1);
    });

    let output_dir = std::env::args().nth(2);
    let export_opts = ExportOptions { output_dir };

    println!("Converting: {}", input_file);
    let report = export_to_nmea(Path::new(&input_file), &export_opts)?;

    println!("\nTrack Information:");
    println!("  Layout: {}", report.summary.layout);
    println!("  Sentences written: {}", report.summary.records_written);
    if report.summary.truncated_tail_bytes > 0 {
        println!(
            "  Incomplete trailing record dropped: {} bytes",
            report.summary.truncated_tail_bytes
        );
    }
    println!("  Output: {}", report.nmea_path.display());

    Ok(())
}
