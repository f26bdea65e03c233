//! CLI binary for bon2nmea
//!
//! This provides the command-line interface for the BON to NMEA converter library.

use anyhow::{Context, Result};
use bon2nmea::{export_to_nmea, ExportOptions, LayoutVariant};
use clap::{Arg, Command};
use glob::glob;
use std::path::{Path, PathBuf};

fn version() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({sha})", env!("CARGO_PKG_VERSION")),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let matches = Command::new("bon2nmea")
        .version(version())
        .about("Convert BON binary GPS track logs to NMEA 0183 GPRMC sentences.")
        .arg(
            Arg::new("files")
                .help("BON files to convert (.BON, .BON1, .BON3, .BON4 extensions, case-insensitive, supports globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed conversion information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for .nmea output files (default: same as input file)")
                .value_name("DIR"),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    init_logging(debug);

    let output_dir = matches.get_one::<String>("output-dir").cloned();
    let file_patterns: Vec<&String> = matches
        .get_many::<String>("files")
        .context("no input files given")?
        .collect();

    let export_options = ExportOptions { output_dir };

    log::debug!("Input patterns: {file_patterns:?}");

    let valid_paths = collect_input_paths(&file_patterns);

    log::debug!("Found {} valid files to process", valid_paths.len());

    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extensions: .BON, .BON1, .BON3, .BON4 (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    let mut processed_files = 0;
    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match export_to_nmea(path, &export_options)
            .with_context(|| format!("Failed to convert {}", path.display()))
        {
            Ok(report) => {
                println!(
                    "Exported {} sentences ({}) to: {}",
                    report.summary.records_written,
                    report.summary.layout,
                    report.nmea_path.display()
                );
                if report.summary.truncated_tail_bytes > 0 {
                    println!(
                        "  Ignored {} trailing bytes of an incomplete record",
                        report.summary.truncated_tail_bytes
                    );
                }
                processed_files += 1;
            }
            Err(e) => {
                eprintln!("Error processing {filename}: {e:#}");
                eprintln!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully converted out of {} files found.",
            valid_paths.len()
        );
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}

/// Expand glob patterns and keep existing files with a BON extension
fn collect_input_paths(file_patterns: &[&String]) -> Vec<PathBuf> {
    let mut valid_paths = Vec::new();

    for pattern in file_patterns {
        log::debug!("Processing pattern: {pattern}");

        let paths: Vec<PathBuf> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                    Ok(paths) => {
                        log::debug!("Glob pattern '{pattern}' matched {} files", paths.len());
                        paths
                    }
                    Err(e) => {
                        eprintln!("Error expanding glob pattern '{pattern}': {e}");
                        continue;
                    }
                },
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![Path::new(pattern.as_str()).to_path_buf()]
        };

        for path in paths {
            if !path.exists() {
                eprintln!("Warning: File does not exist: {path:?}");
                continue;
            }

            if let Err(e) = LayoutVariant::from_path(&path) {
                eprintln!("Warning: Skipping {path:?}: {e}");
                continue;
            }

            log::debug!("Added valid file: {path:?}");
            valid_paths.push(path);
        }
    }

    valid_paths
}
