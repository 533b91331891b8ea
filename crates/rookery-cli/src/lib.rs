//! CLI logic for the Rookery diagram generator.
//!
//! Wires the command-line surface to the library: configuration loading,
//! template adaptation, position collection from files or arguments, and
//! the per-position assembly loop. Per-position failures are reported and
//! skipped; only configuration-level problems abort the run.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info, warn};

use rookery::{
    LayoutOptions, RookeryError,
    diagram::Assembler,
    fen::FEN_EXCERPT_LEN,
    template::Template,
};

/// Outcome of a run: how many diagrams were written and how many positions
/// or input files failed.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    written: usize,
    failed: usize,
}

impl RunSummary {
    /// Number of diagrams written.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of positions or input files that failed.
    pub fn failed(&self) -> usize {
        self.failed
    }
}

/// Run the Rookery CLI application.
///
/// Loads layout defaults from configuration, OR-s the command-line flags
/// on top, adapts the template, collects the positions, and writes one
/// diagram per position.
///
/// # Errors
///
/// Returns `RookeryError` only for run-level failures: a missing or
/// malformed template, or a malformed configuration file. Per-position
/// parse errors and per-file I/O errors are reported, counted in the
/// returned [`RunSummary`], and skipped.
pub fn run(args: &Args) -> Result<RunSummary, RookeryError> {
    let defaults = config::load_config(args.config.as_ref())?;
    let options = LayoutOptions::new(
        args.border || defaults.border(),
        args.coordinates || defaults.coordinates(),
        args.move_indicator || defaults.move_indicator(),
        args.rotate || defaults.rotate(),
        args.position_as_filename || defaults.position_as_file_name(),
    );
    debug!(options:?; "Effective layout options");

    let template = Template::load(&args.template, &options)?;

    let mut summary = RunSummary::default();
    let positions = collect_positions(args, &mut summary);
    info!(count = positions.len(); "Processing positions");

    let mut assembler = Assembler::new(&template, &options, &args.outdir);
    for position in &positions {
        match assembler.process(position) {
            Ok(path) => {
                info!(path = path.display().to_string(); "Diagram written");
                summary.written += 1;
            }
            Err(err) => {
                error_adapter::log_report(&err);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Gather the positions to process, from files (default) or directly from
/// the arguments. Unreadable files are reported and counted as failures;
/// the remaining inputs still run.
fn collect_positions(args: &Args, summary: &mut RunSummary) -> Vec<String> {
    if args.strings {
        return args.inputs.clone();
    }

    let mut positions = Vec::new();
    for path in &args.inputs {
        match read_positions_file(Path::new(path)) {
            Ok(mut found) => positions.append(&mut found),
            Err(err) => {
                warn!(path = path.as_str(); "Cannot read input file: {err}");
                summary.failed += 1;
            }
        }
    }
    positions
}

/// Read one FEN per line, keeping only the useful leading excerpt of each
/// line and skipping blank lines.
fn read_positions_file(path: &Path) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| {
            if line.trim().is_empty() {
                debug!("Skipping blank input line");
                return false;
            }
            true
        })
        .map(|line| excerpt(line).to_owned())
        .collect())
}

/// The first [`FEN_EXCERPT_LEN`] characters of a line: enough for 64
/// squares, 7 separators, a blank, and the side to move.
fn excerpt(line: &str) -> &str {
    match line.char_indices().nth(FEN_EXCERPT_LEN) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
