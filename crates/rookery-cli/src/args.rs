//! Command-line argument definitions for the Rookery CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Flags mirror the layout options of the library; the
//! positional arguments are input files by default, or raw FEN strings
//! with `--strings`.

use clap::Parser;

/// Command-line arguments for the Rookery diagram generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input files with one FEN per line, or FEN strings with --strings
    #[arg(required = true, value_name = "FILE|FEN")]
    pub inputs: Vec<String>,

    /// Treat the positional arguments as FEN strings instead of files
    #[arg(short, long, conflicts_with = "files")]
    pub strings: bool,

    /// Treat the positional arguments as files (the default)
    #[arg(short, long)]
    pub files: bool,

    /// Draw a frame around the board
    #[arg(short, long)]
    pub border: bool,

    /// Draw algebraic coordinates around the board
    #[arg(short, long)]
    pub coordinates: bool,

    /// Draw a side-to-move indicator next to the board
    #[arg(short, long)]
    pub move_indicator: bool,

    /// Flip the board so the side to move sits at the bottom
    #[arg(short, long)]
    pub rotate: bool,

    /// Name output files after the position instead of numbering them
    #[arg(short, long)]
    pub position_as_filename: bool,

    /// Path to the SVG template holding the symbol definitions
    #[arg(short, long, default_value = "template.svg")]
    pub template: String,

    /// Directory diagrams are written into
    #[arg(short, long, default_value = ".")]
    pub outdir: String,

    /// Path to configuration file (TOML)
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_select_file_mode_and_numbered_names() {
        let args = Args::parse_from(["rookery", "positions.txt"]);
        assert!(!args.strings);
        assert!(!args.border);
        assert_eq!(args.template, "template.svg");
        assert_eq!(args.outdir, ".");
        assert_eq!(args.inputs, vec!["positions.txt"]);
    }

    #[test]
    fn string_and_file_modes_are_mutually_exclusive() {
        let result = Args::try_parse_from(["rookery", "-s", "-f", "8/8/8/8/8/8/8/8 w"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_operands_are_rejected() {
        let result = Args::try_parse_from(["rookery", "-b"]);
        assert!(result.is_err());
    }

    #[test]
    fn layout_flags_parse() {
        let args = Args::parse_from(["rookery", "-bcmrp", "-s", "8/8/8/8/8/8/8/8 w"]);
        assert!(args.border);
        assert!(args.coordinates);
        assert!(args.move_indicator);
        assert!(args.rotate);
        assert!(args.position_as_filename);
        assert!(args.strings);
    }
}
