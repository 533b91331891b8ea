//! Rookery - chess FEN strings to SVG diagrams.
//!
//! Parses the piece-placement field of a FEN string, lays the position out
//! on a configurable board (border, coordinate labels, move indicator,
//! orientation), and assembles one complete SVG document per position from
//! an externally supplied symbol template.
//!
//! The pipeline is one-directional: raw FEN text is parsed by [`fen`] into
//! an occupancy sequence and a side to move, [`board`] turns those into
//! ordered drawing directives using [`geometry`], and [`diagram`] joins the
//! template vocabulary with the directive layers and writes the result.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rookery::{LayoutOptions, diagram::Assembler, template::Template};
//!
//! let options = LayoutOptions::default();
//! let template = Template::load("template.svg", &options)
//!     .expect("failed to load template");
//!
//! let mut assembler = Assembler::new(&template, &options, ".");
//! assembler
//!     .process("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
//!     .expect("failed to write diagram");
//! ```

pub mod board;
pub mod diagram;
pub mod fen;
pub mod geometry;
pub mod naming;
pub mod options;
pub mod template;

mod error;

pub use error::RookeryError;
pub use options::LayoutOptions;
