//! Error types for Rookery operations.
//!
//! This module provides the main error type [`RookeryError`] which wraps
//! the error conditions that can occur while producing diagrams.

use std::io;

use thiserror::Error;

use crate::{fen::ParseError, template::TemplateError};

/// The main error type for Rookery operations.
///
/// The `Parse` variant keeps the offending FEN string alongside the
/// structured parse error so callers can render a diagnostic with a span
/// into the source text.
#[derive(Debug, Error)]
pub enum RookeryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl RookeryError {
    /// Create a new `Parse` error with the associated FEN source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
