//! Error adapter for converting [`RookeryError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. A FEN
//! parse error is rendered with a labeled span pointing at the offending
//! character inside the position string; every other error renders as a
//! plain diagnostic.

use std::{error::Error as _, fmt};

use log::error;
use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use rookery::{RookeryError, fen::ParseError};

/// Adapter exposing a FEN parse error as a rich miette diagnostic.
pub struct ParseErrorAdapter<'a> {
    /// The wrapped parse error
    err: &'a ParseError,
    /// The FEN string, for displaying the snippet
    src: &'a str,
}

impl<'a> ParseErrorAdapter<'a> {
    /// Create a new parse-error adapter.
    pub fn new(err: &'a ParseError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for ParseErrorAdapter<'_> {}

impl MietteDiagnostic for ParseErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("rookery::fen"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "valid placement characters are K, Q, R, B, N, P in either case, digits 1-8, and `/`",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = SourceSpan::new(self.err.offset().into(), self.err.len_utf8());
        let label = LabeledSpan::new_primary_with_span(
            Some(format!("unexpected `{}`", self.err.found())),
            span,
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`RookeryError`] variants without source-location
/// information.
pub struct ErrorAdapter<'a>(pub &'a RookeryError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            RookeryError::Io(_) => "rookery::io",
            RookeryError::Parse { .. } => return None,
            RookeryError::Template(_) => "rookery::template",
            RookeryError::Config(_) => "rookery::config",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse diagnostic with a span into the FEN string.
    Parse(ParseErrorAdapter<'a>),
    /// Any other error, rendered without a snippet.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`RookeryError`] into its reportable form.
pub fn to_reportable(err: &RookeryError) -> Reportable<'_> {
    match err {
        RookeryError::Parse { err: parse_err, src } => {
            Reportable::Parse(ParseErrorAdapter::new(parse_err, src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

/// Render an error through miette's graphical handler and log it.
pub fn log_report(err: &RookeryError) {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, &to_reportable(err))
        .expect("Writing to String buffer is infallible");
    error!("{writer}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error_for(fen: &str) -> RookeryError {
        let err = rookery::fen::parse_placement(fen).unwrap_err();
        RookeryError::new_parse_error(err, fen)
    }

    #[test]
    fn parse_errors_become_span_diagnostics() {
        let err = parse_error_for("4k3/8/8/8/8/8/8/4X3 w - - 0 1");

        match to_reportable(&err) {
            Reportable::Parse(adapter) => {
                assert_eq!(adapter.to_string(), "unexpected character `X` in piece placement");
                let labels: Vec<_> = adapter.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert_eq!(labels[0].offset(), 17);
                assert_eq!(labels[0].len(), 1);
                assert!(adapter.source_code().is_some());
            }
            Reportable::Error(_) => panic!("expected a parse diagnostic"),
        }
    }

    #[test]
    fn other_errors_stay_plain() {
        let err = RookeryError::Config("bad config".to_string());
        let reportable = to_reportable(&err);
        assert_eq!(reportable.to_string(), "configuration error: bad config");
        assert!(reportable.labels().is_none());
        assert_eq!(reportable.code().unwrap().to_string(), "rookery::config");
    }
}
