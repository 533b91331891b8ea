//! SVG template loading and adaptation.
//!
//! The template is an SVG document containing only symbol definitions
//! (`<defs>`): how to draw each piece, the squares, the coordinate glyphs,
//! the frame, and the move indicator. The drawing directives reference
//! those definitions with `<use>`, so the template acts as an opaque,
//! reusable drawing vocabulary.
//!
//! Adaptation rewrites the opening `<svg` line with the canvas size derived
//! from the layout options and blanks the closing `</svg>` line; the real
//! closing tag is re-appended after the directive layers when a diagram is
//! written.

use std::{fs, io, path::Path};

use log::debug;
use thiserror::Error;

use crate::{geometry, options::LayoutOptions};

/// The closing tag appended after the directive layers of every diagram.
pub const CLOSING_TAG: &str = "</svg>";

/// Violations of the expected template shape. All of these are fatal for
/// the whole run; there is no useful diagram output without a vocabulary.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("cannot read template file `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("template is empty")]
    Empty,

    #[error("template first line must start with `<svg`, found `{0}`")]
    MissingOpeningTag(String),

    #[error("template last line must start with `</svg>`, found `{0}`")]
    MissingClosingTag(String),
}

/// An adapted symbol vocabulary, ready to head every diagram of a run.
#[derive(Debug, Clone)]
pub struct Template {
    lines: Vec<String>,
}

impl Template {
    /// Load a template file and adapt it to the given layout.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the file cannot be read or does not
    /// have the expected opening and closing lines.
    pub fn load(path: impl AsRef<Path>, options: &LayoutOptions) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = path.display().to_string(); "template loaded");
        Self::parse(&content, options)
    }

    /// Adapt template text to the given layout.
    ///
    /// The first line must start with `<svg`; it is replaced with an
    /// opening tag declaring the derived canvas width and height (left
    /// unclosed, since the original tag's remaining attributes continue on
    /// the following lines). The last non-empty line must start with
    /// `</svg>`; it is blanked so the closing tag can follow the directive
    /// layers instead.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if either marker line is missing.
    pub fn parse(content: &str, options: &LayoutOptions) -> Result<Self, TemplateError> {
        let mut lines: Vec<String> = content.lines().map(str::to_owned).collect();

        let first = lines.first().ok_or(TemplateError::Empty)?;
        if !first.starts_with("<svg") {
            return Err(TemplateError::MissingOpeningTag(first.clone()));
        }
        lines[0] = format!(
            "<svg width = \"{}\" height = \"{}\" version = \"1.1\"",
            geometry::canvas_width(
                options.coordinates(),
                options.border(),
                options.move_indicator()
            ),
            geometry::canvas_height(options.coordinates(), options.border()),
        );

        let last = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .ok_or(TemplateError::Empty)?;
        if !lines[last].starts_with(CLOSING_TAG) {
            return Err(TemplateError::MissingClosingTag(lines[last].clone()));
        }
        lines[last].clear();

        Ok(Self { lines })
    }

    /// The adapted vocabulary lines, in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "<svg xmlns = \"http://www.w3.org/2000/svg\"\n\
        xmlns:xlink = \"http://www.w3.org/1999/xlink\" >\n\
        <defs>\n\
        </defs>\n\
        </svg>\n";

    #[test]
    fn header_is_rewritten_with_the_canvas_size() {
        let options = LayoutOptions::default();
        let template = Template::parse(MINIMAL, &options).unwrap();
        assert_eq!(
            template.lines()[0],
            "<svg width = \"576\" height = \"576\" version = \"1.1\""
        );
    }

    #[test]
    fn canvas_size_follows_the_layout() {
        let options = LayoutOptions::new(true, true, true, false, false);
        let template = Template::parse(MINIMAL, &options).unwrap();
        assert_eq!(
            template.lines()[0],
            "<svg width = \"700\" height = \"628\" version = \"1.1\""
        );
    }

    #[test]
    fn closing_tag_is_blanked() {
        let options = LayoutOptions::default();
        let template = Template::parse(MINIMAL, &options).unwrap();
        assert_eq!(template.lines().last().unwrap(), "");
        assert!(!template.lines().iter().any(|l| l.contains("</svg>")));
    }

    #[test]
    fn trailing_blank_lines_are_tolerated() {
        let options = LayoutOptions::default();
        let content = format!("{MINIMAL}\n   \n");
        let template = Template::parse(&content, &options).unwrap();
        assert!(!template.lines().iter().any(|l| l.contains("</svg>")));
    }

    #[test]
    fn missing_opening_tag_is_fatal() {
        let options = LayoutOptions::default();
        let err = Template::parse("<html>\n</html>\n", &options).unwrap_err();
        assert!(matches!(err, TemplateError::MissingOpeningTag(_)));
    }

    #[test]
    fn missing_closing_tag_is_fatal() {
        let options = LayoutOptions::default();
        let err = Template::parse("<svg>\n<defs>\n", &options).unwrap_err();
        assert!(matches!(err, TemplateError::MissingClosingTag(_)));
    }

    #[test]
    fn empty_template_is_fatal() {
        let options = LayoutOptions::default();
        assert!(matches!(
            Template::parse("", &options).unwrap_err(),
            TemplateError::Empty
        ));
    }
}
