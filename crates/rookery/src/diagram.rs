//! Diagram assembly: one SVG file per position.
//!
//! The [`Assembler`] owns everything that is invariant across a run: the
//! adapted template, the layout options, the two prebuilt empty boards
//! (one per orientation), the output directory, and the run counter. Each
//! call to [`Assembler::process`] handles exactly one position.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    RookeryError,
    board::{self, Directive},
    fen::{self, Side},
    naming,
    options::LayoutOptions,
    template::{CLOSING_TAG, Template},
};

/// Assembles and writes one SVG diagram per input position.
pub struct Assembler<'a> {
    template: &'a Template,
    options: &'a LayoutOptions,
    /// Empty board with white at the bottom, shared by every position.
    white_bottom: Vec<Directive>,
    /// Empty board with black at the bottom, shared by every position.
    black_bottom: Vec<Directive>,
    out_dir: PathBuf,
    next_number: u32,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler for one run.
    ///
    /// Both empty-board variants are built here, exactly once; positions
    /// only ever borrow them.
    pub fn new(
        template: &'a Template,
        options: &'a LayoutOptions,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template,
            options,
            white_bottom: board::empty_board(options, Side::White),
            black_bottom: board::empty_board(options, Side::Black),
            out_dir: out_dir.into(),
            next_number: 1,
        }
    }

    /// Assemble and write the diagram for one position.
    ///
    /// Returns the path of the written file. The run counter advances even
    /// when the position fails, so surviving diagrams keep their
    /// input-order numbers.
    ///
    /// # Errors
    ///
    /// Returns [`RookeryError::Parse`] for an unrecognized placement
    /// character and [`RookeryError::Io`] if the output file cannot be
    /// written. Neither affects previously written diagrams.
    pub fn process(&mut self, fen_str: &str) -> Result<PathBuf, RookeryError> {
        let number = self.next_number;
        self.next_number += 1;

        let pieces = board::piece_layer(fen_str, self.options)
            .map_err(|err| RookeryError::new_parse_error(err, fen_str))?;

        let empty_board = if self.options.rotate() && !fen::is_white_to_play(fen_str) {
            &self.black_bottom
        } else {
            &self.white_bottom
        };

        let file_name = if self.options.position_as_file_name() {
            naming::fen_file_name(fen_str)
        } else {
            naming::numbered_file_name(number)
        };
        let path = self.out_dir.join(file_name);

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        write_diagram(&mut writer, self.template, empty_board, &pieces)?;
        writer.flush()?;

        debug!(path = path.display().to_string(), fen = fen_str; "diagram written");
        Ok(path)
    }

    /// The output directory diagrams are written into.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

/// Write one complete diagram: vocabulary, empty board, pieces, closing
/// tag, in that order (z-order is sequence order).
fn write_diagram(
    writer: &mut impl Write,
    template: &Template,
    empty_board: &[Directive],
    pieces: &[Directive],
) -> io::Result<()> {
    for line in template.lines() {
        writeln!(writer, "{line}")?;
    }
    for directive in empty_board {
        writeln!(writer, "{directive}")?;
    }
    for directive in pieces {
        writeln!(writer, "{directive}")?;
    }
    writeln!(writer, "{CLOSING_TAG}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<svg>\n<defs>\n</defs>\n</svg>\n";
    const TWO_KINGS: &str = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";

    fn assembler_fixtures(options: LayoutOptions) -> (Template, LayoutOptions) {
        let template = Template::parse(TEMPLATE, &options).unwrap();
        (template, options)
    }

    #[test]
    fn diagrams_are_numbered_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let (template, options) = assembler_fixtures(LayoutOptions::default());
        let mut assembler = Assembler::new(&template, &options, dir.path());

        let first = assembler.process(TWO_KINGS).unwrap();
        let second = assembler.process(TWO_KINGS).unwrap();
        assert_eq!(first, dir.path().join("dia00001.svg"));
        assert_eq!(second, dir.path().join("dia00002.svg"));
        assert!(first.exists());
        assert!(second.exists());
    }

    #[test]
    fn counter_advances_past_failed_positions() {
        let dir = tempfile::tempdir().unwrap();
        let (template, options) = assembler_fixtures(LayoutOptions::default());
        let mut assembler = Assembler::new(&template, &options, dir.path());

        assembler.process(TWO_KINGS).unwrap();
        let err = assembler.process("4X3/8/8/8/8/8/8/8 w").unwrap_err();
        assert!(matches!(err, RookeryError::Parse { .. }));
        let third = assembler.process(TWO_KINGS).unwrap();

        assert_eq!(third, dir.path().join("dia00003.svg"));
        assert!(!dir.path().join("dia00002.svg").exists());
    }

    #[test]
    fn position_as_file_name_uses_the_fen() {
        let dir = tempfile::tempdir().unwrap();
        let (template, options) =
            assembler_fixtures(LayoutOptions::new(false, false, false, false, true));
        let mut assembler = Assembler::new(&template, &options, dir.path());

        let path = assembler.process(TWO_KINGS).unwrap();
        assert_eq!(path, dir.path().join("4k38888884K3w.svg"));
    }

    #[test]
    fn written_diagram_has_all_layers_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let (template, options) = assembler_fixtures(LayoutOptions::default());
        let mut assembler = Assembler::new(&template, &options, dir.path());

        let path = assembler.process(TWO_KINGS).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "<svg width = \"576\" height = \"576\" version = \"1.1\"");
        assert_eq!(lines.last().unwrap(), &"</svg>");
        assert_eq!(
            content.matches("xlink:href = \"#lightsquare\"").count()
                + content.matches("xlink:href = \"#darksquare\"").count(),
            64
        );
        assert!(content.contains("xlink:href = \"#blackking\" x = \"288\" y = \"0\""));
        assert!(content.contains("xlink:href = \"#whiteking\" x = \"288\" y = \"504\""));

        // Pieces come after the squares so they draw on top.
        let last_square = lines
            .iter()
            .rposition(|l| l.contains("#lightsquare") || l.contains("#darksquare"))
            .unwrap();
        let first_piece = lines.iter().position(|l| l.contains("#blackking")).unwrap();
        assert!(first_piece > last_square);
    }

    #[test]
    fn rotated_black_to_move_uses_the_flipped_board() {
        let dir = tempfile::tempdir().unwrap();
        let (template, options) =
            assembler_fixtures(LayoutOptions::new(false, true, false, true, false));
        let mut assembler = Assembler::new(&template, &options, dir.path());

        let path = assembler.process("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        // Rank label `1` at the top edge only happens on the flipped board.
        assert!(content.contains("xlink:href = \"#coordinate1\" x = \"0\" y = \"2\""));
    }

    #[test]
    fn unwritable_output_directory_reports_io_error() {
        let (template, options) = assembler_fixtures(LayoutOptions::default());
        let mut assembler = Assembler::new(&template, &options, "/nonexistent-rookery-out");

        let err = assembler.process(TWO_KINGS).unwrap_err();
        assert!(matches!(err, RookeryError::Io(_)));
    }
}
