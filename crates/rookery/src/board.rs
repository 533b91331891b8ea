//! Board composition: turning a position into ordered drawing directives.
//!
//! A [`Directive`] places one named template symbol at a pixel position;
//! a diagram is the concatenation of an empty-board layer and a piece
//! layer, with later directives drawn over earlier ones.
//!
//! The empty board is orientation-specific but position-independent, so
//! callers build it once per orientation with [`empty_board`] and reuse it
//! across every position of a run. The piece layer is built per position
//! with [`piece_layer`].

use std::fmt;

use crate::{
    fen::{self, ParseError, Piece, Side},
    geometry::{
        self, BORDER_THICKNESS, Point, SQUARE_HEIGHT, SQUARE_WIDTH, VERTICAL_COORDINATES_WIDTH,
    },
    options::LayoutOptions,
};

/// A named symbol from the template vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// One of the twelve piece drawings.
    Piece(Piece),
    LightSquare,
    DarkSquare,
    /// The frame around the board.
    Borders,
    /// A coordinate glyph, `'1'`-`'8'` or `'a'`-`'h'`.
    Coordinate(char),
    MoveIndicator,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Piece(piece) => f.write_str(piece.symbol()),
            Self::LightSquare => f.write_str("lightsquare"),
            Self::DarkSquare => f.write_str("darksquare"),
            Self::Borders => f.write_str("borders"),
            Self::Coordinate(glyph) => write!(f, "coordinate{glyph}"),
            Self::MoveIndicator => f.write_str("moveindicator"),
        }
    }
}

/// A single drawing instruction: reference a template symbol at a pixel
/// position, optionally with a fill color (only the move indicator uses
/// one).
///
/// `Display` renders the `<use>` line that ends up in the SVG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    symbol: Symbol,
    position: Point,
    fill: Option<Side>,
}

impl Directive {
    /// Creates a directive placing `symbol` at `position`.
    pub fn new(symbol: Symbol, position: Point) -> Self {
        Self {
            symbol,
            position,
            fill: None,
        }
    }

    /// Creates a directive with an explicit fill color.
    pub fn with_fill(symbol: Symbol, position: Point, fill: Side) -> Self {
        Self {
            symbol,
            position,
            fill: Some(fill),
        }
    }

    /// The referenced template symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The pixel position the symbol is placed at.
    pub fn position(&self) -> Point {
        self.position
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    <use xlink:href = \"#{}\" ", self.symbol)?;
        if let Some(side) = self.fill {
            write!(f, "fill = \"{}\" ", side.fill())?;
        }
        write!(f, "x = \"{}\" y = \"{}\" />", self.position.x(), self.position.y())
    }
}

/// Build the empty-board layer for one orientation.
///
/// Emits 64 square directives in a checkerboard (light at the top-left
/// corner, color flipping on both axes), then the frame and the coordinate
/// labels when requested. Rank labels run `8` to `1` top-to-bottom with
/// white at the bottom and `1` to `8` with black at the bottom; file labels
/// run `a` to `h` left-to-right, or `h` to `a` when flipped.
pub fn empty_board(options: &LayoutOptions, bottom: Side) -> Vec<Directive> {
    let mut directives = Vec::with_capacity(64 + 17);
    let origin = geometry::board_origin(options.coordinates(), options.border());

    for rank in 0..8 {
        for file in 0..8 {
            let symbol = if (file + rank) % 2 == 0 {
                Symbol::LightSquare
            } else {
                Symbol::DarkSquare
            };
            let position = Point::new(file * SQUARE_WIDTH, rank * SQUARE_HEIGHT)
                .translate(origin.x(), origin.y());
            directives.push(Directive::new(symbol, position));
        }
    }

    if options.border() {
        // The frame sits outside the playing surface, so only the label
        // band shifts it.
        let x = if options.coordinates() {
            VERTICAL_COORDINATES_WIDTH
        } else {
            0
        };
        directives.push(Directive::new(Symbol::Borders, Point::new(x, 0)));
    }

    if options.coordinates() {
        let ranks: [char; 8] = match bottom {
            Side::White => ['8', '7', '6', '5', '4', '3', '2', '1'],
            Side::Black => ['1', '2', '3', '4', '5', '6', '7', '8'],
        };
        for (row, glyph) in ranks.into_iter().enumerate() {
            let y = row as i32 * SQUARE_HEIGHT + BORDER_THICKNESS;
            directives.push(Directive::new(Symbol::Coordinate(glyph), Point::new(0, y)));
        }

        let files: [char; 8] = match bottom {
            Side::White => ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'],
            Side::Black => ['h', 'g', 'f', 'e', 'd', 'c', 'b', 'a'],
        };
        let y = 8 * SQUARE_HEIGHT + 2 * BORDER_THICKNESS;
        for (column, glyph) in files.into_iter().enumerate() {
            let x = column as i32 * SQUARE_WIDTH + VERTICAL_COORDINATES_WIDTH + BORDER_THICKNESS;
            directives.push(Directive::new(Symbol::Coordinate(glyph), Point::new(x, y)));
        }
    }

    directives
}

/// Build the piece layer for one position.
///
/// Parses the placement field, determines the side to move, and places one
/// directive per occupied square. The board is mirrored (both axes) when
/// rotation is requested and white is not to move, so the side to move
/// always sits at the bottom. The move indicator, when requested, sits one
/// square right of the board and one rank up from the bottom, in the
/// unmirrored frame: it is a UI affordance, not a board square, and never
/// flips with the position.
///
/// # Errors
///
/// Propagates the [`ParseError`] for an unrecognized placement character;
/// the caller decides whether to skip the position or abort.
pub fn piece_layer(fen: &str, options: &LayoutOptions) -> Result<Vec<Directive>, ParseError> {
    let entries = fen::parse_placement(fen)?;
    let white_to_play = fen::is_white_to_play(fen);
    let mirror = options.rotate() && !white_to_play;
    let origin = geometry::board_origin(options.coordinates(), options.border());

    let mut directives = Vec::with_capacity(entries.len() + 1);
    for entry in entries {
        let (file, rank) = if mirror {
            (7 - entry.file(), 7 - entry.rank())
        } else {
            (entry.file(), entry.rank())
        };
        let position =
            Point::new(file * SQUARE_WIDTH, rank * SQUARE_HEIGHT).translate(origin.x(), origin.y());
        directives.push(Directive::new(Symbol::Piece(entry.piece()), position));
    }

    if options.move_indicator() {
        let to_play = if white_to_play {
            Side::White
        } else {
            Side::Black
        };
        let border = if options.border() { BORDER_THICKNESS } else { 0 };
        let position = Point::new(
            origin.x() + 8 * SQUARE_WIDTH + border,
            origin.y() + 7 * SQUARE_HEIGHT,
        );
        directives.push(Directive::with_fill(Symbol::MoveIndicator, position, to_play));
    }

    Ok(directives)
}
