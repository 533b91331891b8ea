//! FEN parsing: piece placement and side to move.
//!
//! Only the parts of a FEN string that matter for drawing are interpreted:
//! the piece-placement field becomes a sequence of [`OccupancyEntry`]
//! values and the side-to-move field selects the board orientation and the
//! move-indicator color. All other FEN fields are ignored; no legality
//! checking is performed.

use thiserror::Error;

/// Number of leading characters of an input line worth reading: 64 fillable
/// squares, 7 rank separators, one blank, one side-to-move character.
pub const FEN_EXCERPT_LEN: usize = 75;

/// One of the two chess colors, also used for board orientation
/// (which side sits at the bottom edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// SVG fill attribute value for this side.
    pub fn fill(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// The twelve piece kinds a FEN placement field can name.
///
/// Uppercase FEN letters are white, lowercase black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    WhiteKing,
    WhiteQueen,
    WhiteRook,
    WhiteBishop,
    WhiteKnight,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackRook,
    BlackBishop,
    BlackKnight,
    BlackPawn,
}

impl Piece {
    /// Maps a FEN placement letter to a piece, or `None` for any other
    /// character.
    pub fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(Self::WhiteKing),
            'Q' => Some(Self::WhiteQueen),
            'R' => Some(Self::WhiteRook),
            'B' => Some(Self::WhiteBishop),
            'N' => Some(Self::WhiteKnight),
            'P' => Some(Self::WhitePawn),
            'k' => Some(Self::BlackKing),
            'q' => Some(Self::BlackQueen),
            'r' => Some(Self::BlackRook),
            'b' => Some(Self::BlackBishop),
            'n' => Some(Self::BlackKnight),
            'p' => Some(Self::BlackPawn),
            _ => None,
        }
    }

    /// The FEN letter for this piece.
    pub fn fen_char(self) -> char {
        match self {
            Self::WhiteKing => 'K',
            Self::WhiteQueen => 'Q',
            Self::WhiteRook => 'R',
            Self::WhiteBishop => 'B',
            Self::WhiteKnight => 'N',
            Self::WhitePawn => 'P',
            Self::BlackKing => 'k',
            Self::BlackQueen => 'q',
            Self::BlackRook => 'r',
            Self::BlackBishop => 'b',
            Self::BlackKnight => 'n',
            Self::BlackPawn => 'p',
        }
    }

    /// Name of the template symbol that draws this piece.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::WhiteKing => "whiteking",
            Self::WhiteQueen => "whitequeen",
            Self::WhiteRook => "whiterook",
            Self::WhiteBishop => "whitebishop",
            Self::WhiteKnight => "whiteknight",
            Self::WhitePawn => "whitepawn",
            Self::BlackKing => "blackking",
            Self::BlackQueen => "blackqueen",
            Self::BlackRook => "blackrook",
            Self::BlackBishop => "blackbishop",
            Self::BlackKnight => "blackknight",
            Self::BlackPawn => "blackpawn",
        }
    }
}

/// A piece standing on a board square.
///
/// Square indices run 0..=63 left-to-right, top-to-bottom as written in the
/// FEN placement field (rank 8 to rank 1, file a to file h), before any
/// orientation mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyEntry {
    square: u8,
    piece: Piece,
}

impl OccupancyEntry {
    /// Creates an entry for the given square index and piece.
    pub fn new(square: u8, piece: Piece) -> Self {
        debug_assert!(square < 64);
        Self { square, piece }
    }

    /// The square index, 0..=63.
    pub fn square(self) -> u8 {
        self.square
    }

    /// The piece standing on the square.
    pub fn piece(self) -> Piece {
        self.piece
    }

    /// Zero-based file (column) of the square, 0 = file a.
    pub fn file(self) -> i32 {
        i32::from(self.square) % 8
    }

    /// Zero-based rank row of the square, 0 = rank 8.
    pub fn rank(self) -> i32 {
        i32::from(self.square) / 8
    }
}

/// An unrecognized character in the piece-placement field.
///
/// Carries the byte offset of the character in the scanned string so the
/// caller can point a diagnostic at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unexpected character `{found}` in piece placement")]
pub struct ParseError {
    found: char,
    offset: usize,
}

impl ParseError {
    /// The offending character.
    pub fn found(self) -> char {
        self.found
    }

    /// Byte offset of the offending character in the scanned string.
    pub fn offset(self) -> usize {
        self.offset
    }

    /// Byte length of the offending character, for span construction.
    pub fn len_utf8(self) -> usize {
        self.found.len_utf8()
    }
}

/// Parse the piece-placement field of a FEN string into occupancy entries.
///
/// Scans left to right until a blank, the end of the string, or until 64
/// squares have been accounted for. A digit `1`-`8` skips that many empty
/// squares, a piece letter emits one entry, and `/` is accepted anywhere
/// and ignored (the square counter alone tracks rank boundaries, so
/// misplaced separators are tolerated). A short field leaves the remaining
/// squares empty; excess characters past the 64th square are ignored.
///
/// # Errors
///
/// Any other character is fatal for this position and is reported with its
/// offset; nothing about other positions is affected.
pub fn parse_placement(fen: &str) -> Result<Vec<OccupancyEntry>, ParseError> {
    let mut entries = Vec::new();
    let mut square: u32 = 0;

    for (offset, c) in fen.char_indices() {
        if c == ' ' || square >= 64 {
            break;
        }
        match c {
            '1'..='8' => square += c as u32 - '0' as u32,
            '/' => {}
            _ => {
                let piece = Piece::from_fen_char(c).ok_or(ParseError { found: c, offset })?;
                entries.push(OccupancyEntry::new(square as u8, piece));
                square += 1;
            }
        }
    }

    Ok(entries)
}

/// Examine a FEN string to know which side is to play.
///
/// Looks at the first blank-delimited field after the placement; a leading
/// `b` means black. A missing or truncated field defaults to white, on
/// purpose: many FEN-like inputs omit the trailing fields.
pub fn is_white_to_play(fen: &str) -> bool {
    match fen.split(' ').filter(|field| !field.is_empty()).nth(1) {
        Some(field) => !field.starts_with('b'),
        None => true,
    }
}
