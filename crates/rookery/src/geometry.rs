//! Canvas and placement arithmetic for chess diagrams.
//!
//! All positions are integer pixels in the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The constants in this module must stay consistent with the geometry of
//! the symbol template: a square is 72x72 pixels, the optional frame around
//! the board is 2 pixels thick, the optional coordinate-label bands are 48
//! pixels wide (ranks, left edge) and 48 pixels tall (files, bottom edge),
//! and the optional move indicator occupies a 72-pixel band to the right of
//! the board.
//!
//! The declared size of a diagram and the placement of every element are
//! both derived from the functions here, so the declared canvas can never
//! disagree with the drawn content.

/// Width of one board square in pixels.
pub const SQUARE_WIDTH: i32 = 72;
/// Height of one board square in pixels.
pub const SQUARE_HEIGHT: i32 = 72;
/// Thickness of the optional frame around the board.
pub const BORDER_THICKNESS: i32 = 2;
/// Width of the rank-label band along the left edge.
pub const VERTICAL_COORDINATES_WIDTH: i32 = 48;
/// Height of the file-label band along the bottom edge.
pub const HORIZONTAL_COORDINATES_HEIGHT: i32 = 48;
/// Width of the side-to-move indicator band.
pub const MOVE_INDICATOR_WIDTH: i32 = 72;

/// A 2D point in diagram pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns this point shifted by the given offsets.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Overall width of the diagram canvas for the given layout flags.
pub fn canvas_width(coordinates: bool, border: bool, move_indicator: bool) -> i32 {
    let mut width = 8 * SQUARE_WIDTH;
    if coordinates {
        width += VERTICAL_COORDINATES_WIDTH;
    }
    if border {
        width += 2 * BORDER_THICKNESS;
    }
    if move_indicator {
        width += MOVE_INDICATOR_WIDTH;
    }
    width
}

/// Overall height of the diagram canvas for the given layout flags.
pub fn canvas_height(coordinates: bool, border: bool) -> i32 {
    let mut height = 8 * SQUARE_HEIGHT;
    if border {
        height += 2 * BORDER_THICKNESS;
    }
    if coordinates {
        height += HORIZONTAL_COORDINATES_HEIGHT;
    }
    height
}

/// Top-left corner of the playing surface.
///
/// Every square and piece coordinate is relative to this origin: the board
/// shifts right past the rank-label band and inward past the frame.
pub fn board_origin(coordinates: bool, border: bool) -> Point {
    let mut origin = Point::default();
    if coordinates {
        origin = origin.translate(VERTICAL_COORDINATES_WIDTH, 0);
    }
    if border {
        origin = origin.translate(BORDER_THICKNESS, BORDER_THICKNESS);
    }
    origin
}
