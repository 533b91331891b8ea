//! Layout configuration for diagram rendering.
//!
//! [`LayoutOptions`] is fixed for an entire run and passed by reference
//! into the compositor; nothing position-specific lives here. All fields
//! default to off and can be loaded from external sources via
//! [`serde::Deserialize`].

use serde::Deserialize;

/// Layout flags controlling what a diagram contains and how it is drawn.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LayoutOptions {
    /// Draw a frame around the board.
    #[serde(default)]
    border: bool,

    /// Draw algebraic coordinate labels along the left and bottom edges.
    #[serde(default)]
    coordinates: bool,

    /// Draw a side-to-move indicator next to the board.
    #[serde(default)]
    move_indicator: bool,

    /// Flip the board when the side to move is not at the bottom.
    #[serde(default)]
    rotate: bool,

    /// Derive output file names from the position instead of numbering.
    #[serde(default)]
    position_as_file_name: bool,
}

impl LayoutOptions {
    /// Creates layout options with every flag spelled out.
    pub fn new(
        border: bool,
        coordinates: bool,
        move_indicator: bool,
        rotate: bool,
        position_as_file_name: bool,
    ) -> Self {
        Self {
            border,
            coordinates,
            move_indicator,
            rotate,
            position_as_file_name,
        }
    }

    /// Whether a frame is drawn around the board.
    pub fn border(&self) -> bool {
        self.border
    }

    /// Whether coordinate labels are drawn around the board.
    pub fn coordinates(&self) -> bool {
        self.coordinates
    }

    /// Whether the side-to-move indicator is drawn.
    pub fn move_indicator(&self) -> bool {
        self.move_indicator
    }

    /// Whether the board flips when the side to move is not at the bottom.
    pub fn rotate(&self) -> bool {
        self.rotate
    }

    /// Whether output file names are derived from the position.
    pub fn position_as_file_name(&self) -> bool {
        self.position_as_file_name
    }
}
