//! Output file-name derivation.
//!
//! Diagrams are named either by a zero-padded run counter or from the
//! position itself, depending on the layout options.

use crate::fen;

/// Characters of a placement field that may appear in a file name.
/// A fixed allow-list, not a computed range.
const ADMITTED_CHARACTERS: &str = "1pP2348RrkK5bBNn6qQ7";

/// Sequential name of the form `dia00042.svg`. Numbering starts at 1.
pub fn numbered_file_name(number: u32) -> String {
    format!("dia{number:05}.svg")
}

/// Position-derived name: the placement field filtered through the
/// allow-list, then `w` or `b` for the side to move, then `.svg`.
pub fn fen_file_name(fen: &str) -> String {
    let placement = fen.split(' ').next().unwrap_or(fen);
    let mut name: String = placement
        .chars()
        .filter(|c| ADMITTED_CHARACTERS.contains(*c))
        .collect();
    name.push(if fen::is_white_to_play(fen) { 'w' } else { 'b' });
    name.push_str(".svg");
    name
}
