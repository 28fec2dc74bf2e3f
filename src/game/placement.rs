#![allow(dead_code)]
//! Placement legality for whole-word candidates
//!
//! Used by the opponent search to test a (word, origin, orientation) triple
//! against the board before anything is placed. Human turns are validated
//! later, at submit time, from whatever the scanner finds; this module is the
//! up-front path for moves built from a dictionary word.

use super::board::{BoardState, Orientation, Position, Tile};
use std::fmt;

/// Why a candidate word cannot occupy the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The word does not fit within the board
    OutOfBounds,
    /// An occupied cell in the path holds a different letter
    LetterConflict,
    /// An empty cell in the path has an occupied perpendicular neighbor, so
    /// filling it would mint an unreviewed side word
    SideWord,
    /// The cell before the start or after the end is occupied, so the
    /// placement would silently extend an existing word
    ExtendsWord,
    /// The word touches no existing tile (and the board is not empty)
    Disconnected,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "word does not fit on the board"),
            PlacementError::LetterConflict => write!(f, "conflicts with a placed letter"),
            PlacementError::SideWord => write!(f, "would form an unchecked side word"),
            PlacementError::ExtendsWord => write!(f, "would extend an existing word"),
            PlacementError::Disconnected => write!(f, "does not touch any placed tile"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// A validated candidate move: the word, where it goes, and which of its
/// cells would receive new tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub origin: Position,
    pub orientation: Orientation,
    pub new_tiles: Vec<(Position, Tile)>,
}

impl Placement {
    /// A placement whose every cell already held the right letter changes
    /// nothing on the board.
    pub fn is_noop(&self) -> bool {
        self.new_tiles.is_empty()
    }
}

/// Check whether `word` may legally occupy the board starting at `origin`
/// along `orientation`.
pub fn check_placement(
    board: &BoardState,
    word: &str,
    origin: Position,
    orientation: Orientation,
) -> Result<Placement, PlacementError> {
    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    if letters.is_empty() {
        return Err(PlacementError::OutOfBounds);
    }

    let end = orientation.offset(origin, letters.len() - 1);
    if !board.in_bounds(origin) || !board.in_bounds(end) {
        return Err(PlacementError::OutOfBounds);
    }

    let mut touched = false;
    let mut new_tiles = Vec::new();

    for (i, &letter) in letters.iter().enumerate() {
        let pos = orientation.offset(origin, i);
        match board.letter_at(pos) {
            Some(existing) => {
                if existing != letter {
                    return Err(PlacementError::LetterConflict);
                }
                touched = true;
            }
            None => {
                if perpendicular_neighbor_occupied(board, pos, orientation) {
                    return Err(PlacementError::SideWord);
                }
                let tile = Tile::new(letter).ok_or(PlacementError::LetterConflict)?;
                new_tiles.push((pos, tile));
            }
        }
    }

    // The run must be the whole word, not a prefix or suffix of a longer one
    if cell_before(board, origin, orientation).is_some_and(|p| board.is_occupied(p))
        || cell_after(board, end, orientation).is_some_and(|p| board.is_occupied(p))
    {
        return Err(PlacementError::ExtendsWord);
    }

    // The very first word of a game stands alone; afterwards every word must
    // overlap something already played
    if !touched && !board.is_empty() {
        return Err(PlacementError::Disconnected);
    }

    Ok(Placement {
        word: letters.iter().collect(),
        origin,
        orientation,
        new_tiles,
    })
}

/// Boolean convenience over [`check_placement`] for callers that only need
/// a verdict.
pub fn is_legal_placement(
    board: &BoardState,
    word: &str,
    origin: Position,
    orientation: Orientation,
) -> bool {
    check_placement(board, word, origin, orientation).is_ok()
}

fn perpendicular_neighbor_occupied(
    board: &BoardState,
    pos: Position,
    orientation: Orientation,
) -> bool {
    let (first, second) = match orientation {
        Orientation::Horizontal => (
            (pos.row > 0).then(|| Position::new(pos.row - 1, pos.col)),
            Some(Position::new(pos.row + 1, pos.col)),
        ),
        Orientation::Vertical => (
            (pos.col > 0).then(|| Position::new(pos.row, pos.col - 1)),
            Some(Position::new(pos.row, pos.col + 1)),
        ),
    };
    [first, second]
        .into_iter()
        .flatten()
        .any(|n| board.in_bounds(n) && board.is_occupied(n))
}

fn cell_before(board: &BoardState, origin: Position, orientation: Orientation) -> Option<Position> {
    let pos = match orientation {
        Orientation::Horizontal => (origin.col > 0).then(|| Position::new(origin.row, origin.col - 1)),
        Orientation::Vertical => (origin.row > 0).then(|| Position::new(origin.row - 1, origin.col)),
    }?;
    board.in_bounds(pos).then_some(pos)
}

fn cell_after(board: &BoardState, end: Position, orientation: Orientation) -> Option<Position> {
    let pos = orientation.offset(end, 1);
    board.in_bounds(pos).then_some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_hi() -> BoardState {
        // HI locked at (7,7)-(7,8)
        let mut board = BoardState::standard();
        board
            .place_transient(Position::new(7, 7), Tile::new('H').unwrap())
            .unwrap();
        board
            .place_transient(Position::new(7, 8), Tile::new('I').unwrap())
            .unwrap();
        board.lock_turn(0);
        board
    }

    #[test]
    fn test_first_move_needs_no_connection() {
        let board = BoardState::standard();
        assert!(is_legal_placement(
            &board,
            "HI",
            Position::new(7, 7),
            Orientation::Horizontal
        ));
        assert!(is_legal_placement(
            &board,
            "HI",
            Position::new(0, 0),
            Orientation::Vertical
        ));
    }

    #[test]
    fn test_bounds_enforced() {
        let board = BoardState::standard();
        assert_eq!(
            check_placement(&board, "HELLO", Position::new(7, 12), Orientation::Horizontal),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            check_placement(&board, "HELLO", Position::new(12, 7), Orientation::Vertical),
            Err(PlacementError::OutOfBounds)
        );
        // Exactly reaching the edge is fine
        assert!(is_legal_placement(
            &board,
            "HELLO",
            Position::new(7, 10),
            Orientation::Horizontal
        ));
    }

    #[test]
    fn test_overlap_must_match() {
        let board = board_with_hi();
        // HIM shares H and I, then adds M on an empty cell
        let placement =
            check_placement(&board, "HIM", Position::new(7, 7), Orientation::Horizontal).unwrap();
        assert_eq!(placement.new_tiles.len(), 1);
        assert_eq!(placement.new_tiles[0].0, Position::new(7, 9));

        // HAM wants A where I sits
        assert_eq!(
            check_placement(&board, "HAM", Position::new(7, 7), Orientation::Horizontal),
            Err(PlacementError::LetterConflict)
        );
    }

    #[test]
    fn test_disconnected_rejected() {
        let board = board_with_hi();
        assert_eq!(
            check_placement(&board, "OX", Position::new(0, 0), Orientation::Horizontal),
            Err(PlacementError::Disconnected)
        );
    }

    #[test]
    fn test_side_word_denied() {
        let board = board_with_hi();
        // Horizontal OX at (6,7) never touches HI, but its empty first cell
        // sits directly above the locked H
        assert_eq!(
            check_placement(&board, "OX", Position::new(6, 7), Orientation::Horizontal),
            Err(PlacementError::SideWord)
        );
        // Running through the H instead, so the H is part of the run, is fine
        assert!(is_legal_placement(
            &board,
            "OH",
            Position::new(6, 7),
            Orientation::Vertical
        ));
    }

    #[test]
    fn test_crossing_through_shared_letter_is_legal() {
        let board = board_with_hi();
        // HAT down from (7,7) reuses the locked H as its first letter
        let placement =
            check_placement(&board, "HAT", Position::new(7, 7), Orientation::Vertical).unwrap();
        assert_eq!(placement.new_tiles.len(), 2);
    }

    #[test]
    fn test_extending_existing_word_denied() {
        let board = board_with_hi();
        // IT starting right after HI would silently build HIIT
        assert_eq!(
            check_placement(&board, "IT", Position::new(7, 9), Orientation::Horizontal),
            Err(PlacementError::ExtendsWord)
        );
        // Ending right before HI is just as bad
        assert_eq!(
            check_placement(&board, "OH", Position::new(7, 5), Orientation::Horizontal),
            Err(PlacementError::ExtendsWord)
        );
    }

    #[test]
    fn test_full_overlap_is_legal_but_noop() {
        let board = board_with_hi();
        let placement =
            check_placement(&board, "HI", Position::new(7, 7), Orientation::Horizontal).unwrap();
        assert!(placement.is_noop());
    }
}
