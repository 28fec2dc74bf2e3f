//! Opponent move search
//!
//! Brute force over word x origin x orientation: every dictionary word is
//! tried at every board cell in both directions, and the survivors of the
//! placement checks form the candidate set. One candidate is then chosen
//! uniformly at random through a caller-supplied random source, so tests can
//! pin the choice with a seeded generator.
//!
//! The enumeration is the hot path of the whole game. Connectivity after the
//! first move requires overlapping a placed letter, so on a non-empty board
//! only words sharing at least one letter with the board are worth trying;
//! that filter shrinks the candidate pool without changing the result.

use super::board::{BoardState, Orientation, Position};
use super::dictionary::DictionaryIndex;
use super::placement::{check_placement, Placement};
use rand::prelude::*;
use std::fmt;

/// The opponent found no legal placement anywhere; the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLegalMove;

impl fmt::Display for NoLegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal move is available")
    }
}

impl std::error::Error for NoLegalMove {}

/// Every legal, board-changing placement for the current board.
pub fn find_moves(board: &BoardState, dictionary: &DictionaryIndex) -> Vec<Placement> {
    let candidates: Vec<&str> = if board.is_empty() {
        dictionary.words().collect()
    } else {
        dictionary.words_containing_any(&board.letters_in_play())
    };

    let size = board.size();
    let mut moves = Vec::new();
    for word in candidates {
        if word.len() < 2 {
            continue;
        }
        for row in 0..size {
            for col in 0..size {
                let origin = Position::new(row, col);
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    if let Ok(placement) = check_placement(board, word, origin, orientation) {
                        // Re-confirming a word already on the board changes
                        // nothing and is never offered as a move
                        if !placement.is_noop() {
                            moves.push(placement);
                        }
                    }
                }
            }
        }
    }
    moves
}

/// Pick one candidate uniformly at random.
pub fn choose_move<R: Rng + ?Sized>(moves: &[Placement], rng: &mut R) -> Option<Placement> {
    moves.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Tile;

    fn board_with_hi() -> BoardState {
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
    fn test_finds_extension_over_existing_word() {
        let board = board_with_hi();
        let dictionary = DictionaryIndex::from_lines(["hi", "him"]).unwrap();

        let moves = find_moves(&board, &dictionary);
        assert!(!moves.is_empty());
        // HIM laid along HI, adding only the M, must be among the candidates
        let extension = moves
            .iter()
            .find(|m| {
                m.word == "HIM"
                    && m.orientation == Orientation::Horizontal
                    && m.origin == Position::new(7, 7)
            })
            .unwrap();
        assert_eq!(extension.new_tiles.len(), 1);
        assert_eq!(extension.new_tiles[0].0, Position::new(7, 9));
    }

    #[test]
    fn test_noop_full_overlap_is_filtered() {
        let board = board_with_hi();
        let dictionary = DictionaryIndex::from_lines(["hi"]).unwrap();
        let moves = find_moves(&board, &dictionary);
        // HI can still hook vertically through its own letters, but the
        // exact overlay that places nothing is never offered
        assert!(moves.iter().all(|m| !m.is_noop()));
        assert!(!moves
            .iter()
            .any(|m| m.orientation == Orientation::Horizontal && m.origin == Position::new(7, 7)));
    }

    #[test]
    fn test_no_legal_move_with_disjoint_dictionary() {
        let board = board_with_hi();
        let dictionary = DictionaryIndex::from_lines(["ox", "ox"]).unwrap();
        let moves = find_moves(&board, &dictionary);
        assert!(moves.is_empty());
        assert_eq!(choose_move(&moves, &mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn test_empty_board_allows_any_word_anywhere() {
        let board = BoardState::standard();
        let dictionary = DictionaryIndex::from_lines(["ox"]).unwrap();
        let moves = find_moves(&board, &dictionary);
        // 14 starts per row or column, both orientations
        assert_eq!(moves.len(), 15 * 14 * 2);
        assert!(moves.iter().all(|m| m.new_tiles.len() == 2));
    }

    #[test]
    fn test_single_letter_words_are_skipped() {
        let board = BoardState::standard();
        let dictionary = DictionaryIndex::from_lines(["a", "ox"]).unwrap();
        let moves = find_moves(&board, &dictionary);
        assert!(moves.iter().all(|m| m.word == "OX"));
    }

    #[test]
    fn test_choice_is_deterministic_with_seeded_rng() {
        let board = board_with_hi();
        let dictionary = DictionaryIndex::from_lines(["hi", "him", "ha", "hat"]).unwrap();
        let moves = find_moves(&board, &dictionary);
        assert!(!moves.is_empty());

        let pick1 = choose_move(&moves, &mut StdRng::seed_from_u64(9)).unwrap();
        let pick2 = choose_move(&moves, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(pick1, pick2);
    }
}
