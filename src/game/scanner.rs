//! Word discovery over the board
//!
//! Walks the grid for contiguous horizontal and vertical runs of length two or
//! more. A lone tile belongs to no word. Runs are reported in row-major order
//! of their starting cell, horizontal before vertical when both start on the
//! same cell, so results are reproducible for a given board.

use super::board::{BoardState, Occupant, Orientation, Position};

/// A word found on the board: its letters in order with their cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredWord {
    cells: Vec<(char, Position)>,
    orientation: Orientation,
    is_new: bool,
}

impl DiscoveredWord {
    pub fn cells(&self) -> &[(char, Position)] {
        &self.cells
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|&(_, pos)| pos)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// True when at least one cell was placed by the turn in progress.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn text(&self) -> String {
        self.cells.iter().map(|&(letter, _)| letter).collect()
    }

    pub fn start(&self) -> Position {
        self.cells[0].1
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions().any(|p| p == pos)
    }

    #[cfg(test)]
    pub fn from_cells(
        cells: Vec<(char, Position)>,
        orientation: Orientation,
        is_new: bool,
    ) -> Self {
        Self {
            cells,
            orientation,
            is_new,
        }
    }
}

/// Discover every word currently on the board, both layers included.
pub fn scan(board: &BoardState) -> Vec<DiscoveredWord> {
    let size = board.size();
    let mut words = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let pos = Position::new(row, col);
            if !board.is_occupied(pos) {
                continue;
            }
            // A run is collected once, from its first cell only
            if col == 0 || !board.is_occupied(Position::new(row, col - 1)) {
                if let Some(word) = collect_run(board, pos, Orientation::Horizontal) {
                    words.push(word);
                }
            }
            if row == 0 || !board.is_occupied(Position::new(row - 1, col)) {
                if let Some(word) = collect_run(board, pos, Orientation::Vertical) {
                    words.push(word);
                }
            }
        }
    }

    words
}

fn collect_run(board: &BoardState, start: Position, orientation: Orientation) -> Option<DiscoveredWord> {
    let mut cells = Vec::new();
    let mut is_new = false;
    let mut step = 0;

    loop {
        let pos = orientation.offset(start, step);
        if !board.in_bounds(pos) {
            break;
        }
        match board.occupant(pos) {
            Occupant::Empty => break,
            Occupant::Locked(tile) => cells.push((tile.letter(), pos)),
            Occupant::Transient(tile) => {
                is_new = true;
                cells.push((tile.letter(), pos));
            }
        }
        step += 1;
    }

    if cells.len() < 2 {
        return None;
    }
    Some(DiscoveredWord {
        cells,
        orientation,
        is_new,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Tile;

    fn place(board: &mut BoardState, row: usize, col: usize, letter: char) {
        board
            .place_transient(Position::new(row, col), Tile::new(letter).unwrap())
            .unwrap();
    }

    #[test]
    fn test_isolated_tile_forms_no_word() {
        let mut board = BoardState::standard();
        place(&mut board, 7, 7, 'Q');
        assert!(scan(&board).is_empty());
    }

    #[test]
    fn test_never_returns_length_one_runs() {
        let mut board = BoardState::standard();
        // Scattered singles plus one real word
        place(&mut board, 0, 0, 'A');
        place(&mut board, 4, 4, 'B');
        place(&mut board, 7, 7, 'H');
        place(&mut board, 7, 8, 'I');
        let words = scan(&board);
        assert!(words.iter().all(|w| w.len() >= 2));
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "HI");
    }

    #[test]
    fn test_horizontal_word_discovered() {
        let mut board = BoardState::standard();
        place(&mut board, 7, 7, 'C');
        place(&mut board, 7, 8, 'A');
        place(&mut board, 7, 9, 'T');

        let words = scan(&board);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[0].orientation(), Orientation::Horizontal);
        assert_eq!(words[0].start(), Position::new(7, 7));
    }

    #[test]
    fn test_cross_decomposition() {
        // DOG across, DART down, sharing the D
        let mut board = BoardState::standard();
        place(&mut board, 5, 5, 'D');
        place(&mut board, 5, 6, 'O');
        place(&mut board, 5, 7, 'G');
        place(&mut board, 6, 5, 'A');
        place(&mut board, 7, 5, 'R');
        place(&mut board, 8, 5, 'T');

        let words = scan(&board);
        assert_eq!(words.len(), 2);
        // Both runs start at (5,5): horizontal reported first
        assert_eq!(words[0].text(), "DOG");
        assert_eq!(words[0].orientation(), Orientation::Horizontal);
        assert_eq!(words[1].text(), "DART");
        assert_eq!(words[1].orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_row_major_discovery_order() {
        let mut board = BoardState::standard();
        place(&mut board, 9, 2, 'O');
        place(&mut board, 9, 3, 'X');
        place(&mut board, 2, 10, 'H');
        place(&mut board, 2, 11, 'I');

        let words = scan(&board);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "HI");
        assert_eq!(words[1].text(), "OX");
    }

    #[test]
    fn test_scan_is_idempotent() {
        let mut board = BoardState::standard();
        place(&mut board, 7, 7, 'H');
        place(&mut board, 7, 8, 'I');
        place(&mut board, 8, 8, 'N');
        board.lock_turn(0);

        let first = scan(&board);
        let second = scan(&board);
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_tag_tracks_transient_cells() {
        let mut board = BoardState::standard();
        place(&mut board, 7, 7, 'H');
        place(&mut board, 7, 8, 'I');
        board.lock_turn(0);

        // Extending HI with a transient M makes HIM new
        place(&mut board, 7, 9, 'M');
        let words = scan(&board);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "HIM");
        assert!(words[0].is_new());

        // After locking, nothing on the board is new any more
        board.lock_turn(1);
        let words = scan(&board);
        assert!(words.iter().all(|w| !w.is_new()));
    }

    #[test]
    fn test_word_reaching_board_edge() {
        let mut board = BoardState::standard();
        place(&mut board, 0, 13, 'G');
        place(&mut board, 0, 14, 'O');
        let words = scan(&board);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "GO");
    }
}
