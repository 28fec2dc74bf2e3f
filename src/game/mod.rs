//! Game logic: board state, word discovery, placement checks, scoring,
//! dictionary lookup, and the opponent search

pub mod board;
pub mod dictionary;
pub mod opponent;
pub mod placement;
pub mod rack;
pub mod scanner;
pub mod scoring;

use board::{BoardError, BoardState, Position, Tile};
use dictionary::DictionaryIndex;
use opponent::NoLegalMove;
use placement::Placement;
use rack::Rack;
use rand::prelude::*;
use scanner::DiscoveredWord;
use std::collections::HashSet;
use std::fmt;

/// Why a submission was rejected. The board keeps its in-flight tiles so the
/// player can fix the turn and resubmit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Nothing was placed this turn
    NoNewTiles,
    /// A placed tile belongs to no word, or the turn touches nothing played
    /// earlier
    DisconnectedPlacement,
    /// A formed word is not in the dictionary
    InvalidWord(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NoNewTiles => write!(f, "no new tiles were placed"),
            SubmitError::DisconnectedPlacement => {
                write!(f, "placement is not connected")
            }
            SubmitError::InvalidWord(word) => write!(f, "{} is not a word", word),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Why a tile could not be placed from the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The rack holds no such letter
    NotInRack(char),
    /// The board rejected the cell
    Board(BoardError),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::NotInRack(letter) => write!(f, "{} is not in your rack", letter),
            PlaceError::Board(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlaceError {}

impl From<BoardError> for PlaceError {
    fn from(e: BoardError) -> Self {
        PlaceError::Board(e)
    }
}

/// Result of a committed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Points earned by this turn
    pub score: u32,
    /// The words the turn formed, in discovery order
    pub words: Vec<DiscoveredWord>,
}

impl TurnOutcome {
    /// The formed words joined for display.
    pub fn word_list(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result of a committed opponent move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentOutcome {
    pub word: String,
    pub origin: Position,
    pub score: u32,
}

/// One human-versus-opponent session: the board, the shared dictionary, the
/// human rack, and the running scores. All mutation funnels through here, one
/// synchronous call at a time.
pub struct Game {
    board: BoardState,
    dictionary: DictionaryIndex,
    rack: Rack,
    iteration: u32,
    human_score: u32,
    opponent_score: u32,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(dictionary: DictionaryIndex, rng: &mut R) -> Self {
        let rack = Rack::deal(&dictionary, rng);
        Self {
            board: BoardState::standard(),
            dictionary,
            rack,
            iteration: 0,
            human_score: 0,
            opponent_score: 0,
        }
    }

    /// Start over: clear the board, redeal the rack, zero the scores.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.reset();
        self.rack.redeal(&self.dictionary, rng);
        self.iteration = 0;
        self.human_score = 0;
        self.opponent_score = 0;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }

    /// Count of successfully committed turns, both players.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    pub fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    /// Place a rack letter on the board for the turn in progress.
    pub fn place_tile(&mut self, pos: Position, letter: char) -> Result<(), PlaceError> {
        let letter = letter.to_ascii_uppercase();
        let tile = Tile::new(letter).ok_or(PlaceError::NotInRack(letter))?;
        if !self.rack.contains(letter) {
            return Err(PlaceError::NotInRack(letter));
        }
        self.board.place_transient(pos, tile)?;
        self.rack.take(letter);
        Ok(())
    }

    /// Lift an in-flight tile back onto the rack.
    pub fn take_back(&mut self, pos: Position) -> Option<char> {
        let tile = self.board.remove_transient(pos)?;
        self.rack.put_back(tile.letter());
        Some(tile.letter())
    }

    /// Lift every in-flight tile back onto the rack.
    pub fn recall_transients(&mut self) {
        for (_, tile) in self.board.clear_transients() {
            self.rack.put_back(tile.letter());
        }
    }

    pub fn shuffle_rack<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rack.shuffle(rng);
    }

    /// Submit the human turn: validate, score, lock, and refill the rack.
    /// On failure the in-flight tiles stay exactly where they are.
    pub fn submit_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnOutcome, SubmitError> {
        let outcome = self.commit_turn()?;
        self.human_score += outcome.score;
        let available = self.available_letters();
        self.rack.refill(&self.dictionary, &available, rng);
        Ok(outcome)
    }

    /// Let the opponent search the whole board for a move and play it. An
    /// empty candidate set ends the game.
    pub fn opponent_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<OpponentOutcome, NoLegalMove> {
        debug_assert_eq!(self.board.transient_count(), 0);
        let mut moves = opponent::find_moves(&self.board, &self.dictionary);
        while !moves.is_empty() {
            let index = rng.random_range(0..moves.len());
            let placement = moves.swap_remove(index);
            if !self.apply_placement(&placement) {
                continue;
            }
            match self.commit_turn() {
                Ok(outcome) => {
                    self.opponent_score += outcome.score;
                    return Ok(OpponentOutcome {
                        word: placement.word,
                        origin: placement.origin,
                        score: outcome.score,
                    });
                }
                Err(_) => {
                    // Withdraw the candidate and try another
                    for &(pos, _) in &placement.new_tiles {
                        self.board.remove_transient(pos);
                    }
                }
            }
        }
        Err(NoLegalMove)
    }

    fn apply_placement(&mut self, placement: &Placement) -> bool {
        for (i, &(pos, tile)) in placement.new_tiles.iter().enumerate() {
            if self.board.place_transient(pos, tile).is_err() {
                for &(placed, _) in &placement.new_tiles[..i] {
                    self.board.remove_transient(placed);
                }
                return false;
            }
        }
        true
    }

    /// Shared commit path for both players: scan, check connectivity and the
    /// dictionary, score the new words, lock the turn.
    fn commit_turn(&mut self) -> Result<TurnOutcome, SubmitError> {
        let placed: Vec<Position> = self.board.transient_positions().collect();
        if placed.is_empty() {
            return Err(SubmitError::NoNewTiles);
        }

        let new_words: Vec<DiscoveredWord> = scanner::scan(&self.board)
            .into_iter()
            .filter(DiscoveredWord::is_new)
            .collect();

        // A placed tile outside every word is stranded
        for &pos in &placed {
            if !new_words.iter().any(|w| w.contains(pos)) {
                return Err(SubmitError::DisconnectedPlacement);
            }
        }
        // From the second turn on, the play must touch something already locked
        if self.iteration > 0 && !placed.iter().any(|&pos| self.board.has_locked_neighbor(pos)) {
            return Err(SubmitError::DisconnectedPlacement);
        }

        for word in &new_words {
            let text = word.text();
            if !self.dictionary.contains(&text) {
                return Err(SubmitError::InvalidWord(text));
            }
        }

        let score = scoring::score(&new_words);
        self.board.lock_turn(self.iteration);
        self.iteration += 1;
        Ok(TurnOutcome {
            score,
            words: new_words,
        })
    }

    /// Letters the refill may draw from: the rack, plus board letters that
    /// are still loosely connected (at most two occupied neighbors).
    fn available_letters(&self) -> HashSet<char> {
        let mut letters: HashSet<char> = self.rack.letters().iter().copied().collect();
        for pos in self.board.occupied_positions() {
            if self.board.occupied_neighbor_count(pos) <= 2 {
                if let Some(letter) = self.board.letter_at(pos) {
                    letters.insert(letter);
                }
            }
        }
        letters
    }

    #[cfg(test)]
    fn place_unchecked(&mut self, row: usize, col: usize, letter: char) {
        self.board
            .place_transient(Position::new(row, col), Tile::new(letter).unwrap())
            .unwrap();
    }
}
