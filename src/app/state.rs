#![allow(dead_code)]
//! Application state and key handling
//!
//! Translates key presses into board-coordinate intents for the game core and
//! holds whatever the renderer needs: the cursor, the feedback line, and the
//! lifetime summary. All game rules live in the core; this layer only decides
//! which cell or menu entry a key refers to.

use super::screen::{MenuOption, Screen};
use crate::game::board::Position;
use crate::game::dictionary::DictionaryIndex;
use crate::game::Game;
use crate::stats::{self, Summary};
use crate::storage::{MatchRecord, Storage};

/// Main application state
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    /// The game session
    pub game: Game,
    /// Board cell the cursor is on
    pub cursor: Position,
    /// Feedback message from the last action
    pub feedback: String,
    /// Lifetime totals, refreshed after every recorded match
    pub summary: Option<Summary>,
    /// Match history; None when the database is unavailable
    storage: Option<Storage>,
}

impl App {
    /// Create the application, opening the match history best-effort.
    pub fn new(dictionary: DictionaryIndex) -> Self {
        Self::with_storage(dictionary, Storage::open().ok())
    }

    fn with_storage(dictionary: DictionaryIndex, storage: Option<Storage>) -> Self {
        let game = Game::new(dictionary, &mut rand::rng());
        let summary = storage.as_ref().and_then(|s| stats::summary(s).ok());
        Self {
            screen: Screen::Menu { selected: 0 },
            should_quit: false,
            game,
            cursor: Position::new(7, 7),
            feedback: String::new(),
            summary,
            storage,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_up(&mut self) {
        match &mut self.screen {
            Screen::Menu { selected } => {
                *selected = selected.checked_sub(1).unwrap_or(MenuOption::all().len() - 1);
            }
            Screen::Playing => {
                if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                }
            }
            Screen::GameOver { .. } => {}
        }
    }

    pub fn on_down(&mut self) {
        match &mut self.screen {
            Screen::Menu { selected } => {
                *selected = (*selected + 1) % MenuOption::all().len();
            }
            Screen::Playing => {
                if self.cursor.row + 1 < self.game.board().size() {
                    self.cursor.row += 1;
                }
            }
            Screen::GameOver { .. } => {}
        }
    }

    pub fn on_left(&mut self) {
        if matches!(self.screen, Screen::Playing) && self.cursor.col > 0 {
            self.cursor.col -= 1;
        }
    }

    pub fn on_right(&mut self) {
        if matches!(self.screen, Screen::Playing)
            && self.cursor.col + 1 < self.game.board().size()
        {
            self.cursor.col += 1;
        }
    }

    /// Letter keys drop a rack tile on the cursor cell.
    pub fn on_char(&mut self, c: char) {
        if !matches!(self.screen, Screen::Playing) {
            return;
        }
        match self.game.place_tile(self.cursor, c) {
            Ok(()) => self.feedback.clear(),
            Err(e) => self.feedback = e.to_string(),
        }
    }

    /// Backspace lifts the tile under the cursor back onto the rack.
    pub fn on_backspace(&mut self) {
        if !matches!(self.screen, Screen::Playing) {
            return;
        }
        if self.game.take_back(self.cursor).is_some() {
            self.feedback.clear();
        }
    }

    /// Tab shuffles the rack.
    pub fn on_tab(&mut self) {
        if matches!(self.screen, Screen::Playing) {
            self.game.shuffle_rack(&mut rand::rng());
        }
    }

    pub fn on_enter(&mut self) {
        match self.screen {
            Screen::Menu { selected } => match MenuOption::all()[selected] {
                MenuOption::NewGame => self.start_game(),
                MenuOption::Quit => self.quit(),
            },
            Screen::Playing => self.submit(),
            Screen::GameOver { .. } => {
                self.screen = Screen::Menu { selected: 0 };
            }
        }
    }

    pub fn on_escape(&mut self) {
        match self.screen {
            Screen::Menu { .. } => self.quit(),
            Screen::Playing => {
                // Abandon the turn in progress and go back to the menu
                self.game.recall_transients();
                self.feedback.clear();
                self.screen = Screen::Menu { selected: 0 };
            }
            Screen::GameOver { .. } => {
                self.screen = Screen::Menu { selected: 0 };
            }
        }
    }

    fn start_game(&mut self) {
        self.game.reset(&mut rand::rng());
        self.cursor = Position::new(7, 7);
        self.feedback = "Type letters to place tiles, Enter to submit".to_string();
        self.screen = Screen::Playing;
    }

    /// Submit the human turn; on success the opponent answers immediately.
    fn submit(&mut self) {
        match self.game.submit_turn(&mut rand::rng()) {
            Ok(outcome) => {
                let mut feedback = format!(
                    "You played {} for {} points",
                    outcome.word_list(),
                    outcome.score
                );
                match self.game.opponent_move(&mut rand::rng()) {
                    Ok(reply) => {
                        feedback.push_str(&format!(
                            "; opponent answered {} at {} for {} points",
                            reply.word, reply.origin, reply.score
                        ));
                        self.feedback = feedback;
                    }
                    Err(_) => {
                        // The opponent is out of moves: the match is over
                        self.feedback = feedback;
                        self.finish_game();
                    }
                }
            }
            Err(e) => self.feedback = e.to_string(),
        }
    }

    fn finish_game(&mut self) {
        let record = MatchRecord::new(
            self.game.human_score(),
            self.game.opponent_score(),
            self.game.iteration(),
        );
        if let Some(storage) = &self.storage {
            if storage.record_match(&record).is_ok() {
                self.summary = stats::summary(storage).ok();
            }
        }
        self.screen = Screen::GameOver {
            outcome: record.outcome,
            human_score: record.human_score,
            opponent_score: record.opponent_score,
        };
    }
}
