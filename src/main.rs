//! tilecross - a word-grid game against a tireless opponent
//!
//! Place tiles, score words, and hold out until the opponent runs dry.

mod app;
mod game;
mod stats;
mod storage;
mod tui;

use app::App;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use game::dictionary::{DictionaryError, DictionaryIndex};
use std::io;
use tui::Tui;

fn main() -> io::Result<()> {
    // The dictionary must be usable before the terminal is taken over
    let dictionary = match load_dictionary() {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("tilecross: {}", e);
            std::process::exit(1);
        }
    };

    let mut terminal = Tui::start()?;
    let mut app = App::new(dictionary);

    loop {
        terminal.draw(&app)?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Esc => app.on_escape(),
                    KeyCode::Enter => app.on_enter(),
                    KeyCode::Backspace | KeyCode::Delete => app.on_backspace(),
                    KeyCode::Tab => app.on_tab(),
                    KeyCode::Up => app.on_up(),
                    KeyCode::Down => app.on_down(),
                    KeyCode::Left => app.on_left(),
                    KeyCode::Right => app.on_right(),
                    KeyCode::Char(c) => {
                        if c.is_ascii_alphabetic() {
                            app.on_char(c.to_ascii_uppercase());
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Load the word list named on the command line, or the bundled one.
fn load_dictionary() -> Result<DictionaryIndex, DictionaryError> {
    match std::env::args().nth(1) {
        Some(path) => DictionaryIndex::load(path),
        None => DictionaryIndex::bundled(),
    }
}
