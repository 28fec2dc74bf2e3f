//! Application state management

mod screen;
mod state;

pub use screen::{MenuOption, Screen};
pub use state::App;
