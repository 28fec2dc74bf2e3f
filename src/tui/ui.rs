//! UI rendering using ratatui
//!
//! Supports three screens:
//! - Menu: main menu with lifetime totals
//! - Playing: the board, the rack, and the feedback line
//! - GameOver: final scores once the opponent runs out of moves

use crate::app::{App, MenuOption, Screen};
use crate::game::board::{premium_at, Occupant, Position, Premium};
use crate::storage::MatchOutcome;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Menu { selected } => render_menu(frame, *selected, app),
        Screen::Playing => render_game(frame, app),
        Screen::GameOver {
            outcome,
            human_score,
            opponent_score,
        } => render_game_over(frame, *outcome, *human_score, *opponent_score),
    }
}

/// Render the main menu
fn render_menu(frame: &mut Frame, selected: usize, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Logo
            Constraint::Length(2), // Lifetime totals
            Constraint::Min(4),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 _____ _ _       ____
|_   _(_) | ___ / ___|_ __ ___  ___ ___
  | | | | |/ _ \ |   | '__/ _ \/ __/ __|
  | | | | |  __/ |___| | | (_) \__ \__ \
  |_| |_|_|\___|\____|_|  \___/|___/___/
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let totals = app
        .summary
        .map(|s| s.line())
        .unwrap_or_else(|| "Match history unavailable".to_string());
    let totals_widget = Paragraph::new(totals)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(totals_widget, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();
    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[2]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the playing screen
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let size = app.game.board().size() as u16;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),        // Scores
            Constraint::Length(size + 2), // Board with border
            Constraint::Length(3),        // Rack
            Constraint::Length(1),        // Feedback
            Constraint::Length(1),        // Footer
        ])
        .margin(1)
        .split(area);

    let header = Line::from(vec![
        Span::styled("You ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.game.human_score().to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::raw("   "),
        Span::styled("Opponent ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.game.opponent_score().to_string(),
            Style::default().fg(Color::Red).bold(),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Turn {}", app.game.iteration()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        layout[0],
    );

    let board = Paragraph::new(board_lines(app))
        .block(Block::default().borders(Borders::ALL).title("Board"))
        .alignment(Alignment::Center);
    frame.render_widget(board, layout[1]);

    let rack: String = app
        .game
        .rack()
        .letters()
        .iter()
        .map(|c| format!(" {} ", c))
        .collect();
    let rack_widget = Paragraph::new(rack)
        .style(Style::default().fg(Color::Yellow).bold())
        .block(Block::default().borders(Borders::ALL).title("Rack"))
        .alignment(Alignment::Center);
    frame.render_widget(rack_widget, layout[2]);

    let feedback = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[3]);

    let footer =
        Paragraph::new("Arrows Move  A-Z Place  Backspace Lift  Enter Submit  Tab Shuffle  Esc Menu")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// One styled line per board row, three columns per cell.
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let board = app.game.board();
    let size = board.size();
    let mut lines = Vec::with_capacity(size);

    for row in 0..size {
        let mut spans = Vec::with_capacity(size);
        for col in 0..size {
            let pos = Position::new(row, col);
            let (text, mut style) = match board.occupant(pos) {
                Occupant::Transient(tile) => (
                    format!(" {} ", tile.letter()),
                    Style::default().fg(Color::Yellow).bold(),
                ),
                Occupant::Locked(tile) => (
                    format!(" {} ", tile.letter()),
                    Style::default().fg(Color::White),
                ),
                Occupant::Empty => empty_cell(pos),
            };
            if pos == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Empty cells show their bonus, colored like the classic board.
fn empty_cell(pos: Position) -> (String, Style) {
    match premium_at(pos) {
        Premium::TripleWord => ("TW ".to_string(), Style::default().fg(Color::Red)),
        Premium::DoubleWord => ("DW ".to_string(), Style::default().fg(Color::Magenta)),
        Premium::TripleLetter => ("TL ".to_string(), Style::default().fg(Color::Blue)),
        Premium::DoubleLetter => ("DL ".to_string(), Style::default().fg(Color::Cyan)),
        Premium::None => (" . ".to_string(), Style::default().fg(Color::DarkGray)),
    }
}

/// Render the end-of-game screen
fn render_game_over(
    frame: &mut Frame,
    outcome: MatchOutcome,
    human_score: u32,
    opponent_score: u32,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Verdict
            Constraint::Min(2),    // Scores
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let title = Paragraph::new("GAME OVER")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let (verdict, color) = match outcome {
        MatchOutcome::HumanWin => ("You win!", Color::Green),
        MatchOutcome::OpponentWin => ("The opponent wins", Color::Red),
        MatchOutcome::Draw => ("A draw", Color::White),
    };
    let verdict_widget = Paragraph::new(verdict)
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(verdict_widget, layout[1]);

    let scores = Paragraph::new(format!("You {}   Opponent {}", human_score, opponent_score))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(scores, layout[2]);

    let footer = Paragraph::new("Enter Menu  Esc Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}
