//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and messages for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{ALPHABET, Classification, Letter, WORD_LENGTH};
use crate::game::{GameSnapshot, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keys per on-screen keyboard row
const KEYS_PER_ROW: usize = 9;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    let snapshot = app.game.as_ref().map(crate::game::Game::snapshot);

    render_board(f, snapshot.as_ref(), main_chunks[0]);
    render_side_panel(f, app, snapshot.as_ref(), main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, snapshot.as_ref(), chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(classification: Option<Classification>) -> Style {
    match classification {
        Some(Classification::Exact) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: Option<Letter>, classification: Option<Classification>) -> Span<'static> {
    let text = letter.map_or_else(|| " · ".to_string(), |l| format!(" {l} "));
    Span::styled(text, tile_style(classification))
}

fn board_lines(snapshot: &GameSnapshot) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(snapshot.max_attempts * 2);

    for result in &snapshot.history {
        let spans: Vec<Span> = result
            .positions()
            .iter()
            .flat_map(|p| [tile(Some(p.letter), Some(p.classification)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !snapshot.state.is_terminal() {
        let spans: Vec<Span> = snapshot
            .composer
            .cells
            .iter()
            .flat_map(|&cell| {
                [
                    Span::styled(
                        cell.map_or_else(|| " _ ".to_string(), |l| format!(" {l} ")),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let filled = snapshot.history.len() + usize::from(!snapshot.state.is_terminal());
    for _ in filled..snapshot.max_attempts {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [tile(None, None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, snapshot: Option<&GameSnapshot>, area: Rect) {
    let content = snapshot.map_or_else(
        || vec![Line::from("Waiting for the secret word...")],
        board_lines,
    );

    let board = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, snapshot: Option<&GameSnapshot>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, snapshot, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, snapshot: Option<&GameSnapshot>, area: Rect) {
    let lines: Vec<Line> = ALPHABET
        .chunks(KEYS_PER_ROW)
        .flat_map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .filter_map(|&c| Letter::new(c).ok())
                .flat_map(|letter| {
                    let best = snapshot.and_then(|s| s.keyboard.get(letter));
                    [tile(Some(letter), best), Span::raw(" ")]
                })
                .collect();
            [Line::from(spans), Line::from("")]
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn secret_entry_title(ready: bool) -> String {
    if ready {
        " Secret word | Enter to start ".to_string()
    } else {
        format!(" Secret word | type {WORD_LENGTH} letters ")
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let masked = "•".repeat(app.secret_input.chars().count());
    let (title, content, color) = match app.input_mode {
        InputMode::SecretEntry => (
            secret_entry_title(app.secret_ready()),
            masked,
            Color::Cyan,
        ),
        InputMode::Playing => {
            let submit_enabled = app
                .game
                .as_ref()
                .is_some_and(|g| g.composer().submit_enabled());
            (
                if submit_enabled {
                    " Guess | Enter to submit ".to_string()
                } else {
                    " Guess | type letters, Backspace deletes ".to_string()
                },
                String::new(),
                if submit_enabled {
                    Color::Green
                } else {
                    Color::Yellow
                },
            )
        }
        InputMode::Finished(Outcome::Won) => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Finished(Outcome::Lost) => (
            " Out of attempts | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, snapshot: Option<&GameSnapshot>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let attempts_text = snapshot.map_or_else(
        || "Attempts: -".to_string(),
        |s| format!("Attempts: {}/{}", s.attempts_used, s.max_attempts),
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Finished(_) => "q: Quit | n: New Game",
        _ => "Esc: Quit | Enter: Submit | Backspace: Delete",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Game, GameConfig, InputEvent};

    #[test]
    fn board_has_two_lines_per_attempt() {
        let game = Game::new(Word::new("plant").unwrap(), GameConfig::default());
        let lines = board_lines(&game.snapshot());
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn finished_board_has_no_active_row() {
        let mut game = Game::new(Word::new("plant").unwrap(), GameConfig::default());
        game.type_text("plant").unwrap();
        game.handle(InputEvent::Submit).unwrap();

        let lines = board_lines(&game.snapshot());
        assert_eq!(lines.len(), 12);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(first, " P   L   A   N   T  ");
    }

    #[test]
    fn exact_tiles_are_green() {
        assert_eq!(tile_style(Some(Classification::Exact)).bg, Some(Color::Green));
        assert_eq!(tile_style(None).bg, None);
    }

    #[test]
    fn secret_entry_title_names_word_length() {
        assert_eq!(
            secret_entry_title(false),
            format!(" Secret word | type {WORD_LENGTH} letters ")
        );
        assert!(secret_entry_title(true).contains("Enter to start"));
    }
}
