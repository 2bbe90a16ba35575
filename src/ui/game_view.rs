use crate::game::{Cell, GameOutcome, Move, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),  // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Light => Color::White,
        Player::Dark => Color::LightBlue,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let score = state.score();

    let (status, color) = match state.outcome() {
        Some(GameOutcome::Winner(p)) => (format!("{p} wins"), player_color(p)),
        Some(GameOutcome::Draw) => ("Draw".to_string(), Color::Yellow),
        None => {
            let p = state.current_player();
            (format!("{p} to move"), player_color(p))
        }
    };

    let line = Line::from(vec![
        Span::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  |  You: {}  vs  {}  |  ○ {}  ● {}",
            app.human(),
            app.opponent_name(),
            score.light,
            score.dark
        )),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Othello"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let board = app.state().board();
    let hints = app.hints();
    let cursor = app.cursor();
    let mut lines = Vec::new();

    let mut col_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        col_line.push(Span::raw(format!("{col:^3}")));
    }
    lines.push(Line::from(col_line));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw(format!("{row:>2} "))];

        for col in 0..board.width() {
            let (symbol, color) = match board.cell_at(row, col) {
                Cell::Light => (" ○ ", player_color(Player::Light)),
                Cell::Dark => (" ● ", player_color(Player::Dark)),
                Cell::Empty if hints.contains(&Move::new(row, col)) => (" · ", Color::Green),
                Cell::Empty => ("   ", Color::DarkGray),
            };
            let mut style = Style::default().fg(color).bg(Color::Rgb(0, 96, 48));
            if (row, col) == cursor {
                style = style.bg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        lines.push(Line::from(row_spans));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Arrows: Move  |  Enter/Space: Place  |  R: Restart  |  Q: Quit")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
