//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameStatus, Player, Position, Square};

use super::app::App;

const PLAYER_X_COLOR: Color = Color::Rgb(0xFA, 0x40, 0x10);
const PLAYER_O_COLOR: Color = Color::Rgb(0x1E, 0x90, 0xFF);
const ENDGAME_COLOR: Color = Color::Rgb(0xC0, 0xC0, 0xC0);
const DRAW_COLOR: Color = Color::Rgb(0x80, 0x00, 0x80);

const BOARD_ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

fn player_color(player: Player) -> Color {
    match player {
        Player::X => PLAYER_X_COLOR,
        Player::O => PLAYER_O_COLOR,
    }
}

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11), // Board
            Constraint::Length(3), // Banner
            Constraint::Length(3), // Message + keys
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_banner(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, positions) in BOARD_ROWS.iter().enumerate() {
        draw_row(frame, rows[i * 2], app, positions);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, *pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let status = game.current_status();
    let index = pos.to_index();

    let (symbol, mut style) = match game.board().get(index).unwrap_or_default() {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    // Finished boards take no input: no cursor, winning line lit, rest dimmed.
    match status {
        GameStatus::InProgress if pos == app.cursor() => {
            style = style.bg(Color::White);
        }
        GameStatus::InProgress => {}
        GameStatus::Won { line, .. } if line.contains(index) => {
            style = style.bg(ENDGAME_COLOR);
        }
        GameStatus::Won { .. } | GameStatus::Draw => {
            style = style.add_modifier(Modifier::DIM);
        }
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let color = match game.current_status() {
        GameStatus::InProgress => player_color(game.active_player()),
        GameStatus::Won { winner, .. } => player_color(*winner),
        GameStatus::Draw => DRAW_COLOR,
    };

    let banner = Paragraph::new(app.banner())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let keys = if app.game().current_status().is_terminal() {
        "r: play again | q: quit"
    } else {
        "arrows: move | enter: play | 1-9: play square | q: quit"
    };

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            app.message().to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
