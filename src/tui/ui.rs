//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe3d_core::{GameStatus, Player, Position, Square, winning_line};

use super::app::App;
use crate::status::{seat_label, status_line};

const CELL_WIDTH: u16 = 12;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 11;

/// Renders title, score board, game board and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Scores
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("3D Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);

    let help = Paragraph::new("1-9 or arrows+Enter: play   r: reset   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.session().state();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (player, col) in [(Player::X, cols[0]), (Player::O, cols[1])] {
        // Only the player on move is lit up.
        let on_move = state.status() == GameStatus::InProgress && state.current_player() == player;
        let name_style = if on_move {
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let lines = vec![
            Line::from(Span::styled(seat_label(player, app.settings()), name_style)),
            Line::from(format!("Wins: {}", state.scores().get(player))),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, col);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let state = app.session().state();
    let in_progress = state.status() == GameStatus::InProgress;
    let on_winning_line = !in_progress
        && winning_line(state.board()).is_some_and(|line| line.contains(&pos));

    let (symbol, mut style) = match state.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.symbol().to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if state.last_move() == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if on_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if in_progress && pos == *app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
        Line::from(""),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.session().state();

    let (text, style) = match (app.notice(), state.status()) {
        (Some(notice), _) => (notice.clone(), Style::default().fg(Color::Yellow)),
        (None, GameStatus::Won(_)) => (
            format!("{}  Press 'r' for a new round.", status_line(state, app.settings())),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (None, GameStatus::Draw) => (
            format!("{}  Press 'r' for a new round.", status_line(state, app.settings())),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        (None, GameStatus::InProgress) => (
            status_line(state, app.settings()),
            Style::default().fg(player_color(state.current_player())),
        ),
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
