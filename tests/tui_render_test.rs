//! Rendering tests for the terminal UI against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe3d::{Settings, tui::{App, draw}};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_fresh_game_shows_scores_and_turn() {
    let app = App::new(Settings::default());
    let screen = render(&app);

    assert!(screen.contains("3D Tic-Tac-Toe"));
    assert!(screen.contains("Player 1 (X)"));
    assert!(screen.contains("Player 2 (O)"));
    assert!(screen.contains("Wins: 0"));
    assert!(screen.contains("Player 1's turn (X)"));
}

#[test]
fn test_win_message_and_tally() {
    let mut app = App::new(Settings::default());
    press(&mut app, "14253");
    let screen = render(&app);

    assert!(screen.contains("Player 1 wins!"));
    assert!(screen.contains("Wins: 1"));
}

#[test]
fn test_draw_message() {
    let mut app = App::new(Settings::default());
    press(&mut app, "123546879");
    let screen = render(&app);

    assert!(screen.contains("It's a draw!"));
}

#[test]
fn test_rejected_move_notice() {
    let mut app = App::new(Settings::default());
    press(&mut app, "55");
    let screen = render(&app);

    assert!(screen.contains("Center is already taken"));
}

#[test]
fn test_configured_names() {
    let settings = Settings::from_toml("player_one_name = \"Ada\"").unwrap();
    let app = App::new(settings);
    let screen = render(&app);

    assert!(screen.contains("Ada (X)"));
    assert!(screen.contains("Ada's turn (X)"));
}
