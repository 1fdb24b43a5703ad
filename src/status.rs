//! Player-facing status text shared by the terminal UI and replay output.

use crate::config::Settings;
use tictactoe3d_core::{GameState, GameStatus, Player};

/// One-line description of the round: whose turn, who won, or a draw.
pub fn status_line(state: &GameState, settings: &Settings) -> String {
    match state.status() {
        GameStatus::InProgress => {
            let player = state.current_player();
            format!(
                "{}'s turn ({})",
                settings.player_name(player),
                player.symbol()
            )
        }
        GameStatus::Won(winner) => format!("{} wins!", settings.player_name(winner)),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

/// Score board label, e.g. `Player 1 (X)`.
pub fn seat_label(player: Player, settings: &Settings) -> String {
    format!("{} ({})", settings.player_name(player), player.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe3d_core::Session;

    #[test]
    fn test_turn_line() {
        let mut session = Session::new();
        let settings = Settings::default();
        assert_eq!(status_line(session.state(), &settings), "Player 1's turn (X)");

        session.submit_move(4);
        assert_eq!(status_line(session.state(), &settings), "Player 2's turn (O)");
    }

    #[test]
    fn test_terminal_lines() {
        let settings = Settings::default();

        let mut session = Session::new();
        for cell in [0, 3, 1, 4, 2] {
            session.submit_move(cell);
        }
        assert_eq!(status_line(session.state(), &settings), "Player 1 wins!");

        session.reset_game();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.submit_move(cell);
        }
        assert_eq!(status_line(session.state(), &settings), "It's a draw!");
    }

    #[test]
    fn test_seat_label_uses_configured_name() {
        let settings = Settings::from_toml("player_two_name = \"Grace\"").unwrap();
        assert_eq!(seat_label(Player::O, &settings), "Grace (O)");
        assert_eq!(seat_label(Player::X, &settings), "Player 1 (X)");
    }
}
