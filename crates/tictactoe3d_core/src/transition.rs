//! Turn state machine: applying a move and resetting a round.

use super::invariants::assert_invariants;
use super::position::Position;
use super::rules::{evaluate, is_full};
use super::scores::record_win;
use super::types::{GameState, GameStatus, Square};
use super::validator::check_position;
use tracing::{debug, info, instrument};

/// Places the current player's mark at `position` and settles the round.
///
/// Callers validate with [`check_move`](crate::check_move) first. A move that
/// fails the check anyway (round over, cell taken) is ignored and the state
/// comes back untouched.
///
/// After the mark is placed:
/// - a completed line ends the round as `Won` and credits the winner once;
///   the turn stays with the winner
/// - a full board without a line ends the round as `Draw`
/// - otherwise the turn passes to the opponent
#[instrument(skip(state), fields(player = ?state.current_player()))]
pub fn apply_move(mut state: GameState, position: Position) -> GameState {
    if let Err(reason) = check_position(&state, position) {
        debug!(%reason, "Ignoring illegal move");
        return state;
    }

    let player = state.current_player;
    state.board.set(position, Square::Occupied(player));
    state.history.push(position);

    if let Some(winner) = evaluate(&state.board) {
        info!(?winner, moves = state.history.len(), "Round won");
        state.status = GameStatus::Won(winner);
        state.scores = record_win(state.scores, winner);
    } else if is_full(&state.board) {
        info!("Round drawn");
        state.status = GameStatus::Draw;
    } else {
        state.current_player = player.opponent();
    }

    assert_invariants(&state);
    state
}

/// Starts a new round, keeping the score tally.
#[instrument(skip(state), fields(status = ?state.status()))]
pub fn reset(state: GameState) -> GameState {
    debug!(scores = ?state.scores(), "Resetting round");
    GameState::with_scores(state.scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Scores};

    fn play(cells: &[usize]) -> GameState {
        cells.iter().fold(GameState::new(), |state, &cell| {
            let pos = Position::from_index(cell).expect("cell in range");
            apply_move(state, pos)
        })
    }

    #[test]
    fn test_move_flips_turn() {
        let state = play(&[4]);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.history(), &[Position::Center]);
    }

    #[test]
    fn test_win_keeps_turn_and_scores_once() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.scores(), Scores::new(1, 0));
    }

    #[test]
    fn test_o_can_win() {
        let state = play(&[0, 2, 1, 4, 8, 6]);
        assert_eq!(state.status(), GameStatus::Won(Player::O));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.scores(), Scores::new(0, 1));
    }

    #[test]
    fn test_illegal_move_returns_state_unchanged() {
        let state = play(&[4]);
        let again = apply_move(state.clone(), Position::Center);
        assert_eq!(again, state);

        let won = play(&[0, 3, 1, 4, 2]);
        let after = apply_move(won.clone(), Position::BottomRight);
        assert_eq!(after, won);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X O X / O X O / O X X: X completes the diagonal with the ninth mark.
        let state = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.scores(), Scores::new(1, 0));
    }

    #[test]
    fn test_reset_keeps_scores() {
        let won = play(&[0, 3, 1, 4, 2]);
        let fresh = reset(won);
        assert_eq!(fresh.scores(), Scores::new(1, 0));
        assert_eq!(fresh.status(), GameStatus::InProgress);
        assert_eq!(fresh.current_player(), Player::X);
        assert_eq!(fresh.board().filled(), 0);
        assert!(fresh.history().is_empty());
    }
}
