use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{Board, GameOutcome, GameState, Move, Player, Score};

/// One turn of a game, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    Move {
        player: Player,
        mv: Move,
        flipped: usize,
    },
    Pass {
        player: Player,
    },
}

/// Everything a finished game leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub board: Board,
    pub outcome: GameOutcome,
    pub score: Score,
    pub plies: usize,
    pub passes: usize,
}

/// Play `state` to completion. `light` and `dark` pick moves for their
/// colour; `observer` sees every ply right after it is applied.
///
/// A player without legal moves passes. The game ends once neither player
/// can move.
pub fn play_game(
    mut state: GameState,
    light: &mut dyn Agent,
    dark: &mut dyn Agent,
    mut observer: impl FnMut(&Ply, &GameState),
) -> Result<GameRecord, MatchError> {
    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Light => &mut *light,
            Player::Dark => &mut *dark,
        };

        let legal = state.legal_moves();
        let ply = match agent.select_move(state.board(), player) {
            None if legal.is_empty() => {
                state.pass_turn()?;
                tracing::debug!(player = %player, "no legal moves, passing");
                Ply::Pass { player }
            }
            None => {
                return Err(MatchError::NoMoveSelected {
                    agent: agent.name().to_string(),
                    player,
                    available: legal.len(),
                });
            }
            Some(mv) if !legal.contains(&mv) => {
                return Err(MatchError::IllegalMove {
                    agent: agent.name().to_string(),
                    mv,
                    legal,
                });
            }
            Some(mv) => {
                let flipped = state.apply_move(mv)?;
                tracing::debug!(player = %player, row = mv.row, col = mv.col, flipped, "move");
                Ply::Move {
                    player,
                    mv,
                    flipped,
                }
            }
        };

        observer(&ply, &state);
    }

    let outcome = state.outcome().ok_or(MatchError::MissingOutcome)?;
    let score = state.score();
    tracing::debug!(
        light = score.light,
        dark = score.dark,
        plies = state.plies(),
        "game finished"
    );

    Ok(GameRecord {
        board: state.board().clone(),
        outcome,
        score,
        plies: state.plies(),
        passes: state.passes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GreedyAgent, RandomAgent};

    /// Always answers with the same cell.
    struct Stubborn(Move);

    impl Agent for Stubborn {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Move> {
            Some(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    /// Never answers.
    struct Silent;

    impl Agent for Silent {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Move> {
            None
        }

        fn name(&self) -> &str {
            "Silent"
        }
    }

    #[test]
    fn test_random_vs_random_terminates() {
        for seed in 0..20 {
            let mut light = RandomAgent::with_seed(seed);
            let mut dark = RandomAgent::with_seed(seed + 1000);
            let record =
                play_game(GameState::initial(), &mut light, &mut dark, |_, _| {}).unwrap();

            assert_eq!(record.score, record.board.score());
            assert_eq!(record.outcome, GameOutcome::from_score(record.score));
            assert_eq!(record.score.total(), 4 + record.plies);
            assert!(record.plies <= 60);
        }
    }

    #[test]
    fn test_observer_sees_every_ply() {
        let mut light = GreedyAgent::new();
        let mut dark = RandomAgent::with_seed(5);
        let mut moves = 0;
        let mut passes = 0;
        let record = play_game(GameState::initial(), &mut light, &mut dark, |ply, state| {
            match ply {
                Ply::Move { player, mv, .. } => {
                    moves += 1;
                    assert_eq!(state.board().cell_at(mv.row, mv.col), player.to_cell());
                }
                Ply::Pass { .. } => passes += 1,
            }
        })
        .unwrap();

        assert_eq!(moves, record.plies);
        assert_eq!(passes, record.passes);
    }

    #[test]
    fn test_forced_pass_is_recorded() {
        // Light cannot move; Dark closes the row and the game ends.
        let board = Board::from_rows(&["DLL.", "....", "....", "...."]).unwrap();
        let state = GameState::from_board(board, Player::Light);
        let mut light = RandomAgent::with_seed(0);
        let mut dark = GreedyAgent::new();
        let mut plies = Vec::new();
        let record = play_game(state, &mut light, &mut dark, |ply, _| plies.push(*ply)).unwrap();

        assert_eq!(
            plies,
            vec![
                Ply::Pass {
                    player: Player::Light
                },
                Ply::Move {
                    player: Player::Dark,
                    mv: Move::new(0, 3),
                    flipped: 2
                },
            ]
        );
        assert_eq!(record.outcome, GameOutcome::Winner(Player::Dark));
        assert_eq!(record.passes, 1);
    }

    #[test]
    fn test_illegal_move_aborts() {
        let mut light = Stubborn(Move::new(0, 0));
        let mut dark = GreedyAgent::new();
        let err = play_game(GameState::initial(), &mut light, &mut dark, |_, _| {}).unwrap_err();
        assert!(matches!(err, MatchError::IllegalMove { ref agent, .. } if agent == "Stubborn"));
    }

    #[test]
    fn test_missing_move_aborts() {
        let mut light = Silent;
        let mut dark = GreedyAgent::new();
        let err = play_game(GameState::initial(), &mut light, &mut dark, |_, _| {}).unwrap_err();
        assert!(matches!(
            err,
            MatchError::NoMoveSelected {
                player: Player::Light,
                available: 4,
                ..
            }
        ));
    }
}
