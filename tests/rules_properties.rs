//! Property tests for the capture rules over positions reached by random play

use othello::ai::{Agent, GreedyAgent, RandomAgent};
use othello::game::{
    apply_move, count_flips, is_legal, legal_moves, Board, Cell, GameState, Move, Player,
    DIRECTIONS,
};
use proptest::prelude::*;

/// Play up to `plies` random turns from the opening, passing when forced.
fn reachable(seed: u64, width: usize, height: usize, plies: usize) -> GameState {
    let mut state = GameState::new(width, height, Player::Light).expect("board size in range");
    let mut agent = RandomAgent::with_seed(seed);

    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        match agent.select_move(state.board(), state.current_player()) {
            Some(mv) => {
                state.apply_move(mv).expect("agent picks legal moves");
            }
            None => state.pass_turn().expect("no legal moves to pass on"),
        }
    }
    state
}

fn every_cell(board: &Board) -> impl Iterator<Item = Move> {
    let (width, height) = (board.width(), board.height());
    (0..height).flat_map(move |row| (0..width).map(move |col| Move::new(row, col)))
}

fn position() -> impl Strategy<Value = (GameState, Player)> {
    (any::<u64>(), 4usize..=10, 4usize..=10, 0usize..80, any::<bool>()).prop_map(
        |(seed, width, height, plies, light)| {
            let player = if light { Player::Light } else { Player::Dark };
            (reachable(seed, width, height, plies), player)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_enumerator_matches_evaluator((state, player) in position()) {
        let board = state.board();
        let listed = legal_moves(board, player);

        let mut scanned = Vec::new();
        for mv in every_cell(board) {
            let legal = is_legal(board, mv, player);
            prop_assert_eq!(legal, count_flips(board, mv, player) > 0);
            if legal {
                scanned.push(mv);
            }
        }
        prop_assert_eq!(listed, scanned);
    }

    #[test]
    fn prop_apply_changes_only_placed_and_flipped((state, player) in position()) {
        let before = state.board().clone();
        let own = player.to_cell();
        let other = player.opponent().to_cell();

        for mv in legal_moves(&before, player) {
            let mut after = before.clone();
            let flipped = apply_move(&mut after, mv, player).unwrap();
            prop_assert_eq!(flipped, count_flips(&before, mv, player));

            let old = before.score();
            let new = after.score();
            prop_assert_eq!(new.of(player), old.of(player) + 1 + flipped);
            prop_assert_eq!(new.of(player.opponent()), old.of(player.opponent()) - flipped);

            let mut changed = 0;
            for cell in every_cell(&before) {
                let was = before.cell_at(cell.row, cell.col);
                let now = after.cell_at(cell.row, cell.col);
                if was == now {
                    continue;
                }
                changed += 1;
                if cell == mv {
                    prop_assert_eq!((was, now), (Cell::Empty, own));
                } else {
                    prop_assert_eq!((was, now), (other, own));
                }
            }
            prop_assert_eq!(changed, 1 + flipped);
        }
    }

    #[test]
    fn prop_flips_are_contiguous_runs_per_direction((state, player) in position()) {
        let before = state.board().clone();
        let own = player.to_cell();

        for mv in legal_moves(&before, player) {
            let mut after = before.clone();
            let flipped = apply_move(&mut after, mv, player).unwrap();

            let mut total = 0;
            for (dr, dc) in DIRECTIONS {
                // flipped cells in this direction start next to the move and
                // end just before a piece that was already ours
                let mut run = 0;
                let (mut r, mut c) = (mv.row as isize + dr, mv.col as isize + dc);
                while after.in_bounds(r, c)
                    && before.cell_at(r as usize, c as usize) != after.cell_at(r as usize, c as usize)
                {
                    run += 1;
                    r += dr;
                    c += dc;
                }
                if run > 0 {
                    prop_assert!(after.in_bounds(r, c));
                    prop_assert_eq!(before.cell_at(r as usize, c as usize), own);
                }
                total += run;
            }
            prop_assert_eq!(total, flipped);
        }
    }

    #[test]
    fn prop_illegal_moves_leave_board_unchanged((state, player) in position()) {
        let before = state.board().clone();
        for mv in every_cell(&before).filter(|&mv| !is_legal(&before, mv, player)) {
            let mut after = before.clone();
            prop_assert!(apply_move(&mut after, mv, player).is_err());
            prop_assert_eq!(&after, &before);
        }
    }

    #[test]
    fn prop_greedy_takes_first_maximum((state, player) in position()) {
        let board = state.board();
        let legal = legal_moves(board, player);
        let best = GreedyAgent::best_move(board, player);

        match legal.iter().map(|&mv| count_flips(board, mv, player)).max() {
            None => prop_assert_eq!(best, None),
            Some(max) => {
                let first = legal
                    .iter()
                    .copied()
                    .find(|&mv| count_flips(board, mv, player) == max);
                prop_assert_eq!(best, first.map(|mv| (mv, max)));
            }
        }

        let mut agent = GreedyAgent::new();
        let snapshot = board.clone();
        let a = agent.select_move(board, player);
        let b = agent.select_move(board, player);
        prop_assert_eq!(a, b);
        prop_assert_eq!(board, &snapshot);
    }

    #[test]
    fn prop_score_counts_occupied_cells((state, _player) in position()) {
        let board = state.board();
        let occupied = board.cells().filter(|&(_, _, cell)| cell != Cell::Empty).count();
        prop_assert_eq!(board.score().total(), occupied);
        prop_assert_eq!(occupied, 4 + state.plies());
    }
}
