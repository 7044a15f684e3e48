//! Property-based tests for game engine invariants

use oso::{GameEngine, Placement, Player, Pos, Symbol};
use proptest::prelude::*;

fn symbol() -> impl Strategy<Value = Symbol> {
    prop::sample::select(Symbol::ALL.to_vec())
}

/// Placement attempts, some of them off the board
fn attempts(max_coord: usize) -> impl Strategy<Value = Vec<(usize, usize, Symbol)>> {
    prop::collection::vec((0..max_coord, 0..max_coord, symbol()), 0..60)
}

/// Count every O-S-O window on the board, independent of move order
fn count_all_patterns(game: &GameEngine) -> u32 {
    let board = game.board();
    let n = board.size() as i32;
    let mut total = 0;
    for r in 0..n {
        for c in 0..n {
            for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                let cells = [(r, c), (r + dr, c + dc), (r + 2 * dr, c + 2 * dc)];
                if !cells.iter().all(|&(r, c)| board.in_bounds(r, c)) {
                    continue;
                }
                let read: Vec<Option<Symbol>> = cells
                    .iter()
                    .map(|&(r, c)| board.get(Pos::new(r as usize, c as usize)))
                    .collect();
                if read == [Some(Symbol::O), Some(Symbol::S), Some(Symbol::O)] {
                    total += 1;
                }
            }
        }
    }
    total
}

proptest! {
    #[test]
    fn test_rejected_moves_change_nothing(size in 1usize..6, moves in attempts(8)) {
        let mut game = GameEngine::new(size);
        for (r, c, s) in moves {
            let before = game.clone();
            game.select_symbol(s);
            let placement = game.place(r, c);

            let on_board = r < size && c < size;
            if !on_board || !before.board().is_empty(Pos::new(r, c)) {
                prop_assert_eq!(placement, Placement::REJECTED);
                prop_assert_eq!(game.board(), before.board());
                prop_assert_eq!(game.current_player(), before.current_player());
                prop_assert_eq!(game.score_of(Player::One), before.score_of(Player::One));
                prop_assert_eq!(game.score_of(Player::Two), before.score_of(Player::Two));
            } else {
                prop_assert!(placement.accepted);
                prop_assert_eq!(game.board().get(Pos::new(r, c)), Some(s));
            }
        }
    }

    #[test]
    fn test_turn_transfer_follows_points(size in 1usize..7, moves in attempts(7)) {
        let mut game = GameEngine::new(size);
        for (r, c, s) in moves {
            let player = game.current_player();
            game.select_symbol(s);
            let placement = game.place(r, c);
            if !placement.accepted {
                prop_assert_eq!(game.current_player(), player);
            } else if placement.points == 0 {
                prop_assert_eq!(game.current_player(), player.opponent());
            } else {
                prop_assert_eq!(game.current_player(), player);
            }
        }
    }

    #[test]
    fn test_scores_count_completed_patterns(size in 1usize..7, moves in attempts(7)) {
        let mut game = GameEngine::new(size);
        let mut total = 0;
        for (r, c, s) in moves {
            let player = game.current_player();
            let before = game.score_of(player);
            game.select_symbol(s);
            let placement = game.place(r, c);

            prop_assert_eq!(game.score_of(player), before + placement.points);
            let sum = game.score_of(Player::One) + game.score_of(Player::Two);
            prop_assert!(sum >= total);
            total = sum;
            prop_assert_eq!(total, count_all_patterns(&game));
        }
    }

    #[test]
    fn test_full_exactly_after_last_cell(
        cells in Just((0..25usize).collect::<Vec<_>>()).prop_shuffle(),
        symbols in prop::collection::vec(symbol(), 25),
    ) {
        let mut game = GameEngine::new(5);
        for (i, (&idx, &s)) in cells.iter().zip(&symbols).enumerate() {
            prop_assert!(!game.is_full());
            game.select_symbol(s);
            prop_assert!(game.place(idx / 5, idx % 5).accepted);
            prop_assert_eq!(game.is_full(), i == cells.len() - 1);
        }
        prop_assert!(game.is_full());
    }
}

#[test]
fn test_completing_row_scores_once() {
    let mut game = GameEngine::new(3);
    for (c, s) in [(0, Symbol::O), (1, Symbol::S)] {
        game.select_symbol(s);
        assert_eq!(game.place(0, c).points, 0);
    }
    game.select_symbol(Symbol::O);
    assert_eq!(game.place(0, 2).points, 1);
}
