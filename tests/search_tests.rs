//! Integration tests for the minimax search and the AI engine

use oso::search::{depth_for_board_size, Searcher};
use oso::{AIEngine, GameEngine, Move, Player, Symbol};
use proptest::prelude::*;

/// Unpruned minimax over clones, with the same ply accounting as the engine
fn unpruned(state: &GameEngine, player: Player, maximizing: bool, depth: u8, max_depth: u8) -> i32 {
    let eval = |g: &GameEngine| g.score_of(player) as i32 - g.score_of(player.opponent()) as i32;
    if depth >= max_depth || state.is_full() {
        return eval(state);
    }
    let values = state.legal_moves().map(|mv| {
        let mut child = state.clone();
        child.select_symbol(mv.symbol);
        child.place(mv.row, mv.col);
        unpruned(&child, player, !maximizing, depth + 1, max_depth)
    });
    let best = if maximizing { values.max() } else { values.min() };
    best.unwrap_or_else(|| eval(state))
}

fn unpruned_best(state: &GameEngine, player: Player, max_depth: u8) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for mv in state.legal_moves() {
        let mut child = state.clone();
        child.select_symbol(mv.symbol);
        child.place(mv.row, mv.col);
        let score = unpruned(&child, player, false, 1, max_depth);
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((mv, score));
        }
    }
    best
}

fn setup(size: usize, moves: &[(usize, usize, Symbol)]) -> GameEngine {
    let mut game = GameEngine::new(size);
    for &(r, c, s) in moves {
        game.select_symbol(s);
        game.place(r, c);
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_pruning_never_changes_the_result(
        moves in prop::collection::vec((0usize..3, 0usize..3, prop::sample::select(Symbol::ALL.to_vec())), 0..6)
    ) {
        let game = setup(3, &moves);
        let player = game.current_player();

        let mut searcher = Searcher::new(player, 3);
        let result = searcher.search(&game);
        let expected = unpruned_best(&game, player, 3);

        prop_assert_eq!(result.best_move, expected.map(|(mv, _)| mv));
        if let Some((_, score)) = expected {
            prop_assert_eq!(result.score, score);
        }
    }
}

#[test]
fn test_best_move_is_deterministic() {
    let game = setup(5, &[(2, 2, Symbol::S), (1, 1, Symbol::O), (3, 3, Symbol::O)]);
    let engine = AIEngine::new(&game, game.current_player());

    let first = engine.best_move(&game);
    for _ in 0..3 {
        assert_eq!(engine.best_move(&game), first);
    }
}

#[test]
fn test_best_move_on_full_board_is_none() {
    let mut game = GameEngine::new(3);
    for r in 0..3 {
        for c in 0..3 {
            game.place(r, c);
        }
    }
    assert!(game.is_full());

    for player in [Player::One, Player::Two] {
        assert_eq!(AIEngine::new(&game, player).best_move(&game), None);
    }
}

#[test]
fn test_best_move_leaves_game_untouched() {
    let game = setup(4, &[(0, 0, Symbol::O), (0, 1, Symbol::S)]);
    let snapshot = game.clone();

    let _ = AIEngine::new(&game, Player::One).best_move(&game);

    assert_eq!(game.board(), snapshot.board());
    assert_eq!(game.current_player(), snapshot.current_player());
    assert_eq!(game.selected_symbol(), snapshot.selected_symbol());
}

#[test]
fn test_depth_follows_board_size() {
    for (size, depth) in [(3, 3), (4, 3), (5, 2), (6, 2), (8, 2), (9, 1), (10, 1), (11, 1)] {
        assert_eq!(depth_for_board_size(size), depth);
        assert_eq!(AIEngine::for_board_size(size, Player::Two).max_depth(), depth);
    }
}

#[test]
fn test_computer_plays_out_a_game() {
    let mut game = GameEngine::new(3);
    let engines = [AIEngine::new(&game, Player::One), AIEngine::new(&game, Player::Two)];

    let mut moves = 0;
    while !game.is_full() {
        let player = game.current_player();
        let engine = &engines[usize::from(player.number() - 1)];
        let mv = engine.best_move(&game).expect("board is not full");
        game.select_symbol(mv.symbol);
        assert!(game.place(mv.row, mv.col).accepted);
        moves += 1;
    }

    assert_eq!(moves, 9);
    assert_eq!(AIEngine::new(&game, Player::One).best_move(&game), None);
}
