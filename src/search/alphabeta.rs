//! Minimax search with alpha-beta pruning
//!
//! This module implements the move search for the OSO AI. It explores every
//! (empty cell × symbol) candidate to a fixed depth and scores leaves with the
//! score differential.
//!
//! # Ply accounting
//!
//! Every level of the tree flips between the maximizing and minimizing side
//! and adds exactly one to the depth, even when the simulated move scored and
//! the engine kept the turn with the same player. The search's notion of
//! "whose ply" can therefore differ from the engine's current player below a
//! scoring move.
//!
//! # Example
//!
//! ```
//! use oso::{GameEngine, Player};
//! use oso::search::Searcher;
//!
//! let game = GameEngine::new(3);
//! let mut searcher = Searcher::new(Player::Two, 2);
//!
//! let result = searcher.search(&game);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use crate::board::{Move, Pos, Symbol};
use crate::eval::{evaluate, INF};
use crate::game::{GameEngine, Player};

/// Search depth for a board of the given size.
///
/// The branching factor is `2 × empty cells`, so larger boards search
/// shallower: size ≥ 9 → 1, 5..9 → 2, below 5 → 3.
#[must_use]
pub fn depth_for_board_size(size: usize) -> u8 {
    if size >= 9 {
        1
    } else if size >= 5 {
        2
    } else {
        3
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose remaining children were skipped (`beta <= alpha`)
    pub cutoffs: u64,
    /// Static evaluations performed
    pub leaf_evals: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when there is nothing to play
    pub best_move: Option<Move>,
    /// Minimax value of the best move
    pub score: i32,
    /// Depth limit used
    pub depth: u8,
    /// Total nodes searched, root children included
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Bounded-depth minimax searcher playing for one player.
#[derive(Debug, Clone)]
pub struct Searcher {
    player: Player,
    max_depth: u8,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher maximizing for `player`. A depth of 0 is raised to 1.
    #[must_use]
    pub fn new(player: Player, max_depth: u8) -> Self {
        Self {
            player,
            max_depth: max_depth.max(1),
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Create a searcher with the depth derived from the board size.
    #[must_use]
    pub fn for_board_size(player: Player, size: usize) -> Self {
        Self::new(player, depth_for_board_size(size))
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Find the best move for the searcher's player.
    ///
    /// Works on a private copy of `game`; the caller's engine is never
    /// touched. Candidates are tried row-major, then `O` before `S`, and the
    /// first strictly greatest value wins ties.
    pub fn search(&mut self, game: &GameEngine) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut state = game.clone();
        let candidates: Vec<Move> = state.legal_moves().collect();

        let mut best_move = None;
        let mut best_score = -INF;

        for mv in candidates {
            let Some((_, undo)) = state.apply(mv) else {
                continue;
            };
            let score = self.minimax(&mut state, false, 1, -INF, INF);
            state.revert(undo);

            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            best_score = evaluate(&state, self.player);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth: self.max_depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Minimax value of `state` with alpha-beta bounds.
    ///
    /// Children are applied and reverted in place, so on return `state` is
    /// exactly what it was on entry.
    fn minimax(
        &mut self,
        state: &mut GameEngine,
        maximizing: bool,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth >= self.max_depth || state.is_full() {
            self.stats.leaf_evals += 1;
            return evaluate(state, self.player);
        }

        let size = state.board_size();
        let mut best = if maximizing { -INF } else { INF };
        let mut searched = false;

        'cells: for row in 0..size {
            for col in 0..size {
                if !state.board().is_empty(Pos::new(row, col)) {
                    continue;
                }

                for symbol in Symbol::ALL {
                    let Some((_, undo)) = state.apply(Move::new(row, col, symbol)) else {
                        continue;
                    };
                    let value = self.minimax(state, !maximizing, depth + 1, alpha, beta);
                    state.revert(undo);
                    searched = true;

                    if maximizing {
                        best = best.max(value);
                        alpha = alpha.max(value);
                    } else {
                        best = best.min(value);
                        beta = beta.min(value);
                    }

                    if beta <= alpha {
                        self.stats.cutoffs += 1;
                        break 'cells;
                    }
                }
            }
        }

        if !searched {
            self.stats.leaf_evals += 1;
            return evaluate(state, self.player);
        }

        best
    }
}
