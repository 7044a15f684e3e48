//! Main AI engine for the computer player
//!
//! [`AIEngine`] is bound to one player and one board size. Its search depth
//! is fixed when it is created (see [`depth_for_board_size`]) and cannot be
//! changed mid-game.
//!
//! # Example
//!
//! ```
//! use oso::{AIEngine, GameEngine, Player};
//!
//! let mut game = GameEngine::new(3);
//! game.place(1, 1); // Player 1 plays the default symbol
//!
//! let engine = AIEngine::new(&game, Player::Two);
//! let result = engine.get_move_with_stats(&game);
//! if let Some(mv) = result.best_move {
//!     game.select_symbol(mv.symbol);
//!     game.place(mv.row, mv.col);
//! }
//! println!("Score: {}, nodes: {}", result.score, result.nodes);
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::Move;
use crate::game::{GameEngine, Player};
use crate::search::{depth_for_board_size, SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value of the best move for the engine's player
    pub score: i32,
    /// Depth limit used
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Computer opponent for one side of a game.
#[derive(Debug, Clone)]
pub struct AIEngine {
    player: Player,
    board_size: usize,
    max_depth: u8,
}

impl AIEngine {
    /// Create an engine playing `player` on `game`'s board size.
    #[must_use]
    pub fn new(game: &GameEngine, player: Player) -> Self {
        Self::for_board_size(game.board_size(), player)
    }

    /// Create an engine for a board size known before the game exists.
    #[must_use]
    pub fn for_board_size(size: usize, player: Player) -> Self {
        let max_depth = depth_for_board_size(size);
        debug!("AI for {} on {}x{} board, depth {}", player, size, size, max_depth);
        Self {
            player,
            board_size: size,
            max_depth,
        }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Board size the depth was chosen for
    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Get the best move for the current position of `game`.
    ///
    /// Returns `None` if the board is full.
    #[must_use]
    pub fn best_move(&self, game: &GameEngine) -> Option<Move> {
        self.get_move_with_stats(game).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// Searches a snapshot of `game`; the caller's engine is not modified.
    /// `game` must have the board size this engine was created for.
    #[must_use]
    pub fn get_move_with_stats(&self, game: &GameEngine) -> MoveResult {
        debug_assert_eq!(
            game.board_size(),
            self.board_size,
            "engine built for a {}x{} board",
            self.board_size,
            self.board_size
        );
        let start = Instant::now();

        let mut searcher = Searcher::new(self.player, self.max_depth);
        let result = searcher.search(game);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            "search: {} nodes, {} cutoffs, {} leaves",
            result.nodes, result.stats.cutoffs, result.stats.leaf_evals
        );
        match result.best_move {
            Some(mv) => info!(
                "{} plays {} (score {}, depth {}, {}ms)",
                self.player, mv, result.score, result.depth, time_ms
            ),
            None => info!("{} has no move to play", self.player),
        }

        MoveResult::from_search(result, time_ms)
    }
}
