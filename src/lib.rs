//! OSO game engine with a minimax AI
//!
//! Two players take turns placing either an `O` or an `S` on an N×N board:
//! - Completing O-S-O in a row, column or diagonal scores one point
//! - A move that scores keeps the turn; a move that does not passes it
//! - The game ends when the board is full; the higher score wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Symbols, positions, moves and the N×N grid
//! - [`rules`]: Pattern scoring and game outcome
//! - [`game`]: Game state, placement and turn transfer
//! - [`eval`]: Static evaluation (score differential)
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Computer player integrating search and evaluation
//! - [`config`]: TOML configuration for the front ends
//!
//! # Quick Start
//!
//! ```
//! use oso::{AIEngine, GameEngine, Player, Symbol};
//!
//! let mut game = GameEngine::new(3);
//!
//! // Player 1 places an O in the corner
//! game.select_symbol(Symbol::O);
//! game.place(0, 0);
//!
//! // The computer answers as Player 2
//! let engine = AIEngine::new(&game, Player::Two);
//! if let Some(mv) = engine.best_move(&game) {
//!     game.select_symbol(mv.symbol);
//!     game.place(mv.row, mv.col);
//!     println!("AI plays {}", mv);
//! }
//! ```
//!
//! # Search depth
//!
//! The branching factor is `2 × empty cells`, so the depth depends on the
//! board size: 3 plies below size 5, 2 plies up to size 8, 1 ply from size 9.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Symbol};
pub use config::{AppConfig, Opponent};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, GameError};
pub use game::{GameEngine, Placement, Player};
pub use rules::Outcome;
