//! Search module for the OSO AI
//!
//! Contains:
//! - Depth selection by board size
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;

pub use alphabeta::{depth_for_board_size, SearchResult, SearchStats, Searcher};
