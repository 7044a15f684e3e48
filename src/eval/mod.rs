//! Evaluation module for OSO positions
//!
//! The static evaluation is the score differential only. All tactical
//! strength comes from search depth, not from the evaluator.

pub mod heuristic;

pub use heuristic::{evaluate, INF};
