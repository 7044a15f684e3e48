//! Game rules for OSO
//!
//! This module implements the rule set:
//! - Pattern scoring (O-S-O through the placed cell)
//! - Outcome from accumulated scores

pub mod outcome;
pub mod scoring;

// Re-exports for convenient access
pub use outcome::Outcome;
pub use scoring::{count_patterns, would_score};
