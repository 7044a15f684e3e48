//! Score-differential evaluation

use crate::game::{GameEngine, Player};

/// Infinity score for alpha-beta bounds.
///
/// Kept symmetric (`-INF` does not overflow) and far above any reachable
/// differential, which is bounded by the number of windows on the board.
pub const INF: i32 = i32::MAX;

/// Evaluate the game from the perspective of `player`.
///
/// Returns `score(player) - score(opponent)`: positive values favour
/// `player`, negative values favour the opponent.
#[inline]
#[must_use]
pub fn evaluate(game: &GameEngine, player: Player) -> i32 {
    game.score_of(player) as i32 - game.score_of(player.opponent()) as i32
}
