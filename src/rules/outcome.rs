//! Game outcome from accumulated scores

use crate::game::Player;

/// Final (or provisional) result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerOne,
    PlayerTwo,
    Draw,
}

impl Outcome {
    /// Compare two scores; the strictly greater one wins.
    #[inline]
    pub fn from_scores(player_one: u32, player_two: u32) -> Self {
        match player_one.cmp(&player_two) {
            std::cmp::Ordering::Greater => Outcome::PlayerOne,
            std::cmp::Ordering::Less => Outcome::PlayerTwo,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Winning player, `None` for a draw
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOne => Some(Player::One),
            Outcome::PlayerTwo => Some(Player::Two),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerOne => write!(f, "Player 1 wins"),
            Outcome::PlayerTwo => write!(f, "Player 2 wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
