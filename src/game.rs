//! Game state and move application
//!
//! [`GameEngine`] owns one game: the board, whose turn it is, both scores
//! and the symbol the next placement will use. It knows nothing about search
//! or strategy; the search drives it through [`GameEngine::place`] exactly as
//! a human player would.
//!
//! # Turn transfer
//!
//! A placement that completes no pattern passes the turn. A placement that
//! completes one or more patterns keeps the turn with the same player.
//!
//! # Example
//!
//! ```
//! use oso::{GameEngine, Player, Symbol};
//!
//! let mut game = GameEngine::new(3);
//! game.select_symbol(Symbol::O);
//! let placement = game.place(0, 0);
//! assert!(placement.accepted);
//! assert_eq!(game.current_player(), Player::Two);
//! ```

use crate::board::{Board, Move, Pos, Symbol};
use crate::error::GameError;
use crate::rules::{count_patterns, Outcome};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to users (1 or 2)
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    #[inline]
    pub fn from_number(number: u8) -> Option<Player> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// False for out-of-range coordinates or an occupied cell
    pub accepted: bool,
    /// Patterns completed by this placement
    pub points: u32,
}

impl Placement {
    pub const REJECTED: Placement = Placement {
        accepted: false,
        points: 0,
    };
}

/// Everything needed to take back one accepted placement
#[derive(Debug, Clone, Copy)]
pub(crate) struct Undo {
    pos: Pos,
    points: u32,
    player: Player,
    selected: Symbol,
}

/// A single OSO game
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current: Player,
    scores: [u32; 2],
    selected: Symbol,
}

impl GameEngine {
    /// Create an empty game on a `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Use [`GameEngine::try_new`] for sizes that
    /// come from untrusted input.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Self::empty(size)
    }

    /// Create an empty game, rejecting a zero board size.
    pub fn try_new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current: Player::One,
            scores: [0, 0],
            selected: Symbol::S,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn score_of(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    #[inline]
    pub fn selected_symbol(&self) -> Symbol {
        self.selected
    }

    /// Choose the symbol the next placement uses.
    ///
    /// Whose turn it is is not checked here; callers decide who may change it.
    #[inline]
    pub fn select_symbol(&mut self, symbol: Symbol) {
        self.selected = symbol;
    }

    /// Place the selected symbol at (row, col).
    ///
    /// Rejected placements leave the game untouched. Accepted ones add the
    /// completed patterns to the current player's score, then pass the turn
    /// only if nothing was scored.
    pub fn place(&mut self, row: usize, col: usize) -> Placement {
        let pos = Pos::new(row, col);
        if !self.board.is_empty(pos) {
            return Placement::REJECTED;
        }

        self.board.set(pos, self.selected);
        let points = count_patterns(&self.board, pos);
        self.scores[self.current.index()] += points;

        if points == 0 {
            self.current = self.current.opponent();
        }

        Placement {
            accepted: true,
            points,
        }
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Compare both scores
    #[inline]
    pub fn winner(&self) -> Outcome {
        Outcome::from_scores(self.score_of(Player::One), self.score_of(Player::Two))
    }

    /// Every legal move in search order: row-major, then `O` before `S`.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.board.empty_cells().flat_map(|pos| {
            Symbol::ALL
                .into_iter()
                .map(move |symbol| Move::new(pos.row, pos.col, symbol))
        })
    }

    /// Select `mv.symbol` and place it, returning what is needed to revert.
    ///
    /// Returns `None` (and changes nothing) if the move is illegal.
    pub(crate) fn apply(&mut self, mv: Move) -> Option<(Placement, Undo)> {
        let selected = self.selected;
        let player = self.current;

        self.selected = mv.symbol;
        let placement = self.place(mv.row, mv.col);
        if !placement.accepted {
            self.selected = selected;
            return None;
        }

        let undo = Undo {
            pos: mv.pos(),
            points: placement.points,
            player,
            selected,
        };
        Some((placement, undo))
    }

    /// Take back a placement made by [`GameEngine::apply`].
    ///
    /// Undo records must be reverted in reverse order of application.
    pub(crate) fn revert(&mut self, undo: Undo) {
        self.board.clear(undo.pos);
        self.scores[undo.player.index()] -= undo.points;
        self.current = undo.player;
        self.selected = undo.selected;
    }
}
