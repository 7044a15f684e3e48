//! Board representation for OSO

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Placeable marks, in enumeration order (`O` before `S`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    O,
    S,
}

impl Symbol {
    /// Both symbols in the order the search tries them
    pub const ALL: [Symbol; 2] = [Symbol::O, Symbol::S];

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Symbol::O => 'O',
            Symbol::S => 'S',
        }
    }

    /// Parse a single letter, case-insensitive
    pub fn from_char(c: char) -> Option<Symbol> {
        match c.to_ascii_uppercase() {
            'O' => Some(Symbol::O),
            'S' => Some(Symbol::S),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }
}

/// A placement: which symbol goes where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub symbol: Symbol,
}

impl Move {
    #[inline]
    pub fn new(row: usize, col: usize, symbol: Symbol) -> Self {
        Self { row, col, symbol }
    }

    #[inline]
    pub fn pos(self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.symbol, self.row, self.col)
    }
}
