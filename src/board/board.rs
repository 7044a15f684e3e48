//! N×N grid of symbols

use super::{Pos, Symbol};

/// Game board, row-major, `None` for an empty cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Symbol>>,
    /// Number of occupied cells, kept in sync with `cells`
    filled: usize,
}

impl Board {
    /// Create an empty board. Callers validate `size > 0`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            filled: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the symbol at position (`None` if empty or out of range)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Symbol> {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[pos.to_index(self.size)].is_none()
    }

    /// Place a symbol on an empty cell (no scoring).
    /// Use `GameEngine::place` for game moves.
    #[inline]
    pub fn set(&mut self, pos: Pos, symbol: Symbol) {
        debug_assert!(self.is_empty(pos));
        self.cells[pos.to_index(self.size)] = Some(symbol);
        self.filled += 1;
    }

    /// Empty a cell - used for unmake
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        if self.cells[idx].take().is_some() {
            self.filled -= 1;
        }
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Symbol>]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.rows().enumerate() {
            write!(f, "{:2} ", r)?;
            for cell in row {
                let ch = cell.map_or('.', Symbol::as_char);
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
