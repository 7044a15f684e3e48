//! Board rendering for the OSO GUI

use crate::board::{Board, Move, Pos, Symbol};
use crate::rules::would_score;
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area (inside the margin)
    grid_rect: Rect,
    /// Board size the cached geometry was computed for
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Symbol,
        last_move: Option<Move>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        self.size = board.size();

        // Calculate board size to fit available space
        let side = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 1.0);
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * self.size as f32),
        );

        // Draw board background
        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);

        // Draw last move highlight under the symbols
        if let Some(mv) = last_move {
            painter.rect_filled(self.cell_rect(mv.pos()).shrink(1.0), CornerRadius::ZERO, LAST_MOVE_MARKER);
        }

        // Draw grid lines
        self.draw_grid(&painter);

        // Draw coordinate labels
        self.draw_coordinates(&painter);

        // Draw placed symbols
        self.draw_symbols(&painter, board);

        // Handle hover preview and click
        let mut clicked_pos = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(board_pos);

                    if is_valid {
                        let color = if would_score(board, board_pos, selected) > 0 {
                            hover_scoring()
                        } else {
                            hover_valid()
                        };
                        self.draw_symbol(&painter, board_pos, selected, color);
                    } else {
                        painter.rect_filled(self.cell_rect(board_pos), CornerRadius::ZERO, hover_invalid());
                    }

                    // Check for click
                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the N×N cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let length = self.cell_size * self.size as f32;

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment([min + Vec2::new(offset, 0.0), min + Vec2::new(offset, length)], stroke);

            // Horizontal line
            painter.line_segment([min + Vec2::new(0.0, offset), min + Vec2::new(length, offset)], stroke);
        }
    }

    /// Draw row and column indices (0-based, as used by the engine)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.size {
            let center = self.grid_rect.min.x + (i as f32 + 0.5) * self.cell_size;

            // Column label above the grid
            let pos = Pos2::new(center, self.grid_rect.min.y - BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);

            // Row label left of the grid
            let center = self.grid_rect.min.y + (i as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, center);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);
        }
    }

    /// Draw all placed symbols
    fn draw_symbols(&self, painter: &Painter, board: &Board) {
        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(symbol) = *cell {
                    let color = match symbol {
                        Symbol::O => SYMBOL_O,
                        Symbol::S => SYMBOL_S,
                    };
                    self.draw_symbol(painter, Pos::new(row, col), symbol, color);
                }
            }
        }
    }

    /// Draw a single letter centered in its cell
    fn draw_symbol(&self, painter: &Painter, pos: Pos, symbol: Symbol, color: egui::Color32) {
        painter.text(
            self.cell_rect(pos).center(),
            egui::Align2::CENTER_CENTER,
            symbol.as_char(),
            egui::FontId::proportional(self.cell_size * SYMBOL_FONT_RATIO),
            color,
        );
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;

        if row < self.size && col < self.size {
            Some(Pos::new(row, col))
        } else {
            None
        }
    }
}
