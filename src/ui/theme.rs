//! Theme constants for the OSO GUI

use egui::Color32;

// Board colors - paper grid
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 228, 205);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 80, 60);
pub const COORD_TEXT: Color32 = Color32::from_rgb(120, 110, 90);

// Symbols on the board
pub const SYMBOL_O: Color32 = Color32::from_rgb(40, 40, 48);
pub const SYMBOL_S: Color32 = Color32::from_rgb(70, 70, 80);

// Player accents (red for player 1, blue for player 2)
pub const PLAYER_ONE: Color32 = Color32::from_rgb(220, 70, 70);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(70, 120, 230);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 210, 120);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 110)
}

pub fn hover_scoring() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 170, 60, 170)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const SYMBOL_FONT_RATIO: f32 = 0.6;
pub const GRID_LINE_WIDTH: f32 = 1.5;

/// Accent color for a player
pub fn player_color(player: crate::Player) -> Color32 {
    match player {
        crate::Player::One => PLAYER_ONE,
        crate::Player::Two => PLAYER_TWO,
    }
}
