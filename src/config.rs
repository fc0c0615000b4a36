use ratatui::style::Color;
use ratatui::symbols::border;

use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Cells per side of the square board.
pub const GRID_SIZE: u16 = 20;

/// The one board every game is played on.
pub const GRID: GridSize = GridSize {
    width: GRID_SIZE,
    height: GRID_SIZE,
};

/// Terminal columns drawn per logical cell, so cells look roughly square.
pub const CELL_RENDER_WIDTH: u16 = 2;

/// Fixed tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 150;

/// Score granted for each food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Head position of a freshly created snake.
pub const INITIAL_SNAKE_HEAD: Position = Position { x: 10, y: 10 };

/// Heading of a freshly created snake.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Food position at first creation. Resets place food randomly instead.
pub const INITIAL_FOOD: Position = Position { x: 15, y: 15 };

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub title: Color,
    pub score: Color,
    pub muted: Color,
    pub game_over: Color,
}

/// Blue snake on a light board, red food.
pub const THEME: Theme = Theme {
    snake_head: Color::Blue,
    snake_body: Color::LightBlue,
    food: Color::Red,
    play_bg: Color::Gray,
    border_fg: Color::Blue,
    title: Color::White,
    score: Color::LightBlue,
    muted: Color::DarkGray,
    game_over: Color::Red,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph for one snake or food cell, `CELL_RENDER_WIDTH` columns wide.
pub const GLYPH_CELL: &str = "██";

#[cfg(test)]
mod tests {
    use unicode_width::UnicodeWidthStr;

    use super::{CELL_RENDER_WIDTH, GLYPH_CELL, GRID};

    #[test]
    fn board_has_four_hundred_cells() {
        assert_eq!(GRID.total_cells(), 400);
    }

    #[test]
    fn cell_glyph_fills_render_width() {
        assert_eq!(GLYPH_CELL.width(), usize::from(CELL_RENDER_WIDTH));
    }
}
