use ratatui::style::Color;
use ratatui::symbols::border;

use crate::difficulty::Difficulty;
use crate::error::{Result, SnakeError};

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

/// Number of grid columns.
pub const COLS: u16 = 20;

/// Number of grid rows.
pub const ROWS: u16 = 20;

/// Board used by every session; the grid size is fixed at build time.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: COLS,
    height: ROWS,
};

/// Obstacles placed at the start of each session.
pub const NUM_OBSTACLES: usize = 10;

/// Segment count of a freshly reset snake.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Input poll timeout, and therefore the redraw cadence, of the main loop.
pub const FRAME_POLL_INTERVAL_MS: u64 = 16;

/// Terminal columns used to draw one grid cell, so cells read as squares.
pub const CELL_WIDTH: u16 = 2;

/// Glyph painted into every occupied cell.
pub const GLYPH_CELL: &str = "██";

/// Rows of the dimmed band laid over the board on game over.
pub const OVERLAY_BAND_HEIGHT: u16 = 3;

/// Colors for every visual element of the board.
#[derive(Debug)]
pub struct Palette {
    pub background: Color,
    pub food: Color,
    pub obstacle: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub border_fg: Color,
    pub overlay_bg: Color,
    pub overlay_fg: Color,
    pub hud_text: Color,
    pub hud_selected: Color,
    pub hud_muted: Color,
}

pub const PALETTE: Palette = Palette {
    background: Color::Black,
    food: Color::Rgb(0xe7, 0x6f, 0x51),
    obstacle: Color::Rgb(0x55, 0x55, 0x55),
    snake_head: Color::Rgb(0x6b, 0xe2, 0x81),
    snake_body: Color::Rgb(0x2f, 0xd0, 0x7a),
    border_fg: Color::DarkGray,
    overlay_bg: Color::Rgb(0x1a, 0x1a, 0x1a),
    overlay_fg: Color::White,
    hud_text: Color::Gray,
    hud_selected: Color::Black,
    hud_muted: Color::DarkGray,
};

/// Rounded border around the play area.
pub const BORDER_BOARD: border::Set = border::ROUNDED;

/// Everything needed to start a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub bounds: GridSize,
    pub obstacle_count: usize,
    pub difficulty: Difficulty,
    /// Seed for the placement RNG; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_GRID,
            obstacle_count: NUM_OBSTACLES,
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Rejects configs whose obstacles and starting snake cannot share the grid
    /// while leaving at least one cell free for food.
    pub fn validate(&self) -> Result<()> {
        let too_narrow = usize::from(self.bounds.width) < INITIAL_SNAKE_LEN;
        let fits = self
            .obstacle_count
            .checked_add(INITIAL_SNAKE_LEN)
            .is_some_and(|occupied| occupied < self.bounds.total_cells());
        if too_narrow || self.bounds.height == 0 || !fits {
            return Err(SnakeError::BoardTooSmall {
                width: self.bounds.width,
                height: self.bounds.height,
                obstacles: self.obstacle_count,
                snake_len: INITIAL_SNAKE_LEN,
            });
        }

        Ok(())
    }
}
