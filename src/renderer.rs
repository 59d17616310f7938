use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, BORDER_BOARD, CELL_WIDTH, GLYPH_CELL, PALETTE};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::{render_hud, HUD_HEIGHT};
use crate::ui::overlay::render_game_over_overlay;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let bounds = state.bounds();
    let [board_row, hud_row, _] = Layout::vertical([
        Constraint::Length(bounds.height.saturating_add(2)),
        Constraint::Length(HUD_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(frame.area());
    let [board_area, _] = Layout::horizontal([
        Constraint::Length(bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2)),
        Constraint::Min(0),
    ])
    .areas(board_row);

    let block = Block::bordered()
        .border_set(BORDER_BOARD)
        .border_style(Style::new().fg(PALETTE.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(Block::new().style(Style::new().bg(PALETTE.background)), inner);

    render_board(frame.buffer_mut(), inner, state);

    if state.status == GameStatus::GameOver {
        render_game_over_overlay(frame.buffer_mut(), inner, state.score);
    }

    render_hud(frame, hud_row, state);
}

fn render_board(buffer: &mut Buffer, inner: Rect, state: &GameState) {
    let bounds = state.bounds();

    paint_cell(buffer, inner, bounds, state.food, PALETTE.food);

    // Obstacles go under the snake.
    for obstacle in state.obstacles.iter() {
        paint_cell(buffer, inner, bounds, *obstacle, PALETTE.obstacle);
    }

    let head = state.snake.head();
    for segment in state.snake.segments().skip(1).rev() {
        paint_cell(buffer, inner, bounds, *segment, PALETTE.snake_body);
    }
    paint_cell(buffer, inner, bounds, head, PALETTE.snake_head);
}

fn paint_cell(buffer: &mut Buffer, inner: Rect, bounds: GridSize, position: Position, color: Color) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };

    buffer.set_string(
        x,
        y,
        GLYPH_CELL,
        Style::new().fg(color).bg(PALETTE.background),
    );
}

/// Maps a grid cell to the terminal coordinate of its left column, or `None`
/// when the cell falls outside the visible play area.
#[must_use]
pub fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use super::{logical_to_terminal, render};
    use crate::config::{GridSize, PALETTE};
    use crate::game::GameState;
    use crate::obstacles::Obstacles;
    use crate::snake::Position;

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    fn draw(state: &GameState, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|frame| render(frame, state))
            .expect("drawing into a test backend should succeed");
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn state_with_known_layout() -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, 10, 21).expect("default board is valid");
        state.obstacles = Obstacles::from_cells([Position { x: 3, y: 4 }]);
        state.food = Position { x: 15, y: 2 };
        state
    }

    #[test]
    fn cells_map_to_two_column_slots_inside_border() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: 19, y: 19 }),
            Some((39, 20))
        );
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: 20, y: 0 }),
            None
        );
    }

    #[test]
    fn clipped_area_hides_cells_instead_of_panicking() {
        let inner = Rect::new(1, 1, 10, 5);

        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: 9, y: 2 }),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position { x: 1, y: 7 }),
            None
        );
    }

    #[test]
    fn entities_are_painted_with_their_colors() {
        let state = state_with_known_layout();

        let buffer = draw(&state, 60, 30);

        assert_eq!(buffer[(19, 10)].fg, PALETTE.snake_head);
        assert_eq!(buffer[(17, 10)].fg, PALETTE.snake_body);
        assert_eq!(buffer[(15, 10)].fg, PALETTE.snake_body);
        assert_eq!(buffer[(31, 3)].fg, PALETTE.food);
        assert_eq!(buffer[(7, 5)].fg, PALETTE.obstacle);
        assert_eq!(buffer[(1, 1)].bg, PALETTE.background);
    }

    #[test]
    fn hud_shows_score_and_difficulty() {
        let mut state = state_with_known_layout();
        state.score = 7;

        let buffer = draw(&state, 60, 30);

        assert!(row_text(&buffer, 22).contains("Score: 7"));
        assert!(row_text(&buffer, 23).contains("Intermediate"));
    }

    #[test]
    fn game_over_overlay_shows_final_score() {
        let mut state = state_with_known_layout();
        state.obstacles = Obstacles::from_cells([Position { x: 10, y: 9 }]);
        state.tick();

        let buffer = draw(&state, 60, 30);

        assert!(row_text(&buffer, 11).contains("Game Over — Score: 0"));
        assert_eq!(buffer[(1, 10)].bg, PALETTE.overlay_bg);
        assert_eq!(buffer[(1, 12)].bg, PALETTE.overlay_bg);
        assert_eq!(buffer[(1, 8)].bg, PALETTE.background);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let state = state_with_known_layout();

        let _ = draw(&state, 12, 6);
    }
}
