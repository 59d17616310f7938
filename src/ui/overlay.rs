use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::config::{OVERLAY_BAND_HEIGHT, PALETTE};

/// Dims a band across the vertical center of `board` and writes the final
/// score centered on it.
pub fn render_game_over_overlay(buffer: &mut Buffer, board: Rect, score: u32) {
    if board.is_empty() {
        return;
    }

    let center_y = board.y + board.height / 2;
    let band_top = center_y
        .saturating_sub(OVERLAY_BAND_HEIGHT / 2)
        .max(board.y);
    let band_bottom = band_top
        .saturating_add(OVERLAY_BAND_HEIGHT)
        .min(board.bottom());

    let dimmed = Style::new().fg(PALETTE.hud_muted).bg(PALETTE.overlay_bg);
    for y in band_top..band_bottom {
        for x in board.left()..board.right() {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_style(dimmed);
            }
        }
    }

    let text = game_over_text(score);
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let x = board.x + board.width.saturating_sub(text_width) / 2;
    buffer.set_stringn(
        x,
        center_y,
        &text,
        usize::from(board.right().saturating_sub(x)),
        Style::new()
            .fg(PALETTE.overlay_fg)
            .bg(PALETTE.overlay_bg)
            .add_modifier(Modifier::BOLD),
    );
}

/// Final-score message shown on the overlay.
#[must_use]
pub fn game_over_text(score: u32) -> String {
    format!("Game Over — Score: {score}")
}
