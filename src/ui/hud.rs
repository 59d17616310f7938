use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::PALETTE;
use crate::difficulty::Difficulty;
use crate::game::GameState;

/// Rows taken by the HUD below the board.
pub const HUD_HEIGHT: u16 = 3;

const CONTROLS_HINT: &str = "Arrows/WASD move · 1/2/3 or Tab difficulty · R restart · Q quit";

/// Renders score, difficulty selector and controls hint into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let [score_row, selector_row, hint_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(state.score_text()).style(
            Style::new()
                .fg(PALETTE.hud_text)
                .add_modifier(Modifier::BOLD),
        ),
        score_row,
    );
    frame.render_widget(
        Paragraph::new(difficulty_selector_line(state.difficulty())),
        selector_row,
    );
    frame.render_widget(
        Paragraph::new(CONTROLS_HINT).style(Style::new().fg(PALETTE.hud_muted)),
        hint_row,
    );
}

/// Builds the selector row: every level by display name, current one highlighted.
#[must_use]
pub fn difficulty_selector_line(current: Difficulty) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Difficulty: ",
        Style::new().fg(PALETTE.hud_text),
    )];

    for level in Difficulty::ALL {
        let label = format!(" {} ", level.display_name());
        let style = if level == current {
            Style::new()
                .fg(PALETTE.hud_selected)
                .bg(PALETTE.hud_text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(PALETTE.hud_muted)
        };
        spans.push(Span::styled(label, style));
    }

    Line::from(spans)
}
