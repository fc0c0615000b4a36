use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, CELL_RENDER_WIDTH, GLYPH_CELL, GRID, GridSize, THEME};
use crate::game::GameState;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let play_area = render_hud(frame, frame.area(), state);
    let board_area = centered_board(play_area, GRID);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(THEME.border_fg))
        .style(Style::new().bg(THEME.play_bg));

    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    if state.over {
        render_game_over_menu(frame, board_area, state.score, state.death_reason);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, GRID, state.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(THEME.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let buffer = frame.buffer_mut();

    // Tail first so the head wins if food and body overlap visually.
    for segment in state.snake.segments().rev() {
        let Some((x, y)) = logical_to_terminal(inner, GRID, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(THEME.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(THEME.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Returns the bordered board rect, centered and clipped to `area`.
#[must_use]
pub fn centered_board(area: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.width * CELL_RENDER_WIDTH + 2).min(area.width);
    let height = (bounds.height + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a logical cell to the terminal column/row of its left half.
///
/// Returns `None` when the cell does not fit in `inner`.
#[must_use]
pub fn logical_to_terminal(
    inner: Rect,
    bounds: GridSize,
    position: Position,
) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()? * CELL_RENDER_WIDTH;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x + CELL_RENDER_WIDTH > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
