use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::THEME;
use crate::game::GameState;

const TITLE: &str = "🐍 Play Snake While We Fetch Your Leads!";
const SHORT_TITLE: &str = "Snake";
const CONTROLS_HINT: &str = "Use arrow keys or swipe to control";
const WAITING_NOTE: &str =
    "Your leads are being scraped in the background. This usually takes 10-30 seconds.";

/// Renders the header and footer copy and returns the play area between them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [title_row, hint_row, score_row, play_area, footer_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(fit_title(title_row.width)))
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.title).add_modifier(Modifier::BOLD)),
        title_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(CONTROLS_HINT))
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.muted)),
        hint_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", state.score)))
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.score).add_modifier(Modifier::BOLD)),
        score_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from(WAITING_NOTE))
            .alignment(Alignment::Center)
            .style(Style::new().fg(THEME.muted)),
        footer_row,
    );

    play_area
}

/// Falls back to a short title when the full one would be cut off.
fn fit_title(width: u16) -> &'static str {
    if TITLE.width() <= usize::from(width) {
        TITLE
    } else {
        SHORT_TITLE
    }
}
