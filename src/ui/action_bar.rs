//! Action bar UI component.

use crate::browser::ActionSet;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the available actions as key hints with optional labels.
pub(super) fn draw_action_bar(
    f: &mut Frame<'_>,
    area: Rect,
    actions: &ActionSet,
    colors: &ThemeColors,
) {
    let mut spans = Vec::new();
    for action in actions.iter() {
        spans.push(Span::styled(
            format!(" {} ", action.button.hint()),
            Style::default()
                .fg(colors.hint)
                .add_modifier(Modifier::BOLD),
        ));
        if let Some(label) = action.label {
            spans.push(Span::raw(format!("{} ", label)));
        }
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(colors.bar_fg).bg(colors.bar_bg));

    f.render_widget(paragraph, area);
}
