use crate::app::AppState;
use crate::app::state::ScreenLayout;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tasklist::todo::FilterMode;
use tasklist::utils::text::display_width;

const PREFIX: &str = " Show: ";

/// Draw the `[All] [Active] [Completed]` buttons and record where each landed.
pub fn render(f: &mut Frame, state: &AppState, area: Rect, layout: &mut ScreenLayout) {
    let theme = &state.theme;
    let mut spans = vec![Span::styled(PREFIX, Style::default().fg(theme.muted))];
    let mut x = area.x + PREFIX.len() as u16;

    for (i, mode) in FilterMode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
            x += 1;
        }

        let label = format!("[{}]", mode.label());
        let width = display_width(&label) as u16;
        let style = if *mode == state.filter {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.foreground)
        };

        let button = Rect::new(x, area.y, width, 1).intersection(area);
        layout.filter_buttons.push((*mode, button));

        spans.push(Span::styled(label, style));
        x += width;
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
