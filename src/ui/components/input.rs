use crate::app::AppState;
use crate::app::mode::Mode;
use crate::app::state::ScreenLayout;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tasklist::utils::text::display_width;

/// Width of the "< medium >" selector plus padding
const PRIORITY_BUTTON_WIDTH: u16 = 12;

pub fn render(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    message_area: Rect,
    layout: &mut ScreenLayout,
) {
    let theme = &state.theme;
    let editing = state.mode == Mode::Insert;

    let border_style = if state.input_error.is_some() {
        Style::default().fg(theme.error)
    } else if editing {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New task ")
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    layout.input = area;

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(PRIORITY_BUTTON_WIDTH)])
        .split(inner);
    let text_area = parts[0];
    let priority_area = parts[1];

    if state.input.is_empty() && !editing {
        let placeholder = Paragraph::new(Span::styled(
            "Press a to add a task",
            Style::default().fg(theme.muted),
        ));
        f.render_widget(placeholder, text_area);
    } else {
        // Keep the cursor inside the field by scrolling long input sideways
        let cursor_width = display_width(&state.input[..state.input_cursor]) as u16;
        let scroll = cursor_width.saturating_sub(text_area.width.saturating_sub(1));
        let text = Paragraph::new(state.input.as_str())
            .style(Style::default().fg(theme.foreground))
            .scroll((0, scroll));
        f.render_widget(text, text_area);

        if editing {
            f.set_cursor_position(Position::new(
                text_area.x + cursor_width - scroll,
                text_area.y,
            ));
        }
    }

    let priority = state.input_priority;
    let selector = Paragraph::new(Line::from(Span::styled(
        format!("< {} >", priority),
        Style::default()
            .fg(theme.priority_color(priority))
            .add_modifier(Modifier::BOLD),
    )))
    .right_aligned();
    f.render_widget(selector, priority_area);
    layout.priority_button = priority_area;

    render_message(f, state, message_area);
}

fn render_message(f: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let line = match (&state.input_error, state.mode) {
        (Some(error), _) => Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        (None, Mode::Insert) => Line::from(Span::styled(
            " Enter add · Tab priority · Esc done",
            Style::default().fg(theme.muted),
        )),
        (None, _) => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), area);
}
