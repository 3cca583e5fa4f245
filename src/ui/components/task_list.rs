use crate::app::AppState;
use crate::app::state::{RowLayout, ScreenLayout};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tasklist::todo::{FilterMode, Task};
use tasklist::utils::text::{display_width, wrap_to_width};

/// "[x] " in front of every row
const CHECKBOX_WIDTH: u16 = 4;
const REMOVE_LABEL: &str = "[remove]";

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect, layout: &mut ScreenLayout) {
    let theme = state.theme.clone();
    let visible = state.visible_indices();

    let title = format!(" Tasks ({}/{}) ", visible.len(), state.tasks().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.muted));
    let inner = block.inner(area);
    f.render_widget(block, area);
    layout.list = inner;

    if visible.is_empty() {
        let placeholder = match state.filter {
            FilterMode::All => "No tasks yet".to_string(),
            filter => format!("No {filter} tasks"),
        };
        f.render_widget(
            Paragraph::new(Span::styled(placeholder, Style::default().fg(theme.muted))),
            inner,
        );
        state.scroll_offset = 0;
        return;
    }

    let remove_width = REMOVE_LABEL.len() as u16;
    let text_width = inner.width.saturating_sub(CHECKBOX_WIDTH + remove_width + 1) as usize;

    let wrapped: Vec<Vec<String>> = visible
        .iter()
        .map(|&idx| wrap_to_width(&state.tasks()[idx].label(), text_width))
        .collect();
    let heights: Vec<usize> = wrapped.iter().map(Vec::len).collect();

    state.scroll_offset = scroll_offset_for(
        state.scroll_offset,
        state.selected.and_then(|s| visible.iter().position(|&v| v == s)),
        &heights,
        inner.height as usize,
    );

    let dragged = state.drag.map(|d| d.index);
    let mut y = inner.y;

    for (pos, lines) in wrapped.into_iter().enumerate().skip(state.scroll_offset) {
        let remaining = inner.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }

        let idx = visible[pos];
        let task = &state.tasks()[idx];
        let height = (lines.len() as u16).min(remaining);
        let row_area = Rect::new(inner.x, y, inner.width, height);

        let row_style = if dragged == Some(idx) {
            Style::default().bg(theme.drag_bg)
        } else if state.selected == Some(idx) {
            Style::default().bg(theme.selection_bg)
        } else {
            Style::default()
        };

        let text_style = task_text_style(task, &theme);
        let checkbox = if task.completed { "[x] " } else { "[ ] " };

        let row_lines: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    let pad = text_width.saturating_sub(display_width(&line));
                    Line::from(vec![
                        Span::styled(checkbox, Style::default().fg(theme.foreground)),
                        Span::styled(line, text_style),
                        Span::raw(format!("{:pad$} ", "", pad = pad)),
                        Span::styled(REMOVE_LABEL, Style::default().fg(theme.error)),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw(" ".repeat(CHECKBOX_WIDTH as usize)),
                        Span::styled(line, text_style),
                    ])
                }
            })
            .collect();

        f.render_widget(Paragraph::new(row_lines).style(row_style), row_area);

        let remove_x = inner.x + CHECKBOX_WIDTH + text_width as u16 + 1;
        layout.rows.push(RowLayout {
            index: idx,
            area: row_area,
            checkbox: Rect::new(inner.x, y, CHECKBOX_WIDTH - 1, 1).intersection(row_area),
            remove: Rect::new(remove_x, y, remove_width, 1).intersection(row_area),
        });

        y += height;
    }
}

fn task_text_style(task: &Task, theme: &crate::ui::theme::Theme) -> Style {
    if task.completed {
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.priority_color(task.priority))
    }
}

/// First row to draw so the selected row (a position in the filtered view)
/// fits inside `viewport` lines.
fn scroll_offset_for(
    current: usize,
    selected: Option<usize>,
    heights: &[usize],
    viewport: usize,
) -> usize {
    let mut offset = current.min(heights.len().saturating_sub(1));
    let Some(selected) = selected else {
        return offset;
    };

    if selected < offset {
        return selected;
    }
    while offset < selected && heights[offset..=selected].iter().sum::<usize>() > viewport {
        offset += 1;
    }
    offset
}
