pub mod filter_bar;
pub mod input;
pub mod status_bar;
pub mod task_list;

use crate::app::AppState;
use crate::app::state::ScreenLayout;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input row
            Constraint::Length(1), // Validation message / hints
            Constraint::Length(1), // Filter buttons
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let mut layout = ScreenLayout::default();

    input::render(f, state, chunks[0], chunks[1], &mut layout);
    filter_bar::render(f, state, chunks[2], &mut layout);
    task_list::render(f, state, chunks[3], &mut layout);
    status_bar::render(f, state, chunks[4]);

    // Click and drag handling reads the geometry of the frame just drawn
    state.layout = layout;

    if state.show_help {
        render_help_overlay(f, state);
    }
}

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("a / i / n", "Focus the input row"),
    ("Enter", "Add task (in input)"),
    ("Tab / p", "Cycle priority"),
    ("Esc", "Leave the input row"),
    ("j / k", "Move selection"),
    ("Space / x", "Toggle done"),
    ("d / Delete", "Remove task"),
    ("J / K", "Move task down / up"),
    ("1 2 3 / f", "Show all / active / completed"),
    ("Mouse drag", "Reorder tasks"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(HELP_ENTRIES.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), key_style),
            Span::styled(*desc, desc_style),
        ])
    }));

    let area = centered_rect(60, 70, f.area());
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_bottom(Line::from(" Esc or ? to close ").centered())
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};
    use tasklist::storage::SqliteStore;
    use tasklist::todo::{FilterMode, Priority, TaskBoard};

    fn state_with(tasks: &[(&str, Priority)]) -> AppState {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut board = TaskBoard::load(store).unwrap();
        for (text, priority) in tasks {
            board.add(text, *priority).unwrap();
        }
        AppState::new(board, Theme::default(), Priority::Low)
    }

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_rows_and_counter() {
        let mut state = state_with(&[("Buy milk", Priority::High), ("Walk dog", Priority::Low)]);
        state.dispatch(1, crate::app::state::TaskAction::Toggle).unwrap();

        let screen = draw(&mut state, 60, 16);

        assert!(screen.contains("[ ] Buy milk (high)"));
        assert!(screen.contains("[x] Walk dog (low)"));
        assert!(screen.contains("[remove]"));
        assert!(screen.contains("[All] [Active] [Completed]"));
        assert!(screen.contains("Open tasks: 1"));
    }

    #[test]
    fn test_render_records_layout() {
        let mut state = state_with(&[("One task", Priority::Low), ("Two task", Priority::Low)]);
        draw(&mut state, 60, 16);

        let layout = &state.layout;
        assert_eq!(layout.filter_buttons.len(), 3);
        assert_eq!(layout.rows.len(), 2);

        // Input box takes rows 0-2, then the message line, the filter bar
        // and the list border
        let first = layout.rows[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.area.y, 6);
        assert_eq!(layout.rows[1].area.y, 7);
        assert!(first.checkbox.width > 0);
        assert!(first.remove.x > first.checkbox.x);
        assert_eq!(layout.filter_at(first.checkbox.x, 4), None);
        assert_eq!(
            layout.filter_at(layout.filter_buttons[1].1.x, 4),
            Some(FilterMode::Active)
        );
    }

    #[test]
    fn test_long_text_wraps_to_taller_row() {
        let mut state = state_with(&[(
            "A rather long task description that cannot fit on one line",
            Priority::Medium,
        )]);
        draw(&mut state, 40, 16);

        assert!(state.layout.rows[0].area.height > 1);
    }

    #[test]
    fn test_filtered_view_only_lays_out_visible_rows() {
        let mut state = state_with(&[("One task", Priority::Low), ("Two task", Priority::Low)]);
        state.dispatch(0, crate::app::state::TaskAction::Toggle).unwrap();
        state.set_filter(FilterMode::Active);

        draw(&mut state, 60, 16);

        assert_eq!(state.layout.rows.len(), 1);
        assert_eq!(state.layout.rows[0].index, 1);
    }

    #[test]
    fn test_empty_list_placeholder() {
        let mut state = state_with(&[]);
        let screen = draw(&mut state, 60, 16);
        assert!(screen.contains("No tasks yet"));
        assert!(state.layout.rows.is_empty());

        state.set_filter(FilterMode::Completed);
        let screen = draw(&mut state, 60, 16);
        assert!(screen.contains("No completed tasks"));
    }
}
