use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tasklist::utils::text::display_width;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if let Some(message) = state.active_status_message() {
        render_status_message(f, message, area);
        return;
    }

    let left_content = format!(
        " {} | {} | showing {} ({}/{})",
        state.mode,
        open_tasks_label(state.open_count()),
        state.filter,
        state.visible_indices().len(),
        state.tasks().len(),
    );

    let nav_hint = "? help  q quit";
    let version_text = format!("v{VERSION}");

    // "{left} {hint}{padding} {version} "
    let used = display_width(&left_content) + nav_hint.len() + version_text.len() + 3;
    let padding = (area.width as usize).saturating_sub(used);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {}{:padding$} {} ",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));
    f.render_widget(status, area);
}

pub fn open_tasks_label(count: usize) -> String {
    format!("Open tasks: {count}")
}

fn render_status_message(f: &mut Frame, message: &str, area: Rect) {
    let display_message = format!(" {message} ");

    let style = Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(0, 100, 0))
        .add_modifier(Modifier::BOLD);

    let padding = (area.width as usize).saturating_sub(display_width(&display_message));
    let status_line = format!(
        "{}{:padding$}",
        display_message,
        "",
        padding = padding
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
