use super::mode::Mode;
use super::state::{AppState, TaskAction};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tasklist::todo::FilterMode;
use tasklist::utils::text::{
    next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};

/// Rows the selection moves per mouse wheel notch
const SCROLL_STEP: usize = 3;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return Ok(());
    }

    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return Ok(());
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state)?,
        Mode::Insert => handle_insert_mode(key, state)?,
        Mode::Drag => {
            if key.code == KeyCode::Esc {
                state.end_drag();
            }
        }
    }
    Ok(())
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        if let MouseEventKind::Down(_) = mouse.kind {
            state.show_help = false;
        }
        return Ok(());
    }

    let over_list = state
        .layout
        .list
        .contains(Position::new(mouse.column, mouse.row));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(mouse, state)?,
        MouseEventKind::Drag(MouseButton::Left) => state.drag_to(mouse.row)?,
        MouseEventKind::Up(MouseButton::Left) => state.end_drag(),
        MouseEventKind::ScrollUp if over_list => {
            for _ in 0..SCROLL_STEP {
                state.move_cursor_up();
            }
        }
        MouseEventKind::ScrollDown if over_list => {
            for _ in 0..SCROLL_STEP {
                state.move_cursor_down();
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_left_click(mouse: MouseEvent, state: &mut AppState) -> Result<()> {
    let pos = Position::new(mouse.column, mouse.row);

    if state.layout.priority_button.contains(pos) {
        state.cycle_input_priority();
        return Ok(());
    }

    if let Some(filter) = state.layout.filter_at(mouse.column, mouse.row) {
        state.set_filter(filter);
        return Ok(());
    }

    if state.layout.input.contains(pos) {
        enter_insert_mode(state);
        return Ok(());
    }

    let Some(row) = state.layout.row_at(mouse.column, mouse.row).copied() else {
        return Ok(());
    };

    if row.checkbox.contains(pos) {
        state.dispatch(row.index, TaskAction::Toggle)?;
    } else if row.remove.contains(pos) {
        state.dispatch(row.index, TaskAction::Remove)?;
    } else {
        state.start_drag(row.index);
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') => enter_insert_mode(state),

        KeyCode::Down if alt => state.move_selected(true)?,
        KeyCode::Up if alt => state.move_selected(false)?,
        KeyCode::Char('J') => state.move_selected(true)?,
        KeyCode::Char('K') => state.move_selected(false)?,
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor_up(),

        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(index) = state.selected {
                state.dispatch(index, TaskAction::Toggle)?;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(index) = state.selected {
                state.dispatch(index, TaskAction::Remove)?;
            }
        }

        KeyCode::Char('1') => state.set_filter(FilterMode::All),
        KeyCode::Char('2') => state.set_filter(FilterMode::Active),
        KeyCode::Char('3') => state.set_filter(FilterMode::Completed),
        KeyCode::Char('f') => state.set_filter(state.filter.next()),

        KeyCode::Tab | KeyCode::Char('p') => state.cycle_input_priority(),
        _ => {}
    }
    Ok(())
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    let word = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => state.mode = Mode::Navigate,
        KeyCode::Enter => state.submit_input()?,
        KeyCode::Tab => state.cycle_input_priority(),
        KeyCode::Backspace => {
            if state.input_cursor > 0 {
                let start = if word {
                    prev_word_boundary(&state.input, state.input_cursor)
                } else {
                    prev_char_boundary(&state.input, state.input_cursor)
                };
                state.input.drain(start..state.input_cursor);
                state.input_cursor = start;
            }
        }
        KeyCode::Delete => {
            if state.input_cursor < state.input.len() {
                let end = next_char_boundary(&state.input, state.input_cursor);
                state.input.drain(state.input_cursor..end);
            }
        }
        KeyCode::Left if word => {
            state.input_cursor = prev_word_boundary(&state.input, state.input_cursor);
        }
        KeyCode::Right if word => {
            state.input_cursor = next_word_boundary(&state.input, state.input_cursor);
        }
        KeyCode::Left => {
            if state.input_cursor > 0 {
                state.input_cursor = prev_char_boundary(&state.input, state.input_cursor);
            }
        }
        KeyCode::Right => {
            if state.input_cursor < state.input.len() {
                state.input_cursor = next_char_boundary(&state.input, state.input_cursor);
            }
        }
        KeyCode::Home => state.input_cursor = 0,
        KeyCode::End => state.input_cursor = state.input.len(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.insert(state.input_cursor, c);
            state.input_cursor += c.len_utf8();
        }
        _ => {}
    }
    Ok(())
}

fn enter_insert_mode(state: &mut AppState) {
    state.end_drag();
    state.mode = Mode::Insert;
    state.input_cursor = state.input.len();
}
