use super::mode::Mode;
use crate::ui::theme::Theme;
use anyhow::Result;
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tasklist::storage::SqliteStore;
use tasklist::todo::{DragSession, FilterMode, Priority, RowGeometry, Task, TaskBoard, TaskError};
use tracing::{debug, warn};

/// Seconds a status message stays in the status bar
const STATUS_MESSAGE_SECS: u64 = 3;

/// Per-row controls, routed through [`AppState::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Toggle,
    Remove,
}

/// Where one task row was drawn on the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub index: usize,
    pub area: Rect,
    pub checkbox: Rect,
    pub remove: Rect,
}

impl RowLayout {
    pub fn geometry(&self) -> RowGeometry {
        RowGeometry::new(self.index, self.area.y as f64, self.area.height as f64)
    }
}

/// Clickable regions of the last rendered frame.
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub input: Rect,
    pub priority_button: Rect,
    pub filter_buttons: Vec<(FilterMode, Rect)>,
    pub list: Rect,
    pub rows: Vec<RowLayout>,
}

impl ScreenLayout {
    pub fn row_at(&self, column: u16, row: u16) -> Option<&RowLayout> {
        let pos = Position::new(column, row);
        self.rows.iter().find(|r| r.area.contains(pos))
    }

    pub fn filter_at(&self, column: u16, row: u16) -> Option<FilterMode> {
        let pos = Position::new(column, row);
        self.filter_buttons
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(mode, _)| *mode)
    }

    pub fn row_geometry(&self) -> Vec<RowGeometry> {
        self.rows.iter().map(RowLayout::geometry).collect()
    }
}

pub struct AppState {
    pub board: TaskBoard<SqliteStore>,
    pub filter: FilterMode,
    pub mode: Mode,
    /// List index of the highlighted task
    pub selected: Option<usize>,
    /// First visible row (position in the filtered view) drawn in the list
    pub scroll_offset: usize,
    pub input: String,
    pub input_cursor: usize,
    pub input_priority: Priority,
    pub input_error: Option<String>,
    pub drag: Option<DragSession>,
    pub layout: ScreenLayout,
    pub status_message: Option<(String, Instant)>,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl AppState {
    pub fn new(board: TaskBoard<SqliteStore>, theme: Theme, default_priority: Priority) -> Self {
        let mut state = Self {
            board,
            filter: FilterMode::default(),
            mode: Mode::default(),
            selected: None,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            input_priority: default_priority,
            input_error: None,
            drag: None,
            layout: ScreenLayout::default(),
            status_message: None,
            show_help: false,
            should_quit: false,
            theme,
        };
        state.clamp_cursor();
        state
    }

    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    pub fn open_count(&self) -> usize {
        self.board.open_count()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.filter.visible_indices(self.board.tasks())
    }

    /// Apply a row control to the task at `index`.
    pub fn dispatch(&mut self, index: usize, action: TaskAction) -> Result<()> {
        let result = match action {
            TaskAction::Toggle => self.board.toggle_complete(index),
            TaskAction::Remove => self.board.remove(index).map(|task| {
                self.set_status_message(format!("Removed: {}", task.text));
            }),
        };

        match result {
            Ok(()) => {
                if action == TaskAction::Toggle {
                    self.selected = Some(index);
                }
                self.clamp_cursor();
                Ok(())
            }
            Err(e @ TaskError::IndexOutOfBounds { .. }) => {
                warn!(?action, "{}", e);
                self.set_status_message(e.to_string());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Add the input row's text as a new task. A rejected text stays in the
    /// input with an inline error; nothing else changes.
    pub fn submit_input(&mut self) -> Result<()> {
        match self.board.add(&self.input, self.input_priority) {
            Ok(()) => {
                self.input.clear();
                self.input_cursor = 0;
                self.input_error = None;
                let new_index = self.board.len() - 1;
                if self.is_visible(new_index) {
                    self.selected = Some(new_index);
                }
                self.clamp_cursor();
                Ok(())
            }
            Err(TaskError::Validation(e)) => {
                debug!("rejected new task: {}", e);
                self.input_error = Some(e.to_string());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn cycle_input_priority(&mut self) {
        self.input_priority = self.input_priority.next();
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
        self.scroll_offset = 0;
        self.clamp_cursor();
    }

    pub fn move_cursor_up(&mut self) {
        let visible = self.visible_indices();
        let Some(pos) = self.selected_position(&visible) else {
            self.selected = visible.first().copied();
            return;
        };
        if pos > 0 {
            self.selected = Some(visible[pos - 1]);
        }
    }

    pub fn move_cursor_down(&mut self) {
        let visible = self.visible_indices();
        let Some(pos) = self.selected_position(&visible) else {
            self.selected = visible.first().copied();
            return;
        };
        if pos + 1 < visible.len() {
            self.selected = Some(visible[pos + 1]);
        }
    }

    /// Swap the selected task with its visible neighbour above or below.
    pub fn move_selected(&mut self, down: bool) -> Result<()> {
        let visible = self.visible_indices();
        let Some(pos) = self.selected_position(&visible) else {
            return Ok(());
        };
        let neighbour = if down {
            visible.get(pos + 1)
        } else {
            pos.checked_sub(1).and_then(|p| visible.get(p))
        };
        if let Some(&to) = neighbour {
            let from = visible[pos];
            self.board.reorder(from, to)?;
            self.selected = Some(to);
        }
        Ok(())
    }

    pub fn start_drag(&mut self, index: usize) {
        if index >= self.board.len() {
            return;
        }
        self.selected = Some(index);
        self.drag = Some(DragSession::new(index));
        self.mode = Mode::Drag;
    }

    /// Follow the pointer at terminal row `y`, moving the dragged task when
    /// its insertion point changes.
    pub fn drag_to(&mut self, y: u16) -> Result<()> {
        let Some(mut session) = self.drag else {
            return Ok(());
        };
        let rows = self.layout.row_geometry();
        if let Some((from, to)) = session.next_move(&rows, y as f64, self.board.len()) {
            self.board.reorder(from, to)?;
            session.moved_to(to);
            self.selected = Some(to);
            self.drag = Some(session);
        }
        Ok(())
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
        if self.mode == Mode::Drag {
            self.mode = Mode::Navigate;
        }
    }

    /// Re-read the list after the database changed underneath us.
    pub fn reload_from_store(&mut self) -> Result<()> {
        if self.drag.is_some() {
            return Ok(());
        }
        self.board.reload()?;
        self.clamp_cursor();
        Ok(())
    }

    /// Keep the selection on a visible task, preferring the nearest one at
    /// or after the previous selection.
    pub fn clamp_cursor(&mut self) {
        let visible = self.visible_indices();
        self.selected = match self.selected {
            Some(idx) if visible.contains(&idx) => Some(idx),
            Some(idx) => visible
                .iter()
                .copied()
                .find(|&v| v >= idx)
                .or_else(|| visible.last().copied()),
            None => visible.first().copied(),
        };
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, time)) = &self.status_message
            && time.elapsed().as_secs() > STATUS_MESSAGE_SECS
        {
            self.status_message = None;
        }
    }

    pub fn active_status_message(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, time)| time.elapsed().as_secs() <= STATUS_MESSAGE_SECS)
            .map(|(message, _)| message.as_str())
    }

    fn is_visible(&self, index: usize) -> bool {
        self.board
            .tasks()
            .get(index)
            .is_some_and(|task| tasklist::todo::visibility(task, self.filter).is_visible())
    }

    fn selected_position(&self, visible: &[usize]) -> Option<usize> {
        self.selected
            .and_then(|idx| visible.iter().position(|&v| v == idx))
    }
}
