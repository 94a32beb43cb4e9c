//! Application state definitions

use super::forms::PropertyEditor;
use crate::form::{DragController, FieldDescriptor, FieldId, FormDocument};
use std::collections::VecDeque;

/// Panel receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Palette,
    Canvas,
    Editor,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Palette => "Palette",
            Self::Canvas => "Canvas",
            Self::Editor => "Editor",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Document
    pub document: FormDocument,
    pub drag: DragController,

    // Selection
    pub focus: Focus,
    pub palette_index: usize,
    pub canvas_index: usize,
    pub canvas_scroll: usize,
    /// First visible line of the JSON panel
    pub json_scroll: u16,

    // Editing
    pub editor: Option<PropertyEditor>,

    /// Canvas slot under the pointer while a palette item is dragged
    pub drop_hint: Option<usize>,

    // Settings
    pub show_json: bool,
    pub insert_at_drop_position: bool,
    pub palette_width: u16,

    // Errors waiting to be shown, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        let index = self.selected_index_mut();
        if max > 0 && *index < max - 1 {
            *index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        let index = self.selected_index_mut();
        if *index > 0 {
            *index -= 1;
        }
    }

    fn selected_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Palette => &mut self.palette_index,
            Focus::Canvas | Focus::Editor => &mut self.canvas_index,
        }
    }

    /// Currently selected canvas field
    pub fn selected_field(&self) -> Option<&FieldDescriptor> {
        self.document.snapshot().get(self.canvas_index)
    }

    /// Select the canvas field with `id`, if present
    pub fn select_field(&mut self, id: FieldId) {
        if let Some(index) = self.document.index_of(id) {
            self.canvas_index = index;
        }
    }

    /// Adjust the canvas scroll offset so the selected field is on screen
    pub fn ensure_canvas_visible(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        if self.canvas_index < self.canvas_scroll {
            self.canvas_scroll = self.canvas_index;
        } else if self.canvas_index >= self.canvas_scroll + capacity {
            self.canvas_scroll = self.canvas_index + 1 - capacity;
        }
    }

    /// Scroll the canvas down one item
    pub fn scroll_canvas_down(&mut self) {
        if self.canvas_scroll + 1 < self.document.len() {
            self.canvas_scroll += 1;
        }
    }

    /// Scroll the canvas up one item
    pub fn scroll_canvas_up(&mut self) {
        self.canvas_scroll = self.canvas_scroll.saturating_sub(1);
    }

    /// Scroll the JSON panel down one line, keeping the last line on screen
    pub fn scroll_json_down(&mut self, line_count: usize) {
        if usize::from(self.json_scroll) + 1 < line_count {
            self.json_scroll = self.json_scroll.saturating_add(1);
        }
    }

    /// Scroll the JSON panel up one line
    pub fn scroll_json_up(&mut self) {
        self.json_scroll = self.json_scroll.saturating_sub(1);
    }

    /// Close the property editor and return focus to the canvas
    pub fn close_editor(&mut self) {
        self.editor = None;
        if self.focus == Focus::Editor {
            self.focus = Focus::Canvas;
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
