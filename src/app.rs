//! Application state and core logic

use crate::clipboard::Clipboard;
use crate::config::TuiConfig;
use crate::form::{self, DragPayload, FieldId, FormError};
use crate::state::{AppState, BuilderLayout, Focus, Form, PropertyEditor, UiArea};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Second Ctrl+C within this window quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(800);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Destination for copied JSON
    clipboard: Box<dyn Clipboard>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    /// File the document was opened from and is saved to
    pub document_path: Option<PathBuf>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, clipboard: Box<dyn Clipboard>) -> Self {
        let mut state = AppState::default();
        state.show_json = config.show_json();
        state.insert_at_drop_position = config.insert_at_drop_position();
        state.palette_width = config.palette_width();

        Self {
            state,
            clipboard,
            quit: false,
            status_message: None,
            terminal_size: None,
            last_ctrl_c: None,
            document_path: None,
        }
    }

    /// Use `path` as the document file, loading it if it already exists
    pub fn open(&mut self, path: &Path) -> Result<()> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            self.state.document = form::FormDocument::from_json(&content)
                .with_context(|| format!("Invalid form document in {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                fields = self.state.document.len(),
                "opened form document"
            );
        }
        self.document_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Panel rectangles for the current terminal size
    pub fn layout(&self) -> BuilderLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        BuilderLayout::new(
            Rect::new(0, 0, width, height),
            self.state.palette_width,
            self.state.show_json,
            self.state.editor.is_some(),
        )
    }

    /// Log a document error and queue it for the error dialog
    fn report(&mut self, err: FormError) {
        tracing::warn!(%err, "form operation failed");
        self.state.push_error(err.to_string());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        if key.code == KeyCode::Esc && self.state.drag.is_dragging() {
            self.state.drag.cancel();
            self.state.drop_hint = None;
            return Ok(());
        }

        match self.state.focus {
            Focus::Editor => self.handle_editor_key(key),
            Focus::Palette | Focus::Canvas => {
                if !self.handle_global_key(key) {
                    match self.state.focus {
                        Focus::Palette => self.handle_palette_key(key),
                        _ => self.handle_canvas_key(key),
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        let is_double = self
            .last_ctrl_c
            .is_some_and(|last| now.duration_since(last) < DOUBLE_CTRL_C_WINDOW);
        if is_double {
            self.quit = true;
        } else {
            self.last_ctrl_c = Some(now);
            self.status_message = Some("Press Ctrl+C again to quit".to_string());
        }
    }

    /// Keys shared by the palette and canvas. Returns true if consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Char('y') => self.copy_json(),
            KeyCode::Char('s') => self.save_document(),
            KeyCode::Char('p') => self.state.show_json = !self.state.show_json,
            _ => return false,
        }
        true
    }

    fn cycle_focus(&mut self, forward: bool) {
        let editor_open = self.state.editor.is_some();
        self.state.focus = match (self.state.focus, forward) {
            (Focus::Palette, true) => Focus::Canvas,
            (Focus::Canvas, true) if editor_open => Focus::Editor,
            (Focus::Canvas, true) => Focus::Palette,
            (Focus::Editor, true) => Focus::Palette,
            (Focus::Palette, false) if editor_open => Focus::Editor,
            (Focus::Palette, false) => Focus::Canvas,
            (Focus::Canvas, false) => Focus::Palette,
            (Focus::Editor, false) => Focus::Canvas,
        };
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(form::entries().len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter | KeyCode::Char(' ') => self.insert_selected_palette_item(),
            _ => {}
        }
    }

    /// Keyboard equivalent of dropping the selected palette item on the canvas
    fn insert_selected_palette_item(&mut self) {
        let Some(entry) = form::entries().get(self.state.palette_index) else {
            return;
        };

        match self
            .state
            .document
            .insert(entry.field_type, entry.palette_label, None)
        {
            Ok(id) => self.on_field_inserted(id),
            Err(err) => self.report(err),
        }
    }

    fn on_field_inserted(&mut self, id: FieldId) {
        self.state.select_field(id);
        let capacity = self.layout().canvas_capacity();
        self.state.ensure_canvas_visible(capacity);
        if let Some(field) = self.state.document.get(id) {
            self.status_message = Some(format!("Added {}", field.label()));
        }
    }

    fn handle_canvas_key(&mut self, key: KeyEvent) {
        let len = self.state.document.len();
        match key.code {
            KeyCode::Char('J') => self.move_selected_field(true),
            KeyCode::Char('K') => self.move_selected_field(false),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.move_selected_field(true)
            }
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.move_selected_field(false)
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(len),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Enter | KeyCode::Char('e') => self.open_editor(),
            _ => {}
        }
        let capacity = self.layout().canvas_capacity();
        self.state.ensure_canvas_visible(capacity);
    }

    fn move_selected_field(&mut self, down: bool) {
        let from = self.state.canvas_index;
        let to = if down {
            from + 1
        } else if let Some(to) = from.checked_sub(1) {
            to
        } else {
            return;
        };
        if to >= self.state.document.len() {
            return;
        }

        match self.state.document.move_field(from, to) {
            Ok(()) => self.state.canvas_index = to,
            Err(err) => self.report(err),
        }
    }

    fn open_editor(&mut self) {
        let Some(field) = self.state.selected_field() else {
            return;
        };
        match PropertyEditor::open(field) {
            Ok(editor) => {
                self.state.editor = Some(editor);
                self.state.focus = Focus::Editor;
            }
            Err(err) => self.report(err),
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.state.editor.as_mut() else {
            self.state.close_editor();
            return;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.state.close_editor();
                return;
            }
            KeyCode::Tab => {
                editor.next_field();
                return;
            }
            KeyCode::BackTab => {
                editor.prev_field();
                return;
            }
            KeyCode::Backspace => editor.pop_char(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.get_active_field_mut().clear()
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.push_char(c)
            }
            _ => return,
        }

        self.apply_editor();
    }

    /// Write the editor buffers back to the document
    fn apply_editor(&mut self) {
        let Some(editor) = self.state.editor.as_ref() else {
            return;
        };
        let id = editor.field_id;

        let result = match self.state.document.get(id) {
            Some(field) => {
                let properties = editor.merged_properties(&field.properties);
                self.state.document.update_properties(id, properties)
            }
            None => Err(FormError::UnknownId(id)),
        };

        if let Err(err) = result {
            self.state.close_editor();
            self.report(err);
        }
    }

    fn copy_json(&mut self) {
        let json = match self.state.document.to_json_pretty() {
            Ok(json) => json,
            Err(err) => {
                self.report(err);
                return;
            }
        };

        match self.clipboard.copy_text(&json) {
            Ok(()) => self.status_message = Some("Copied JSON to clipboard".to_string()),
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed");
                self.state.push_error(err.to_string());
            }
        }
    }

    fn save_document(&mut self) {
        let Some(path) = self.document_path.clone() else {
            self.status_message = Some("No file to save to".to_string());
            return;
        };

        let result = self
            .state
            .document
            .to_json_pretty()
            .map_err(anyhow::Error::from)
            .and_then(|json| {
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))
            });

        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved form document");
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(err) => {
                tracing::warn!("{err:#}");
                self.state.push_error(format!("{err:#}"));
            }
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() {
            return Ok(());
        }

        let layout = self.layout();
        let (col, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(&layout, col, row),
            MouseEventKind::Drag(MouseButton::Left) => self.handle_drag(&layout, col, row),
            MouseEventKind::Up(MouseButton::Left) => self.handle_release(&layout, col, row),
            MouseEventKind::ScrollUp if layout.area_at(col, row) == Some(UiArea::Canvas) => {
                self.state.scroll_canvas_up();
            }
            MouseEventKind::ScrollDown if layout.area_at(col, row) == Some(UiArea::Canvas) => {
                self.state.scroll_canvas_down();
            }
            MouseEventKind::ScrollUp if layout.area_at(col, row) == Some(UiArea::Json) => {
                self.state.scroll_json_up();
            }
            MouseEventKind::ScrollDown if layout.area_at(col, row) == Some(UiArea::Json) => {
                let line_count = self
                    .state
                    .document
                    .to_json_pretty()
                    .map(|json| json.lines().count())
                    .unwrap_or(0);
                self.state.scroll_json_down(line_count);
            }
            _ => {}
        }

        Ok(())
    }

    /// Pointer pressed: pick up a palette item or a canvas field
    fn handle_press(&mut self, layout: &BuilderLayout, col: u16, row: u16) {
        match layout.area_at(col, row) {
            Some(UiArea::Palette) => {
                let entries = form::entries();
                let Some(index) = layout.palette_index_at(col, row, entries.len()) else {
                    return;
                };
                let entry = &entries[index];
                self.state.palette_index = index;
                self.state.focus = Focus::Palette;
                self.state.drag.begin(DragPayload::Palette {
                    field_type: entry.field_type,
                    palette_label: entry.palette_label.to_string(),
                });
            }
            Some(UiArea::Canvas) => {
                let fields = self.state.document.snapshot();
                let Some(index) =
                    layout.canvas_index_at(col, row, self.state.canvas_scroll, fields.len())
                else {
                    return;
                };
                let id = fields[index].id;
                if self.state.editor.as_ref().is_some_and(|e| e.field_id != id) {
                    self.state.close_editor();
                }
                self.state.canvas_index = index;
                self.state.focus = Focus::Canvas;
                self.state.drag.begin(DragPayload::Canvas { id, index });
            }
            Some(UiArea::Editor) => self.state.focus = Focus::Editor,
            _ => {}
        }
    }

    /// Pointer moved with the button held: hover over canvas items
    fn handle_drag(&mut self, layout: &BuilderLayout, col: u16, row: u16) {
        let hover_index = layout.canvas_index_at(
            col,
            row,
            self.state.canvas_scroll,
            self.state.document.len(),
        );

        let Some(payload) = self.state.drag.payload() else {
            return;
        };

        // Palette items only mark the slot; they are inserted on release
        if matches!(payload, DragPayload::Palette { .. }) {
            self.state.drop_hint = hover_index;
            return;
        }

        let Some(hover_index) = hover_index else {
            return;
        };
        match self.state.drag.hover(&mut self.state.document, hover_index) {
            Ok(true) => self.state.canvas_index = hover_index,
            Ok(false) => {}
            Err(err) => self.report(err),
        }
    }

    /// Pointer released: drop on the canvas or cancel
    fn handle_release(&mut self, layout: &BuilderLayout, col: u16, row: u16) {
        if !self.state.drag.is_dragging() {
            return;
        }
        self.state.drop_hint = None;

        if layout.area_at(col, row) != Some(UiArea::Canvas) {
            self.state.drag.cancel();
            return;
        }

        let drop_index = if self.state.insert_at_drop_position {
            layout.canvas_index_at(
                col,
                row,
                self.state.canvas_scroll,
                self.state.document.len(),
            )
        } else {
            None
        };

        match self
            .state
            .drag
            .drop_on_canvas(&mut self.state.document, drop_index)
        {
            Ok(Some(id)) => self.on_field_inserted(id),
            Ok(None) => {}
            Err(err) => self.report(err),
        }
    }
}
