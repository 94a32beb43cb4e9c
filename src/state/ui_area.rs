//! UI area positioning for mouse event handling
//!
//! Drawing and mouse handling both derive their rectangles from
//! [`BuilderLayout`], so a row the user clicks maps to the same palette or
//! canvas item that was drawn there.
//!
//! # Layout
//!
//! ```text
//! +---------+----------------------+-------------+
//! | Palette | Canvas               | Preview     |
//! |         |                      |             |
//! |         +----------------------+-------------+
//! |         | Property editor (*)  | JSON (*)    |
//! +---------+----------------------+-------------+
//! Status bar (1 row)
//! (*) only when open / enabled
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Rows per palette item (top border + label + bottom border)
pub const PALETTE_ITEM_HEIGHT: u16 = 3;

/// Rows per canvas item (top border + label + helper text + bottom border)
pub const CANVAS_ITEM_HEIGHT: u16 = 4;

/// Rows reserved for the property editor under the canvas
pub const EDITOR_HEIGHT: u16 = 8;

/// Region of the screen a position falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    Palette,
    Canvas,
    Editor,
    Preview,
    Json,
    StatusBar,
}

/// Screen rectangles of every builder panel for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderLayout {
    pub palette: Rect,
    pub canvas: Rect,
    pub editor: Option<Rect>,
    pub preview: Rect,
    pub json: Option<Rect>,
    pub status_bar: Rect,
}

impl BuilderLayout {
    pub fn new(area: Rect, palette_width: u16, show_json: bool, editor_open: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Panels
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(palette_width), // Palette
                Constraint::Min(20),               // Canvas
                Constraint::Percentage(35),        // Preview / JSON
            ])
            .split(rows[0]);

        let (canvas, editor) = if editor_open {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(EDITOR_HEIGHT)])
                .split(columns[1]);
            (chunks[0], Some(chunks[1]))
        } else {
            (columns[1], None)
        };

        let (preview, json) = if show_json {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(columns[2]);
            (chunks[0], Some(chunks[1]))
        } else {
            (columns[2], None)
        };

        Self {
            palette: columns[0],
            canvas,
            editor,
            preview,
            json,
            status_bar: rows[1],
        }
    }

    /// Which panel contains the given cell
    pub fn area_at(&self, col: u16, row: u16) -> Option<UiArea> {
        let pos = Position::new(col, row);
        let panels = [
            (Some(self.palette), UiArea::Palette),
            (Some(self.canvas), UiArea::Canvas),
            (self.editor, UiArea::Editor),
            (Some(self.preview), UiArea::Preview),
            (self.json, UiArea::Json),
            (Some(self.status_bar), UiArea::StatusBar),
        ];
        panels
            .into_iter()
            .find_map(|(rect, area)| rect.filter(|r| r.contains(pos)).map(|_| area))
    }

    /// Inner (borderless) area of the palette
    pub fn palette_inner(&self) -> Rect {
        inner(self.palette)
    }

    /// Inner (borderless) area of the canvas
    pub fn canvas_inner(&self) -> Rect {
        inner(self.canvas)
    }

    /// Number of whole canvas items that fit on screen
    pub fn canvas_capacity(&self) -> usize {
        (self.canvas_inner().height / CANVAS_ITEM_HEIGHT) as usize
    }

    /// Rectangle of the palette item at `index`, if it is on screen
    pub fn palette_item_rect(&self, index: usize) -> Option<Rect> {
        item_rect(self.palette_inner(), PALETTE_ITEM_HEIGHT, index)
    }

    /// Rectangle of the canvas item at `index` given the scroll offset
    pub fn canvas_item_rect(&self, index: usize, scroll: usize) -> Option<Rect> {
        let visible = index.checked_sub(scroll)?;
        item_rect(self.canvas_inner(), CANVAS_ITEM_HEIGHT, visible)
    }

    /// Palette item under the given cell
    pub fn palette_index_at(&self, col: u16, row: u16, item_count: usize) -> Option<usize> {
        item_at(self.palette_inner(), PALETTE_ITEM_HEIGHT, col, row)
            .filter(|&index| index < item_count)
    }

    /// Canvas item under the given cell
    pub fn canvas_index_at(
        &self,
        col: u16,
        row: u16,
        scroll: usize,
        item_count: usize,
    ) -> Option<usize> {
        item_at(self.canvas_inner(), CANVAS_ITEM_HEIGHT, col, row)
            .map(|visible| visible + scroll)
            .filter(|&index| index < item_count)
    }
}

fn inner(rect: Rect) -> Rect {
    rect.inner(Margin {
        horizontal: 1,
        vertical: 1,
    })
}

fn item_rect(area: Rect, item_height: u16, visible_index: usize) -> Option<Rect> {
    let offset = u16::try_from(visible_index).ok()?.checked_mul(item_height)?;
    if offset.saturating_add(item_height) > area.height {
        return None;
    }
    Some(Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: item_height,
    })
}

/// Visible item under the cell; rows of a partly drawn last item hit nothing
fn item_at(area: Rect, item_height: u16, col: u16, row: u16) -> Option<usize> {
    if !area.contains(Position::new(col, row)) {
        return None;
    }
    let visible_index = (row - area.y) / item_height;
    let item_bottom = (visible_index + 1).checked_mul(item_height)?;
    if item_bottom > area.height {
        return None;
    }
    Some(visible_index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout(show_json: bool, editor_open: bool) -> BuilderLayout {
        BuilderLayout::new(Rect::new(0, 0, 100, 40), 22, show_json, editor_open)
    }

    #[test]
    fn test_columns_and_status_bar() {
        let l = layout(true, false);
        assert_eq!(l.palette, Rect::new(0, 0, 22, 39));
        assert_eq!(l.canvas.x, 22);
        assert_eq!(l.status_bar, Rect::new(0, 39, 100, 1));
        assert_eq!(l.preview.x, l.canvas.x + l.canvas.width);
        assert!(l.json.is_some());
        assert!(l.editor.is_none());
    }

    #[test]
    fn test_json_panel_hidden() {
        let l = layout(false, false);
        assert!(l.json.is_none());
        assert_eq!(l.preview.height, 39);
    }

    #[test]
    fn test_editor_takes_bottom_of_canvas_column() {
        let l = layout(true, true);
        let editor = l.editor.unwrap();
        assert_eq!(editor.height, EDITOR_HEIGHT);
        assert_eq!(editor.y, l.canvas.y + l.canvas.height);
        assert_eq!(editor.x, l.canvas.x);
    }

    #[test]
    fn test_area_at() {
        let l = layout(true, true);
        assert_eq!(l.area_at(0, 0), Some(UiArea::Palette));
        assert_eq!(l.area_at(30, 5), Some(UiArea::Canvas));
        assert_eq!(l.area_at(30, 35), Some(UiArea::Editor));
        assert_eq!(l.area_at(99, 1), Some(UiArea::Preview));
        assert_eq!(l.area_at(99, 38), Some(UiArea::Json));
        assert_eq!(l.area_at(50, 39), Some(UiArea::StatusBar));
        assert_eq!(l.area_at(200, 0), None);
    }

    #[test]
    fn test_palette_hit_testing() {
        let l = layout(true, false);
        // Border row is not an item
        assert_eq!(l.palette_index_at(5, 0, 4), None);
        assert_eq!(l.palette_index_at(5, 1, 4), Some(0));
        assert_eq!(l.palette_index_at(5, 3, 4), Some(0));
        assert_eq!(l.palette_index_at(5, 4, 4), Some(1));
        assert_eq!(l.palette_index_at(5, 12, 4), Some(3));
        assert_eq!(l.palette_index_at(5, 13, 4), None);
    }

    #[test]
    fn test_canvas_hit_testing_with_scroll() {
        let l = layout(true, false);
        let col = l.canvas.x + 2;
        assert_eq!(l.canvas_index_at(col, 1, 0, 3), Some(0));
        assert_eq!(l.canvas_index_at(col, 5, 0, 3), Some(1));
        assert_eq!(l.canvas_index_at(col, 9, 0, 3), Some(2));
        assert_eq!(l.canvas_index_at(col, 13, 0, 3), None);
        assert_eq!(l.canvas_index_at(col, 1, 2, 3), Some(2));
        // Palette column is not the canvas
        assert_eq!(l.canvas_index_at(3, 1, 0, 3), None);
    }

    #[test]
    fn test_item_rects_match_hit_testing() {
        let l = layout(true, false);
        for index in 0..4 {
            let rect = l.canvas_item_rect(index, 0).unwrap();
            assert_eq!(l.canvas_index_at(rect.x, rect.y, 0, 4), Some(index));
            assert_eq!(
                l.canvas_index_at(rect.x, rect.y + rect.height - 1, 0, 4),
                Some(index)
            );
        }
        assert_eq!(l.canvas_item_rect(0, 1), None);
    }

    #[test]
    fn test_partly_visible_bottom_row_hits_nothing() {
        let l = layout(true, false);
        let inner = l.canvas_inner();
        let capacity = l.canvas_capacity();
        let col = inner.x + 1;
        let bottom_row = inner.y + inner.height - 1;

        // 37 inner rows hold 9 whole items and one leftover row
        assert_eq!(capacity, 9);
        assert_eq!(l.canvas_item_rect(capacity, 0), None);
        assert_eq!(l.canvas_index_at(col, bottom_row, 0, 12), None);

        let last = l.canvas_item_rect(capacity - 1, 0).unwrap();
        assert_eq!(
            l.canvas_index_at(col, last.y + last.height - 1, 0, 12),
            Some(capacity - 1)
        );
    }

    #[test]
    fn test_canvas_capacity() {
        let l = layout(true, false);
        // 39 rows minus 2 border rows
        assert_eq!(l.canvas_capacity(), (37 / CANVAS_ITEM_HEIGHT) as usize);
    }
}
