//! Palette of insertable field types

use super::components::render_palette_button;
use crate::app::App;
use crate::form::{self, DragPayload};
use crate::state::{BuilderLayout, Focus};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the palette panel
pub fn draw(frame: &mut Frame, layout: &BuilderLayout, app: &App) {
    let is_focused = app.state.focus == Focus::Palette;
    let block = Block::default()
        .title(" Fields ")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    frame.render_widget(block, layout.palette);

    let held_type = match app.state.drag.payload() {
        Some(DragPayload::Palette { field_type, .. }) => Some(*field_type),
        _ => None,
    };

    for (index, entry) in form::entries().iter().enumerate() {
        let Some(rect) = layout.palette_item_rect(index) else {
            break;
        };
        render_palette_button(
            frame,
            rect,
            entry.palette_label,
            is_focused && app.state.palette_index == index,
            held_type == Some(entry.field_type),
        );
    }
}
