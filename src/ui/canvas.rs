//! Canvas: the ordered fields of the document

use crate::app::App;
use crate::form::{self, DragPayload};
use crate::state::{BuilderLayout, Focus};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown on an empty canvas
const EMPTY_CANVAS_TEXT: &str = "ここに部品をドラッグ＆ドロップしてください";

/// Draw the canvas panel
pub fn draw(frame: &mut Frame, layout: &BuilderLayout, app: &App) {
    let state = &app.state;
    let fields = state.document.snapshot();
    let is_focused = state.focus == Focus::Canvas;

    let (held_id, palette_drag) = match state.drag.payload() {
        Some(DragPayload::Canvas { id, .. }) => (Some(*id), false),
        Some(DragPayload::Palette { .. }) => (None, true),
        None => (None, false),
    };

    // Highlight the drop target while a palette item is held
    let border_style = if palette_drag {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" Canvas ({}) ", fields.len()))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(block, layout.canvas);

    if state.document.is_empty() {
        let inner = layout.canvas_inner();
        let hint = Paragraph::new(EMPTY_CANVAS_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    for (index, field) in fields.iter().enumerate().skip(state.canvas_scroll) {
        let Some(rect) = layout.canvas_item_rect(index, state.canvas_scroll) else {
            break;
        };

        let is_held = held_id == Some(field.id);
        let is_selected = is_focused && state.canvas_index == index;
        let is_drop_hint = palette_drag && state.drop_hint == Some(index);

        let item_style = if is_held {
            Style::default().fg(Color::Yellow)
        } else if is_selected || is_drop_hint {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let summary = form::canvas_summary(field);
        let lines = vec![
            Line::from(Span::styled(
                field.label().to_string(),
                item_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(summary, Style::default().fg(Color::Gray))),
        ];

        let mut item_block = Block::default()
            .borders(Borders::ALL)
            .border_style(item_style);
        if is_held {
            item_block = item_block.title(" moving ");
        }

        frame.render_widget(Paragraph::new(lines).block(item_block), rect);
    }
}
