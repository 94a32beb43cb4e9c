//! Property editor rendering

mod field_renderer;

use crate::state::{Form, PropertyEditor};
use field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows taken by one bordered field
const FIELD_HEIGHT: u16 = 3;

/// Draw the property editor for the selected canvas field
pub fn draw_property_editor(
    frame: &mut Frame,
    area: Rect,
    editor: &PropertyEditor,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(" Properties (Tab:next  Esc:close) ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); editor.field_count()];
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field_area) in chunks.iter().enumerate().take(editor.field_count()) {
        if let Some(field) = editor.get_field(index) {
            let is_active = is_focused && editor.active_field() == index;
            draw_field(frame, *field_area, field, is_active);
        }
    }
}
