//! Serialized document panel

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the document as pretty-printed JSON
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.state.document.to_json_pretty() {
        Ok(json) => (json, Style::default().fg(Color::Gray)),
        Err(err) => (err.to_string(), Style::default().fg(Color::Red)),
    };

    let block = Block::default()
        .title(" JSON (y:copy  p:hide) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // The document may have shrunk since the panel was scrolled
    let last_line = u16::try_from(text.lines().count().saturating_sub(1)).unwrap_or(u16::MAX);
    let scroll = app.state.json_scroll.min(last_line);

    frame.render_widget(
        Paragraph::new(text)
            .style(style)
            .block(block)
            .scroll((scroll, 0)),
        area,
    );
}
