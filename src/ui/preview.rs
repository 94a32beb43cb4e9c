//! Live preview of the form being built

use crate::app::App;
use crate::form::{self, PreviewNode};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the preview panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let nodes = form::render(app.state.document.snapshot());

    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    for node in &nodes {
        if y >= bottom {
            break;
        }
        let rect = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: node.height().min(bottom - y),
        };
        draw_node(frame, rect, node);
        y = y.saturating_add(node.height());
    }
}

fn draw_node(frame: &mut Frame, area: Rect, node: &PreviewNode) {
    match node {
        PreviewNode::Placeholder(text) => {
            let paragraph =
                Paragraph::new(text.as_str()).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(paragraph, area);
        }
        PreviewNode::TextInput { label } | PreviewNode::TextArea { label, .. } => {
            let input = Block::default()
                .title(format!(" {label} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray));
            frame.render_widget(input, area);
        }
        PreviewNode::Checkbox { label } => {
            frame.render_widget(Paragraph::new(format!("☐ {label}")), area);
        }
        PreviewNode::RadioGroup { label, options } => {
            let lines: Vec<Line> = std::iter::once(Line::from(label.as_str()))
                .chain(options.iter().map(|option| Line::from(format!("  ◯ {option}"))))
                .collect();
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}
