//! Status bar

use crate::app::App;
use crate::form::{DragPayload, GestureState};
use crate::state::Focus;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.focus.label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    // Transient feedback (copy result, added field, quit prompt)
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " q/^C^C:quit ";
    let width = quit_hint.len() as u16;
    if area.width > width {
        let quit_area = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: 1,
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Keyboard hints for the focused panel
fn get_hints(app: &App) -> &'static str {
    match app.state.drag.state() {
        GestureState::Dragging(DragPayload::Palette { .. }) => {
            return "release over canvas:add  Esc:cancel";
        }
        GestureState::Dragging(DragPayload::Canvas { .. }) => {
            return "hover:reorder  release:place";
        }
        GestureState::Idle => {}
    }
    match app.state.focus {
        Focus::Palette => "j/k:nav  Enter:add  Tab:panel  y:copy JSON  s:save  p:JSON panel",
        Focus::Canvas => "j/k:nav  J/K:move  Enter/e:edit  Tab:panel  y:copy JSON",
        Focus::Editor => "type to edit  Tab:next field  Esc:close",
    }
}
