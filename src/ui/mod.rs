//! UI module for rendering the TUI

mod canvas;
mod components;
mod forms;
mod json_view;
mod layout;
mod palette;
mod preview;

use crate::app::App;
use crate::state::{BuilderLayout, Focus};
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let builder = BuilderLayout::new(
        frame.area(),
        app.state.palette_width,
        app.state.show_json,
        app.state.editor.is_some(),
    );

    palette::draw(frame, &builder, app);
    canvas::draw(frame, &builder, app);

    if let (Some(area), Some(editor)) = (builder.editor, app.state.editor.as_ref()) {
        forms::draw_property_editor(frame, area, editor, app.state.focus == Focus::Editor);
    }

    preview::draw(frame, builder.preview, app);
    if let Some(area) = builder.json {
        json_view::draw(frame, area, app);
    }

    layout::draw_status_bar(frame, builder.status_bar, app);

    // Error dialog overlays everything else
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::config::TuiConfig;
    use crate::form::FieldType;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();

        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol())
                    .collect::<String>()
                    + "\n"
            })
            .collect()
    }

    fn test_app() -> App {
        let mut app = App::new(&TuiConfig::default(), Box::new(MockClipboard::new()));
        app.terminal_size = Some((40, 120));
        app
    }

    #[test]
    fn test_empty_builder_shows_placeholders() {
        let app = test_app();
        let screen = render(&app);

        assert!(screen.contains("Fields"));
        assert!(screen.contains("Canvas (0)"));
        // Wide characters leave padding cells behind
        assert!(screen
            .replace(' ', "")
            .contains("ここに部品をドラッグ＆ドロップしてください"));
        assert!(screen.contains("Preview"));
        assert!(screen.contains("JSON"));
    }

    #[test]
    fn test_inserted_field_appears_in_json_panel() {
        let mut app = test_app();
        app.state
            .document
            .insert(FieldType::Checkbox, "チェックボックス", None)
            .unwrap();

        let screen = render(&app);
        assert!(screen.contains("Canvas (1)"));
        assert!(screen.contains("CHECKBOX"));
    }

    #[test]
    fn test_error_dialog_is_drawn() {
        let mut app = test_app();
        app.state.push_error("clipboard unavailable".to_string());

        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("clipboard unavailable"));
    }

    #[test]
    fn test_hidden_json_panel_is_not_drawn() {
        let mut app = test_app();
        app.state.show_json = false;

        let screen = render(&app);
        assert!(!screen.contains("JSON ("));
    }
}
