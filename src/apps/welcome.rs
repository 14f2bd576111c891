use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;

use crate::registry::{AppComponent, AppContext};
use crate::ui::UiFrame;

const WELCOME_TEXT: &str = indoc! {"
    Welcome to term-desk.

    Drag windows by their title bar, resize them by their
    borders and corners, and stack them however you like.

    The top-left menu opens the launcher. Click the empty
    desktop and drag to sweep out a selection box.
"};

pub struct WelcomeApp;

impl WelcomeApp {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WelcomeApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppComponent for WelcomeApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &AppContext) {
        frame.render_widget(Paragraph::new(Text::raw(WELCOME_TEXT)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn renders_greeting_text() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 60,
            height: 10,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        WelcomeApp::new().render(&mut frame, area, &AppContext::default());
        let row: String = (0..area.width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(row.contains("Welcome"));
    }
}
