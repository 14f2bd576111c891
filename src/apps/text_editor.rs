use crossterm::event::{Event, KeyCode};
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use crate::registry::{AppComponent, AppContext};
use crate::ui::UiFrame;

/// A line-oriented scratchpad. Nothing is persisted; the buffer lives and
/// dies with the window.
pub struct TextEditorApp {
    lines: Vec<String>,
}

impl TextEditorApp {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    fn current_line(&mut self) -> &mut String {
        // invariant: `lines` is never empty
        self.lines.last_mut().expect("editor buffer has a line")
    }
}

impl Default for TextEditorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppComponent for TextEditorApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &AppContext) {
        // show the tail of the buffer when it outgrows the window
        let visible = area.height as usize;
        let skip = self.lines.len().saturating_sub(visible);
        let mut lines: Vec<Line> = self
            .lines
            .iter()
            .skip(skip)
            .map(|line| Line::raw(line.clone()))
            .collect();
        if ctx.focused
            && let Some(last) = lines.last_mut()
        {
            last.push_span("▏");
        }
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &AppContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        match key.code {
            KeyCode::Char(ch) => {
                self.current_line().push(ch);
                true
            }
            KeyCode::Enter => {
                self.lines.push(String::new());
                true
            }
            KeyCode::Backspace => {
                if self.current_line().pop().is_none() && self.lines.len() > 1 {
                    self.lines.pop();
                }
                true
            }
            KeyCode::Tab => {
                self.current_line().push_str("    ");
                true
            }
            _ => false,
        }
    }
}
