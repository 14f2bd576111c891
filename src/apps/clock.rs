use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use crate::registry::{AppComponent, AppContext};
use crate::ui::UiFrame;

/// Wall clock, redrawn on every render pass of the event loop.
pub struct ClockApp;

impl ClockApp {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Seconds since midnight rendered as `HH:MM:SS`.
fn format_clock(epoch_secs: u64) -> String {
    let day_secs = epoch_secs % 86_400;
    format!(
        "{:02}:{:02}:{:02}",
        day_secs / 3600,
        (day_secs % 3600) / 60,
        day_secs % 60
    )
}

impl AppComponent for ClockApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &AppContext) {
        let epoch_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        let lines = vec![
            Line::raw(""),
            Line::styled(
                format!("   {}", format_clock(epoch_secs)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw("   UTC"),
        ];
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_midnight_and_end_of_day() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(86_399), "23:59:59");
        // wraps to the next day
        assert_eq!(format_clock(86_400 + 61), "00:01:01");
    }
}
