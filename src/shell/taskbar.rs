//! Taskbar: one chunk per window in creation order, minimized windows
//! included so they can be restored from here.

use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::rect_contains;
use crate::theme::{self, Theme};
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};
use crate::window::{Window, WindowId};

#[derive(Debug, Clone, Copy)]
struct TaskbarHit {
    id: WindowId,
    rect: Rect,
}

#[derive(Debug, Default)]
pub struct Taskbar {
    hits: Vec<TaskbarHit>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.hits.clear();
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        windows: &[&Window],
        focused: Option<WindowId>,
        theme: Theme,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let base = Style::default()
            .bg(theme::panel_bg(theme))
            .fg(theme::panel_fg(theme));
        for x in bounds.x..bounds.x.saturating_add(bounds.width) {
            if let Some(cell) = buffer.cell_mut((x, area.y)) {
                cell.set_symbol(" ");
                cell.set_style(base);
            }
        }

        let mut x = area.x;
        let y = area.y;
        let max_x = area.x.saturating_add(area.width);
        for window in windows {
            let mut label = window.title().to_string();
            let max_label = max_x.saturating_sub(x).saturating_sub(2) as usize;
            if label.chars().count() > max_label {
                label = truncate_to_width(&label, max_label);
            }
            let chunk = format!(" {label} ");
            let chunk_width = chunk.chars().count() as u16;
            if x.saturating_add(chunk_width) > max_x {
                break;
            }
            let style = if Some(window.id()) == focused {
                Style::default()
                    .bg(theme::menu_selected_bg(theme))
                    .fg(theme::menu_selected_fg(theme))
                    .add_modifier(Modifier::BOLD)
            } else if window.minimized() {
                base.fg(theme::panel_inactive_fg(theme))
                    .add_modifier(Modifier::DIM)
            } else {
                base
            };
            safe_set_string(buffer, bounds, x, y, &chunk, style);
            self.hits.push(TaskbarHit {
                id: window.id(),
                rect: Rect {
                    x,
                    y,
                    width: chunk_width,
                    height: 1,
                },
            });
            x = x.saturating_add(chunk_width);
        }
    }

    /// The window chunk under a pointer-down, if any.
    pub fn hit_test(&self, event: &Event) -> Option<WindowId> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return None;
        }
        self.hits
            .iter()
            .find(|hit| rect_contains(hit.rect, mouse.column, mouse.row))
            .map(|hit| hit.id)
    }
}
