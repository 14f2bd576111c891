//! Top bar: launcher button, focused window title, theme toggle, and host
//! info.

use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::rect_contains;
use crate::theme::{self, Theme};
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

#[derive(Debug, Default)]
pub struct TopBar {
    launcher_rect: Option<Rect>,
    theme_rect: Option<Rect>,
    hostname: Option<String>,
}

impl TopBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.launcher_rect = None;
        self.theme_rect = None;
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        theme: Theme,
        focused_title: Option<&str>,
        launcher_open: bool,
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

        const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
        let menu_label = format!("≡ {CRATE_NAME}");
        let menu_width = menu_label.chars().count() as u16;
        if x.saturating_add(menu_width) <= max_x {
            let menu_style = if launcher_open {
                Style::default()
                    .bg(theme::menu_selected_bg(theme))
                    .fg(theme::menu_selected_fg(theme))
            } else {
                base
            };
            safe_set_string(buffer, bounds, x, y, &menu_label, menu_style);
            self.launcher_rect = Some(Rect {
                x,
                y,
                width: menu_width,
                height: 1,
            });
            x = x.saturating_add(menu_width).saturating_add(2);
        }

        if let Some(title) = focused_title
            && x < max_x
        {
            let text = truncate_to_width(title, max_x.saturating_sub(x).saturating_sub(1) as usize);
            safe_set_string(
                buffer,
                bounds,
                x,
                y,
                &text,
                base.add_modifier(Modifier::BOLD),
            );
        }

        // Right side: theme toggle, then host info.
        let theme_chunk = format!("[ {} ]", theme.label());
        let host = self.hostname_label();
        let host_width = host.chars().count() as u16;
        let theme_width = theme_chunk.chars().count() as u16;
        let total = theme_width.saturating_add(1).saturating_add(host_width);
        if total < area.width {
            let mut cursor = max_x.saturating_sub(total);
            safe_set_string(buffer, bounds, cursor, y, &theme_chunk, base);
            self.theme_rect = Some(Rect {
                x: cursor,
                y,
                width: theme_width,
                height: 1,
            });
            cursor = cursor.saturating_add(theme_width).saturating_add(1);
            safe_set_string(
                buffer,
                bounds,
                cursor,
                y,
                &host,
                base.add_modifier(Modifier::DIM),
            );
        }
    }

    fn hostname_label(&mut self) -> String {
        // Cache the hostname so we don't issue a system call every frame.
        if let Some(host) = &self.hostname {
            return host.clone();
        }
        let host = hostname::get()
            .ok()
            .and_then(|value| value.into_string().ok())
            .unwrap_or_else(|| "unknown-host".to_string());
        let label = format!("{host} · {}", std::env::consts::OS);
        self.hostname = Some(label.clone());
        label
    }

    pub fn hit_test_launcher(&self, event: &Event) -> bool {
        hit(self.launcher_rect, event)
    }

    pub fn hit_test_theme(&self, event: &Event) -> bool {
        hit(self.theme_rect, event)
    }
}

fn hit(rect: Option<Rect>, event: &Event) -> bool {
    let Event::Mouse(mouse) = event else {
        return false;
    };
    if !matches!(mouse.kind, MouseEventKind::Down(_)) {
        return false;
    }
    rect.is_some_and(|rect| rect_contains(rect, mouse.column, mouse.row))
}
