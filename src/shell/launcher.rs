//! Launcher: a spotlight-style overlay menu listing every registered
//! application. Keyboard-driven (Up/Down/Enter/Escape) with mouse support.

use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::rect_contains;
use crate::theme::{self, Theme};
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

#[derive(Debug, Clone, Copy)]
struct ItemHit {
    index: usize,
    rect: Rect,
}

#[derive(Debug, Default)]
pub struct Launcher {
    open: bool,
    selected: usize,
    bounds: Option<Rect>,
    item_hits: Vec<ItemHit>,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.bounds = None;
        self.item_hits.clear();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the highlight, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize, item_count: usize) {
        if item_count == 0 {
            return;
        }
        let count = item_count as isize;
        let next = (self.selected as isize + delta).rem_euclid(count);
        self.selected = next as usize;
    }

    pub fn begin_frame(&mut self) {
        self.bounds = None;
        self.item_hits.clear();
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, bounds: Rect, items: &[&str], theme: Theme) {
        if !self.open || items.is_empty() {
            return;
        }
        self.selected = self.selected.min(items.len() - 1);

        let label_width = items
            .iter()
            .map(|item| item.chars().count() as u16)
            .max()
            .unwrap_or(1);
        let width = label_width.saturating_add(6).min(bounds.width.max(1));
        let height = (items.len() as u16)
            .saturating_add(2)
            .min(bounds.height.max(1));
        let x = bounds.x + bounds.width.saturating_sub(width) / 2;
        let y = bounds.y + bounds.height.saturating_sub(height) / 3;
        let menu = Rect {
            x,
            y,
            width,
            height,
        };
        self.bounds = Some(menu);

        // Dim everything behind the menu so it reads as modal.
        let buffer = frame.buffer_mut();
        let clip = bounds.intersection(buffer.area);
        for yy in clip.y..clip.y.saturating_add(clip.height) {
            for xx in clip.x..clip.x.saturating_add(clip.width) {
                if rect_contains(menu, xx, yy) {
                    continue;
                }
                if let Some(cell) = buffer.cell_mut((xx, yy)) {
                    cell.set_style(cell.style().add_modifier(Modifier::DIM));
                }
            }
        }

        let menu_style = Style::default()
            .bg(theme::menu_bg(theme))
            .fg(theme::menu_fg(theme));
        let selected_style = Style::default()
            .bg(theme::menu_selected_bg(theme))
            .fg(theme::menu_selected_fg(theme))
            .add_modifier(Modifier::BOLD);
        let menu_clip = menu.intersection(buffer.area);
        for yy in menu_clip.y..menu_clip.y.saturating_add(menu_clip.height) {
            for xx in menu_clip.x..menu_clip.x.saturating_add(menu_clip.width) {
                if let Some(cell) = buffer.cell_mut((xx, yy)) {
                    cell.reset();
                    cell.set_symbol(" ");
                    cell.set_style(menu_style);
                }
            }
        }

        let inner_x = menu.x.saturating_add(1);
        let inner_width = menu.width.saturating_sub(2).max(1);
        for (index, item) in items.iter().enumerate() {
            let yy = menu.y.saturating_add(index as u16 + 1);
            if yy.saturating_add(1) >= menu.y.saturating_add(menu.height) {
                break;
            }
            let marker = if index == self.selected { ">" } else { " " };
            let line = format!("{marker} {item}");
            let text = truncate_to_width(&line, inner_width as usize);
            let style = if index == self.selected {
                selected_style
            } else {
                menu_style
            };
            safe_set_string(buffer, menu_clip, inner_x, yy, &text, style);
            self.item_hits.push(ItemHit {
                index,
                rect: Rect {
                    x: menu.x,
                    y: yy,
                    width: menu.width,
                    height: 1,
                },
            });
        }
    }

    pub fn contains_point(&self, column: u16, row: u16) -> bool {
        self.bounds
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    /// The menu item under a pointer-down, if any.
    pub fn hit_test_item(&self, event: &Event) -> Option<usize> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return None;
        }
        self.item_hits
            .iter()
            .find(|hit| rect_contains(hit.rect, mouse.column, mouse.row))
            .map(|hit| hit.index)
    }
}
