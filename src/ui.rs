//! `UiFrame`: a thin wrapper around `ratatui::Frame` that clamps drawing to
//! the visible area.
//!
//! Window geometry routinely drifts partially outside the terminal buffer.
//! Writing out-of-bounds into the underlying `Buffer` can panic or corrupt
//! rendering, so all drawing goes through this type and the clipped string
//! helpers below instead of touching the buffer directly.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer. Powers tests
    /// that render into an offscreen buffer.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        let clipped = area.intersection(self.area);
        if clipped.width > 0 && clipped.height > 0 {
            widget.render(clipped, self.buffer);
        }
    }

    /// Apply `style` to every cell of `area` that lies within the frame.
    pub fn fill(&mut self, area: Rect, symbol: &str, style: Style) {
        let clipped = area.intersection(self.area);
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(symbol);
                    cell.set_style(style);
                }
            }
        }
    }

    /// Tint the background of every cell of `area` within the frame, keeping
    /// symbols and foreground intact.
    pub fn tint_bg(&mut self, area: Rect, bg: ratatui::style::Color) {
        let clipped = area.intersection(self.area);
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    let mut style = cell.style();
                    style.bg = Some(bg);
                    cell.set_style(style);
                }
            }
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let text = truncate_to_width(text, max_x.saturating_sub(x) as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}
