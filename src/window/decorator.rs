//! Window frame chrome: borders, title row, and the minimize / maximize /
//! close buttons. Rendering writes cells directly so frames that hang
//! partially outside the viewport draw only their visible portion, and
//! hit-testing is a pure function of the frame rectangle so the controller
//! and the renderer can never disagree about where a button lives.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::Window;
use super::frame::ResizeEdge;
use crate::geometry::{PixelRect, rect_from_area};
use crate::theme::{self, Theme};
use crate::ui::UiFrame;

/// What a pointer-down on a window frame means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// Title-bar surface: start a move drag.
    Drag,
    Minimize,
    Maximize,
    Close,
    /// Border or corner cell: start a resize drag.
    Resize(ResizeEdge),
    /// Content area: the click belongs to the embedded application.
    Body,
}

const BUTTONS: [(&str, HeaderAction); 3] = [
    ("[-]", HeaderAction::Minimize),
    ("[□]", HeaderAction::Maximize),
    ("[×]", HeaderAction::Close),
];
const BUTTON_WIDTH: i32 = 3;

/// Interior rectangle available to the embedded application: inside the
/// borders, below the title row.
pub fn content_rect(rect: PixelRect) -> PixelRect {
    PixelRect::new(
        rect.x + 1,
        rect.y + 2,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(3),
    )
}

/// Row holding the title text and the header buttons.
fn title_row(rect: PixelRect) -> i32 {
    rect.y + 1
}

/// Leftmost column of the button strip on the title row.
fn buttons_start(rect: PixelRect) -> i32 {
    rect.right() - 1 - BUTTON_WIDTH * BUTTONS.len() as i32
}

/// Classify a pointer position inside the frame rectangle. Callers guarantee
/// containment; anything unrecognized is the content area.
pub fn hit_test(rect: PixelRect, x: i32, y: i32) -> HeaderAction {
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let on_left = x == rect.x;
    let on_right = x == right;
    let on_top = y == rect.y;
    let on_bottom = y == bottom;

    if on_top || on_bottom || on_left || on_right {
        let edge = match (on_top, on_bottom, on_left, on_right) {
            (true, _, true, _) => ResizeEdge::TopLeft,
            (true, _, _, true) => ResizeEdge::TopRight,
            (_, true, true, _) => ResizeEdge::BottomLeft,
            (_, true, _, true) => ResizeEdge::BottomRight,
            (true, ..) => ResizeEdge::Top,
            (_, true, ..) => ResizeEdge::Bottom,
            (_, _, true, _) => ResizeEdge::Left,
            _ => ResizeEdge::Right,
        };
        return HeaderAction::Resize(edge);
    }

    if y == title_row(rect) {
        let start = buttons_start(rect);
        if x >= start && x < start + BUTTON_WIDTH * BUTTONS.len() as i32 {
            let index = ((x - start) / BUTTON_WIDTH) as usize;
            return BUTTONS[index].1;
        }
        return HeaderAction::Drag;
    }

    HeaderAction::Body
}

/// Draw the frame chrome for one window, clipped to `bounds`. The content
/// area is cleared here too so the embedded application starts from a blank
/// surface.
pub fn render_frame(
    frame: &mut UiFrame<'_>,
    window: &Window,
    bounds: Rect,
    theme: Theme,
    focused: bool,
) {
    let rect = window.frame_rect();
    let Some(_visible) = rect.visible_in(bounds) else {
        return;
    };
    let clip = rect_from_area(bounds);

    let border_style = Style::default()
        .fg(theme::border_fg(theme, focused))
        .bg(theme::window_bg(theme));
    let mut header_style = Style::default()
        .fg(theme::header_fg(theme, focused))
        .bg(theme::header_bg(theme, focused));
    if focused {
        header_style = header_style.add_modifier(Modifier::BOLD);
    }
    let body_style = Style::default().bg(theme::window_bg(theme));

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let header_y = title_row(rect);
    let buffer = frame.buffer_mut();

    let mut put = |x: i32, y: i32, symbol: &str, style: Style| {
        if clip.contains(x, y)
            && let Some(cell) = buffer.cell_mut((x as u16, y as u16))
        {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    };

    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if y == rect.y {
                let symbol = if x == rect.x {
                    "┌"
                } else if x == right {
                    "┐"
                } else {
                    "─"
                };
                put(x, y, symbol, border_style);
            } else if y == bottom {
                let symbol = if x == rect.x {
                    "└"
                } else if x == right {
                    "┘"
                } else {
                    "─"
                };
                put(x, y, symbol, border_style);
            } else if x == rect.x || x == right {
                put(x, y, "│", border_style);
            } else if y == header_y {
                put(x, y, " ", header_style);
            } else {
                put(x, y, " ", body_style);
            }
        }
    }

    // Title text, truncated before the button strip.
    let text_start = rect.x + 2;
    let text_end = buttons_start(rect) - 1;
    for (offset, ch) in window.title().chars().enumerate() {
        let x = text_start + offset as i32;
        if x >= text_end {
            break;
        }
        put(x, header_y, &ch.to_string(), header_style);
    }

    // Button strip.
    let mut x = buttons_start(rect);
    for (label, _) in BUTTONS {
        for ch in label.chars() {
            put(x, header_y, &ch.to_string(), header_style);
            x += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> PixelRect {
        PixelRect::new(10, 5, 30, 10)
    }

    #[test]
    fn hit_test_borders_resolve_to_resize_edges() {
        let r = rect();
        assert_eq!(hit_test(r, 10, 5), HeaderAction::Resize(ResizeEdge::TopLeft));
        assert_eq!(
            hit_test(r, 39, 14),
            HeaderAction::Resize(ResizeEdge::BottomRight)
        );
        assert_eq!(hit_test(r, 20, 5), HeaderAction::Resize(ResizeEdge::Top));
        assert_eq!(hit_test(r, 10, 9), HeaderAction::Resize(ResizeEdge::Left));
        assert_eq!(hit_test(r, 39, 9), HeaderAction::Resize(ResizeEdge::Right));
        assert_eq!(hit_test(r, 20, 14), HeaderAction::Resize(ResizeEdge::Bottom));
    }

    #[test]
    fn hit_test_title_row_splits_drag_and_buttons() {
        let r = rect();
        assert_eq!(hit_test(r, 12, 6), HeaderAction::Drag);
        let start = buttons_start(r);
        assert_eq!(hit_test(r, start, 6), HeaderAction::Minimize);
        assert_eq!(hit_test(r, start + 3, 6), HeaderAction::Maximize);
        assert_eq!(hit_test(r, start + 6, 6), HeaderAction::Close);
        assert_eq!(hit_test(r, start + 8, 6), HeaderAction::Close);
    }

    #[test]
    fn hit_test_interior_is_body() {
        let r = rect();
        assert_eq!(hit_test(r, 20, 10), HeaderAction::Body);
    }

    #[test]
    fn content_rect_is_inset_from_chrome() {
        let inner = content_rect(rect());
        assert_eq!(inner, PixelRect::new(11, 7, 28, 7));
    }
}
