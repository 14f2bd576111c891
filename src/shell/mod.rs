//! Shell chrome: thin read/write views over the window store. Each piece
//! records only per-frame hit rectangles; authoritative window state lives
//! in the store.

pub mod launcher;
pub mod taskbar;
pub mod top_bar;

pub use launcher::Launcher;
pub use taskbar::Taskbar;
pub use top_bar::TopBar;

use ratatui::layout::Rect;

use crate::constants::{TASKBAR_HEIGHT, TOP_BAR_HEIGHT};

/// Split the viewport into the top bar, the taskbar, and the desktop surface
/// in between.
pub fn split_area(area: Rect) -> (Rect, Rect, Rect) {
    let top_h = TOP_BAR_HEIGHT.min(area.height);
    let bottom_h = TASKBAR_HEIGHT.min(area.height.saturating_sub(top_h));
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let bottom = Rect {
        x: area.x,
        y: area.y.saturating_add(area.height).saturating_sub(bottom_h),
        width: area.width,
        height: bottom_h,
    };
    let desk = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: area.height.saturating_sub(top_h).saturating_sub(bottom_h),
    };
    (top, bottom, desk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_area_reserves_chrome_rows() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (top, bottom, desk) = split_area(area);
        assert_eq!(top.height, 1);
        assert_eq!(bottom.height, 1);
        assert_eq!(desk, Rect {
            x: 0,
            y: 1,
            width: 80,
            height: 22
        });
        assert_eq!(bottom.y, 23);
    }

    #[test]
    fn split_area_survives_tiny_viewports() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 1,
        };
        let (top, bottom, desk) = split_area(area);
        assert_eq!(top.height, 1);
        assert_eq!(bottom.height, 0);
        assert_eq!(desk.height, 0);
    }
}
