//! Rectangle math shared by the store, the frame controller, and the marquee
//! selection gesture. Window geometry may drift partially or fully outside
//! the viewport, so origins are signed while sizes stay unsigned.

use ratatui::layout::Rect;

/// A point in viewport cells. Negative coordinates are legal: they describe
/// positions above/left of the visible surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Strictly positive window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Signed-origin rectangle with unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_parts(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the rightmost column.
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the bottommost row.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlap with `other`, or `None` when the rectangles are disjoint.
    pub fn intersection(&self, other: PixelRect) -> Option<PixelRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(PixelRect::new(
            x,
            y,
            (right - x).min(u16::MAX as i32) as u16,
            (bottom - y).min(u16::MAX as i32) as u16,
        ))
    }

    /// Portion of this rectangle visible inside `bounds`, as an unsigned rect
    /// suitable for buffer drawing. `None` when nothing is visible.
    pub fn visible_in(&self, bounds: Rect) -> Option<Rect> {
        let clipped = self.intersection(rect_from_area(bounds))?;
        Some(Rect {
            x: clipped.x as u16,
            y: clipped.y as u16,
            width: clipped.width,
            height: clipped.height,
        })
    }
}

/// Convert an unsigned buffer area into the signed coordinate space.
pub const fn rect_from_area(area: Rect) -> PixelRect {
    PixelRect::new(area.x as i32, area.y as i32, area.width, area.height)
}

/// Point containment for unsigned chrome rectangles.
pub const fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Normalized bounding box of the two endpoints of a drag gesture. The
/// result is identical regardless of which corner the drag started from, and
/// has zero width/height while the pointer still shares an axis with the
/// start point.
pub fn selection_rect(start: Point, current: Point) -> PixelRect {
    PixelRect::new(
        start.x.min(current.x),
        start.y.min(current.y),
        start.x.abs_diff(current.x).min(u16::MAX as u32) as u16,
        start.y.abs_diff(current.y).min(u16::MAX as u32) as u16,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_rect_is_symmetric() {
        let a = selection_rect(Point::new(10, 10), Point::new(50, 60));
        let b = selection_rect(Point::new(50, 60), Point::new(10, 10));
        assert_eq!(a, b);
        assert_eq!(a, PixelRect::new(10, 10, 40, 50));
    }

    #[test]
    fn selection_rect_degenerate_axes() {
        let rect = selection_rect(Point::new(7, 3), Point::new(7, 3));
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);

        let rect = selection_rect(Point::new(7, 3), Point::new(7, 9));
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 6);
    }

    #[test]
    fn contains_handles_negative_origin() {
        let rect = PixelRect::new(-5, -2, 10, 4);
        assert!(rect.contains(-5, -2));
        assert!(rect.contains(4, 1));
        assert!(!rect.contains(5, 1));
        assert!(!rect.contains(-6, 0));
    }

    #[test]
    fn intersection_disjoint_is_none() {
        let a = PixelRect::new(0, 0, 5, 5);
        let b = PixelRect::new(5, 0, 5, 5);
        assert!(a.intersection(b).is_none());
    }

    #[test]
    fn visible_in_clips_offscreen_portion() {
        let bounds = Rect {
            x: 0,
            y: 1,
            width: 20,
            height: 10,
        };
        let rect = PixelRect::new(-3, 0, 10, 5);
        let visible = rect.visible_in(bounds).expect("partially visible");
        assert_eq!(visible, Rect {
            x: 0,
            y: 1,
            width: 7,
            height: 4
        });

        assert!(PixelRect::new(-30, 0, 10, 5).visible_in(bounds).is_none());
    }
}
