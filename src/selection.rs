//! Rubber-band (marquee) selection over the bare desktop background.
//!
//! The gesture begins only when a primary-button press reaches the desktop
//! surface itself (every chrome and window branch declined the event first),
//! tracks the pointer for as long as the button is held, and ends on any
//! release, wherever it lands. The live rectangle is exposed for rendering;
//! what gets selected with it is the desktop's concern, not this module's.

use ratatui::layout::Rect;

use crate::geometry::{PixelRect, Point, selection_rect};
use crate::theme::{self, Theme};
use crate::ui::UiFrame;

#[derive(Debug, Clone, Copy)]
struct SelectionGesture {
    start: Point,
    current: Point,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    gesture: Option<SelectionGesture>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start a gesture at the press position; start and current coincide
    /// until the first move arrives.
    pub fn begin(&mut self, at: Point) {
        self.gesture = Some(SelectionGesture {
            start: at,
            current: at,
        });
    }

    /// Track the pointer. No-op while no gesture is active.
    pub fn update(&mut self, to: Point) {
        if let Some(gesture) = &mut self.gesture {
            gesture.current = to;
        }
    }

    /// Terminate the gesture. Called on release anywhere, on Escape, and on
    /// shell teardown, so the gesture can never dangle.
    pub fn end(&mut self) {
        self.gesture = None;
    }

    /// The live rectangle, or `None` while inactive or while either
    /// dimension is still zero. Suppressing degenerate rectangles avoids a
    /// visible hairline during the first instant of the gesture.
    pub fn rect(&self) -> Option<PixelRect> {
        let gesture = self.gesture?;
        let rect = selection_rect(gesture.start, gesture.current);
        (rect.width > 0 && rect.height > 0).then_some(rect)
    }

    /// Tint the covered cells as visual feedback, clipped to the desktop
    /// surface.
    pub fn render(&self, frame: &mut UiFrame<'_>, bounds: Rect, theme: Theme) {
        let Some(rect) = self.rect() else {
            return;
        };
        if let Some(visible) = rect.visible_in(bounds) {
            frame.tint_bg(visible, theme::selection_fill(theme));
        }
    }
}
