//! Per-window interaction: translates pointer events on a window's chrome
//! into store operations. Move and resize drags are the only stateful
//! gestures; each lives in an `Option` that is taken on every termination
//! path so no gesture can outlive its trigger.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::decorator::{self, HeaderAction};
use super::{DesktopStore, WindowId};
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::geometry::{PixelRect, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    const fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    const fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    const fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    const fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct MoveDrag {
    id: WindowId,
    start_pointer: Point,
    start_origin: Point,
}

#[derive(Debug, Clone, Copy)]
struct ResizeDrag {
    id: WindowId,
    edge: ResizeEdge,
    start_pointer: Point,
    start_rect: PixelRect,
}

/// How a consumed pointer event should be followed up by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHit {
    /// The event operated on window chrome; nothing else to do.
    Chrome,
    /// The event landed on a window's content area (after focusing it); the
    /// shell forwards it to the embedded application.
    Body(WindowId),
}

#[derive(Debug, Default)]
pub struct FrameController {
    move_drag: Option<MoveDrag>,
    resize_drag: Option<ResizeDrag>,
}

impl FrameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture_active(&self) -> bool {
        self.move_drag.is_some() || self.resize_drag.is_some()
    }

    /// Abandon any in-progress drag. Geometry already applied by earlier
    /// synchronous moves is kept; nothing rolls back.
    pub fn cancel(&mut self) {
        self.move_drag = None;
        self.resize_drag = None;
    }

    /// Route a pointer event against the window surface. Returns `None` when
    /// the event did not touch any window, so the shell can fall through to
    /// the selection gesture.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, store: &mut DesktopStore) -> Option<FrameHit> {
        let x = mouse.column as i32;
        let y = mouse.row as i32;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_down(x, y, store),
            MouseEventKind::Drag(MouseButton::Left) => self.on_drag(x, y, store),
            MouseEventKind::Up(_) => {
                if self.gesture_active() {
                    self.cancel();
                    Some(FrameHit::Chrome)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn on_down(&mut self, x: i32, y: i32, store: &mut DesktopStore) -> Option<FrameHit> {
        let id = store.window_at(x, y)?;
        // Focus-follows-click: any press on a window raises it, even when the
        // press begins a drag.
        store.focus_window(id);
        let window = store.window(id)?;
        let rect = window.frame_rect();
        let maximized = window.maximized();
        match decorator::hit_test(rect, x, y) {
            HeaderAction::Minimize => {
                store.set_minimized(id, true);
                Some(FrameHit::Chrome)
            }
            HeaderAction::Maximize => {
                store.set_maximized(id, !maximized);
                Some(FrameHit::Chrome)
            }
            HeaderAction::Close => {
                store.close_window(id);
                Some(FrameHit::Chrome)
            }
            HeaderAction::Drag => {
                // Maximized frames don't move; restore first.
                if !maximized {
                    self.move_drag = Some(MoveDrag {
                        id,
                        start_pointer: Point::new(x, y),
                        start_origin: rect.position(),
                    });
                }
                Some(FrameHit::Chrome)
            }
            HeaderAction::Resize(edge) => {
                if !maximized {
                    self.resize_drag = Some(ResizeDrag {
                        id,
                        edge,
                        start_pointer: Point::new(x, y),
                        start_rect: rect,
                    });
                }
                Some(FrameHit::Chrome)
            }
            HeaderAction::Body => Some(FrameHit::Body(id)),
        }
    }

    fn on_drag(&mut self, x: i32, y: i32, store: &mut DesktopStore) -> Option<FrameHit> {
        if let Some(drag) = self.move_drag {
            // A window closed externally mid-gesture ends the drag silently.
            if store.window(drag.id).is_none() {
                self.move_drag = None;
                return Some(FrameHit::Chrome);
            }
            let position =
                move_drag_position(drag.start_origin, drag.start_pointer, Point::new(x, y));
            store.move_window(drag.id, position);
            return Some(FrameHit::Chrome);
        }
        if let Some(drag) = self.resize_drag {
            if store.window(drag.id).is_none() {
                self.resize_drag = None;
                return Some(FrameHit::Chrome);
            }
            let rect = resize_drag_rect(
                drag.start_rect,
                drag.edge,
                x - drag.start_pointer.x,
                y - drag.start_pointer.y,
            );
            store.move_window(drag.id, rect.position());
            store.resize_window(drag.id, rect.size());
            return Some(FrameHit::Chrome);
        }
        None
    }
}

/// Pure move arithmetic: the window travels by the pointer's delta, not to
/// the pointer's absolute position.
pub fn move_drag_position(start_origin: Point, start_pointer: Point, pointer: Point) -> Point {
    Point::new(
        start_origin.x + (pointer.x - start_pointer.x),
        start_origin.y + (pointer.y - start_pointer.y),
    )
}

/// Pure resize arithmetic: apply the pointer delta to the grabbed edge while
/// the opposite edge stays fixed. Saturates at the minimum floor, shifting a
/// left/top anchor back so the fixed edge really does not move.
pub fn resize_drag_rect(start: PixelRect, edge: ResizeEdge, dx: i32, dy: i32) -> PixelRect {
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width as i32;
    let mut height = start.height as i32;

    if edge.moves_left() {
        x += dx;
        width -= dx;
    } else if edge.moves_right() {
        width += dx;
    }
    if edge.moves_top() {
        y += dy;
        height -= dy;
    } else if edge.moves_bottom() {
        height += dy;
    }

    let min_w = MIN_WINDOW_WIDTH as i32;
    let min_h = MIN_WINDOW_HEIGHT as i32;
    if width < min_w {
        if edge.moves_left() {
            x -= min_w - width;
        }
        width = min_w;
    }
    if height < min_h {
        if edge.moves_top() {
            y -= min_h - height;
        }
        height = min_h;
    }

    PixelRect::from_parts(
        Point::new(x, y),
        Size::new(
            width.min(u16::MAX as i32) as u16,
            height.min(u16::MAX as i32) as u16,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::ShellSettings;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn store_with_window(rect: PixelRect) -> (DesktopStore, WindowId) {
        let mut store = DesktopStore::new(ShellSettings::default());
        store.apply_work_area(PixelRect::new(0, 1, 120, 38));
        let id = store.open_window("A", "A", Some(rect));
        (store, id)
    }

    #[test]
    fn move_is_relative_to_pointer_delta() {
        assert_eq!(
            move_drag_position(Point::new(20, 20), Point::new(100, 100), Point::new(140, 130)),
            Point::new(60, 50)
        );
    }

    #[test]
    fn title_drag_moves_window_by_delta() {
        let (mut store, id) = store_with_window(PixelRect::new(20, 20, 40, 10));
        let mut frames = FrameController::new();
        // title row sits one below the frame top
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 30, 21);
        assert_eq!(frames.handle_mouse(&down, &mut store), Some(FrameHit::Chrome));
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 70, 51);
        frames.handle_mouse(&drag, &mut store);
        assert_eq!(store.window(id).unwrap().position(), Point::new(60, 50));
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 70, 51);
        frames.handle_mouse(&up, &mut store);
        assert!(!frames.gesture_active());
    }

    #[test]
    fn drag_survives_pointer_leaving_the_window() {
        let (mut store, id) = store_with_window(PixelRect::new(5, 5, 40, 10));
        let mut frames = FrameController::new();
        frames.handle_mouse(
            &mouse(MouseEventKind::Down(MouseButton::Left), 10, 6),
            &mut store,
        );
        // pointer far outside the original frame; window keeps following
        frames.handle_mouse(
            &mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0),
            &mut store,
        );
        assert_eq!(store.window(id).unwrap().position(), Point::new(-5, -1));
    }

    #[test]
    fn closing_mid_drag_ends_the_gesture_silently() {
        let (mut store, id) = store_with_window(PixelRect::new(5, 5, 40, 10));
        let mut frames = FrameController::new();
        frames.handle_mouse(
            &mouse(MouseEventKind::Down(MouseButton::Left), 10, 6),
            &mut store,
        );
        assert!(frames.gesture_active());
        store.close_window(id);
        frames.handle_mouse(
            &mouse(MouseEventKind::Drag(MouseButton::Left), 50, 30),
            &mut store,
        );
        assert!(!frames.gesture_active());
    }

    #[test]
    fn resize_right_grows_and_floors() {
        let start = PixelRect::new(10, 10, 30, 10);
        let grown = resize_drag_rect(start, ResizeEdge::Right, 15, 0);
        assert_eq!(grown, PixelRect::new(10, 10, 45, 10));
        let floored = resize_drag_rect(start, ResizeEdge::Right, -100, 0);
        assert_eq!(floored.width, MIN_WINDOW_WIDTH);
        assert_eq!(floored.x, 10);
    }

    #[test]
    fn resize_left_anchor_compensates_at_floor() {
        let start = PixelRect::new(10, 10, 30, 10);
        let shrunk = resize_drag_rect(start, ResizeEdge::Left, 100, 0);
        // right edge must stay fixed at 40
        assert_eq!(shrunk.width, MIN_WINDOW_WIDTH);
        assert_eq!(shrunk.right(), start.right());
    }

    #[test]
    fn resize_top_left_moves_origin() {
        let start = PixelRect::new(10, 10, 30, 10);
        let grown = resize_drag_rect(start, ResizeEdge::TopLeft, -4, -3);
        assert_eq!(grown, PixelRect::new(6, 7, 34, 13));
    }

    #[test]
    fn header_buttons_dispatch_store_calls() {
        let (mut store, id) = store_with_window(PixelRect::new(10, 5, 30, 10));
        let mut frames = FrameController::new();
        // minimize button is the leftmost of the 9-cell strip ending one
        // column inside the right border
        let buttons_start = (10 + 30 - 1 - 9) as u16;
        frames.handle_mouse(
            &mouse(MouseEventKind::Down(MouseButton::Left), buttons_start, 6),
            &mut store,
        );
        assert!(store.window(id).unwrap().minimized());
        store.set_minimized(id, false);
        frames.handle_mouse(
            &mouse(MouseEventKind::Down(MouseButton::Left), buttons_start + 3, 6),
            &mut store,
        );
        assert!(store.window(id).unwrap().maximized());
        // the maximized frame fills the work area; its buttons moved with it
        let max_rect = store.window(id).unwrap().frame_rect();
        frames.handle_mouse(
            &mouse(
                MouseEventKind::Down(MouseButton::Left),
                (max_rect.right() - 1 - 9 + 3) as u16,
                (max_rect.y + 1) as u16,
            ),
            &mut store,
        );
        assert!(!store.window(id).unwrap().maximized());
        frames.handle_mouse(
            &mouse(MouseEventKind::Down(MouseButton::Left), buttons_start + 6, 6),
            &mut store,
        );
        assert!(store.window(id).is_none());
    }

    #[test]
    fn body_press_focuses_and_reports_body_hit() {
        let (mut store, a) = store_with_window(PixelRect::new(10, 5, 30, 10));
        let b = store.open_window("B", "B", Some(PixelRect::new(10, 5, 30, 10)));
        assert_eq!(store.focused(), Some(b));
        // close B so the press lands on A
        store.close_window(b);
        let mut frames = FrameController::new();
        let hit = frames.handle_mouse(
            &mouse(MouseEventKind::Down(MouseButton::Left), 20, 10),
            &mut store,
        );
        assert_eq!(hit, Some(FrameHit::Body(a)));
        assert_eq!(store.focused(), Some(a));
    }

    #[test]
    fn maximized_window_ignores_drag_start() {
        let (mut store, id) = store_with_window(PixelRect::new(10, 5, 30, 10));
        store.set_maximized(id, true);
        let rect = store.window(id).unwrap().frame_rect();
        let mut frames = FrameController::new();
        frames.handle_mouse(
            &mouse(
                MouseEventKind::Down(MouseButton::Left),
                (rect.x + 5) as u16,
                (rect.y + 1) as u16,
            ),
            &mut store,
        );
        assert!(!frames.gesture_active());
    }
}
