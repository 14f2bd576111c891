//! The single authoritative collection of open windows plus global shell
//! settings. Every mutation is a named, synchronous operation; readers
//! observe writes immediately. Operations referencing unknown ids are silent
//! no-ops because a close can always race a pending interaction event.

use super::{Window, WindowId};
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    STAGGER_SLOTS, STAGGER_STEP_X, STAGGER_STEP_Y,
};
use crate::geometry::{PixelRect, Point, Size};
use crate::theme::Theme;

/// Global shell settings consumed by the chrome and the desktop background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellSettings {
    pub theme: Theme,
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
}

#[derive(Debug)]
pub struct DesktopStore {
    windows: Vec<Window>,
    next_window_id: u64,
    // monotonic stacking counter: assigning `next_z` always yields a new
    // maximum while leaving every other window's relative order intact
    next_z: u64,
    opened: u64,
    work_area: PixelRect,
    settings: ShellSettings,
}

impl DesktopStore {
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            windows: Vec::new(),
            next_window_id: 1,
            next_z: 1,
            opened: 0,
            work_area: PixelRect::new(0, 0, 0, 0),
            settings,
        }
    }

    /// Create a window with a fresh id and the new maximum z, so it opens on
    /// top. Windows opened without explicit geometry cascade from the
    /// work-area origin.
    pub fn open_window(
        &mut self,
        component: impl Into<String>,
        title: impl Into<String>,
        geometry: Option<PixelRect>,
    ) -> WindowId {
        let id = WindowId::new(self.next_window_id);
        self.next_window_id += 1;
        let rect = geometry.unwrap_or_else(|| self.stagger_rect());
        let z_index = self.bump_z();
        let component = component.into();
        tracing::debug!(window = %id, component = %component, "opened window");
        self.windows.push(Window {
            id,
            component,
            title: title.into(),
            position: rect.position(),
            size: clamp_size(rect.size()),
            z_index,
            minimized: false,
            maximized: false,
            restore_rect: None,
            creation_order: self.opened,
        });
        self.opened += 1;
        id
    }

    /// Remove the window entirely. Idempotent; no tombstones remain.
    pub fn close_window(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|window| window.id != id);
        if self.windows.len() != before {
            tracing::debug!(window = %id, "closed window");
        }
    }

    /// Raise the window to the top of the stack. The target receives the new
    /// maximum z; all other windows keep their relative order. No-op when the
    /// window is unknown or already topmost.
    pub fn focus_window(&mut self, id: WindowId) {
        if self.is_topmost(id) {
            return;
        }
        let next = self.bump_z();
        if let Some(window) = self.window_entry_mut(id) {
            window.z_index = next;
        }
    }

    pub fn move_window(&mut self, id: WindowId, position: Point) {
        if let Some(window) = self.window_entry_mut(id) {
            window.position = position;
        }
    }

    /// Replace the window's size, saturating at the minimum floor rather than
    /// rejecting undersized requests.
    pub fn resize_window(&mut self, id: WindowId, size: Size) {
        if let Some(window) = self.window_entry_mut(id) {
            window.size = clamp_size(size);
        }
    }

    /// Minimizing hides the window from the desktop surface without touching
    /// its geometry; it stays listed for the taskbar.
    pub fn set_minimized(&mut self, id: WindowId, minimized: bool) {
        if let Some(window) = self.window_entry_mut(id) {
            window.minimized = minimized;
        }
    }

    /// Maximizing records the exact current frame and fills the work area;
    /// clearing the flag restores the recorded frame verbatim.
    pub fn set_maximized(&mut self, id: WindowId, maximized: bool) {
        let work_area = self.work_area;
        let Some(window) = self.window_entry_mut(id) else {
            return;
        };
        if window.maximized == maximized {
            return;
        }
        if maximized {
            window.restore_rect = Some(window.frame_rect());
            window.position = work_area.position();
            window.size = clamp_size(work_area.size());
            window.maximized = true;
        } else {
            if let Some(rect) = window.restore_rect.take() {
                window.position = rect.position();
                window.size = rect.size();
            }
            window.maximized = false;
        }
    }

    /// Record the desktop surface rectangle. Maximized windows re-fill the
    /// new area so they stay maximized across viewport resizes.
    pub fn apply_work_area(&mut self, work_area: PixelRect) {
        self.work_area = work_area;
        let size = clamp_size(work_area.size());
        for window in &mut self.windows {
            if window.maximized {
                window.position = work_area.position();
                window.size = size;
            }
        }
    }

    pub fn work_area(&self) -> PixelRect {
        self.work_area
    }

    /// All windows, minimized included, in ascending z (back-to-front paint
    /// order).
    pub fn windows(&self) -> Vec<&Window> {
        let mut ordered: Vec<&Window> = self.windows.iter().collect();
        ordered.sort_by_key(|window| window.z_index);
        ordered
    }

    /// All windows in creation order, for stable taskbar layout.
    pub fn windows_by_creation(&self) -> Vec<&Window> {
        let mut ordered: Vec<&Window> = self.windows.iter().collect();
        ordered.sort_by_key(|window| window.creation_order);
        ordered
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|window| window.id == id)
    }

    /// The focused window: highest z among non-minimized windows. Derived,
    /// never stored.
    pub fn focused(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|window| !window.minimized)
            .max_by_key(|window| window.z_index)
            .map(|window| window.id)
    }

    /// Whether the window holds the global maximum z, minimized or not.
    pub fn is_topmost(&self, id: WindowId) -> bool {
        self.windows
            .iter()
            .max_by_key(|window| window.z_index)
            .is_some_and(|window| window.id == id)
    }

    /// Topmost non-minimized window under the given point. Minimized windows
    /// are not part of the collision surface.
    pub fn window_at(&self, x: i32, y: i32) -> Option<WindowId> {
        self.windows()
            .into_iter()
            .rev()
            .find(|window| !window.minimized && window.frame_rect().contains(x, y))
            .map(|window| window.id)
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn settings(&self) -> ShellSettings {
        self.settings
    }

    /// Merge a partial settings update into the global settings.
    pub fn update_settings(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.settings.theme = theme;
        }
    }

    fn window_entry_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|window| window.id == id)
    }

    fn bump_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    fn stagger_rect(&self) -> PixelRect {
        let slot = (self.opened % STAGGER_SLOTS) as i32;
        let origin = Point::new(
            self.work_area.x + 2 + slot * STAGGER_STEP_X,
            self.work_area.y + 1 + slot * STAGGER_STEP_Y,
        );
        PixelRect::from_parts(
            origin,
            Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        )
    }
}

fn clamp_size(size: Size) -> Size {
    Size::new(
        size.width.max(MIN_WINDOW_WIDTH),
        size.height.max(MIN_WINDOW_HEIGHT),
    )
}
