//! Window entities and the operations that own them.

pub mod decorator;
pub mod frame;
mod store;

pub use store::{DesktopStore, SettingsPatch, ShellSettings};

use std::fmt;

use crate::geometry::{PixelRect, Point, Size};

/// Opaque window handle, unique for the lifetime of the store. Ids are never
/// reused, so an operation holding a stale id simply finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One open application instance.
#[derive(Debug, Clone)]
pub struct Window {
    id: WindowId,
    component: String,
    title: String,
    position: Point,
    size: Size,
    z_index: u64,
    minimized: bool,
    maximized: bool,
    // exact pre-maximize frame, restored verbatim
    restore_rect: Option<PixelRect>,
    creation_order: u64,
}

impl Window {
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Registry key of the embedded application.
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn maximized(&self) -> bool {
        self.maximized
    }

    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }

    /// The full frame rectangle, chrome included.
    pub fn frame_rect(&self) -> PixelRect {
        PixelRect::from_parts(self.position, self.size)
    }
}
