//! Shared crate-wide constants.

/// Smallest width a window frame may be resized to. Leaves room for the two
/// border columns, the three header buttons, and a sliver of title text.
pub const MIN_WINDOW_WIDTH: u16 = 14;

/// Smallest height a window frame may be resized to: top border, title row,
/// one content row, bottom border.
pub const MIN_WINDOW_HEIGHT: u16 = 4;

/// Default frame size for windows opened without explicit geometry.
pub const DEFAULT_WINDOW_WIDTH: u16 = 48;
pub const DEFAULT_WINDOW_HEIGHT: u16 = 16;

/// Cascade offsets applied per opened window so successive windows don't
/// stack exactly on top of each other. The cascade wraps after
/// `STAGGER_SLOTS` windows to stay inside small viewports.
pub const STAGGER_STEP_X: i32 = 3;
pub const STAGGER_STEP_Y: i32 = 1;
pub const STAGGER_SLOTS: u64 = 8;

/// Chrome rows reserved at the top and bottom of the viewport.
pub const TOP_BAR_HEIGHT: u16 = 1;
pub const TASKBAR_HEIGHT: u16 = 1;
