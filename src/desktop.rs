//! The composition root: owns the store, the gesture controllers, the
//! chrome, and the mounted applications, and routes every input event in a
//! fixed priority order — launcher (modal), top bar, taskbar, window frames,
//! and finally the bare desktop background where the marquee selection
//! lives. Rendering always reads back from the store, so chrome and frames
//! can never disagree with it.

use std::collections::BTreeMap;

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::actions::{Action, action_for_key};
use crate::geometry::{Point, rect_contains, rect_from_area};
use crate::registry::{AppComponent, AppContext, AppRegistry};
use crate::selection::SelectionController;
use crate::shell::{self, Launcher, Taskbar, TopBar};
use crate::theme;
use crate::ui::UiFrame;
use crate::window::frame::{FrameController, FrameHit};
use crate::window::{DesktopStore, SettingsPatch, ShellSettings, WindowId, decorator};

pub struct DesktopShell {
    store: DesktopStore,
    registry: AppRegistry,
    frames: FrameController,
    selection: SelectionController,
    top_bar: TopBar,
    taskbar: Taskbar,
    launcher: Launcher,
    apps: BTreeMap<WindowId, Box<dyn AppComponent>>,
    area: Rect,
}

impl DesktopShell {
    pub fn new(registry: AppRegistry, settings: ShellSettings) -> Self {
        Self {
            store: DesktopStore::new(settings),
            registry,
            frames: FrameController::new(),
            selection: SelectionController::new(),
            top_bar: TopBar::new(),
            taskbar: Taskbar::new(),
            launcher: Launcher::new(),
            apps: BTreeMap::new(),
            area: Rect::default(),
        }
    }

    pub fn store(&self) -> &DesktopStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn launcher_open(&self) -> bool {
        self.launcher.is_open()
    }

    /// Mount the application for `key` and open a window hosting it.
    /// Unknown keys degrade with a diagnostic and create nothing.
    pub fn open_app(&mut self, key: &str) -> Option<WindowId> {
        let Some(app) = self.registry.mount(key) else {
            tracing::warn!(component = key, "unknown application key; dropping window");
            return None;
        };
        let id = self.store.open_window(key, key, None);
        self.apps.insert(id, app);
        Some(id)
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.store.close_window(id);
        self.apps.remove(&id);
    }

    /// Track the viewport size; maximized windows re-fill the new work area.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect {
            x: 0,
            y: 0,
            width,
            height,
        };
        let (_, _, desk) = shell::split_area(self.area);
        self.store.apply_work_area(rect_from_area(desk));
    }

    /// Route one input event. Returns true when the shell consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Resize(width, height) => {
                self.resize(*width, *height);
                true
            }
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match action_for_key(key, self.launcher.is_open()) {
            // Quit is the runner's decision, not the shell's.
            Some(Action::Quit) => false,
            Some(Action::ToggleLauncher) => {
                self.launcher.toggle();
                true
            }
            Some(Action::Cancel) => {
                if self.launcher.is_open() {
                    self.launcher.close();
                } else {
                    self.frames.cancel();
                    self.selection.end();
                }
                true
            }
            Some(Action::CloseFocusedWindow) => {
                if let Some(id) = self.store.focused() {
                    self.close_window(id);
                }
                true
            }
            Some(Action::MenuUp) => {
                self.launcher.move_selection(-1, self.registry.keys().len());
                true
            }
            Some(Action::MenuDown) => {
                self.launcher.move_selection(1, self.registry.keys().len());
                true
            }
            Some(Action::MenuSelect) => {
                self.launch_selected(self.launcher.selected());
                true
            }
            None => {
                if self.launcher.is_open() {
                    // modal: unbound keys don't reach applications
                    return true;
                }
                let Some(id) = self.store.focused() else {
                    return false;
                };
                let Some(app) = self.apps.get_mut(&id) else {
                    return false;
                };
                app.handle_event(&Event::Key(*key), &AppContext::new(true))
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let event = Event::Mouse(*mouse);

        // Release anywhere — even outside the viewport the terminal reports —
        // terminates every gesture. Checked first so no branch below can
        // swallow the release and leak a drag.
        if matches!(mouse.kind, MouseEventKind::Up(_)) {
            let was_active = self.frames.gesture_active() || self.selection.active();
            self.frames.handle_mouse(mouse, &mut self.store);
            self.selection.end();
            return was_active;
        }

        if self.launcher.is_open() {
            return self.handle_mouse_in_launcher(mouse, &event);
        }

        if matches!(mouse.kind, MouseEventKind::Drag(MouseButton::Left)) {
            if self.frames.gesture_active() {
                self.frames.handle_mouse(mouse, &mut self.store);
                return true;
            }
            if self.selection.active() {
                self.selection
                    .update(Point::new(mouse.column as i32, mouse.row as i32));
                return true;
            }
            return false;
        }

        if self.top_bar.hit_test_launcher(&event) {
            self.launcher.open();
            return true;
        }
        if self.top_bar.hit_test_theme(&event) {
            let theme = self.store.settings().theme.toggled();
            self.store.update_settings(SettingsPatch { theme: Some(theme) });
            return true;
        }
        if let Some(id) = self.taskbar.hit_test(&event) {
            self.taskbar_click(id);
            return true;
        }

        let (_, _, desk) = shell::split_area(self.area);
        if matches!(mouse.kind, MouseEventKind::Down(_))
            && !rect_contains(desk, mouse.column, mouse.row)
        {
            // chrome rows never fall through to windows or the background
            return true;
        }

        match self.frames.handle_mouse(mouse, &mut self.store) {
            Some(FrameHit::Chrome) => {
                self.reconcile_apps();
                true
            }
            Some(FrameHit::Body(id)) => {
                self.forward_mouse_to_app(id, mouse);
                true
            }
            None => {
                // The event reached the bare desktop background.
                if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                    self.selection
                        .begin(Point::new(mouse.column as i32, mouse.row as i32));
                    return true;
                }
                false
            }
        }
    }

    fn handle_mouse_in_launcher(&mut self, mouse: &MouseEvent, event: &Event) -> bool {
        if let Some(index) = self.launcher.hit_test_item(event) {
            self.launch_selected(index);
            return true;
        }
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            // clicking the menu button or anywhere outside dismisses
            if self.top_bar.hit_test_launcher(event)
                || !self.launcher.contains_point(mouse.column, mouse.row)
            {
                self.launcher.close();
            }
        }
        // modal while open
        true
    }

    fn launch_selected(&mut self, index: usize) {
        let keys = self.registry.keys();
        if let Some(key) = keys.get(index).copied() {
            self.open_app(key);
        }
        self.launcher.close();
    }

    fn taskbar_click(&mut self, id: WindowId) {
        let Some(window) = self.store.window(id) else {
            return;
        };
        if window.minimized() {
            self.store.set_minimized(id, false);
            self.store.focus_window(id);
        } else if self.store.focused() == Some(id) {
            self.store.set_minimized(id, true);
        } else {
            self.store.focus_window(id);
        }
    }

    /// Translate a body click into the application's content coordinate
    /// space and hand it over.
    fn forward_mouse_to_app(&mut self, id: WindowId, mouse: &MouseEvent) {
        let Some(window) = self.store.window(id) else {
            return;
        };
        let content = decorator::content_rect(window.frame_rect());
        let column = (mouse.column as i32 - content.x).clamp(0, u16::MAX as i32) as u16;
        let row = (mouse.row as i32 - content.y).clamp(0, u16::MAX as i32) as u16;
        if let Some(app) = self.apps.get_mut(&id) {
            let local = Event::Mouse(MouseEvent {
                column,
                row,
                kind: mouse.kind,
                modifiers: mouse.modifiers,
            });
            app.handle_event(&local, &AppContext::new(true));
        }
    }

    /// Drop mounted applications whose windows were closed via frame chrome
    /// this event.
    fn reconcile_apps(&mut self) {
        self.apps.retain(|id, _| self.store.window(*id).is_some());
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        if area != self.area {
            self.resize(area.width, area.height);
        }
        let (top, bottom, desk) = shell::split_area(area);
        let settings = self.store.settings();
        let theme = settings.theme;

        self.top_bar.begin_frame();
        self.taskbar.begin_frame();
        self.launcher.begin_frame();

        let mut ui = UiFrame::new(frame);
        ui.fill(desk, " ", Style::default().bg(theme::desktop_bg(theme)));

        // Windows, back to front; minimized ones are skipped by the desktop
        // surface but stay listed in the taskbar below.
        let focused = self.store.focused();
        let draw_order: Vec<WindowId> = self
            .store
            .windows()
            .iter()
            .filter(|window| !window.minimized())
            .map(|window| window.id())
            .collect();
        for id in draw_order {
            let Some(window) = self.store.window(id) else {
                continue;
            };
            let is_focused = focused == Some(id);
            decorator::render_frame(&mut ui, window, desk, theme, is_focused);
            let content = decorator::content_rect(window.frame_rect());
            if let Some(visible) = content.visible_in(desk)
                && let Some(app) = self.apps.get_mut(&id)
            {
                app.render(&mut ui, visible, &AppContext::new(is_focused));
            }
        }

        self.selection.render(&mut ui, desk, theme);

        let focused_title = focused
            .and_then(|id| self.store.window(id))
            .map(|window| window.title().to_string());
        self.top_bar.render(
            &mut ui,
            top,
            theme,
            focused_title.as_deref(),
            self.launcher.is_open(),
        );
        let by_creation = self.store.windows_by_creation();
        self.taskbar.render(&mut ui, bottom, &by_creation, focused, theme);
        let keys = self.registry.keys();
        self.launcher.render(&mut ui, desk, &keys, theme);
    }
}
