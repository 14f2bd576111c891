//! Dynamic application lookup by string key.
//!
//! Windows name the application they host by key; the registry resolves the
//! key to a factory once, when the shell mounts the window. Unknown keys
//! degrade with a diagnostic instead of a crash — the rest of the desktop
//! keeps running.

use std::collections::BTreeMap;

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

/// Render/input context handed to an embedded application.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppContext {
    pub focused: bool,
}

impl AppContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }
}

/// A self-contained mini-application mounted inside a window frame. The
/// shell provides a drawing area and a focus flag and nothing else; the
/// application owns all of its internal state.
pub trait AppComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &AppContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &AppContext) -> bool {
        false
    }
}

pub type AppFactory = fn() -> Box<dyn AppComponent>;

/// Key → factory mapping for every application the shell can launch.
#[derive(Default)]
pub struct AppRegistry {
    factories: BTreeMap<&'static str, AppFactory>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in applications.
    pub fn with_builtin_apps() -> Self {
        let mut registry = Self::new();
        registry.register("Calculator", || {
            Box::new(crate::apps::CalculatorApp::new())
        });
        registry.register("Clock", || Box::new(crate::apps::ClockApp::new()));
        registry.register("TextEditor", || {
            Box::new(crate::apps::TextEditorApp::new())
        });
        registry.register("Welcome", || Box::new(crate::apps::WelcomeApp::new()));
        registry
    }

    pub fn register(&mut self, key: &'static str, factory: AppFactory) {
        self.factories.insert(key, factory);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Instantiate the application for `key`, or `None` for unknown keys.
    pub fn mount(&self, key: &str) -> Option<Box<dyn AppComponent>> {
        self.factories.get(key).map(|factory| factory())
    }

    /// Registered keys in sorted order, for the launcher listing.
    pub fn keys(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}
