//! Built-in mini-applications. Each is deliberately small: they exist to
//! exercise the mount contract and give the launcher something to launch,
//! not to be products of their own.

pub mod calculator;
pub mod clock;
pub mod text_editor;
pub mod welcome;

pub use calculator::CalculatorApp;
pub use clock::ClockApp;
pub use text_editor::TextEditorApp;
pub use welcome::WelcomeApp;
