//! A centralized event loop that drives the main UI thread.
//!
//! This implements the "message pump" pattern: it owns the main execution
//! thread, polls crossterm for user events (keyboard, mouse, resize), and
//! dispatches them to a handler closure. All store mutations happen
//! synchronously inside the handler, so a read immediately after a write
//! always observes that write.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

pub enum ControlFlow {
    Continue,
    Quit,
}

pub struct EventLoop {
    poll_interval: Duration,
}

impl EventLoop {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Run the loop, taking control of the current thread.
    ///
    /// The handler is called with `Some(event)` for each input event and with
    /// `None` when the poll interval elapses quietly (the render tick). Event
    /// bursts are drained before returning to the render tick so mouse drags
    /// don't lag behind the input stream.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(None)? {
                break;
            }
            if event::poll(self.poll_interval)? {
                loop {
                    let next = event::read()?;
                    if let ControlFlow::Quit = handler(Some(next))? {
                        return Ok(());
                    }
                    if !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
