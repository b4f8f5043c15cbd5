//! Event plumbing between helper threads and the main loop.
//!
//! All state lives on the main thread. Helper threads (the ticker, the keyboard
//! reader and the signal forwarder defined here) only produce [`AppEvent`]s
//! into a single channel that the main loop drains in order.

use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::{Handle, Signals},
};
use std::{
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
};

use crate::logger::Log;

/// Unified message type consumed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Recurring clock refresh for both regions
    Tick,
    /// Keyboard input from the terminal
    Key(KeyEvent),
    /// Shutdown request (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

/// Forwards termination signals into the event channel until dropped.
pub struct SignalForwarder {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalForwarder {
    /// Register SIGTERM, SIGINT and SIGHUP and start forwarding them.
    pub fn start(sender: Sender<AppEvent>) -> Result<Self> {
        let mut signals = Signals::new([SIGTERM, SIGINT, SIGHUP])
            .context("Failed to register signal handlers")?;
        let handle = signals.handle();

        let thread = thread::Builder::new()
            .name("signals".to_string())
            .spawn(move || {
                for signal in signals.forever() {
                    Log::log_debug(&format!("Shutdown signal received: {:?}", signal));
                    if sender.send(AppEvent::Shutdown).is_err() {
                        break;
                    }
                }
            })
            .context("Failed to spawn signal thread")?;

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalForwarder {
    fn drop(&mut self) {
        // Closing the handle ends the `forever` iterator
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
