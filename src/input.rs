//! Keyboard reader feeding key presses into the event channel.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::constants::INPUT_POLL_MS;
use crate::logger::Log;
use crate::signals::AppEvent;

/// Handle to the keyboard thread; stops and joins it on drop.
pub struct KeyReader {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl KeyReader {
    pub fn start(sender: Sender<AppEvent>) -> Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let r = running.clone();

        let thread = thread::Builder::new()
            .name("keyboard".to_string())
            .spawn(move || {
                let poll_timeout = Duration::from_millis(INPUT_POLL_MS);
                while r.load(Ordering::SeqCst) {
                    match event::poll(poll_timeout) {
                        Ok(false) => continue,
                        Ok(true) => {}
                        Err(e) => {
                            Log::log_error(&format!("Keyboard poll failed: {}", e));
                            break;
                        }
                    }
                    match event::read() {
                        // Ignore release/repeat events reported by some terminals
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if sender.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            Log::log_error(&format!("Keyboard read failed: {}", e));
                            break;
                        }
                    }
                }
            })
            .context("Failed to spawn keyboard thread")?;

        Ok(Self {
            running,
            thread: Some(thread),
        })
    }
}

impl Drop for KeyReader {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
