//! Recurring clock tick as a cancellable handle.
//!
//! A [`Ticker`] sends [`AppEvent::Tick`] into the event channel once per
//! interval from a helper thread. Dropping the handle stops and joins the
//! thread, so no tick can arrive after the owning session is torn down, on
//! any exit path.

use anyhow::{Context, Result};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crate::constants::CHECK_INTERVAL_MS;
use crate::signals::AppEvent;

const CHECK_INTERVAL: Duration = Duration::from_millis(CHECK_INTERVAL_MS);

/// Handle to the running tick thread.
pub struct Ticker {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start ticking every `interval`. The first tick fires one interval from now.
    pub fn start(interval: Duration, sender: Sender<AppEvent>) -> Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let r = running.clone();

        let thread = thread::Builder::new()
            .name("ticker".to_string())
            .spawn(move || {
                let mut next_tick = Instant::now() + interval;
                while r.load(Ordering::SeqCst) {
                    let now = Instant::now();
                    if now >= next_tick {
                        if sender.send(AppEvent::Tick).is_err() {
                            // Receiver gone, nobody observes the ticks
                            break;
                        }
                        next_tick += interval;
                        // Skip missed ticks after a stall instead of bursting
                        if next_tick < now {
                            next_tick = now + interval;
                        }
                        continue;
                    }
                    // Sleep in smaller chunks to notice cancellation quickly
                    thread::sleep(CHECK_INTERVAL.min(next_tick - now));
                }
            })
            .context("Failed to spawn ticker thread")?;

        Ok(Self {
            running,
            thread: Some(thread),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
            && self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop ticking and wait for the thread to exit.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
