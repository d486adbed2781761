//! Event pump: translates terminal input into app events on a channel.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

/// Events delivered to the main loop.
pub enum AppEvent {
    Key(event::KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Reads terminal events on a background thread and forwards them,
/// interleaved with ticks at the configured cadence.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || pump(tx, tick_rate));
        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn pump(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::warn!(%err, "terminal event read failed");
                        break;
                    }
                };
                if forwarded.is_err() {
                    // Main loop dropped its receiver; we're done.
                    break;
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(%err, "terminal event poll failed");
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
