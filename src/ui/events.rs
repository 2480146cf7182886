use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::cancel::CancelToken;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// New frame from the typewriter task started as mount number `mount`.
    Typewriter { mount: u64, text: String },
    /// The input thread hit a terminal error and stopped; no more keys will arrive.
    InputLost(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: CancelToken) -> Self {
        Self::with_source(tick_rate, shutdown, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Run the input loop over `source`, which waits up to the given
    /// timeout for one terminal event.
    pub fn with_source<S>(tick_rate: Duration, shutdown: CancelToken, mut source: S) -> Self
    where
        S: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_cancelled() {
                    break;
                }

                // Short poll timeout so the shutdown flag is checked often
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match source(timeout) {
                    Ok(Some(Event::Key(key))) => {
                        let _ = event_tx.send(AppEvent::Key(key));
                    }
                    Ok(Some(Event::Resize(cols, rows))) => {
                        let _ = event_tx.send(AppEvent::Resize(cols, rows));
                    }
                    Ok(_) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal input failed");
                        let _ = event_tx.send(AppEvent::InputLost(err.to_string()));
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
