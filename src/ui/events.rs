use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A container finished an operation; redraw from fresh snapshots.
    StoreUpdated,
    /// One-line message for the footer, e.g. a failed favorites write.
    Notice(String),
    /// The input thread stopped; no more keys will arrive.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            pump(&event_tx, tick_rate, |timeout| {
                if event::poll(timeout)? {
                    event::read().map(Some)
                } else {
                    Ok(None)
                }
            });
            let _ = event_tx.send(AppEvent::InputClosed);
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward terminal events and ticks until the source fails or the
/// receiver is gone.
fn pump<F>(tx: &Sender<AppEvent>, tick_rate: Duration, mut next_event: F)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let sent = match next_event(timeout) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Input(key)),
            Ok(Some(Event::Resize(cols, rows))) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to read terminal events");
                return;
            }
        };
        if sent.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn pump_stops_on_source_error() {
        let (tx, rx) = mpsc::channel();
        let mut script = vec![
            Err(io::Error::other("tty gone")),
            Ok(Some(Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)))),
        ];

        pump(&tx, Duration::from_secs(60), |_| script.pop().unwrap());
        drop(tx);

        let events: Vec<AppEvent> = rx.iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AppEvent::Input(_)));
    }

    #[test]
    fn pump_stops_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut polls = 0;

        pump(&tx, Duration::ZERO, |_| {
            polls += 1;
            Ok(None)
        });

        assert_eq!(polls, 1);
    }
}
