//! Periodic tick delivery for the interactive screens.
//!
//! A `Ticker` owns a background thread that sends one message per fixed
//! wall-clock period over a channel. The owner holds at most one ticker at a
//! time and replaces it whenever the running flag or session state changes,
//! dropping the previous one first, so duplicate tick sources cannot exist.
//! Dropping the ticker (screen teardown) stops delivery.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Fixed period between session-timer ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Handle to a periodic tick source.
///
/// The background thread checks the stop flag after every sleep and before
/// every send, and exits as soon as the flag is set or the receiving side is
/// gone.
pub struct Ticker {
    stop: Arc<AtomicBool>,
}

impl Ticker {
    /// Start delivering `tick` messages on `tx` once per `period`.
    pub fn start<T>(period: Duration, tx: mpsc::Sender<T>, tick: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        thread::spawn(move || loop {
            thread::sleep(period);

            if flag.load(Ordering::Relaxed) {
                break;
            }

            if tx.send(tick.clone()).is_err() {
                break;
            }
        });

        Self { stop }
    }

    /// Stop the tick source. The thread exits within one period.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether this ticker has been stopped.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_ticker_delivers_ticks() {
        let (tx, rx) = mpsc::channel();
        let _ticker = Ticker::start(Duration::from_millis(5), tx, ());

        for _ in 0..3 {
            rx.recv_timeout(Duration::from_secs(2)).unwrap();
        }
    }

    #[test]
    fn test_ticker_stops_on_drop() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(5), tx, ());

        rx.recv_timeout(Duration::from_secs(2)).unwrap();
        drop(ticker);

        // The thread exits after the stop flag is seen, dropping the sender;
        // draining until disconnect proves no further ticks can arrive.
        while rx.recv_timeout(Duration::from_secs(2)).is_ok() {}
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_ticker_explicit_stop() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(5), tx, ());

        assert!(!ticker.is_stopped());
        ticker.stop();
        assert!(ticker.is_stopped());

        while rx.recv_timeout(Duration::from_secs(2)).is_ok() {}
        assert!(rx.recv().is_err());
    }
}
