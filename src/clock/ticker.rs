//! Tick sources for the session clock

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::ClockEpoch;

/// Something that delivers one tick per period for a given clock epoch.
///
/// At most one run is active: starting again replaces the previous run,
/// and `stop` must guarantee that no further ticks are produced.
pub trait Ticker: Send {
    fn start(&mut self, epoch: ClockEpoch);
    fn stop(&mut self);
}

/// Ticker backed by a tokio task. Must be started inside a tokio runtime.
pub struct TokioTicker {
    period: Duration,
    tick_tx: mpsc::UnboundedSender<ClockEpoch>,
    handle: Option<JoinHandle<()>>,
}

impl TokioTicker {
    pub fn new(period: Duration, tick_tx: mpsc::UnboundedSender<ClockEpoch>) -> Self {
        Self {
            period,
            tick_tx,
            handle: None,
        }
    }

    /// One tick per second
    pub fn per_second(tick_tx: mpsc::UnboundedSender<ClockEpoch>) -> Self {
        Self::new(Duration::from_secs(1), tick_tx)
    }
}

impl Ticker for TokioTicker {
    fn start(&mut self, epoch: ClockEpoch) {
        self.stop();

        let period = self.period;
        let tick_tx = self.tick_tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tick_tx.send(epoch).is_err() {
                    break;
                }
            }
        }));
        tracing::debug!("Clock ticker started (epoch {})", epoch);
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Clock ticker stopped");
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug, Default)]
struct ManualTickerState {
    active: Option<ClockEpoch>,
    starts: usize,
    stops: usize,
}

/// Ticker that never fires on its own; tests feed ticks by hand.
///
/// Clones share state, so a test can keep one handle and give another to
/// the app.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    state: Arc<Mutex<ManualTickerState>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut ManualTickerState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    /// Epoch of the run currently producing ticks
    pub fn active(&self) -> Option<ClockEpoch> {
        self.with_state(|s| s.active)
    }

    pub fn starts(&self) -> usize {
        self.with_state(|s| s.starts)
    }

    pub fn stops(&self) -> usize {
        self.with_state(|s| s.stops)
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, epoch: ClockEpoch) {
        self.with_state(|s| {
            s.active = Some(epoch);
            s.starts += 1;
        });
    }

    fn stop(&mut self) {
        self.with_state(|s| {
            if s.active.take().is_some() {
                s.stops += 1;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_ticker_sends_epoch_each_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TokioTicker::per_second(tx);
        ticker.start(4);

        assert_eq!(rx.recv().await, Some(4));
        assert_eq!(rx.recv().await, Some(4));
        ticker.stop();
        let late = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(late.is_err(), "no ticks after stop");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_run() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TokioTicker::per_second(tx);
        ticker.start(1);
        ticker.start(2);

        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_drop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut ticker = TokioTicker::per_second(tx);
            ticker.start(1);
            assert_eq!(rx.recv().await, Some(1));
        }
        // Ticker and its task are gone, so the channel closes
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_manual_ticker_tracks_runs() {
        let probe = ManualTicker::new();
        let mut ticker = probe.clone();
        ticker.start(1);
        ticker.stop();
        ticker.stop();
        assert_eq!(probe.starts(), 1);
        assert_eq!(probe.stops(), 1);
        assert_eq!(probe.active(), None);
    }
}
