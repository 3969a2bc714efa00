//! Session countdown
//!
//! [`SessionClock`] holds the countdown itself and is driven purely by tick
//! events, so it can be tested without real time. A [`Ticker`] produces those
//! events. Every countdown run gets a fresh epoch; ticks carry the epoch they
//! were scheduled under and anything from an older epoch is ignored, so a tick
//! that was already queued when the clock stopped can never change state.

mod ticker;

pub use ticker::{ManualTicker, Ticker, TokioTicker};

/// Identifies one run of the countdown
pub type ClockEpoch = u64;

/// Result of feeding one tick into the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick belonged to a stopped or superseded run
    Stale,
    /// One second elapsed, time remains
    Running { remaining_secs: u32 },
    /// Countdown reached zero and the clock stopped itself
    Expired,
}

#[derive(Debug)]
pub struct SessionClock {
    remaining_secs: u32,
    epoch: ClockEpoch,
    running: bool,
}

impl SessionClock {
    pub fn new(budget_secs: u32) -> Self {
        Self {
            remaining_secs: budget_secs,
            epoch: 0,
            running: false,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn epoch(&self) -> ClockEpoch {
        self.epoch
    }

    /// Begin counting down.
    ///
    /// Returns the epoch of the new run, or `None` when a run is already
    /// active or no time is left.
    pub fn start(&mut self) -> Option<ClockEpoch> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.epoch += 1;
        self.running = true;
        Some(self.epoch)
    }

    /// Stop the active run. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.epoch += 1;
        true
    }

    /// Stop and refill the countdown for a new session
    pub fn reset(&mut self, budget_secs: u32) {
        self.stop();
        self.remaining_secs = budget_secs;
    }

    /// Add bonus time without touching the tick cadence
    pub fn grant(&mut self, secs: u32) {
        self.remaining_secs = self.remaining_secs.saturating_add(secs);
    }

    pub fn tick(&mut self, epoch: ClockEpoch) -> TickOutcome {
        if !self.running || epoch != self.epoch {
            return TickOutcome::Stale;
        }

        if self.remaining_secs <= 1 {
            self.remaining_secs = 0;
            self.stop();
            return TickOutcome::Expired;
        }

        self.remaining_secs -= 1;
        TickOutcome::Running {
            remaining_secs: self.remaining_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent() {
        let mut clock = SessionClock::new(60);
        let epoch = clock.start();
        assert!(epoch.is_some());
        assert_eq!(clock.start(), None);
        assert_eq!(Some(clock.epoch()), epoch);
    }

    #[test]
    fn test_counts_down_to_expiry() {
        let mut clock = SessionClock::new(3);
        let epoch = clock.start().unwrap();

        assert_eq!(clock.tick(epoch), TickOutcome::Running { remaining_secs: 2 });
        assert_eq!(clock.tick(epoch), TickOutcome::Running { remaining_secs: 1 });
        assert_eq!(clock.tick(epoch), TickOutcome::Expired);
        assert!(!clock.is_running());
        assert_eq!(clock.remaining_secs(), 0);

        // Nothing fires after expiry
        assert_eq!(clock.tick(epoch), TickOutcome::Stale);
    }

    #[test]
    fn test_ticks_from_stopped_run_are_stale() {
        let mut clock = SessionClock::new(60);
        let old = clock.start().unwrap();
        clock.stop();
        let new = clock.start().unwrap();

        assert_ne!(old, new);
        assert_eq!(clock.tick(old), TickOutcome::Stale);
        assert_eq!(clock.remaining_secs(), 60);
        assert_eq!(clock.tick(new), TickOutcome::Running { remaining_secs: 59 });
    }

    #[test]
    fn test_grant_extends_running_countdown() {
        let mut clock = SessionClock::new(2);
        let epoch = clock.start().unwrap();
        clock.grant(3);
        assert_eq!(clock.epoch(), epoch);
        assert_eq!(clock.tick(epoch), TickOutcome::Running { remaining_secs: 4 });
    }

    #[test]
    fn test_reset_invalidates_previous_epoch() {
        let mut clock = SessionClock::new(10);
        let epoch = clock.start().unwrap();
        clock.reset(60);
        assert!(!clock.is_running());
        assert_eq!(clock.tick(epoch), TickOutcome::Stale);
        assert_eq!(clock.remaining_secs(), 60);
    }

    #[test]
    fn test_cannot_start_without_time() {
        let mut clock = SessionClock::new(0);
        assert_eq!(clock.start(), None);
    }
}
