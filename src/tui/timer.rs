//! Cancellable one-shot deadlines on a virtual clock.
//!
//! Time is a `Duration` offset from view mount. The event loop supplies
//! real elapsed time; tests supply whatever they like. A `Timer` holds at
//! most one pending deadline: scheduling replaces it, firing clears it.

use std::time::Duration;

/// A single pending deadline, or nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    due: Option<Duration>,
}

impl Timer {
    /// A timer with nothing scheduled.
    pub const fn idle() -> Self {
        Timer { due: None }
    }

    /// Schedule a deadline at `at`, discarding any pending one.
    pub fn schedule(&mut self, at: Duration) {
        self.due = Some(at);
    }

    /// Drop the pending deadline. No-op when idle or already fired.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn due(&self) -> Option<Duration> {
        self.due
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Clear and return the deadline if it has been reached by `now`.
    pub fn fire(&mut self, now: Duration) -> Option<Duration> {
        match self.due {
            Some(at) if at <= now => self.due.take(),
            _ => None,
        }
    }
}

/// Which logical timer a deadline belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Blink,
    Typewriter,
    Close,
}

/// The view's three independent timers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timers {
    pub blink: Timer,
    pub typewriter: Timer,
    pub close: Timer,
}

impl Timers {
    /// Earliest pending deadline across all timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        [self.blink, self.typewriter, self.close]
            .iter()
            .filter_map(Timer::due)
            .min()
    }

    /// The timer with the earliest deadline that is due by `now`.
    ///
    /// Ties resolve in declaration order: blink, typewriter, close.
    pub fn earliest_due(&self, now: Duration) -> Option<TimerKind> {
        [
            (TimerKind::Blink, self.blink),
            (TimerKind::Typewriter, self.typewriter),
            (TimerKind::Close, self.close),
        ]
        .into_iter()
        .filter_map(|(kind, timer)| timer.due().filter(|&at| at <= now).map(|at| (at, kind)))
        .min_by_key(|&(at, _)| at)
        .map(|(_, kind)| kind)
    }

    /// Release every timer. Used on teardown.
    pub fn cancel_all(&mut self) {
        self.blink.cancel();
        self.typewriter.cancel();
        self.close.cancel();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = Timer::idle();
        assert_eq!(timer.fire(ms(10_000)), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = Timer::idle();
        timer.schedule(ms(300));
        assert_eq!(timer.fire(ms(299)), None);
        assert_eq!(timer.fire(ms(300)), Some(ms(300)));
        assert_eq!(timer.fire(ms(400)), None);
    }

    #[test]
    fn schedule_replaces_pending_deadline() {
        let mut timer = Timer::idle();
        timer.schedule(ms(100));
        timer.schedule(ms(500));
        assert_eq!(timer.fire(ms(200)), None);
        assert_eq!(timer.due(), Some(ms(500)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = Timer::idle();
        timer.cancel();
        timer.schedule(ms(50));
        assert!(timer.fire(ms(60)).is_some());
        // Already fired: cancelling again is harmless
        timer.cancel();
        timer.cancel();
        assert_eq!(timer, Timer::idle());
    }

    #[test]
    fn next_deadline_is_minimum() {
        let mut timers = Timers::default();
        assert_eq!(timers.next_deadline(), None);
        timers.blink.schedule(ms(500));
        timers.typewriter.schedule(ms(90));
        timers.close.schedule(ms(300));
        assert_eq!(timers.next_deadline(), Some(ms(90)));
    }

    #[test]
    fn earliest_due_ignores_future_deadlines() {
        let mut timers = Timers::default();
        timers.blink.schedule(ms(500));
        timers.close.schedule(ms(300));
        assert_eq!(timers.earliest_due(ms(299)), None);
        assert_eq!(timers.earliest_due(ms(600)), Some(TimerKind::Close));
    }

    #[test]
    fn cancel_all_releases_everything() {
        let mut timers = Timers::default();
        timers.blink.schedule(ms(1));
        timers.typewriter.schedule(ms(2));
        timers.close.schedule(ms(3));
        timers.cancel_all();
        assert_eq!(timers, Timers::default());
    }
}
