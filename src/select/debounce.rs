//! Trailing-edge debouncer driven by the host event loop
//!
//! Each [`Debouncer::submit`] arms (or re-arms) a deadline one delay in the
//! future and caches the latest value. [`Debouncer::poll`] hands that value
//! out exactly once after the deadline has passed. Nothing runs in the
//! background: the host decides when to poll, typically using
//! [`Debouncer::remaining`] as its event-poll timeout.

use std::time::{Duration, Instant};
use tracing::trace;

/// Default quiet period for query input
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// A value waiting for its quiet period to elapse
#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Cancellable deferred commit of the most recent value
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the timer from `now`
    pub fn submit(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            trace!("debounce timer restarted");
        }
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Take the pending value if its deadline has passed
    ///
    /// Returns `None` while the timer is still running or when nothing is
    /// pending. A value is returned at most once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Drop the pending value without committing it
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Whether a value is waiting to settle
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The value waiting to settle, if any
    #[must_use]
    pub fn pending_value(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.value)
    }

    /// Time left until the pending value settles
    ///
    /// `Some(Duration::ZERO)` means a poll would fire now.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
