//! Value settling for rapidly changing input.
//!
//! A [`Debouncer`] holds a settled value and at most one pending value. Every
//! [`push`](Debouncer::push) replaces the pending value and restarts the quiet
//! period; [`poll`](Debouncer::poll) promotes the pending value once the quiet
//! period has elapsed. Time is supplied by the caller, so the owner's event
//! loop decides when to poll (see [`Debouncer::deadline`]).

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    settled: T,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer whose initial value is already settled
    pub fn new(initial: T, delay: Duration) -> Self {
        Self { delay, settled: initial, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will settle, if one is waiting
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Publish a new input value, superseding any pending one
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending { value, deadline: now + self.delay });
    }

    /// Drop the pending value without settling it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }
}

impl<T: PartialEq> Debouncer<T> {
    /// Settle the pending value if its quiet period has elapsed
    ///
    /// Returns the new settled value only when it differs from the previous
    /// one, so each call reports at most one settled-value transition.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        let ready = self.pending.as_ref().is_some_and(|pending| now >= pending.deadline);
        if !ready {
            return None;
        }

        let value = self.pending.take()?.value;
        if value == self.settled {
            return None;
        }
        self.settled = value;
        Some(&self.settled)
    }
}
