//! Rate limiting for scroll-driven centering
//!
//! A scroll event arriving less than the throttle interval after the last
//! accepted one is dropped. An accepted event cancels whatever computation
//! was pending and schedules a new one after the settle delay. Scheduling
//! itself is left to the caller: the tracker hands out a token and later
//! accepts it only if no newer event has superseded it.

use std::time::{Duration, Instant};

/// Minimum spacing between accepted scroll events
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(50);

/// Delay between the last accepted event and the centering computation
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(100);

/// Identifies one scheduled centering computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleToken(u64);

/// Outcome of feeding a scroll event to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollGate {
    /// Too soon after the previous accepted event
    Throttled,
    /// Run the computation for `token` after `delay`
    Schedule { token: SettleToken, delay: Duration },
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    throttle: Duration,
    settle: Duration,
    last_fired: Option<Instant>,
    pending: Option<SettleToken>,
    next_token: u64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE, DEFAULT_SETTLE)
    }
}

impl ScrollTracker {
    pub fn new(throttle: Duration, settle: Duration) -> Self {
        Self {
            throttle,
            settle,
            last_fired: None,
            pending: None,
            next_token: 0,
        }
    }

    pub fn throttle(&self) -> Duration {
        self.throttle
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle
    }

    /// Gate a scroll event observed at `now`
    pub fn on_scroll(&mut self, now: Instant) -> ScrollGate {
        if let Some(last) = self.last_fired {
            if now.saturating_duration_since(last) < self.throttle {
                return ScrollGate::Throttled;
            }
        }
        self.last_fired = Some(now);

        let token = SettleToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(token);

        ScrollGate::Schedule {
            token,
            delay: self.settle,
        }
    }

    /// Claim the computation for `token`
    ///
    /// Returns true only for the most recently scheduled token, at most once.
    pub fn settle(&mut self, token: SettleToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop any pending computation
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<SettleToken> {
        self.pending
    }
}
