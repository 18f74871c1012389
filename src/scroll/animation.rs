//! Smooth scrolling toward a target offset with cubic ease-out

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: u16, to: u16, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub fn target(&self) -> u16 {
        self.to
    }

    /// Fraction of the animation elapsed at `now`, in `[0, 1]`
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Offset to display at `now`
    pub fn offset_at(&self, now: Instant) -> u16 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).round() as u16
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
