//! Leading-edge rate limiter for forecast requests.

use std::time::{Duration, Instant};

/// Window used for forecast requests.
pub const FORECAST_WINDOW: Duration = Duration::from_secs(5);

/// Lets the first call through, then rejects calls until `window` has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    opened_at: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            opened_at: None,
        }
    }

    /// Returns `true` and starts a new window if no window is open at `now`.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        match self.opened_at {
            Some(opened) if now.saturating_duration_since(opened) < self.window => false,
            _ => {
                self.opened_at = Some(now);
                true
            }
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(FORECAST_WINDOW)
    }
}
