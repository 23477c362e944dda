//! Rate Limiter - fixed window counter
//!
//! One instance guards one protected route. The budget is global to that
//! route, not per caller.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// Outcome of [`FixedWindowLimiter::admit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    /// Budget for the current window is spent.
    RateLimited {
        /// Time left until the window resets
        retry_after: Duration,
    },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

#[derive(Debug, Default)]
struct WindowState {
    count: u32,
    /// `None` until the first request opens a window
    window_end: Option<Instant>,
}

/// Allows `max_requests` per `window`, resetting at fixed boundaries.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    state: Mutex<WindowState>,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Mutex::new(WindowState::default()),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Count one request against the current window.
    ///
    /// A denied request does not consume budget.
    pub fn admit(&self) -> Admission {
        // Poisoning cannot leave the window half-updated.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        let window_end = match state.window_end {
            Some(end) if now <= end => end,
            _ => {
                let end = now + self.window;
                tracing::trace!(previous_count = state.count, "Opening new rate limit window");
                state.count = 0;
                state.window_end = Some(end);
                end
            }
        };

        if state.count >= self.max_requests {
            return Admission::RateLimited {
                retry_after: window_end.saturating_duration_since(now),
            };
        }

        state.count += 1;
        Admission::Admitted
    }
}
