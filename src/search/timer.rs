use std::time::{Duration, Instant};

use super::traits::TimeLeft;

/// Wall-clock budget for a single move. Reports the milliseconds left, which
/// go negative once the budget is exceeded.
#[derive(Clone, Copy, Debug)]
pub struct MoveTimer {
    started: Instant,
    limit: Duration,
}

impl MoveTimer {
    pub fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn remaining_ms(&self) -> f64 {
        (self.limit.as_secs_f64() - self.elapsed().as_secs_f64()) * 1000.0
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms() <= 0.0
    }
}

impl TimeLeft for MoveTimer {
    #[inline]
    fn time_left(&self) -> f64 {
        self.remaining_ms()
    }
}
