use std::time::{Duration, Instant};

/// Fire-once timer with at most one pending deadline.
///
/// Re-arming replaces the pending deadline, so firings never accumulate. Callers pass the
/// current instant in, which keeps the owner free of clock reads.
#[derive(Debug, Clone)]
pub struct CancellableTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl CancellableTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true once when the deadline has passed, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
