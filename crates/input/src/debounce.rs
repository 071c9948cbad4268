//! Key press rate limiting.
//!
//! Presses that arrive within `min_interval_ms` of the last accepted press are dropped, so
//! one physical key press cannot be processed twice in the same scheduling quantum. The
//! caller supplies the clock, which keeps this testable.

#[derive(Debug, Clone)]
pub struct InputDebouncer {
    min_interval_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl InputDebouncer {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Decide whether a press at `now_ms` should be processed.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.min_interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }
}
