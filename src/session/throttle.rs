//! Frame throttle
//!
//! Accepts at most one frame per interval. Timestamps are supplied by the
//! caller (e.g. `performance.now()`), so the throttle is deterministic and
//! scoped to its session.

pub struct Throttle {
    /// Minimum spacing between accepted frames (ms)
    interval_ms: f64,
    /// Timestamp of the last accepted frame
    last_accepted_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns true and records the timestamp if the frame may be processed
    ///
    /// The first frame is always accepted. Frames arriving sooner than the
    /// interval, with a timestamp behind the last accepted one, or with a
    /// non-finite timestamp are dropped without touching any state.
    pub fn try_accept(&mut self, now_ms: f64) -> bool {
        if !now_ms.is_finite() {
            return false;
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    pub fn last_accepted_ms(&self) -> Option<f64> {
        self.last_accepted_ms
    }
}
