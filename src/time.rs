//! Frame clock: converts per-frame timestamps into batched elapsed time.
//!
//! `draw_web()` calls at ~60fps with variable delta. The game model is not
//! time-aware, so the clock accumulates wall-clock milliseconds and releases
//! them in batches of at least one refresh interval. Passive income and the
//! display refresh both run off these batches, never per frame.

pub struct FrameClock {
    /// Minimum batch size in milliseconds (1000 = refresh once per second).
    interval_ms: f64,
    /// Milliseconds accumulated but not yet released.
    accumulator: f64,
    /// Timestamp of the last frame (ms), None before the first frame.
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()` or similar).
    ///
    /// Returns `Some(elapsed_ms)` when at least one interval has accumulated
    /// since the last release, `None` otherwise. Call once per draw frame and
    /// pass the released batch to `Game::tick(elapsed_ms)`.
    pub fn update(&mut self, now_ms: f64) -> Option<u32> {
        let delta = match self.last_timestamp {
            Some(prev) => {
                let d = now_ms - prev;
                // Clamp so a backgrounded tab doesn't dump a huge catch-up batch
                d.clamp(0.0, 5_000.0)
            }
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        if self.accumulator >= self.interval_ms {
            let elapsed = self.accumulator as u32;
            self.accumulator -= elapsed as f64;
            Some(elapsed)
        } else {
            None
        }
    }
}
