use std::time::Instant;

/// Instantaneous frame rate from the wall-clock gap between successive
/// frames. No smoothing is applied to the reported value.
///
/// A non-positive gap (first frame, clock anomaly) leaves the rate
/// unchanged, but the reference instant still advances.
pub struct FpsTracker {
    previous: Option<Instant>,
    fps: f64,
}

impl FpsTracker {
    pub fn new() -> Self {
        Self {
            previous: None,
            fps: 0.0,
        }
    }

    /// Called exactly once per processed frame.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f64 {
        if let Some(previous) = self.previous {
            if let Some(delta) = now.checked_duration_since(previous) {
                let secs = delta.as_secs_f64();
                if secs > 0.0 {
                    self.fps = 1.0 / secs;
                }
            }
        }
        self.previous = Some(now);
        self.fps
    }

    pub fn current(&self) -> f64 {
        self.fps
    }
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}
