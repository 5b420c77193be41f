/// Throttled timer - minimum interval between fires, used to keep
/// per-frame logging readable
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    since_last: f32,
}

impl Throttled {
    /// Create throttled timer with minimum interval in seconds
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            since_last: min_interval, // Allow immediate first fire
        }
    }

    /// Accumulate `delta` seconds, returns true if enough time has passed
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.since_last += delta;

        if self.since_last >= self.min_interval {
            self.since_last = 0.0;
            true
        } else {
            false
        }
    }
}
