//! Escape countdown

/// Countdown the player races against.
///
/// While frozen, neither the elapsed time nor the remaining time moves;
/// only the freeze countdown runs.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Seconds played while not frozen
    elapsed: f32,
    /// Seconds left, floored at 0
    time_left: f32,
    /// Starting time limit
    limit: f32,
    /// Whether the clock is stopped
    frozen: bool,
    /// Seconds of freeze remaining
    freeze_remaining: f32,
}

impl Timer {
    /// Create a timer with `limit` seconds on the clock
    #[must_use]
    pub fn new(limit: f32) -> Self {
        Self {
            elapsed: 0.0,
            time_left: limit,
            limit,
            frozen: false,
            freeze_remaining: 0.0,
        }
    }

    /// Advance by `delta` seconds
    pub fn update(&mut self, delta: f32) {
        if self.frozen {
            self.freeze_remaining -= delta;
            if self.freeze_remaining <= 0.0 {
                self.frozen = false;
                self.freeze_remaining = 0.0;
                log::debug!("Timer unfrozen with {:.1}s left", self.time_left);
            }
            return;
        }

        self.elapsed += delta;
        self.time_left = (self.time_left - delta).max(0.0);
    }

    /// Stop the clock for `duration` seconds, restarting any running freeze
    pub fn freeze(&mut self, duration: f32) {
        self.frozen = true;
        self.freeze_remaining = duration;
        log::debug!("Timer frozen for {duration:.1}s");
    }

    /// Whether the clock is stopped
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Seconds of freeze remaining
    #[must_use]
    pub fn freeze_remaining(&self) -> f32 {
        self.freeze_remaining
    }

    /// Seconds played
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whole seconds played
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed as u32
    }

    /// Seconds left
    #[must_use]
    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// Whole seconds left
    #[must_use]
    pub fn time_left_secs(&self) -> u32 {
        self.time_left as u32
    }

    /// Whether at least `seconds` have been played
    #[must_use]
    pub fn has_reached(&self, seconds: f32) -> bool {
        self.elapsed >= seconds
    }

    /// Whether the countdown has run out
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.time_left <= 0.0
    }

    /// Put the full limit back on the clock and clear any freeze
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.time_left = self.limit;
        self.frozen = false;
        self.freeze_remaining = 0.0;
    }
}
