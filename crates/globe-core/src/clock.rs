use instant::Instant;

/// Source of per-frame elapsed time.
pub trait FrameClock {
    /// Seconds since the previous call (or since creation on the first call).
    fn elapsed_seconds(&mut self) -> f32;
}

/// Wall clock. Uses `performance.now()` on wasm.
pub struct InstantClock {
    last: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for InstantClock {
    fn elapsed_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt.as_secs_f32()
    }
}

/// Reports the same step every frame.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    pub step_seconds: f32,
}

impl FixedClock {
    pub fn new(step_seconds: f32) -> Self {
        Self { step_seconds }
    }
}

impl FrameClock for FixedClock {
    fn elapsed_seconds(&mut self) -> f32 {
        self.step_seconds
    }
}
