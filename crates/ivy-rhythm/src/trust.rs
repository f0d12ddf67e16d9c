/// Session score accumulated from judged steps.
///
/// The value is clamped to `[MIN, MAX]` after every change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrustMeter {
    value: f32,
}

impl TrustMeter {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Add `delta` (negative to drain) and clamp.
    pub fn apply(&mut self, delta: f32) {
        self.set(self.value + delta);
    }

    pub fn set(&mut self, value: f32) {
        // NaN would escape clamp
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(Self::MIN, Self::MAX);
    }

    pub fn reset(&mut self) {
        self.value = Self::MIN;
    }
}
