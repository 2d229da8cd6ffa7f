//! Message fade counter.
//!
//! A single scalar bounded to `[0, shown + 1]`: how many of the newest
//! messages are visible and at what opacity. Raised on message arrival,
//! pinned fully open while the input field has focus, and decaying
//! linearly once per frame otherwise.

#[derive(Debug)]
pub struct FadeState {
    value: f32,
    saved: f32,
    shown: usize,
}

impl FadeState {
    pub fn new(shown: usize) -> Self {
        Self {
            value: 0.0,
            saved: 0.0,
            shown,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Raise by one for a newly arrived message, capped at `shown + 1`.
    pub fn raise(&mut self) {
        self.value = (self.value + 1.0).min(self.shown as f32 + 1.0);
    }

    /// Save the current value and pin fully open (input field opened).
    pub fn open(&mut self) {
        self.saved = self.value;
        self.value = self.shown as f32 + 1.0;
    }

    /// Restore the value saved by [`FadeState::open`] (input field closed).
    pub fn restore(&mut self) {
        self.value = self.saved;
    }

    /// Linear decay while the overlay is closed: one message slot per
    /// `fade_frames` of elapsed time, halting at zero.
    pub fn decay(&mut self, delta: f32, fade_frames: f32) {
        self.value = (self.value - delta / fade_frames).max(0.0);
    }

    /// Entries the renderer may touch this frame: index `i` is drawn while
    /// `i < shown`, `i < log_len` and `i as f32 < value`.
    pub fn visible_count(&self, log_len: usize) -> usize {
        self.shown.min(log_len).min(self.value.ceil() as usize)
    }

    /// Opacity for entry `i`: 1.0 when fully visible, the fractional part
    /// of the counter for the entry on the fade boundary.
    pub fn alpha(&self, i: usize) -> f32 {
        (self.value - i as f32).clamp(0.0, 1.0)
    }
}
