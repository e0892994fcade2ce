//! Success panel reveal animation state

use std::time::{Duration, Instant};

/// Reveal animation for the success panel
#[derive(Debug)]
pub struct RevealState {
    /// When the panel was revealed
    pub start_time: Instant,
    /// 0.0 (hidden) to 1.0 (fully shown), eased
    pub progress: f32,
}

impl RevealState {
    /// Duration of the slide-in
    const ANIMATION_DURATION: Duration = Duration::from_millis(600);
    /// Rows the panel travels while sliding in
    pub const SLIDE_ROWS: f32 = 4.0;

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            progress: 0.0,
        }
    }

    /// Update animation state based on elapsed time; a finished reveal stays finished
    pub fn update(&mut self) {
        if self.is_complete() {
            return;
        }
        self.update_with_elapsed(self.start_time.elapsed());
    }

    fn update_with_elapsed(&mut self, elapsed: Duration) {
        let linear = (elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32()).min(1.0);
        self.progress = simple_easing::cubic_out(linear);
    }

    /// Remaining vertical offset in rows
    pub fn offset_rows(&self) -> u16 {
        ((1.0 - self.progress) * Self::SLIDE_ROWS).round() as u16
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Jump to the end state
    pub fn skip(&mut self) {
        self.progress = 1.0;
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}
