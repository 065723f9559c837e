//! Smoothed frame rate counter

/// Number of frame durations averaged
pub const FRAME_WINDOW_LEN: usize = 10;

/// Ring buffer of the most recent frame durations (seconds)
#[derive(Debug, Clone, Default)]
pub struct FrameTimeWindow {
    deltas: [f32; FRAME_WINDOW_LEN],
    next: usize,
}

impl FrameTimeWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the oldest slot with `dt`
    pub fn push(&mut self, dt: f32) {
        self.deltas[self.next] = dt;
        self.next = (self.next + 1) % FRAME_WINDOW_LEN;
    }

    pub fn sum(&self) -> f32 {
        self.deltas.iter().sum()
    }

    /// Frames per second over the window rounded half to even, or 0 while the window sums to zero.
    ///
    /// Unfilled slots count as zero-length frames.
    pub fn fps(&self) -> f32 {
        let total = self.sum();
        if total != 0.0 {
            (FRAME_WINDOW_LEN as f32 / total).round_ties_even()
        } else {
            0.0
        }
    }

    pub fn display_text(&self) -> String {
        format!("{:.0}", self.fps())
    }
}
