//! Frame cadence throttle.
//!
//! The host timer calls [`FrameTicker::tick`] every time it fires; frames
//! arriving faster than the target rate are skipped, never blocked.
//! Cancellation is simply "stop calling tick".

#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: f64,
    last: Option<f64>,
}

impl FrameTicker {
    /// `fps` must be positive (see `RenderParams::validate`).
    pub fn new(fps: f64) -> Self {
        Self {
            interval: 1.0 / fps,
            last: None,
        }
    }

    /// Returns true when the frame at `now` (seconds) should run. The first
    /// call always runs.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
