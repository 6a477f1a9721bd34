use std::time::{Duration, Instant};

use log::debug;

/// Frames-per-second over rolling one-second windows.
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { window_start: now, frames: 0, fps: 0.0 }
    }

    /// Count one frame. Returns the new rate when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        self.fps = self.frames as f32 / elapsed.as_secs_f32();
        debug!("FPS: {:.1}", self.fps);
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    /// Last published rate (0 until the first window closes).
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
