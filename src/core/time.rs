//! Frame timing utilities

use std::time::{Duration, Instant};

/// Tracks frame timing and supplies the per-step delta that drives animation
pub struct FrameTimer {
    last_frame: Instant,
    delta: Duration,
    /// Upper bound applied to the reported delta (e.g. after a debugger stall)
    max_delta: Option<Duration>,
    frame_count: u64,
    fps_timer: Instant,
    fps: f32,
    fps_frame_count: u32,
}

impl FrameTimer {
    /// Create a new frame timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta: Duration::ZERO,
            max_delta: None,
            frame_count: 0,
            fps_timer: now,
            fps: 0.0,
            fps_frame_count: 0,
        }
    }

    /// Create a timer whose delta never exceeds `max_delta`
    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            max_delta: Some(max_delta),
            ..Self::new()
        }
    }

    /// Call once per frame to update timing
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.delta = match self.max_delta {
            Some(max) => elapsed.min(max),
            None => elapsed,
        };
        self.last_frame = now;
        self.frame_count += 1;
        self.fps_frame_count += 1;

        // Update FPS every second
        let fps_elapsed = now - self.fps_timer;
        if fps_elapsed >= Duration::from_secs(1) {
            self.fps = self.fps_frame_count as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = 0;
            self.fps_timer = now;
        }
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get delta time as Duration
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Get current FPS (updated every second)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
