//! Per-state sprite clip

use super::sprite::SpriteId;

/// Frame range and timing for one animation state
///
/// `initial_frame <= frame <= max_frame` always holds. `delay` counts down
/// to the next frame advance and is refilled with `frame_duration`.
#[derive(Clone, Debug, PartialEq)]
pub struct Clip<S = SpriteId> {
    /// Sprite the clip draws on, if any
    pub(crate) sprite: Option<S>,
    pub(crate) initial_frame: u32,
    pub(crate) frame: u32,
    pub(crate) max_frame: u32,
    /// Seconds each frame stays on screen
    pub(crate) frame_duration: f32,
    /// Seconds until the next frame advance
    pub(crate) delay: f32,
    pub(crate) looping: bool,
}

impl<S> Default for Clip<S> {
    fn default() -> Self {
        Self {
            sprite: None,
            initial_frame: 0,
            frame: 0,
            max_frame: 0,
            frame_duration: 0.0,
            delay: 0.0,
            looping: false,
        }
    }
}

impl<S: Copy> Clip<S> {
    /// Create a clip positioned on its first frame with a full delay
    ///
    /// Callers must pass `start_frame <= max_frame`; `AnimationMachine::add`
    /// checks this before building a clip.
    pub(crate) fn new(
        sprite: Option<S>,
        start_frame: u32,
        max_frame: u32,
        frame_duration: f32,
        looping: bool,
    ) -> Self {
        Self {
            sprite,
            initial_frame: start_frame,
            frame: start_frame,
            max_frame,
            frame_duration,
            delay: frame_duration,
            looping,
        }
    }

    pub fn sprite(&self) -> Option<S> {
        self.sprite
    }

    pub fn initial_frame(&self) -> u32 {
        self.initial_frame
    }

    /// Frame the clip is currently showing
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn max_frame(&self) -> u32 {
        self.max_frame
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Number of frames between the first and last frame, inclusive
    pub fn frame_count(&self) -> u64 {
        u64::from(self.max_frame - self.initial_frame) + 1
    }

    /// True once the clip sits on its last frame
    pub fn is_on_last_frame(&self) -> bool {
        self.frame >= self.max_frame
    }

    /// Move back to the first frame with a full delay
    pub fn restart(&mut self) {
        self.frame = self.initial_frame;
        self.delay = self.frame_duration;
    }

    /// Step one frame forward. Returns false when already on the last frame.
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_on_last_frame() {
            return false;
        }
        self.frame += 1;
        self.delay = self.frame_duration;
        true
    }

    /// Hold the last frame with no time left
    pub(crate) fn freeze(&mut self) {
        self.frame = self.max_frame;
        self.delay = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_creation() {
        let clip: Clip = Clip::new(Some(SpriteId(3)), 2, 5, 0.1, true);
        assert_eq!(clip.sprite(), Some(SpriteId(3)));
        assert_eq!(clip.initial_frame(), 2);
        assert_eq!(clip.frame(), 2);
        assert_eq!(clip.max_frame(), 5);
        assert_eq!(clip.delay(), 0.1);
        assert_eq!(clip.frame_count(), 4);
        assert!(clip.is_looping());
    }

    #[test]
    fn test_frame_count_full_range() {
        let clip: Clip = Clip::new(None, 0, u32::MAX, 0.1, false);
        assert_eq!(clip.frame_count(), 1u64 << 32);

        let single: Clip = Clip::new(None, u32::MAX, u32::MAX, 0.1, false);
        assert_eq!(single.frame_count(), 1);
    }

    #[test]
    fn test_default_clip_is_empty() {
        let clip: Clip = Clip::default();
        assert_eq!(clip.sprite(), None);
        assert_eq!(clip.frame(), 0);
        assert_eq!(clip.max_frame(), 0);
        assert!(clip.is_on_last_frame());
    }

    #[test]
    fn test_advance_stops_at_max() {
        let mut clip: Clip = Clip::new(None, 0, 2, 0.5, false);
        clip.delay = 0.0;

        assert!(clip.advance());
        assert_eq!(clip.frame(), 1);
        assert_eq!(clip.delay(), 0.5);

        assert!(clip.advance());
        assert!(clip.is_on_last_frame());

        assert!(!clip.advance());
        assert_eq!(clip.frame(), 2);
    }

    #[test]
    fn test_restart_and_freeze() {
        let mut clip: Clip = Clip::new(None, 1, 4, 0.25, false);
        clip.advance();
        clip.advance();
        clip.delay = 0.1;

        clip.restart();
        assert_eq!(clip.frame(), 1);
        assert_eq!(clip.delay(), 0.25);

        clip.freeze();
        assert_eq!(clip.frame(), 4);
        assert_eq!(clip.delay(), 0.0);
    }
}
