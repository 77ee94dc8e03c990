//! Sprite frame targets driven by animation machines
//!
//! An animation machine never owns the sprites it animates. It only refers to
//! them through a copyable handle and, once per update, asks a [`FrameSink`]
//! to show a frame on that handle.

use serde::{Deserialize, Serialize};

/// Opaque handle to a sprite stored in a [`SpriteBank`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// Receiver of "show this frame" requests
pub trait FrameSink<S> {
    /// Display `frame` on the sprite identified by `sprite`
    fn set_frame(&mut self, sprite: S, frame: u32);
}

/// A frame-indexed sprite (one row of a sprite sheet)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    frame: u32,
    frame_count: u32,
}

impl Sprite {
    /// Create a sprite with `frame_count` frames, showing frame 0
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame: 0,
            frame_count,
        }
    }

    /// Currently displayed frame
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Number of frames in the sheet
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Show `frame`. Frames past the end of the sheet are ignored.
    pub fn set_frame(&mut self, frame: u32) {
        if frame >= self.frame_count {
            log::warn!(
                "Ignoring frame {} for sprite with {} frames",
                frame, self.frame_count
            );
            return;
        }
        self.frame = frame;
    }
}

/// Owns a set of sprites addressed by [`SpriteId`]
#[derive(Clone, Debug, Default)]
pub struct SpriteBank {
    sprites: Vec<Sprite>,
}

impl SpriteBank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sprite with `frame_count` frames and return its handle
    pub fn add(&mut self, frame_count: u32) -> SpriteId {
        let id = SpriteId(self.sprites.len() as u32);
        self.sprites.push(Sprite::new(frame_count));
        id
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl FrameSink<SpriteId> for SpriteBank {
    fn set_frame(&mut self, sprite: SpriteId, frame: u32) {
        match self.get_mut(sprite) {
            Some(target) => target.set_frame(frame),
            None => log::warn!("Frame {} sent to unknown sprite {:?}", frame, sprite),
        }
    }
}

impl FrameSink<hecs::Entity> for hecs::World {
    fn set_frame(&mut self, sprite: hecs::Entity, frame: u32) {
        match self.get::<&mut Sprite>(sprite) {
            Ok(mut target) => target.set_frame(frame),
            Err(_) => log::trace!("Entity {:?} has no sprite, dropping frame {}", sprite, frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_set_frame() {
        let mut sprite = Sprite::new(4);
        assert_eq!(sprite.frame(), 0);

        sprite.set_frame(3);
        assert_eq!(sprite.frame(), 3);

        // Out of range frames are ignored
        sprite.set_frame(4);
        assert_eq!(sprite.frame(), 3);
    }

    #[test]
    fn test_bank_handles() {
        let mut bank = SpriteBank::new();
        assert!(bank.is_empty());

        let a = bank.add(2);
        let b = bank.add(8);
        assert_eq!(a, SpriteId(0));
        assert_eq!(b, SpriteId(1));
        assert_eq!(bank.len(), 2);

        bank.set_frame(b, 5);
        assert_eq!(bank.get(b).unwrap().frame(), 5);
        assert_eq!(bank.get(a).unwrap().frame(), 0);

        // Unknown ids are dropped without panicking
        bank.set_frame(SpriteId(9), 1);
        assert!(bank.get(SpriteId(9)).is_none());
    }

    #[test]
    fn test_world_frame_sink() {
        let mut world = hecs::World::new();
        let with_sprite = world.spawn((Sprite::new(6),));
        let without_sprite = world.spawn((42u32,));

        world.set_frame(with_sprite, 4);
        world.set_frame(without_sprite, 4);

        assert_eq!(world.get::<&Sprite>(with_sprite).unwrap().frame(), 4);
        assert!(world.get::<&Sprite>(without_sprite).is_err());
    }
}
