//! Sprite animation state machine
//!
//! An [`AnimationMachine`] holds one [`Clip`] per state and plays the current
//! state's frames against an external clock. When a clip runs out of frames
//! the machine picks what happens next, in this order:
//!
//! 1. a transition queued with [`AnimationMachine::set_state`],
//! 2. the state's link, restarting both clips,
//! 3. looping the clip,
//! 4. freezing on the last frame and pausing.
//!
//! Only one step is taken per [`AnimationMachine::update`], however large the
//! delta is.

use super::clip::Clip;
use super::links::LinkTable;
use super::sprite::{FrameSink, SpriteId};
use crate::core::{Error, Result};

/// Request to show `frame` on `sprite`, produced by [`AnimationMachine::update`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCommand<S = SpriteId> {
    pub sprite: S,
    pub frame: u32,
}

/// What an update did once the current clip's delay ran out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipEvent {
    /// Moved to the next frame of the same clip
    Advanced,
    /// Entered the state queued by `set_state`
    Queued { from: usize, to: usize },
    /// Followed a link; both clips restarted
    Linked { from: usize, to: usize },
    /// Restarted a looping clip
    Looped,
    /// Held the last frame and paused
    Finished,
}

/// Per-entity sprite animation state machine
#[derive(Clone, Debug)]
pub struct AnimationMachine<S = SpriteId> {
    clips: Vec<Clip<S>>,
    links: LinkTable,
    current: Option<usize>,
    next: Option<usize>,
    paused: bool,
    last_event: Option<ClipEvent>,
}

impl<S: Copy> AnimationMachine<S> {
    /// Create a machine with `num_states` empty clips and no links
    pub fn new(num_states: usize) -> Result<Self> {
        if num_states == 0 {
            return Err(Error::InvalidStateCount);
        }

        let mut clips = Vec::new();
        clips.try_reserve_exact(num_states)?;
        clips.resize_with(num_states, Clip::default);

        let links = LinkTable::new(num_states)?;

        Ok(Self {
            clips,
            links,
            current: None,
            next: None,
            paused: false,
            last_event: None,
        })
    }

    /// Configure the clip for `state`, replacing whatever was there
    ///
    /// The machine does not enter `state`; use [`Self::set_state`] for that.
    pub fn add(
        &mut self,
        state: usize,
        sprite: Option<S>,
        start_frame: u32,
        max_frame: u32,
        frame_duration: f32,
        looping: bool,
    ) -> Result<()> {
        self.check(state)?;
        if start_frame > max_frame {
            log::warn!(
                "Rejected clip for state {}: start frame {} > max frame {}",
                state, start_frame, max_frame
            );
            return Err(Error::InvalidFrameRange {
                start: start_frame,
                max: max_frame,
            });
        }
        if !frame_duration.is_finite() || frame_duration < 0.0 {
            log::warn!("Rejected clip for state {}: frame duration {}", state, frame_duration);
            return Err(Error::InvalidDuration(frame_duration));
        }

        self.clips[state] = Clip::new(sprite, start_frame, max_frame, frame_duration, looping);
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        !self.paused
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Current state, or `None` before the first `set_state`
    pub fn state(&self) -> Option<usize> {
        self.current
    }

    /// State that will be entered when the current clip runs out
    pub fn next_state(&self) -> Option<usize> {
        self.next
    }

    /// Queue `state` to start once the current clip finishes
    ///
    /// A machine that has never been started enters `state` right away. The
    /// clip position is left alone.
    pub fn set_state(&mut self, state: usize) -> Result<()> {
        self.check(state)?;
        self.next = Some(state);
        if self.current.is_none() {
            self.current = Some(state);
        }
        self.paused = false;
        Ok(())
    }

    /// Switch to `state` immediately without restarting its clip
    pub fn set_state_forced(&mut self, state: usize) -> Result<()> {
        self.check(state)?;
        self.current = Some(state);
        self.next = Some(state);
        self.paused = false;
        Ok(())
    }

    /// Rewind the clip for `state` to its first frame
    pub fn restart(&mut self, state: usize) -> Result<()> {
        self.check(state)?;
        self.clips[state].restart();
        Ok(())
    }

    /// Make `to` follow `from` when `from` runs out
    pub fn link(&mut self, from: usize, to: usize) -> Result<()> {
        self.links.link(from, to).inspect_err(|e| log::warn!("link({}, {}) rejected: {}", from, to, e))
    }

    /// Chain `from -> from+1 -> ... -> to`, wrapping past the last state
    pub fn link_all_to(&mut self, from: usize, to: usize) -> Result<()> {
        self.links
            .link_range(from, to)
            .inspect_err(|e| log::warn!("link_all_to({}, {}) rejected: {}", from, to, e))
    }

    /// Chain every state in order, the last one back to the first
    pub fn link_all(&mut self) {
        self.links.link_all();
    }

    pub fn unlink(&mut self, state: usize) -> Result<()> {
        self.links.unlink(state).inspect_err(|e| log::warn!("unlink({}) rejected: {}", state, e))
    }

    /// Remove the chain installed by [`Self::link_all_to`] with the same bounds
    pub fn unlink_all_to(&mut self, from: usize, to: usize) -> Result<()> {
        self.links
            .unlink_range(from, to)
            .inspect_err(|e| log::warn!("unlink_all_to({}, {}) rejected: {}", from, to, e))
    }

    pub fn unlink_all(&mut self) {
        self.links.unlink_all();
    }

    /// Successor of `state`, if linked
    pub fn link_of(&self, state: usize) -> Option<usize> {
        self.links.get(state)
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    pub fn state_count(&self) -> usize {
        self.clips.len()
    }

    pub fn clip(&self, state: usize) -> Option<&Clip<S>> {
        self.clips.get(state)
    }

    /// Frame of the current clip
    pub fn frame(&self) -> Option<u32> {
        self.current.and_then(|s| self.clips.get(s)).map(Clip::frame)
    }

    /// What the most recent update did when a clip's delay ran out
    pub fn last_event(&self) -> Option<ClipEvent> {
        self.last_event
    }

    /// Advance playback by `dt` seconds
    ///
    /// Returns the frame to show for the current clip, taken before any
    /// transition in this update. Paused or unstarted machines return `None`.
    pub fn update(&mut self, dt: f32) -> Option<FrameCommand<S>> {
        self.last_event = None;
        if self.paused {
            return None;
        }
        let state = self.current.filter(|&s| s < self.clips.len())?;

        let clip = &mut self.clips[state];
        clip.delay -= dt;
        let command = clip.sprite.map(|sprite| FrameCommand {
            sprite,
            frame: clip.frame,
        });
        if let Some(cmd) = &command {
            log::trace!("state {} shows frame {}", state, cmd.frame);
        }

        if clip.delay > 0.0 {
            return command;
        }

        let event = self.finish_frame(state);
        if event != ClipEvent::Advanced {
            log::debug!("state {} clip ended: {:?}", state, event);
        }
        self.last_event = Some(event);
        command
    }

    /// Advance playback and hand the frame to `sink`
    pub fn update_with<K: FrameSink<S> + ?Sized>(&mut self, dt: f32, sink: &mut K) {
        if let Some(cmd) = self.update(dt) {
            sink.set_frame(cmd.sprite, cmd.frame);
        }
    }

    /// Resolve an elapsed frame delay for `state`
    fn finish_frame(&mut self, state: usize) -> ClipEvent {
        if self.clips[state].advance() {
            return ClipEvent::Advanced;
        }

        if let Some(next) = self.next.filter(|&n| n != state) {
            self.current = Some(next);
            return ClipEvent::Queued { from: state, to: next };
        }

        if let Some(linked) = self.links.get(state) {
            self.current = Some(linked);
            self.next = Some(linked);
            self.paused = false;
            self.clips[state].restart();
            self.clips[linked].restart();
            return ClipEvent::Linked { from: state, to: linked };
        }

        let clip = &mut self.clips[state];
        if clip.looping {
            clip.restart();
            ClipEvent::Looped
        } else {
            clip.freeze();
            self.paused = true;
            ClipEvent::Finished
        }
    }

    fn check(&self, state: usize) -> Result<()> {
        if state < self.clips.len() {
            Ok(())
        } else {
            log::warn!(
                "State {} out of range for machine with {} states",
                state,
                self.clips.len()
            );
            Err(Error::InvalidState {
                state,
                count: self.clips.len(),
            })
        }
    }
}
