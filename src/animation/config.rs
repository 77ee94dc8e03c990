//! JSON description of an animation machine
//!
//! Content files name each state, give its frame range and timing, and list
//! the links between states. [`AnimationSetConfig::build`] turns one into a
//! ready-to-run [`AnimationMachine`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::machine::AnimationMachine;
use super::sprite::SpriteId;
use crate::core::{Error, Result};

/// One state's clip
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipConfig {
    /// State name used by links and `initial_state`
    pub name: String,
    /// Sprite the clip draws on
    #[serde(default)]
    pub sprite: Option<SpriteId>,
    pub start_frame: u32,
    pub max_frame: u32,
    /// Seconds per frame
    pub frame_duration: f32,
    #[serde(default)]
    pub looping: bool,
}

/// Link between two named states
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub from: String,
    pub to: String,
}

/// Full animation set for one entity type
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationSetConfig {
    pub name: String,
    /// States in index order
    pub states: Vec<ClipConfig>,
    /// Explicit links, applied after `link_all`
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    /// Chain every state in order before applying `links`
    #[serde(default)]
    pub link_all: bool,
    /// State entered as soon as the machine is built
    #[serde(default)]
    pub initial_state: Option<String>,
}

impl AnimationSetConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync)
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "Loaded animation set '{}' ({} states) from {}",
            config.name,
            config.states.len(),
            path.display()
        );
        Ok(config)
    }

    /// Index of the state called `name`
    pub fn state_index(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|s| s.name == name)
    }

    /// Build a machine using the configured sprite ids as-is
    pub fn build(&self) -> Result<AnimationMachine<SpriteId>> {
        self.build_with(|id| id)
    }

    /// Build a machine, mapping each configured sprite id to a handle
    pub fn build_with<S, F>(&self, mut map_sprite: F) -> Result<AnimationMachine<S>>
    where
        S: Copy,
        F: FnMut(SpriteId) -> S,
    {
        let mut seen = HashSet::new();
        let mut names = self.states.iter().map(|s| s.name.as_str());
        if let Some(dup) = names.find(|name| !seen.insert(*name)) {
            return Err(Error::DuplicateState(dup.to_string()));
        }

        let mut machine = AnimationMachine::new(self.states.len())?;

        for (state, clip) in self.states.iter().enumerate() {
            machine.add(
                state,
                clip.sprite.map(&mut map_sprite),
                clip.start_frame,
                clip.max_frame,
                clip.frame_duration,
                clip.looping,
            )?;
        }

        if self.link_all {
            machine.link_all();
        }
        for link in &self.links {
            let from = self.require(&link.from)?;
            let to = self.require(&link.to)?;
            machine.link(from, to)?;
        }

        if let Some(name) = &self.initial_state {
            machine.set_state(self.require(name)?)?;
        }

        Ok(machine)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.state_index(name)
            .ok_or_else(|| Error::UnknownState(name.to_string()))
    }
}
