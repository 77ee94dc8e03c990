//! Sprite animation state machine

pub mod clip;
pub mod config;
pub mod links;
pub mod machine;
pub mod sprite;

pub use clip::Clip;
pub use config::{AnimationSetConfig, ClipConfig, LinkConfig};
pub use links::LinkTable;
pub use machine::{AnimationMachine, ClipEvent, FrameCommand};
pub use sprite::{FrameSink, Sprite, SpriteBank, SpriteId};
