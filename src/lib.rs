//! WonderLift - sprite animation state machine and its game-loop plumbing

pub mod core;
pub mod animation;
pub mod entity;
