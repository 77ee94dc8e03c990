//! Error types for the WonderLift animation core

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("animation machine needs at least one state")]
    InvalidStateCount,

    #[error("state {state} out of range (machine has {count} states)")]
    InvalidState { state: usize, count: usize },

    #[error("state {0} cannot link to itself")]
    SelfLink(usize),

    #[error("start frame {start} is past max frame {max}")]
    InvalidFrameRange { start: u32, max: u32 },

    #[error("invalid frame duration: {0}")]
    InvalidDuration(f32),

    #[error("allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("unknown animation state: {0}")]
    UnknownState(String),

    #[error("animation state defined twice: {0}")]
    DuplicateState(String),

    #[error("entity error: {0}")]
    NoSuchEntity(#[from] hecs::NoSuchEntity),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
