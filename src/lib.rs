//! Fixed-tick simulation core for a vertical arcade shooter, plus the
//! collaborator boundaries (draw list, HUD, audio cues, sprite loading) a
//! front end needs to drive it.

pub mod assets;
pub mod audio;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod frame;
pub mod spawn;
