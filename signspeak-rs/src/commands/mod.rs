//! Command implementations

pub mod compose;
pub mod gestures;
pub mod play;
pub mod skeleton;
