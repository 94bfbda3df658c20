//! Skeletal gesture-animation engine for Indian Sign Language avatars.
//!
//! The engine defines a humanoid joint hierarchy, builds a fixed catalog of
//! sign gestures as keyframe sequences over it, plays single gestures
//! (optionally time-scaled), composes free text into one timeline with
//! fingerspelling for unknown words, and exports timelines as JSON.
//!
//! Everything is deterministic and synchronous. The skeleton and catalog are
//! built once; all operations produce new data and never mutate them.
//!
//! # Examples
//!
//! ```
//! use isl_avatar::{Avatar, ExportFormat};
//!
//! let avatar = Avatar::with_alphabet();
//!
//! let hello = avatar.play("HELLO", Some(1.0)).unwrap();
//! assert!((hello.duration() - 1.0).abs() < 1e-6);
//!
//! let sentence = avatar.compose("hello sam");
//! let record = avatar.export(&sentence, ExportFormat::Json).unwrap();
//! assert_eq!(record.frame_count(), sentence.len());
//! ```

#![forbid(unsafe_code)]

pub mod avatar;
pub mod compose;
pub mod error;
pub mod export;
pub mod gestures;
pub mod library;
pub mod player;
pub mod pose;
pub mod skeleton;
pub mod timeline;

// Re-export common types
pub use avatar::Avatar;
pub use compose::ComposeOptions;
pub use error::{AvatarError, Result};
pub use export::{AnimationRecord, ExportFormat, FrameRecord};
pub use gestures::Gesture;
pub use library::GestureLibrary;
pub use pose::{Pose, PoseOverlay};
pub use skeleton::{Joint, JointId, JointState, Skeleton};
pub use timeline::{GestureFrame, Timeline};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
