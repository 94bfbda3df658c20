//! Portable export of animation frames
//!
//! The structured format is a JSON document:
//!
//! ```json
//! {
//!   "frames": [
//!     {
//!       "timestamp": 0.0,
//!       "joints": {
//!         "hip": { "position": [0.0, 0.9, 0.0], "rotation": [0.0, 0.0, 0.0] }
//!       }
//!     }
//!   ],
//!   "duration": 0.0
//! }
//! ```
//!
//! Every frame lists every joint of the skeleton, resolved against the rest
//! pose.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};
use crate::skeleton::{JointId, JointState, Skeleton};
use crate::timeline::GestureFrame;

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Structured JSON record
    Json,
    /// Biovision hierarchy (not implemented)
    Bvh,
    /// Autodesk FBX (not implemented)
    Fbx,
}

impl ExportFormat {
    /// Every known format
    pub const ALL: [Self; 3] = [Self::Json, Self::Bvh, Self::Fbx];

    /// Lowercase format name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Bvh => "bvh",
            Self::Fbx => "fbx",
        }
    }

    /// Check if frames can be exported in this format
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AvatarError::UnknownFormat(s.to_string()))
    }
}

/// One exported frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub timestamp: f32,
    pub joints: BTreeMap<JointId, JointState>,
}

/// A complete exported animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRecord {
    pub frames: Vec<FrameRecord>,
    /// Timestamp of the last frame, or 0 without frames
    pub duration: f32,
}

impl AnimationRecord {
    /// Build the record for a run of frames
    pub fn from_frames(skeleton: &Skeleton, frames: &[GestureFrame]) -> Self {
        let rest = skeleton.rest_pose();
        let records = frames
            .iter()
            .map(|frame| FrameRecord {
                timestamp: frame.timestamp,
                joints: frame
                    .pose(&rest)
                    .iter()
                    .map(|(id, &state)| (id, state))
                    .collect(),
            })
            .collect();

        Self {
            frames: records,
            duration: frames.last().map_or(0.0, |frame| frame.timestamp),
        }
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a record back from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Export frames in the given format
///
/// Unsupported formats are logged and produce `None`.
pub fn export(
    skeleton: &Skeleton,
    frames: &[GestureFrame],
    format: ExportFormat,
) -> Option<AnimationRecord> {
    match format {
        ExportFormat::Json => Some(AnimationRecord::from_frames(skeleton, frames)),
        ExportFormat::Bvh | ExportFormat::Fbx => {
            log::warn!("Export format '{}' not supported yet", format);
            None
        }
    }
}

/// Export frames as text
///
/// Unsupported formats are logged and produce an empty string.
pub fn export_string(
    skeleton: &Skeleton,
    frames: &[GestureFrame],
    format: ExportFormat,
) -> Result<String> {
    match export(skeleton, frames, format) {
        Some(record) => record.to_json(),
        None => Ok(String::new()),
    }
}
