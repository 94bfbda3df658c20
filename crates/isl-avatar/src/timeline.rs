//! Timestamped frames and composed timelines

use crate::pose::{Pose, PoseOverlay};

/// A pose at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct GestureFrame {
    /// Seconds from the start of the containing animation
    pub timestamp: f32,
    /// Joints that deviate from the rest pose in this frame
    pub overlay: PoseOverlay,
}

impl GestureFrame {
    /// Create a new frame
    pub fn new(timestamp: f32, overlay: PoseOverlay) -> Self {
        Self { timestamp, overlay }
    }

    /// A frame holding the unmodified rest pose
    pub fn rest(timestamp: f32) -> Self {
        Self::new(timestamp, PoseOverlay::new())
    }

    /// Resolve the full pose of this frame
    pub fn pose(&self, rest: &Pose) -> Pose {
        self.overlay.resolve(rest)
    }

    /// Copy of this frame shifted later by `offset` seconds
    pub fn shifted(&self, offset: f32) -> Self {
        Self::new(self.timestamp + offset, self.overlay.clone())
    }

    /// Copy of this frame moved to `timestamp`
    pub fn retimed(&self, timestamp: f32) -> Self {
        Self::new(timestamp, self.overlay.clone())
    }
}

/// An ordered run of frames spanning one or more gestures
///
/// Timestamps never decrease from one frame to the next.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    frames: Vec<GestureFrame>,
}

impl Timeline {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap frames that are already in timestamp order
    pub fn from_frames(frames: Vec<GestureFrame>) -> Self {
        debug_assert!(
            frames
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp),
            "timeline frames must be in timestamp order"
        );
        Self { frames }
    }

    /// Append frames, shifting each by `offset` seconds
    pub fn append_shifted(&mut self, frames: &[GestureFrame], offset: f32) {
        self.frames
            .extend(frames.iter().map(|frame| frame.shifted(offset)));
    }

    /// All frames
    pub fn frames(&self) -> &[GestureFrame] {
        &self.frames
    }

    /// Consume the timeline, returning its frames
    pub fn into_frames(self) -> Vec<GestureFrame> {
        self.frames
    }

    /// Iterate frames in order
    pub fn iter(&self) -> std::slice::Iter<'_, GestureFrame> {
        self.frames.iter()
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if there are no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Timestamp of the last frame, or 0 when empty
    pub fn duration(&self) -> f32 {
        self.frames.last().map_or(0.0, |frame| frame.timestamp)
    }

    /// The latest frame at or before `time`
    ///
    /// Frames are held, not interpolated. Returns None before the first frame
    /// and for an empty timeline.
    pub fn sample_at(&self, time: f32) -> Option<&GestureFrame> {
        let after = self.frames.partition_point(|frame| frame.timestamp <= time);
        after.checked_sub(1).map(|index| &self.frames[index])
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a GestureFrame;
    type IntoIter = std::slice::Iter<'a, GestureFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl IntoIterator for Timeline {
    type Item = GestureFrame;
    type IntoIter = std::vec::IntoIter<GestureFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl From<Vec<GestureFrame>> for Timeline {
    fn from(frames: Vec<GestureFrame>) -> Self {
        Self::from_frames(frames)
    }
}
