//! Procedural gesture builders
//!
//! Every gesture is generated from the skeleton's rest pose: a rest frame at
//! time zero followed by samples of a parametric curve over `t` in `[0, 1]`,
//! stamped at `t * duration`. Curves only touch the joints the sign uses.

mod alphabet;
mod words;

pub use alphabet::{LETTER_DURATION, LETTER_GESTURES, LETTER_SAMPLES, SIGNING_POINT, letter_gestures};
pub use words::{WORD_GESTURES, word_gestures};

use std::collections::BTreeSet;

use crate::pose::{Pose, PoseOverlay};
use crate::skeleton::JointId;
use crate::timeline::GestureFrame;

/// Curve sampled by a gesture builder: rest pose and `t` in `[0, 1]`
pub type GestureCurve = fn(&Pose, f32) -> PoseOverlay;

/// Static description of a procedurally built gesture
#[derive(Debug, Clone, Copy)]
pub struct GestureDef {
    /// Uppercase gesture name
    pub name: &'static str,
    /// Nominal duration in seconds
    pub duration: f32,
    /// Number of curve samples after the rest frame
    pub samples: usize,
    /// Pose generator
    pub curve: GestureCurve,
}

impl GestureDef {
    /// Generate the gesture's frames from a rest pose
    pub fn build(&self, rest: &Pose) -> Gesture {
        Gesture::new(
            self.name,
            sample_curve(self.duration, self.samples, |t| (self.curve)(rest, t)),
        )
    }
}

/// A named gesture animation
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    name: String,
    frames: Vec<GestureFrame>,
}

impl Gesture {
    /// Create a gesture from frames in timestamp order
    pub fn new(name: impl Into<String>, frames: Vec<GestureFrame>) -> Self {
        Self {
            name: name.into(),
            frames,
        }
    }

    /// Gesture name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keyframes, starting at time zero
    pub fn frames(&self) -> &[GestureFrame] {
        &self.frames
    }

    /// Timestamp of the final frame
    pub fn duration(&self) -> f32 {
        self.frames.last().map_or(0.0, |frame| frame.timestamp)
    }

    /// Every joint moved by at least one frame
    pub fn animated_joints(&self) -> BTreeSet<JointId> {
        self.frames
            .iter()
            .flat_map(|frame| frame.overlay.animated_joints())
            .collect()
    }
}

/// Rest frame at zero, then `samples` evaluations of `curve` over `[0, 1]`
pub(crate) fn sample_curve(
    duration: f32,
    samples: usize,
    mut curve: impl FnMut(f32) -> PoseOverlay,
) -> Vec<GestureFrame> {
    let mut frames = Vec::with_capacity(samples + 1);
    frames.push(GestureFrame::rest(0.0));

    let last = samples.saturating_sub(1).max(1) as f32;
    for i in 0..samples {
        let t = i as f32 / last;
        frames.push(GestureFrame::new(t * duration, curve(t)));
    }

    frames
}
