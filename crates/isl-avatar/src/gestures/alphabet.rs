//! Fingerspelling letters A-Z
//!
//! Each letter brings the right hand up to a fixed signing point and holds a
//! wrist handshape derived from the letter's position in the alphabet.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use super::{Gesture, GestureDef};
use crate::pose::{Pose, PoseOverlay};
use crate::skeleton::JointId;

/// Duration of one fingerspelled letter in seconds
pub const LETTER_DURATION: f32 = 0.6;

/// Curve samples per letter
pub const LETTER_SAMPLES: usize = 6;

/// Where the right hand forms letters, in front of the right shoulder
pub const SIGNING_POINT: Vec3 = Vec3::new(0.25, 1.35, 0.15);

/// Letter `GestureDef`s, each with a curve bound to its alphabet index
macro_rules! letter_table {
    ($($letter:ident => $index:literal),* $(,)?) => {
        [$(
            GestureDef {
                name: stringify!($letter),
                duration: LETTER_DURATION,
                samples: LETTER_SAMPLES,
                curve: {
                    fn curve(rest: &Pose, t: f32) -> PoseOverlay {
                        letter_pose(rest, $index, t)
                    }
                    curve
                },
            }
        ),*]
    };
}

/// The fingerspelling catalog, A to Z
pub const LETTER_GESTURES: [GestureDef; 26] = letter_table![
    A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6,
    H => 7, I => 8, J => 9, K => 10, L => 11, M => 12, N => 13,
    O => 14, P => 15, Q => 16, R => 17, S => 18, T => 19, U => 20,
    V => 21, W => 22, X => 23, Y => 24, Z => 25,
];

/// Build the 26 letter gestures from a rest pose
pub fn letter_gestures(rest: &Pose) -> Vec<Gesture> {
    LETTER_GESTURES.iter().map(|def| def.build(rest)).collect()
}

/// Wrist rotation for the letter at `index` (0 = A)
fn handshape(index: usize) -> Vec3 {
    Vec3::new(
        0.1 * (index % 3) as f32,
        0.0,
        -FRAC_PI_2 + PI * index as f32 / 25.0,
    )
}

fn letter_pose(rest: &Pose, index: usize, t: f32) -> PoseOverlay {
    let shape = handshape(index);

    // Reach the signing point by the halfway mark, then hold
    let reach = (t * 2.0).min(1.0);
    let eased = reach * reach * (3.0 - 2.0 * reach);

    let hand = rest.get(JointId::RightHand).position.lerp(SIGNING_POINT, eased);
    PoseOverlay::new()
        .place(rest, JointId::RightHand, hand)
        .rotate(rest, JointId::RightWrist, shape * eased)
}
