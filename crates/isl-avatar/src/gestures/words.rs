//! Whole-word sign gestures

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{Gesture, GestureDef};
use crate::pose::{Pose, PoseOverlay};
use crate::skeleton::JointId;

/// The word catalog, in catalog order
pub const WORD_GESTURES: [GestureDef; 10] = [
    GestureDef {
        name: "HELLO",
        duration: 2.0,
        samples: 10,
        curve: hello,
    },
    GestureDef {
        name: "THANK_YOU",
        duration: 1.5,
        samples: 15,
        curve: thank_you,
    },
    GestureDef {
        name: "YES",
        duration: 1.0,
        samples: 8,
        curve: yes,
    },
    GestureDef {
        name: "NO",
        duration: 1.2,
        samples: 12,
        curve: no,
    },
    GestureDef {
        name: "GOOD",
        duration: 1.0,
        samples: 10,
        curve: good,
    },
    GestureDef {
        name: "BAD",
        duration: 1.0,
        samples: 10,
        curve: bad,
    },
    GestureDef {
        name: "WATER",
        duration: 2.0,
        samples: 15,
        curve: water,
    },
    GestureDef {
        name: "FOOD",
        duration: 1.5,
        samples: 12,
        curve: food,
    },
    GestureDef {
        name: "HOME",
        duration: 2.5,
        samples: 20,
        curve: home,
    },
    GestureDef {
        name: "SCHOOL",
        duration: 2.0,
        samples: 15,
        curve: school,
    },
];

/// Build every word gesture from a rest pose
pub fn word_gestures(rest: &Pose) -> Vec<Gesture> {
    WORD_GESTURES.iter().map(|def| def.build(rest)).collect()
}

/// Height the hands reach in front of the mouth
const MOUTH_HEIGHT: f32 = 1.6;

/// Height of the "roof" formed by the hands in HOME
const ROOF_HEIGHT: f32 = 1.4;

/// Right wrist and hand roll back and forth once
fn hello(rest: &Pose, t: f32) -> PoseOverlay {
    let wave = (t * TAU).sin() * 0.3;
    PoseOverlay::new()
        .rotate(rest, JointId::RightWrist, Vec3::new(0.0, 0.0, wave))
        .rotate(rest, JointId::RightHand, Vec3::new(0.0, 0.0, wave))
}

/// Both hands rise toward the chest
fn thank_you(rest: &Pose, t: f32) -> PoseOverlay {
    let chest_y = 1.2 + t * 0.3;
    PoseOverlay::new()
        .place(rest, JointId::LeftHand, Vec3::new(-0.2, chest_y, 0.1))
        .place(rest, JointId::RightHand, Vec3::new(0.2, chest_y, 0.1))
}

/// Head nods forward and back
fn yes(rest: &Pose, t: f32) -> PoseOverlay {
    let pitch = (t * PI).sin() * 0.2;
    PoseOverlay::new()
        .rotate(rest, JointId::Head, Vec3::new(pitch, 0.0, 0.0))
        .rotate(rest, JointId::Neck, Vec3::new(pitch, 0.0, 0.0))
}

/// Head shakes side to side twice
fn no(rest: &Pose, t: f32) -> PoseOverlay {
    let yaw = (t * PI * 4.0).sin() * 0.3;
    PoseOverlay::new()
        .rotate(rest, JointId::Head, Vec3::new(0.0, yaw, 0.0))
        .rotate(rest, JointId::Neck, Vec3::new(0.0, yaw, 0.0))
}

/// Thumbs up, held
fn good(rest: &Pose, _t: f32) -> PoseOverlay {
    PoseOverlay::new()
        .rotate(rest, JointId::RightHand, Vec3::new(0.0, 0.0, 1.57))
        .rotate(rest, JointId::RightWrist, Vec3::new(0.0, 0.0, 0.3))
}

/// Thumbs down, held; mirror of GOOD
fn bad(rest: &Pose, _t: f32) -> PoseOverlay {
    PoseOverlay::new()
        .rotate(rest, JointId::RightHand, Vec3::new(0.0, 0.0, -1.57))
        .rotate(rest, JointId::RightWrist, Vec3::new(0.0, 0.0, -0.3))
}

/// Right hand rises to the mouth as the elbow bends
fn water(rest: &Pose, t: f32) -> PoseOverlay {
    let hand_y = MOUTH_HEIGHT - 0.4 + t * 0.4;
    PoseOverlay::new()
        .place(rest, JointId::RightHand, Vec3::new(0.1, hand_y, 0.2))
        .rotate(rest, JointId::RightElbow, Vec3::new(0.0, 0.0, t * 0.5))
}

/// Right hand dips away from the mouth and comes back
fn food(rest: &Pose, t: f32) -> PoseOverlay {
    let hand_y = MOUTH_HEIGHT - (t - 0.5).abs() * 0.8;
    PoseOverlay::new().place(rest, JointId::RightHand, Vec3::new(0.1, hand_y, 0.2))
}

/// Hands rise to form a roof, then hold
fn home(rest: &Pose, t: f32) -> PoseOverlay {
    let height = if t < 0.5 { 1.2 + t * 0.4 } else { ROOF_HEIGHT };
    PoseOverlay::new()
        .place(rest, JointId::LeftHand, Vec3::new(-0.3, height, 0.1))
        .place(rest, JointId::RightHand, Vec3::new(0.3, height, 0.1))
}

/// Right hand writes across the body
fn school(rest: &Pose, t: f32) -> PoseOverlay {
    PoseOverlay::new()
        .place(rest, JointId::RightHand, Vec3::new(0.2 + t * 0.3, 1.0, 0.1))
        .rotate(rest, JointId::RightWrist, Vec3::new(0.0, 0.0, t * 0.2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::Skeleton;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use test_case::test_case;

    fn build(name: &str) -> Gesture {
        let rest = Skeleton::new().rest_pose();
        word_gestures(&rest)
            .into_iter()
            .find(|g| g.name() == name)
            .unwrap()
    }

    #[test_case("HELLO", 2.0, 11; "hello")]
    #[test_case("THANK_YOU", 1.5, 16; "thank you")]
    #[test_case("YES", 1.0, 9; "yes")]
    #[test_case("NO", 1.2, 13; "no")]
    #[test_case("GOOD", 1.0, 11; "good")]
    #[test_case("BAD", 1.0, 11; "bad")]
    #[test_case("WATER", 2.0, 16; "water")]
    #[test_case("FOOD", 1.5, 13; "food")]
    #[test_case("HOME", 2.5, 21; "home")]
    #[test_case("SCHOOL", 2.0, 16; "school")]
    fn test_gesture_shape(name: &str, duration: f32, frame_count: usize) {
        let gesture = build(name);
        assert_eq!(gesture.frames().len(), frame_count);
        assert!((gesture.duration() - duration).abs() < 1e-6);
        assert_eq!(gesture.frames()[0].timestamp, 0.0);
        assert!(gesture.frames()[0].overlay.is_empty());
    }

    #[test_case("HELLO", &[JointId::RightWrist, JointId::RightHand]; "hello")]
    #[test_case("THANK_YOU", &[JointId::LeftHand, JointId::RightHand]; "thank you")]
    #[test_case("YES", &[JointId::Neck, JointId::Head]; "yes")]
    #[test_case("NO", &[JointId::Neck, JointId::Head]; "no")]
    #[test_case("WATER", &[JointId::RightElbow, JointId::RightHand]; "water")]
    #[test_case("FOOD", &[JointId::RightHand]; "food")]
    #[test_case("SCHOOL", &[JointId::RightWrist, JointId::RightHand]; "school")]
    fn test_only_sign_joints_move(name: &str, joints: &[JointId]) {
        let expected: BTreeSet<JointId> = joints.iter().copied().collect();
        assert_eq!(build(name).animated_joints(), expected);
    }

    #[test]
    fn test_hello_wave_returns_to_center() {
        let gesture = build("HELLO");
        let rolls: Vec<f32> = gesture.frames()[1..]
            .iter()
            .filter_map(|f| f.overlay.get(JointId::RightWrist))
            .map(|s| s.rotation.z)
            .collect();

        assert_eq!(rolls.len(), 10);
        assert!(rolls[0].abs() < 1e-6);
        assert!(rolls[9].abs() < 1e-5);
        assert!(rolls.iter().any(|&r| r > 0.25));
        assert!(rolls.iter().any(|&r| r < -0.25));
    }

    #[test]
    fn test_no_shakes_about_vertical_axis() {
        let gesture = build("NO");
        for frame in &gesture.frames()[1..] {
            let head = frame.overlay.get(JointId::Head).unwrap();
            assert_eq!(head.rotation.x, 0.0);
            assert_eq!(head.rotation.z, 0.0);
        }
    }

    #[test]
    fn test_bad_mirrors_good() {
        let good = build("GOOD");
        let bad = build("BAD");
        for (g, b) in good.frames().iter().zip(bad.frames()) {
            for joint in [JointId::RightHand, JointId::RightWrist] {
                let (g, b) = (g.overlay.get(joint), b.overlay.get(joint));
                assert_eq!(g.map(|s| -s.rotation), b.map(|s| s.rotation));
            }
        }
    }

    #[test]
    fn test_water_ends_at_mouth() {
        let gesture = build("WATER");
        let first = gesture.frames()[1].overlay.get(JointId::RightHand).unwrap();
        let last = gesture.frames()[15].overlay.get(JointId::RightHand).unwrap();
        assert!(first.position.y < last.position.y);
        assert!((last.position.y - MOUTH_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_home_holds_roof() {
        let gesture = build("HOME");
        let heights: Vec<f32> = gesture.frames()[1..]
            .iter()
            .map(|f| f.overlay.get(JointId::LeftHand).unwrap().position.y)
            .collect();

        assert!(heights.windows(2).all(|pair| pair[0] <= pair[1] + 1e-6));
        assert_eq!(*heights.last().unwrap(), ROOF_HEIGHT);
    }

    #[test]
    fn test_rotation_only_gestures_keep_rest_positions() {
        let rest = Skeleton::new().rest_pose();
        let gesture = build("GOOD");
        for frame in gesture.frames() {
            let pose = frame.pose(&rest);
            assert_eq!(
                pose.get(JointId::RightHand).position,
                rest.get(JointId::RightHand).position
            );
        }
    }
}
