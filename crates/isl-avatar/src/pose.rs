//! Full and sparse joint configurations

use std::collections::BTreeMap;

use glam::Vec3;

use crate::skeleton::{JointId, JointState};

/// A complete configuration of every joint
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    joints: [JointState; JointId::COUNT],
}

impl Pose {
    /// State of a joint
    pub fn get(&self, id: JointId) -> &JointState {
        &self.joints[id.index()]
    }

    /// Replace the state of a joint
    pub fn set(&mut self, id: JointId, state: JointState) {
        self.joints[id.index()] = state;
    }

    /// Iterate joints in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (JointId, &JointState)> {
        JointId::ALL.into_iter().zip(self.joints.iter())
    }
}

/// Sparse pose: only the joints that deviate from the rest pose
///
/// Gestures store overlays; a full [`Pose`] is produced by laying the overlay
/// over the rest pose with [`PoseOverlay::resolve`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoseOverlay {
    joints: BTreeMap<JointId, JointState>,
}

impl PoseOverlay {
    /// An overlay that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a joint to an explicit state
    pub fn with(mut self, id: JointId, state: JointState) -> Self {
        self.joints.insert(id, state);
        self
    }

    /// Move a joint, keeping its rotation from the rest pose
    pub fn place(self, rest: &Pose, id: JointId, position: Vec3) -> Self {
        let state = JointState::new(position, self.base(rest, id).rotation);
        self.with(id, state)
    }

    /// Rotate a joint, keeping its position from the rest pose
    pub fn rotate(self, rest: &Pose, id: JointId, rotation: Vec3) -> Self {
        let state = JointState::new(self.base(rest, id).position, rotation);
        self.with(id, state)
    }

    /// Current value for a joint: overlaid if present, otherwise rest
    fn base(&self, rest: &Pose, id: JointId) -> JointState {
        self.joints.get(&id).copied().unwrap_or(*rest.get(id))
    }

    /// Overridden state of a joint, if any
    pub fn get(&self, id: JointId) -> Option<&JointState> {
        self.joints.get(&id)
    }

    /// Joints this overlay animates
    pub fn animated_joints(&self) -> impl Iterator<Item = JointId> + '_ {
        self.joints.keys().copied()
    }

    /// Number of overridden joints
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Check if the overlay leaves the rest pose untouched
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Lay this overlay over a rest pose
    pub fn resolve(&self, rest: &Pose) -> Pose {
        let mut pose = *rest;
        for (&id, &state) in &self.joints {
            pose.set(id, state);
        }
        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::Skeleton;

    #[test]
    fn test_empty_overlay_resolves_to_rest() {
        let rest = Skeleton::new().rest_pose();
        assert_eq!(PoseOverlay::new().resolve(&rest), rest);
    }

    #[test]
    fn test_rotate_keeps_rest_position() {
        let rest = Skeleton::new().rest_pose();
        let overlay =
            PoseOverlay::new().rotate(&rest, JointId::RightWrist, Vec3::new(0.0, 0.0, 0.3));

        let pose = overlay.resolve(&rest);
        let wrist = pose.get(JointId::RightWrist);
        assert_eq!(wrist.position, rest.get(JointId::RightWrist).position);
        assert_eq!(wrist.rotation, Vec3::new(0.0, 0.0, 0.3));
        assert_eq!(pose.get(JointId::LeftWrist), rest.get(JointId::LeftWrist));
    }

    #[test]
    fn test_place_then_rotate_combines() {
        let rest = Skeleton::new().rest_pose();
        let overlay = PoseOverlay::new()
            .place(&rest, JointId::RightHand, Vec3::new(0.1, 1.6, 0.2))
            .rotate(&rest, JointId::RightHand, Vec3::new(0.5, 0.0, 0.0));

        let hand = overlay.get(JointId::RightHand).copied().unwrap_or_default();
        assert_eq!(hand.position, Vec3::new(0.1, 1.6, 0.2));
        assert_eq!(hand.rotation, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn test_pose_iter_order() {
        let rest = Skeleton::new().rest_pose();
        let ids: Vec<JointId> = rest.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, JointId::ALL.to_vec());
    }
}
