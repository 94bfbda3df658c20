//! Humanoid joint hierarchy used by every gesture
//!
//! The skeleton is an upper-body tree rooted at the hip:
//!
//! ```text
//! hip
//! └── spine
//!     ├── neck ── head
//!     ├── left_shoulder ── left_elbow ── left_wrist ── left_hand
//!     └── right_shoulder ── right_elbow ── right_wrist ── right_hand
//! ```
//!
//! Positions are in meters, y-up, with the origin on the ground beneath the
//! figure. Left-side joints sit at negative x.

use std::fmt;
use std::str::FromStr;

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};
use crate::pose::Pose;

/// Identifier of a skeleton joint
///
/// Declaration order is the depth-first order from the root, which is also
/// the order joints appear in exported frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointId {
    Hip,
    Spine,
    Neck,
    Head,
    LeftShoulder,
    LeftElbow,
    LeftWrist,
    LeftHand,
    RightShoulder,
    RightElbow,
    RightWrist,
    RightHand,
}

impl JointId {
    /// Number of joints in the skeleton
    pub const COUNT: usize = 12;

    /// Every joint, in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hip,
        Self::Spine,
        Self::Neck,
        Self::Head,
        Self::LeftShoulder,
        Self::LeftElbow,
        Self::LeftWrist,
        Self::LeftHand,
        Self::RightShoulder,
        Self::RightElbow,
        Self::RightWrist,
        Self::RightHand,
    ];

    /// Dense index of this joint, usable for array storage
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hip => "hip",
            Self::Spine => "spine",
            Self::Neck => "neck",
            Self::Head => "head",
            Self::LeftShoulder => "left_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::LeftWrist => "left_wrist",
            Self::LeftHand => "left_hand",
            Self::RightShoulder => "right_shoulder",
            Self::RightElbow => "right_elbow",
            Self::RightWrist => "right_wrist",
            Self::RightHand => "right_hand",
        }
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointId {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AvatarError::UnknownJoint(s.to_string()))
    }
}

/// Position and Euler rotation of a single joint
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointState {
    /// Position in meters
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
}

impl JointState {
    /// Create a joint state from a position and rotation
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Create an unrotated joint state at the given position
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Rotation as a quaternion
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// A joint of the skeleton with its rest state and tree links
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub id: JointId,
    pub rest: JointState,
    pub parent: Option<JointId>,
    pub children: Vec<JointId>,
}

impl Joint {
    /// Joint name
    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    /// Check if this is the root joint
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Rest layout: joint, parent, rest position
const JOINT_TABLE: [(JointId, Option<JointId>, Vec3); JointId::COUNT] = [
    (JointId::Hip, None, Vec3::new(0.0, 0.9, 0.0)),
    (JointId::Spine, Some(JointId::Hip), Vec3::new(0.0, 1.3, 0.0)),
    (JointId::Neck, Some(JointId::Spine), Vec3::new(0.0, 1.6, 0.0)),
    (JointId::Head, Some(JointId::Neck), Vec3::new(0.0, 1.8, 0.0)),
    (
        JointId::LeftShoulder,
        Some(JointId::Spine),
        Vec3::new(-0.3, 1.5, 0.0),
    ),
    (
        JointId::LeftElbow,
        Some(JointId::LeftShoulder),
        Vec3::new(-0.5, 1.2, 0.0),
    ),
    (
        JointId::LeftWrist,
        Some(JointId::LeftElbow),
        Vec3::new(-0.7, 0.9, 0.0),
    ),
    (
        JointId::LeftHand,
        Some(JointId::LeftWrist),
        Vec3::new(-0.8, 0.7, 0.0),
    ),
    (
        JointId::RightShoulder,
        Some(JointId::Spine),
        Vec3::new(0.3, 1.5, 0.0),
    ),
    (
        JointId::RightElbow,
        Some(JointId::RightShoulder),
        Vec3::new(0.5, 1.2, 0.0),
    ),
    (
        JointId::RightWrist,
        Some(JointId::RightElbow),
        Vec3::new(0.7, 0.9, 0.0),
    ),
    (
        JointId::RightHand,
        Some(JointId::RightWrist),
        Vec3::new(0.8, 0.7, 0.0),
    ),
];

/// The immutable joint tree
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    /// Joints indexed by `JointId::index`
    joints: Vec<Joint>,
}

impl Skeleton {
    /// Build the standard humanoid skeleton
    pub fn new() -> Self {
        let mut joints: Vec<Joint> = JOINT_TABLE
            .iter()
            .map(|&(id, parent, position)| Joint {
                id,
                rest: JointState::at(position),
                parent,
                children: Vec::new(),
            })
            .collect();

        // Children are derived from parent links so both sides always agree
        for &(id, parent, _) in &JOINT_TABLE {
            if let Some(parent) = parent {
                joints[parent.index()].children.push(id);
            }
        }

        Self { joints }
    }

    /// Build a skeleton from explicit joints, checking the tree invariants
    ///
    /// Joints may be given in any order but every `JointId` must appear
    /// exactly once.
    pub fn from_joints(joints: Vec<Joint>) -> Result<Self> {
        let mut slots: Vec<Option<Joint>> = vec![None; JointId::COUNT];
        for joint in joints {
            let index = joint.id.index();
            if slots[index].is_some() {
                return Err(AvatarError::ValidationError(format!(
                    "Joint '{}' is defined more than once",
                    joint.id
                )));
            }
            slots[index] = Some(joint);
        }

        let joints = slots
            .into_iter()
            .zip(JointId::ALL)
            .map(|(slot, id)| {
                slot.ok_or_else(|| {
                    AvatarError::ValidationError(format!("Joint '{}' is missing", id))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let skeleton = Self { joints };
        skeleton.validate()?;
        Ok(skeleton)
    }

    /// Get a joint by id
    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.index()]
    }

    /// Look up a joint by its name
    pub fn joint_by_name(&self, name: &str) -> Option<&Joint> {
        name.parse::<JointId>().ok().map(|id| self.joint(id))
    }

    /// All joints in declaration order
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Number of joints
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Check if the skeleton has no joints
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// The root joint
    pub fn root(&self) -> &Joint {
        self.joint(JointId::Hip)
    }

    /// The rest pose of every joint
    pub fn rest_pose(&self) -> Pose {
        let mut pose = Pose::default();
        for joint in &self.joints {
            pose.set(joint.id, joint.rest);
        }
        pose
    }

    /// Joints in depth-first order starting at the root
    ///
    /// Each joint is visited at most once, so a malformed hierarchy shows up
    /// as a shorter traversal rather than an endless one.
    pub fn traverse(&self) -> Vec<&Joint> {
        let mut order = Vec::with_capacity(self.joints.len());
        let mut visited = [false; JointId::COUNT];
        let mut stack: Vec<JointId> = self
            .joints
            .iter()
            .filter(|j| j.is_root())
            .map(|j| j.id)
            .collect();

        while let Some(id) = stack.pop() {
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;

            let joint = self.joint(id);
            order.push(joint);
            stack.extend(joint.children.iter().rev().copied());
        }

        order
    }

    /// Depth of a joint below the root (the root has depth 0)
    pub fn depth(&self, id: JointId) -> usize {
        let mut depth = 0;
        let mut current = self.joint(id).parent;
        while let Some(parent) = current {
            depth += 1;
            if depth > JointId::COUNT {
                break;
            }
            current = self.joint(parent).parent;
        }
        depth
    }

    /// Validate the tree invariants
    pub fn validate(&self) -> Result<()> {
        for (index, joint) in self.joints.iter().enumerate() {
            if joint.id.index() != index {
                return Err(AvatarError::ValidationError(format!(
                    "Joint '{}' stored at slot {}",
                    joint.id, index
                )));
            }
        }

        let roots: Vec<JointId> = self
            .joints
            .iter()
            .filter(|j| j.is_root())
            .map(|j| j.id)
            .collect();
        if roots.len() != 1 {
            return Err(AvatarError::ValidationError(format!(
                "Expected exactly one root joint, found {}",
                roots.len()
            )));
        }

        for joint in &self.joints {
            if let Some(parent) = joint.parent
                && !self.joint(parent).children.contains(&joint.id)
            {
                return Err(AvatarError::ValidationError(format!(
                    "Joint '{}' names '{}' as parent, but '{}' does not list it as a child",
                    joint.id, parent, parent
                )));
            }

            for &child in &joint.children {
                if self.joint(child).parent != Some(joint.id) {
                    return Err(AvatarError::ValidationError(format!(
                        "Joint '{}' lists '{}' as a child, but '{}' has a different parent",
                        joint.id, child, child
                    )));
                }
            }
        }

        let reached = self.traverse().len();
        if reached != self.joints.len() {
            return Err(AvatarError::ValidationError(format!(
                "Traversal from '{}' reaches {} of {} joints",
                roots[0],
                reached,
                self.joints.len()
            )));
        }

        Ok(())
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_skeleton_is_valid() {
        let skeleton = Skeleton::new();
        assert_eq!(skeleton.len(), JointId::COUNT);
        assert!(skeleton.validate().is_ok());
    }

    #[test]
    fn test_parent_child_symmetry() {
        let skeleton = Skeleton::new();
        for joint in skeleton.joints() {
            if let Some(parent) = joint.parent {
                assert!(skeleton.joint(parent).children.contains(&joint.id));
            }
            for &child in &joint.children {
                assert_eq!(skeleton.joint(child).parent, Some(joint.id));
            }
        }
    }

    #[test]
    fn test_traversal_reaches_every_joint_once() {
        let skeleton = Skeleton::new();
        let order: Vec<JointId> = skeleton.traverse().iter().map(|j| j.id).collect();

        assert_eq!(order.len(), JointId::COUNT);
        assert_eq!(order[0], JointId::Hip);
        for id in JointId::ALL {
            assert_eq!(order.iter().filter(|&&o| o == id).count(), 1);
        }
        // Depth-first: the neck chain is finished before the left arm starts
        assert_eq!(
            order[..4],
            [JointId::Hip, JointId::Spine, JointId::Neck, JointId::Head]
        );
    }

    #[test]
    fn test_spine_children_order() {
        let skeleton = Skeleton::new();
        assert_eq!(
            skeleton.joint(JointId::Spine).children,
            vec![JointId::Neck, JointId::LeftShoulder, JointId::RightShoulder]
        );
    }

    #[test]
    fn test_joint_names_round_trip() {
        for id in JointId::ALL {
            assert_eq!(id.as_str().parse::<JointId>().ok(), Some(id));
        }
        assert!(matches!(
            "tail".parse::<JointId>(),
            Err(AvatarError::UnknownJoint(_))
        ));
    }

    #[test]
    fn test_depth() {
        let skeleton = Skeleton::new();
        assert_eq!(skeleton.depth(JointId::Hip), 0);
        assert_eq!(skeleton.depth(JointId::Head), 3);
        assert_eq!(skeleton.depth(JointId::RightHand), 5);
    }

    #[test]
    fn test_from_joints_rejects_asymmetric_links() {
        let mut joints = Skeleton::new().joints().to_vec();
        joints[JointId::Spine.index()]
            .children
            .retain(|&c| c != JointId::Neck);

        let err = Skeleton::from_joints(joints).unwrap_err();
        assert!(matches!(err, AvatarError::ValidationError(_)));
    }

    #[test]
    fn test_from_joints_rejects_second_root() {
        let mut joints = Skeleton::new().joints().to_vec();
        joints[JointId::Spine.index()]
            .children
            .retain(|&c| c != JointId::Neck);
        joints[JointId::Neck.index()].parent = None;

        let err = Skeleton::from_joints(joints).unwrap_err();
        assert!(err.to_string().contains("exactly one root"));
    }

    #[test]
    fn test_from_joints_rejects_missing_joint() {
        let joints: Vec<Joint> = Skeleton::new()
            .joints()
            .iter()
            .filter(|j| j.id != JointId::LeftHand)
            .cloned()
            .collect();

        let err = Skeleton::from_joints(joints).unwrap_err();
        assert!(err.to_string().contains("left_hand"));
    }

    #[test]
    fn test_from_joints_accepts_reordered_input() {
        let mut joints = Skeleton::new().joints().to_vec();
        joints.reverse();
        let skeleton = Skeleton::from_joints(joints).unwrap();
        assert_eq!(skeleton, Skeleton::new());
    }

    #[test]
    fn test_orientation_of_zero_rotation_is_identity() {
        let state = JointState::at(Vec3::new(1.0, 2.0, 3.0));
        assert!(state.orientation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
