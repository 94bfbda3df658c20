//! The gesture catalog
//!
//! The catalog is built once from the skeleton's rest pose and is read-only
//! afterwards. Lookups by name are exact and case-sensitive; callers that
//! accept free text uppercase it first.

use std::collections::{HashMap, HashSet};

use crate::error::{AvatarError, Result};
use crate::gestures::{Gesture, letter_gestures, word_gestures};
use crate::skeleton::Skeleton;

/// Read-only collection of named gestures
#[derive(Debug, Clone)]
pub struct GestureLibrary {
    /// Gestures in catalog order
    gestures: Vec<Gesture>,
    /// Name to position in `gestures`
    index: HashMap<String, usize>,
}

impl GestureLibrary {
    /// The ten word gestures
    pub fn new(skeleton: &Skeleton) -> Self {
        let rest = skeleton.rest_pose();
        Self::from_parts(word_gestures(&rest))
    }

    /// The word gestures followed by the A-Z fingerspelling letters
    pub fn with_alphabet(skeleton: &Skeleton) -> Self {
        let rest = skeleton.rest_pose();
        let mut gestures = word_gestures(&rest);
        gestures.extend(letter_gestures(&rest));
        Self::from_parts(gestures)
    }

    /// Build a catalog from custom gestures, checking frame invariants
    pub fn from_gestures(gestures: Vec<Gesture>) -> Result<Self> {
        let mut seen = HashSet::new();
        for gesture in &gestures {
            validate_gesture(gesture)?;
            if !seen.insert(gesture.name()) {
                return Err(AvatarError::ValidationError(format!(
                    "Gesture '{}' is defined more than once",
                    gesture.name()
                )));
            }
        }
        Ok(Self::from_parts(gestures))
    }

    fn from_parts(gestures: Vec<Gesture>) -> Self {
        let index = gestures
            .iter()
            .enumerate()
            .map(|(i, gesture)| (gesture.name().to_string(), i))
            .collect();
        Self { gestures, index }
    }

    /// Look up a gesture by exact name
    pub fn get(&self, name: &str) -> Option<&Gesture> {
        self.index.get(name).map(|&i| &self.gestures[i])
    }

    /// Check if a gesture exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Gesture names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.gestures.iter().map(Gesture::name).collect()
    }

    /// Iterate gestures in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Gesture> {
        self.gestures.iter()
    }

    /// Number of gestures
    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }
}

/// Check that a gesture is non-empty, starts at zero, and never runs backwards
fn validate_gesture(gesture: &Gesture) -> Result<()> {
    let frames = gesture.frames();

    let Some(first) = frames.first() else {
        return Err(AvatarError::ValidationError(format!(
            "Gesture '{}' has no frames",
            gesture.name()
        )));
    };

    if first.timestamp != 0.0 {
        return Err(AvatarError::ValidationError(format!(
            "Gesture '{}' starts at {} instead of 0",
            gesture.name(),
            first.timestamp
        )));
    }

    for (i, pair) in frames.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp || !pair[1].timestamp.is_finite() {
            return Err(AvatarError::ValidationError(format!(
                "Gesture '{}' frame {} at {} does not follow {}",
                gesture.name(),
                i + 1,
                pair[1].timestamp,
                pair[0].timestamp
            )));
        }
    }

    Ok(())
}
