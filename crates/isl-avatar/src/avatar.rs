//! The engine facade

use crate::compose::{ComposeOptions, compose, sequence};
use crate::error::Result;
use crate::export::{AnimationRecord, ExportFormat, export, export_string};
use crate::library::GestureLibrary;
use crate::player::play;
use crate::skeleton::Skeleton;
use crate::timeline::Timeline;

/// Skeleton and gesture catalog, built once and shared read-only
///
/// Every method takes `&self` and returns freshly allocated output, so one
/// `Avatar` can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Avatar {
    skeleton: Skeleton,
    library: GestureLibrary,
}

impl Avatar {
    /// Engine with the ten word gestures
    pub fn new() -> Self {
        let skeleton = Skeleton::new();
        let library = GestureLibrary::new(&skeleton);
        Self { skeleton, library }
    }

    /// Engine with the word gestures and the A-Z fingerspelling alphabet
    pub fn with_alphabet() -> Self {
        let skeleton = Skeleton::new();
        let library = GestureLibrary::with_alphabet(&skeleton);
        Self { skeleton, library }
    }

    /// Engine over a custom skeleton and catalog
    pub fn from_parts(skeleton: Skeleton, library: GestureLibrary) -> Self {
        Self { skeleton, library }
    }

    /// The joint tree
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// The gesture catalog
    pub fn library(&self) -> &GestureLibrary {
        &self.library
    }

    /// Gesture names in catalog order
    pub fn gestures(&self) -> Vec<&str> {
        self.library.names()
    }

    /// Play one gesture, optionally stretched to `duration` seconds
    pub fn play(&self, name: &str, duration: Option<f32>) -> Result<Timeline> {
        play(&self.library, name, duration)
    }

    /// Compose text with the default pauses
    pub fn compose(&self, text: &str) -> Timeline {
        sequence(&self.library, text, &ComposeOptions::default())
    }

    /// Compose text with explicit pauses, rejecting negative or non-finite ones
    pub fn compose_with(&self, text: &str, options: &ComposeOptions) -> Result<Timeline> {
        compose(&self.library, text, options)
    }

    /// Export a timeline; `None` for unsupported formats
    pub fn export(&self, timeline: &Timeline, format: ExportFormat) -> Option<AnimationRecord> {
        export(&self.skeleton, timeline.frames(), format)
    }

    /// Export a timeline as text; empty for unsupported formats
    pub fn export_string(&self, timeline: &Timeline, format: ExportFormat) -> Result<String> {
        export_string(&self.skeleton, timeline.frames(), format)
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}
