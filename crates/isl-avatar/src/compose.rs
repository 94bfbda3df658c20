//! Text to gesture timeline composition
//!
//! Text is split on whitespace and uppercased. A token that names a catalog
//! gesture plays that gesture; any other token is fingerspelled one character
//! at a time, skipping characters the catalog has no gesture for. Gestures
//! are laid end to end with a pause after each word and each letter.

use crate::error::{AvatarError, Result};
use crate::gestures::Gesture;
use crate::library::GestureLibrary;
use crate::timeline::Timeline;

/// Pause after a whole-word gesture, in seconds
pub const DEFAULT_WORD_PAUSE: f32 = 0.5;

/// Pause after a fingerspelled letter, in seconds
pub const DEFAULT_LETTER_PAUSE: f32 = 0.2;

/// Timing parameters for composition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeOptions {
    /// Gap after each whole-word gesture
    pub word_pause: f32,
    /// Gap after each fingerspelled letter
    pub letter_pause: f32,
}

impl ComposeOptions {
    /// Options with explicit pauses, rejecting negative or non-finite values
    pub fn new(word_pause: f32, letter_pause: f32) -> Result<Self> {
        let options = Self {
            word_pause,
            letter_pause,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check that both pauses are finite and not negative
    pub fn validate(&self) -> Result<()> {
        for (kind, pause) in [("Word", self.word_pause), ("Letter", self.letter_pause)] {
            if !pause.is_finite() || pause < 0.0 {
                return Err(AvatarError::ValidationError(format!(
                    "{kind} pause must be a non-negative number of seconds, got {pause}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            word_pause: DEFAULT_WORD_PAUSE,
            letter_pause: DEFAULT_LETTER_PAUSE,
        }
    }
}

/// Compose text into a single timeline
pub fn compose(library: &GestureLibrary, text: &str, options: &ComposeOptions) -> Result<Timeline> {
    options.validate()?;
    Ok(sequence(library, text, options))
}

/// Lay out gestures for `text`; pauses must already be validated
pub(crate) fn sequence(library: &GestureLibrary, text: &str, options: &ComposeOptions) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock = 0.0_f32;
    let mut tokens = 0_usize;

    for token in text.split_whitespace().map(str::to_uppercase) {
        tokens += 1;

        if let Some(gesture) = library.get(&token) {
            clock = append(&mut timeline, gesture, clock, options.word_pause);
            continue;
        }

        log::trace!("Fingerspelling '{}'", token);
        let mut letter = [0_u8; 4];
        for c in token.chars() {
            if let Some(gesture) = library.get(c.encode_utf8(&mut letter)) {
                clock = append(&mut timeline, gesture, clock, options.letter_pause);
            }
        }
    }

    log::debug!(
        "Composed {} tokens into {} frames spanning {}s",
        tokens,
        timeline.len(),
        timeline.duration()
    );

    timeline
}

/// Append a gesture at `clock`, returning the clock after it and its pause
fn append(timeline: &mut Timeline, gesture: &Gesture, clock: f32, pause: f32) -> f32 {
    timeline.append_shifted(gesture.frames(), clock);
    clock + gesture.duration() + pause
}
