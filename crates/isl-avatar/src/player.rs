//! Single-gesture playback with optional time rescaling

use crate::error::{AvatarError, Result};
use crate::gestures::Gesture;
use crate::library::GestureLibrary;
use crate::timeline::Timeline;

/// Play a gesture from the catalog
///
/// An unknown name is logged and yields an empty timeline. With a
/// `duration`, timestamps are stretched so the last frame lands on it; poses
/// are left untouched.
pub fn play(library: &GestureLibrary, name: &str, duration: Option<f32>) -> Result<Timeline> {
    let Some(gesture) = library.get(name) else {
        log::warn!("Gesture '{}' not found in catalog", name);
        return Ok(Timeline::new());
    };

    match duration {
        None => Ok(Timeline::from_frames(gesture.frames().to_vec())),
        Some(duration) => rescale(gesture, duration),
    }
}

/// Stretch a gesture so its final frame lands on `duration` seconds
pub fn rescale(gesture: &Gesture, duration: f32) -> Result<Timeline> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(AvatarError::InvalidDuration(duration));
    }

    let original = gesture.duration();
    if original <= 0.0 {
        return Err(AvatarError::DegenerateGesture(gesture.name().to_string()));
    }

    if duration == original {
        return Ok(Timeline::from_frames(gesture.frames().to_vec()));
    }

    log::debug!(
        "Rescaling '{}' from {}s to {}s",
        gesture.name(),
        original,
        duration
    );

    // Scale by the fraction of the original so any finite duration stays
    // finite. Frames at the original end land exactly on the requested end.
    let frames = gesture
        .frames()
        .iter()
        .map(|frame| {
            if frame.timestamp >= original {
                frame.retimed(duration)
            } else {
                frame.retimed(frame.timestamp / original * duration)
            }
        })
        .collect();

    Ok(Timeline::from_frames(frames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::Skeleton;
    use crate::timeline::GestureFrame;
    use test_case::test_case;

    fn library() -> GestureLibrary {
        GestureLibrary::new(&Skeleton::new())
    }

    fn alphabet() -> GestureLibrary {
        GestureLibrary::with_alphabet(&Skeleton::new())
    }

    #[test]
    fn test_play_without_duration_is_catalog_copy() {
        let library = library();
        let timeline = play(&library, "HELLO", None).unwrap();
        assert_eq!(timeline.frames(), library.get("HELLO").unwrap().frames());
    }

    #[test]
    fn test_play_unknown_is_empty() {
        let timeline = play(&library(), "NONEXISTENT", Some(3.0)).unwrap();
        assert!(timeline.is_empty());
    }

    #[test_case(0.5; "shorter")]
    #[test_case(4.0; "longer")]
    #[test_case(2.0; "same")]
    #[test_case(0.001; "tiny")]
    fn test_rescale_lands_on_duration(duration: f32) {
        let timeline = play(&library(), "HELLO", Some(duration)).unwrap();
        assert_eq!(timeline.len(), 11);
        assert_eq!(timeline.frames()[0].timestamp, 0.0);
        assert!((timeline.duration() - duration).abs() < 1e-6);
    }

    #[test_case("A", f32::MAX; "letter to max")]
    #[test_case("Z", 1e38; "letter to 1e38")]
    #[test_case("HELLO", f32::MAX; "word to max")]
    fn test_rescale_to_huge_duration_stays_ordered(name: &str, duration: f32) {
        let timeline = play(&alphabet(), name, Some(duration)).unwrap();
        let stamps: Vec<f32> = timeline.iter().map(|f| f.timestamp).collect();

        assert_eq!(stamps[0], 0.0);
        assert_eq!(timeline.duration(), duration);
        assert!(stamps.iter().all(|t| t.is_finite()));
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_rescale_preserves_proportions_and_poses() {
        let library = library();
        let original = library.get("NO").unwrap();
        let scaled = play(&library, "NO", Some(2.4)).unwrap();

        for (a, b) in original.frames().iter().zip(scaled.frames()) {
            assert!((b.timestamp - a.timestamp * 2.0).abs() < 1e-5);
            assert_eq!(a.overlay, b.overlay);
        }
    }

    #[test_case(0.0; "zero")]
    #[test_case(-1.0; "negative")]
    #[test_case(f32::NAN; "nan")]
    #[test_case(f32::INFINITY; "infinite")]
    fn test_rescale_rejects_invalid_duration(duration: f32) {
        let err = play(&library(), "HELLO", Some(duration)).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidDuration(_)));
    }

    #[test]
    fn test_rescale_rejects_zero_length_gesture() {
        let gesture = Gesture::new("STILL", vec![GestureFrame::rest(0.0)]);
        let err = rescale(&gesture, 1.0).unwrap_err();
        assert!(matches!(err, AvatarError::DegenerateGesture(name) if name == "STILL"));
    }
}
