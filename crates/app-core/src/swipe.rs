//! Swipe gesture interpretation
//!
//! Maps the final offset of a drag on a recipe card to a discrete decision.
//! Horizontal thresholds win over the vertical one, and every comparison is
//! strict, so a drag that lands exactly on a threshold is reverted.

use serde::{Deserialize, Serialize};

/// Horizontal distance (logical pixels) a card must travel to count as a swipe
pub const DEFAULT_HORIZONTAL_THRESHOLD: f32 = 150.0;

/// Downward distance (logical pixels) that opens the detail overlay
pub const DEFAULT_VERTICAL_THRESHOLD: f32 = 100.0;

/// Outcome of a completed drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    /// Swiped right: choose this recipe
    Accept,
    /// Swiped left: pass on this recipe
    Reject,
    /// Pulled down: open the full recipe overlay
    ShowDetails,
    /// Not far enough; the card snaps back
    None,
}

impl SwipeDecision {
    /// Whether this decision moves the deck to the next card
    pub fn advances_cursor(&self) -> bool {
        matches!(self, SwipeDecision::Accept | SwipeDecision::Reject)
    }
}

/// Distance thresholds used to classify a drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeThresholds {
    /// Minimum |x| offset for accept/reject (exclusive)
    pub horizontal: f32,
    /// Minimum downward y offset for details (exclusive)
    pub vertical: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_HORIZONTAL_THRESHOLD,
            vertical: DEFAULT_VERTICAL_THRESHOLD,
        }
    }
}

impl SwipeThresholds {
    /// Classify a drag's final offset from its origin
    pub fn classify(&self, offset_x: f32, offset_y: f32) -> SwipeDecision {
        if offset_x > self.horizontal {
            SwipeDecision::Accept
        } else if offset_x < -self.horizontal {
            SwipeDecision::Reject
        } else if offset_y > self.vertical {
            SwipeDecision::ShowDetails
        } else {
            SwipeDecision::None
        }
    }
}

/// Classify a drag using the default thresholds
///
/// # Example
///
/// ```rust
/// use app_core::swipe::{classify, SwipeDecision};
///
/// assert_eq!(classify(151.0, 0.0), SwipeDecision::Accept);
/// assert_eq!(classify(150.0, 0.0), SwipeDecision::None);
/// assert_eq!(classify(0.0, 101.0), SwipeDecision::ShowDetails);
/// ```
pub fn classify(offset_x: f32, offset_y: f32) -> SwipeDecision {
    SwipeThresholds::default().classify(offset_x, offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_horizontal() {
        assert_eq!(classify(151.0, 0.0), SwipeDecision::Accept);
        assert_eq!(classify(-151.0, 0.0), SwipeDecision::Reject);
        assert_eq!(classify(400.0, -30.0), SwipeDecision::Accept);
    }

    #[test]
    fn test_classify_boundaries_are_strict() {
        assert_eq!(classify(150.0, 0.0), SwipeDecision::None);
        assert_eq!(classify(-150.0, 0.0), SwipeDecision::None);
        assert_eq!(classify(0.0, 100.0), SwipeDecision::None);
    }

    #[test]
    fn test_classify_vertical() {
        assert_eq!(classify(0.0, 101.0), SwipeDecision::ShowDetails);
        assert_eq!(classify(-149.0, 250.0), SwipeDecision::ShowDetails);
        // Upward drags never open details
        assert_eq!(classify(0.0, -300.0), SwipeDecision::None);
    }

    #[test]
    fn test_horizontal_takes_priority() {
        assert_eq!(classify(151.0, 101.0), SwipeDecision::Accept);
        assert_eq!(classify(-151.0, 500.0), SwipeDecision::Reject);
    }

    #[test]
    fn test_small_drag_reverts() {
        assert_eq!(classify(0.0, 0.0), SwipeDecision::None);
        assert_eq!(classify(40.0, 60.0), SwipeDecision::None);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = SwipeThresholds { horizontal: 50.0, vertical: 20.0 };
        assert_eq!(thresholds.classify(51.0, 0.0), SwipeDecision::Accept);
        assert_eq!(thresholds.classify(0.0, 21.0), SwipeDecision::ShowDetails);
        assert_eq!(thresholds.classify(50.0, 20.0), SwipeDecision::None);
    }

    #[test]
    fn test_advances_cursor() {
        assert!(SwipeDecision::Accept.advances_cursor());
        assert!(SwipeDecision::Reject.advances_cursor());
        assert!(!SwipeDecision::ShowDetails.advances_cursor());
        assert!(!SwipeDecision::None.advances_cursor());
    }

    #[test]
    fn test_thresholds_deserialize_with_defaults() {
        let thresholds: SwipeThresholds = serde_json::from_str(r#"{"vertical": 80.0}"#).unwrap();
        assert_eq!(thresholds.horizontal, DEFAULT_HORIZONTAL_THRESHOLD);
        assert_eq!(thresholds.vertical, 80.0);
    }
}
