//! Maps a placement onto the style values a UI applies to the overlay.
//!
//! The overlay is positioned by its center: `left`/`top` are percentages of
//! the displayed image and the element is shifted back by half its own size.

use serde::Serialize;

use crate::placement::domain::placement_result::PlacementResult;
use crate::shared::constants::NORMALIZED_SCALE;

/// Reset placement shown when no face was found.
pub const MANUAL_ANCHOR_X: f64 = 500.0;
pub const MANUAL_ANCHOR_Y: f64 = 300.0;
pub const MANUAL_WIDTH_SCALE: f64 = 400.0;

pub const DEFAULT_OPACITY_PERCENT: u32 = 100;

/// Percent-based overlay style, independent of display resolution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlayStyle {
    pub left_percent: f64,
    pub top_percent: f64,
    pub width_percent: f64,
    pub rotation_degrees: f64,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
    /// True when derived from a detected face rather than the reset values.
    pub detected: bool,
}

impl OverlayStyle {
    pub fn from_placement(placement: &PlacementResult, opacity_percent: u32) -> Self {
        Self {
            detected: true,
            ..Self::from_values(
                placement.anchor_x,
                placement.anchor_y,
                placement.width_scale,
                placement.rotation_degrees,
                opacity_percent,
            )
        }
    }

    pub fn manual_default(opacity_percent: u32) -> Self {
        Self::from_values(
            MANUAL_ANCHOR_X,
            MANUAL_ANCHOR_Y,
            MANUAL_WIDTH_SCALE,
            0.0,
            opacity_percent,
        )
    }

    /// Style for a placement outcome. Absence falls back to the manual
    /// default; it never turns into zeroed values.
    pub fn for_outcome(placement: Option<&PlacementResult>, opacity_percent: u32) -> Self {
        match placement {
            Some(p) => Self::from_placement(p, opacity_percent),
            None => Self::manual_default(opacity_percent),
        }
    }

    /// CSS transform centering the overlay on its anchor, then rotating.
    pub fn transform(&self) -> String {
        format!(
            "translate(-50%, -50%) rotate({:.1}deg)",
            self.rotation_degrees
        )
    }

    fn from_values(x: f64, y: f64, width: f64, rotation: f64, opacity_percent: u32) -> Self {
        let to_percent = |v: f64| v / NORMALIZED_SCALE * 100.0;
        Self {
            left_percent: to_percent(x),
            top_percent: to_percent(y),
            width_percent: to_percent(width),
            rotation_degrees: rotation,
            opacity: opacity_percent.min(100) as f64 / 100.0,
            detected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn placement() -> PlacementResult {
        PlacementResult::rounded(470.0, 340.0, 400.0, 11.3)
    }

    #[test]
    fn test_from_placement_scales_to_percent() {
        let style = OverlayStyle::from_placement(&placement(), 100);
        assert_relative_eq!(style.left_percent, 47.0);
        assert_relative_eq!(style.top_percent, 34.0);
        assert_relative_eq!(style.width_percent, 40.0);
        assert_relative_eq!(style.rotation_degrees, 11.3);
        assert_relative_eq!(style.opacity, 1.0);
        assert!(style.detected);
    }

    #[test]
    fn test_manual_default_values() {
        let style = OverlayStyle::manual_default(DEFAULT_OPACITY_PERCENT);
        assert_relative_eq!(style.left_percent, 50.0);
        assert_relative_eq!(style.top_percent, 30.0);
        assert_relative_eq!(style.width_percent, 40.0);
        assert_eq!(style.rotation_degrees, 0.0);
        assert!(!style.detected);
    }

    #[test]
    fn test_for_outcome_without_placement_uses_manual_default() {
        assert_eq!(
            OverlayStyle::for_outcome(None, 80),
            OverlayStyle::manual_default(80)
        );
    }

    #[test]
    fn test_for_outcome_with_placement() {
        let p = placement();
        assert_eq!(
            OverlayStyle::for_outcome(Some(&p), 80),
            OverlayStyle::from_placement(&p, 80)
        );
    }

    #[test]
    fn test_opacity_is_clamped() {
        assert_relative_eq!(OverlayStyle::manual_default(250).opacity, 1.0);
        assert_relative_eq!(OverlayStyle::manual_default(0).opacity, 0.0);
        assert_relative_eq!(OverlayStyle::manual_default(45).opacity, 0.45);
    }

    #[test]
    fn test_transform_centers_and_rotates() {
        let style = OverlayStyle::from_placement(&placement(), 100);
        assert_eq!(style.transform(), "translate(-50%, -50%) rotate(11.3deg)");
    }

    #[test]
    fn test_transform_negative_rotation() {
        let p = PlacementResult::rounded(500.0, 500.0, 300.0, -4.0);
        let style = OverlayStyle::from_placement(&p, 100);
        assert_eq!(style.transform(), "translate(-50%, -50%) rotate(-4.0deg)");
    }
}
