use serde::{Deserialize, Serialize};

/// Overlay placement on the normalized `0..1000` scale.
///
/// `anchor_x`/`anchor_y` locate the overlay's optical center, `width_scale`
/// its width relative to the image width. `rotation_degrees` is clockwise
/// positive in image coordinates. All fields carry one decimal place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub width_scale: f64,
    pub rotation_degrees: f64,
}

impl PlacementResult {
    /// Builds a result, rounding every field to one decimal place.
    pub fn rounded(anchor_x: f64, anchor_y: f64, width_scale: f64, rotation_degrees: f64) -> Self {
        Self {
            anchor_x: round1(anchor_x),
            anchor_y: round1(anchor_y),
            width_scale: round1(width_scale),
            rotation_degrees: round1(rotation_degrees),
        }
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    let r = (value * 10.0).round() / 10.0;
    // Avoid emitting "-0.0" for tiny negative tilts.
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
