//! Eye-pair selection and geometry for the refinement tier.
//!
//! Cascade-style eye detectors often report extra small boxes (eyebrows,
//! glasses rims, nostrils). Only the two largest detections are kept.

use crate::shared::bounding_box::BoundingBox;

/// Two eye centers in full-image pixel coordinates, ordered by X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyePair {
    pub left: (f64, f64),
    pub right: (f64, f64),
}

impl EyePair {
    /// Builds a pair from two face-relative eye boxes, translating their
    /// centers by the face origin.
    pub fn from_face_relative(a: &BoundingBox, b: &BoundingBox, face: &BoundingBox) -> Self {
        let a = a.center_offset_by(face.x, face.y);
        let b = b.center_offset_by(face.x, face.y);
        if a.0 <= b.0 {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    pub fn midpoint(&self) -> (f64, f64) {
        (
            (self.left.0 + self.right.0) / 2.0,
            (self.left.1 + self.right.1) / 2.0,
        )
    }

    /// Signed tilt of the eye line in degrees. Positive when the right eye
    /// sits lower in the image (clockwise, since Y grows downward).
    pub fn rotation_degrees(&self) -> f64 {
        let dy = self.right.1 - self.left.1;
        let dx = self.right.0 - self.left.0;
        dy.atan2(dx).to_degrees()
    }
}

/// Picks the two largest eye boxes by area, ties going to the earlier
/// detection. Returns `None` with fewer than two candidates.
pub fn select_eye_pair(eyes: &[BoundingBox]) -> Option<(&BoundingBox, &BoundingBox)> {
    if eyes.len() < 2 {
        return None;
    }
    let mut ranked: Vec<&BoundingBox> = eyes.iter().collect();
    // Stable sort keeps detection order among equal areas.
    ranked.sort_by(|a, b| b.area().cmp(&a.area()));
    Some((ranked[0], ranked[1]))
}
