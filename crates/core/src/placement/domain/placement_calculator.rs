//! Face-anchored overlay placement.
//!
//! Two tiers: a baseline estimate from the face box alone, superseded by
//! the eye-pair midpoint and tilt when at least two eyes were detected.

use super::eye_pair::{select_eye_pair, EyePair};
use super::placement_config::PlacementConfig;
use super::placement_result::PlacementResult;
use crate::shared::bounding_box::{BoundingBox, ImageDimensions};
use crate::shared::constants::NORMALIZED_SCALE;
use crate::shared::error::PlacementError;

/// Which tier produced a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementTier {
    Baseline,
    EyePair,
}

/// Stateless calculator parameterized by a [`PlacementConfig`].
///
/// Safe to share across threads; `compute` takes `&self` and does no I/O.
#[derive(Clone, Debug, Default)]
pub struct PlacementCalculator {
    config: PlacementConfig,
}

impl PlacementCalculator {
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Computes the overlay placement for the selected face.
    ///
    /// `eye_boxes` are relative to the selected face's crop. Returns
    /// `Ok(None)` when `face_boxes` is empty.
    pub fn compute(
        &self,
        face_boxes: &[BoundingBox],
        eye_boxes: &[BoundingBox],
        image: ImageDimensions,
    ) -> Result<Option<PlacementResult>, PlacementError> {
        self.config
            .validate()
            .map_err(|e| PlacementError::InvalidInput(e.to_string()))?;
        image.validate()?;
        for b in face_boxes.iter().chain(eye_boxes) {
            b.validate()?;
        }

        let Some(face) = self.config.face_selection.select(face_boxes, image) else {
            log::debug!("No face detected; no placement");
            return Ok(None);
        };
        log::debug!(
            "Selected face {face:?} of {} using '{}' policy",
            face_boxes.len(),
            self.config.face_selection
        );

        let (center_x, eye_y, rotation, tier) = match select_eye_pair(eye_boxes) {
            Some((a, b)) => {
                let pair = EyePair::from_face_relative(a, b, face);
                let (mx, my) = pair.midpoint();
                (mx, my, pair.rotation_degrees(), PlacementTier::EyePair)
            }
            None => {
                let (cx, ey) = self.baseline_anchor(face);
                (cx, ey, 0.0, PlacementTier::Baseline)
            }
        };
        if eye_boxes.len() > 2 {
            log::debug!("Discarded {} smaller eye detections", eye_boxes.len() - 2);
        }

        let width_percent = face.width as f64 * self.config.width_factor / image.width as f64;

        let result = PlacementResult::rounded(
            center_x / image.width as f64 * NORMALIZED_SCALE,
            eye_y / image.height as f64 * NORMALIZED_SCALE,
            width_percent * NORMALIZED_SCALE,
            rotation,
        );
        log::debug!("Placement ({tier:?} tier): {result:?}");
        Ok(Some(result))
    }

    /// Tier that [`compute`](Self::compute) will use for this many eye boxes.
    pub fn tier_for(eye_count: usize) -> PlacementTier {
        if eye_count >= 2 {
            PlacementTier::EyePair
        } else {
            PlacementTier::Baseline
        }
    }

    fn baseline_anchor(&self, face: &BoundingBox) -> (f64, f64) {
        let center_x = face.x as f64 + face.width as f64 / 2.0;
        let eye_y = face.y as f64 + face.height as f64 * self.config.eye_line_offset;
        (center_x, eye_y)
    }
}

/// Placement with default configuration (first face, 0.37 eye line,
/// identity width).
pub fn compute_placement(
    face_boxes: &[BoundingBox],
    eye_boxes: &[BoundingBox],
    image: ImageDimensions,
) -> Result<Option<PlacementResult>, PlacementError> {
    PlacementCalculator::default().compute(face_boxes, eye_boxes, image)
}
