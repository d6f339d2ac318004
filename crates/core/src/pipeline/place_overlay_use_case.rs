use std::path::Path;
use std::time::Instant;

use image::GrayImage;

use crate::detection::domain::eye_region::{confine_to_region, crop, eye_search_region};
use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::image_reader::ImageReader;
use crate::pipeline::pipeline_logger::{
    PipelineLogger, STAGE_DECODE, STAGE_DETECT_EYES, STAGE_DETECT_FACES, STAGE_PLACE,
};
use crate::placement::domain::placement_calculator::PlacementCalculator;
use crate::placement::domain::placement_result::PlacementResult;
use crate::shared::bounding_box::{BoundingBox, ImageDimensions};

/// Single-photo placement pipeline:
/// read → detect faces → select face → detect eyes in upper half → place.
pub struct PlaceOverlayUseCase {
    reader: Box<dyn ImageReader>,
    detector: Box<dyn FaceDetector>,
    calculator: PlacementCalculator,
    logger: Box<dyn PipelineLogger>,
}

impl PlaceOverlayUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        detector: Box<dyn FaceDetector>,
        calculator: PlacementCalculator,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            detector,
            calculator,
            logger,
        }
    }

    /// Returns `Ok(None)` when no face is found; the caller should then fall
    /// back to a manual placement.
    pub fn execute(
        &mut self,
        input_path: &Path,
    ) -> Result<Option<PlacementResult>, Box<dyn std::error::Error>> {
        let t0 = Instant::now();
        let image = self.reader.read(input_path)?;
        self.logger.timing(STAGE_DECODE, elapsed_ms(t0));
        let (img_w, img_h) = image.dimensions();
        let dims = ImageDimensions::try_from((img_w, img_h))?;

        let t0 = Instant::now();
        let faces = self.detector.detect_faces(&image)?;
        self.logger.timing(STAGE_DETECT_FACES, elapsed_ms(t0));
        self.logger.metric("faces_detected", faces.len() as f64);

        let selected = self
            .calculator
            .config()
            .face_selection
            .select(&faces, dims)
            .copied();

        let eyes = match selected {
            Some(face) => {
                let t0 = Instant::now();
                let eyes = self.detect_eyes(&image, &face, img_w, img_h)?;
                self.logger.timing(STAGE_DETECT_EYES, elapsed_ms(t0));
                self.logger.metric("eyes_detected", eyes.len() as f64);
                eyes
            }
            None => Vec::new(),
        };

        let t0 = Instant::now();
        let placement = self.calculator.compute(&faces, &eyes, dims)?;
        self.logger.timing(STAGE_PLACE, elapsed_ms(t0));

        match &placement {
            Some(p) => self.logger.info(&format!(
                "Placed overlay at ({:.1}, {:.1}) width {:.1} rotation {:.1}° ({:?} tier)",
                p.anchor_x,
                p.anchor_y,
                p.width_scale,
                p.rotation_degrees,
                PlacementCalculator::tier_for(eyes.len())
            )),
            None => self
                .logger
                .info("No face detected; manual placement required"),
        }
        self.logger.summary();

        Ok(placement)
    }

    /// Runs eye detection on the upper half of `face` and returns the hits
    /// in face-relative coordinates.
    fn detect_eyes(
        &mut self,
        gray: &GrayImage,
        face: &BoundingBox,
        img_w: u32,
        img_h: u32,
    ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>> {
        let Some(region) = eye_search_region(face, img_w, img_h) else {
            log::debug!("Face {face:?} has no visible upper half; skipping eye detection");
            return Ok(Vec::new());
        };
        let face_crop = crop(gray, &region);
        let raw = self.detector.detect_eyes(&face_crop)?;
        Ok(confine_to_region(&raw, &region, face))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
