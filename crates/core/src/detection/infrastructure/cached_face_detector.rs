use std::fs;
use std::path::{Path, PathBuf};

use image::GrayImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::bounding_box::BoundingBox;

#[derive(Error, Debug)]
pub enum DetectionsFileError {
    #[error("failed to read detections {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse detections {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Detector output recorded ahead of time.
///
/// `faces` are in full-image pixels; `eyes` are in pixels of the face crop
/// handed to the eye detector.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Detections {
    #[serde(default)]
    pub faces: Vec<BoundingBox>,
    #[serde(default)]
    pub eyes: Vec<BoundingBox>,
}

impl Detections {
    pub fn load(path: &Path) -> Result<Self, DetectionsFileError> {
        let json = fs::read_to_string(path).map_err(|source| DetectionsFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| DetectionsFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Replays pre-computed detection results instead of running a model.
///
/// Used when detection happened elsewhere (e.g. in the browser or a
/// separate service) and only placement is needed here. The image contents
/// are ignored.
pub struct CachedFaceDetector {
    detections: Detections,
}

impl CachedFaceDetector {
    pub fn new(detections: Detections) -> Self {
        Self { detections }
    }

    pub fn from_path(path: &Path) -> Result<Self, DetectionsFileError> {
        Ok(Self::new(Detections::load(path)?))
    }
}

impl FaceDetector for CachedFaceDetector {
    fn detect_faces(
        &mut self,
        _image: &GrayImage,
    ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>> {
        Ok(self.detections.faces.clone())
    }

    fn detect_eyes(
        &mut self,
        _face_crop: &GrayImage,
    ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>> {
        Ok(self.detections.eyes.clone())
    }
}
