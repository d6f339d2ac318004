use image::GrayImage;

use crate::shared::bounding_box::BoundingBox;

/// Domain interface for face and eye detection.
///
/// Faces are reported in the pixel space of `image`. Eyes are reported in
/// the pixel space of the face crop passed to [`detect_eyes`](Self::detect_eyes);
/// the caller is responsible for cropping.
///
/// Implementations may be stateful (e.g., replaying queued results),
/// hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect_faces(
        &mut self,
        image: &GrayImage,
    ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>>;

    fn detect_eyes(
        &mut self,
        face_crop: &GrayImage,
    ) -> Result<Vec<BoundingBox>, Box<dyn std::error::Error>>;
}
