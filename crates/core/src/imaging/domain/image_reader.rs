use std::path::Path;

use image::GrayImage;

/// Loads a photo as a single-channel luminance image.
///
/// Detection runs on grayscale; color is not needed for placement.
pub trait ImageReader: Send {
    fn read(&mut self, path: &Path) -> Result<GrayImage, Box<dyn std::error::Error>>;
}
