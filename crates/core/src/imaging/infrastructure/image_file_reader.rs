use std::path::{Path, PathBuf};

use image::GrayImage;
use thiserror::Error;

use crate::imaging::domain::image_reader::ImageReader;

#[derive(Error, Debug)]
pub enum ImageReadError {
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} is empty")]
    Empty { path: PathBuf },
}

/// Decodes image files with the `image` crate and converts them to luma.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&mut self, path: &Path) -> Result<GrayImage, Box<dyn std::error::Error>> {
        let decoded = image::open(path).map_err(|source| ImageReadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let gray = decoded.to_luma8();
        if gray.width() == 0 || gray.height() == 0 {
            return Err(ImageReadError::Empty {
                path: path.to_path_buf(),
            }
            .into());
        }
        log::debug!(
            "Decoded {} ({}x{})",
            path.display(),
            gray.width(),
            gray.height()
        );
        Ok(gray)
    }
}
