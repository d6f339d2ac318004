/// Upper bound of the resolution-independent scale used for anchors and width.
pub const NORMALIZED_SCALE: f64 = 1000.0;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

/// Extensions accepted for overlay (eyewear frame) assets.
pub const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// URL prefix under which overlay assets are served to the UI.
pub const FRAME_URL_PREFIX: &str = "frames";

pub const CONFIG_DIR_NAME: &str = "TryOn";
pub const CONFIG_FILE_NAME: &str = "placement.json";
