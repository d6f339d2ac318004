//! Face-anchored eyewear overlay placement.
//!
//! Consumes face and eye bounding boxes from an external detector and
//! produces a normalized anchor, width and tilt for a try-on overlay.

pub mod shared {
    pub mod bounding_box;
    pub mod constants;
    pub mod error;
}

pub mod placement {
    pub mod domain {
        pub mod eye_pair;
        pub mod face_selection;
        pub mod placement_calculator;
        pub mod placement_config;
        pub mod placement_result;
    }
}

pub mod detection {
    pub mod domain {
        pub mod eye_region;
        pub mod face_detector;
    }
    pub mod infrastructure;
}

pub mod imaging {
    pub mod domain {
        pub mod image_reader;
    }
    pub mod infrastructure;
}

pub mod overlay {
    pub mod domain {
        pub mod overlay_style;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod pipeline_logger;
    pub mod place_overlay_use_case;
}

pub use placement::domain::placement_calculator::{compute_placement, PlacementCalculator};
pub use placement::domain::placement_result::PlacementResult;
pub use shared::bounding_box::{BoundingBox, ImageDimensions};
pub use shared::error::PlacementError;
