//! Confinement of eye detection to the upper half of a face box.
//!
//! Eye candidates in the lower half are almost always nostrils or mouth
//! corners, so the detector only ever sees the upper half of the face.

use image::GrayImage;

use crate::shared::bounding_box::BoundingBox;

/// Upper half of `face`, clipped to the image bounds, in full-image pixels.
///
/// Returns `None` when the clipped region is empty.
pub fn eye_search_region(face: &BoundingBox, image_w: u32, image_h: u32) -> Option<BoundingBox> {
    let x1 = (face.x as i64).max(0);
    let y1 = (face.y as i64).max(0);
    let x2 = (face.x as i64 + face.width as i64).min(image_w as i64);
    let y2 = (face.y as i64 + face.height as i64 / 2).min(image_h as i64);
    if x2 <= x1 || y2 <= y1 {
        return None;
    }
    Some(BoundingBox::new(
        i32::try_from(x1).ok()?,
        i32::try_from(y1).ok()?,
        i32::try_from(x2 - x1).ok()?,
        i32::try_from(y2 - y1).ok()?,
    ))
}

/// Crops `region` out of `image`. The region must already be clipped.
pub fn crop(source: &GrayImage, region: &BoundingBox) -> GrayImage {
    image::imageops::crop_imm(
        source,
        region.x as u32,
        region.y as u32,
        region.width as u32,
        region.height as u32,
    )
    .to_image()
}

/// Converts eye boxes found in the search-region crop into face-relative
/// coordinates, dropping any that do not lie fully inside the region.
pub fn confine_to_region(
    eyes: &[BoundingBox],
    region: &BoundingBox,
    face: &BoundingBox,
) -> Vec<BoundingBox> {
    let bounds = BoundingBox::new(0, 0, region.width, region.height);
    // The region is the face clipped at the image origin, so the offset is
    // non-negative and at most the face's own extent.
    let offset = |r: i32, f: i32| i32::try_from(r as i64 - f as i64).ok();
    let (Some(dx), Some(dy)) = (offset(region.x, face.x), offset(region.y, face.y)) else {
        log::warn!("Eye region {region:?} is not inside face {face:?}; dropping eyes");
        return Vec::new();
    };
    let kept: Vec<BoundingBox> = eyes
        .iter()
        .filter(|e| bounds.contains(e))
        .filter_map(|e| e.translated(dx, dy))
        .collect();
    if kept.len() < eyes.len() {
        log::warn!(
            "Dropped {} eye detections outside the upper face region",
            eyes.len() - kept.len()
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── eye_search_region ───────────────────────────────────────────

    #[test]
    fn test_region_is_upper_half() {
        let face = BoundingBox::new(300, 200, 400, 400);
        let region = eye_search_region(&face, 1000, 1000).unwrap();
        assert_eq!(region, BoundingBox::new(300, 200, 400, 200));
    }

    #[test]
    fn test_region_clipped_at_image_edges() {
        let face = BoundingBox::new(-50, -20, 200, 200);
        let region = eye_search_region(&face, 120, 1000).unwrap();
        // x: [-50,150) → [0,120), y: [-20,80) → [0,80)
        assert_eq!(region, BoundingBox::new(0, 0, 120, 80));
    }

    #[test]
    fn test_region_outside_image_is_none() {
        let face = BoundingBox::new(2000, 2000, 100, 100);
        assert!(eye_search_region(&face, 1000, 1000).is_none());
    }

    #[test]
    fn test_region_of_one_pixel_tall_face_is_none() {
        let face = BoundingBox::new(10, 10, 50, 1);
        assert!(eye_search_region(&face, 100, 100).is_none());
    }

    #[test]
    fn test_region_of_face_reaching_past_i32_max() {
        let face = BoundingBox::new(i32::MAX - 100, 0, 200, 200);
        // Face lies far outside any real image.
        assert!(eye_search_region(&face, 1000, 1000).is_none());
    }

    #[test]
    fn test_region_of_face_starting_near_i32_min() {
        let face = BoundingBox::new(i32::MIN + 10, 0, 1000, 200);
        assert!(eye_search_region(&face, 1000, 1000).is_none());
    }

    // ── crop ────────────────────────────────────────────────────────

    #[test]
    fn test_crop_dimensions_and_content() {
        let mut img = GrayImage::new(10, 10);
        img.put_pixel(3, 4, image::Luma([200]));
        let cropped = crop(&img, &BoundingBox::new(2, 2, 5, 4));
        assert_eq!(cropped.dimensions(), (5, 4));
        assert_eq!(cropped.get_pixel(1, 2)[0], 200);
    }

    // ── confine_to_region ───────────────────────────────────────────

    #[test]
    fn test_confine_keeps_inside_boxes() {
        let face = BoundingBox::new(300, 200, 400, 400);
        let region = BoundingBox::new(300, 200, 400, 200);
        let eyes = vec![BoundingBox::new(50, 100, 40, 40)];
        assert_eq!(confine_to_region(&eyes, &region, &face), eyes);
    }

    #[test]
    fn test_confine_drops_boxes_in_lower_half() {
        let face = BoundingBox::new(300, 200, 400, 400);
        let region = BoundingBox::new(300, 200, 400, 200);
        let eyes = vec![
            BoundingBox::new(50, 100, 40, 40),
            BoundingBox::new(180, 190, 40, 40), // crosses the midline
        ];
        let kept = confine_to_region(&eyes, &region, &face);
        assert_eq!(kept, vec![BoundingBox::new(50, 100, 40, 40)]);
    }

    #[test]
    fn test_confine_with_face_far_left_of_image() {
        // Face starts near i32::MIN and reaches into the image.
        let face = BoundingBox::new(-2_000_000_000, 0, 2_000_000_100, 200);
        let region = eye_search_region(&face, 1000, 1000).unwrap();
        assert_eq!(region, BoundingBox::new(0, 0, 100, 100));
        let eyes = vec![BoundingBox::new(10, 20, 30, 30)];
        let kept = confine_to_region(&eyes, &region, &face);
        assert_eq!(kept, vec![BoundingBox::new(2_000_000_010, 20, 30, 30)]);
    }

    #[test]
    fn test_confine_shifts_into_face_coordinates_after_clipping() {
        // Face starts 50px left of the image; region was clipped at x=0.
        let face = BoundingBox::new(-50, 0, 200, 200);
        let region = BoundingBox::new(0, 0, 150, 100);
        let eyes = vec![BoundingBox::new(10, 20, 30, 30)];
        let kept = confine_to_region(&eyes, &region, &face);
        assert_eq!(kept, vec![BoundingBox::new(60, 20, 30, 30)]);
    }
}
