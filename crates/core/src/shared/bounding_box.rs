use serde::{Deserialize, Serialize};

use crate::shared::error::PlacementError;

/// Axis-aligned pixel rectangle reported by a face or eye detector.
///
/// Coordinates are in the pixel space of whichever image the detector ran
/// on: the full photo for faces, the face crop for eyes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Center shifted by `(dx, dy)`, e.g. from face-crop into full-image space.
    pub fn center_offset_by(&self, dx: i32, dy: i32) -> (f64, f64) {
        let (cx, cy) = self.center();
        (cx + dx as f64, cy + dy as f64)
    }

    /// Shifts the box by `(dx, dy)`. `None` if the origin leaves the i32 range.
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }

    /// Right and bottom edges, widened so they cannot overflow.
    pub fn far_edges(&self) -> (i64, i64) {
        (
            self.x as i64 + self.width as i64,
            self.y as i64 + self.height as i64,
        )
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        let (self_x2, self_y2) = self.far_edges();
        let (other_x2, other_y2) = other.far_edges();
        other.x >= self.x && other.y >= self.y && other_x2 <= self_x2 && other_y2 <= self_y2
    }

    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(PlacementError::InvalidInput(format!(
                "bounding box at ({}, {}) has non-positive size {}x{}",
                self.x, self.y, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Pixel size of the source photo, used to normalize placement output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: i32,
    pub height: i32,
}

impl ImageDimensions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    pub fn validate(&self) -> Result<(), PlacementError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(PlacementError::InvalidInput(format!(
                "image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl TryFrom<(u32, u32)> for ImageDimensions {
    type Error = PlacementError;

    fn try_from((width, height): (u32, u32)) -> Result<Self, Self::Error> {
        let to_i32 = |v: u32| {
            i32::try_from(v).map_err(|_| {
                PlacementError::InvalidInput(format!("image dimension {v} exceeds i32 range"))
            })
        };
        let dims = Self::new(to_i32(width)?, to_i32(height)?);
        dims.validate()?;
        Ok(dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    // ── Geometry ─────────────────────────────────────────────────────

    #[test]
    fn test_area() {
        assert_eq!(BoundingBox::new(5, 5, 40, 30).area(), 1200);
    }

    #[test]
    fn test_area_does_not_overflow_i32() {
        let b = BoundingBox::new(0, 0, 100_000, 100_000);
        assert_eq!(b.area(), 10_000_000_000);
    }

    #[test]
    fn test_center_odd_size_keeps_fraction() {
        let (cx, cy) = BoundingBox::new(10, 20, 41, 31).center();
        assert_relative_eq!(cx, 30.5);
        assert_relative_eq!(cy, 35.5);
    }

    #[test]
    fn test_translated_moves_origin_only() {
        let b = BoundingBox::new(50, 100, 40, 40).translated(300, 200);
        assert_eq!(b, Some(BoundingBox::new(350, 300, 40, 40)));
    }

    #[test]
    fn test_translated_out_of_range_is_none() {
        let b = BoundingBox::new(120, 5, 10, 10);
        assert!(b.translated(i32::MAX - 100, 0).is_none());
        assert!(b.translated(0, i32::MAX).is_none());
    }

    #[test]
    fn test_center_offset_by_near_i32_max() {
        let (cx, cy) = BoundingBox::new(120, 5, 10, 10).center_offset_by(i32::MAX - 100, 0);
        assert_relative_eq!(cx, i32::MAX as f64 + 25.0);
        assert_relative_eq!(cy, 10.0);
    }

    #[test]
    fn test_far_edges_do_not_wrap() {
        let b = BoundingBox::new(i32::MAX - 10, i32::MAX, 50, 50);
        assert_eq!(
            b.far_edges(),
            (i32::MAX as i64 + 40, i32::MAX as i64 + 50)
        );
    }

    #[test]
    fn test_contains_with_edges_past_i32_max() {
        let outer = BoundingBox::new(i32::MAX - 100, 0, 100, 100);
        assert!(outer.contains(&BoundingBox::new(i32::MAX - 50, 10, 50, 10)));
        assert!(!outer.contains(&BoundingBox::new(i32::MAX - 50, 10, 60, 10)));
    }

    #[test]
    fn test_contains_inner_box() {
        let outer = BoundingBox::new(0, 0, 100, 50);
        assert!(outer.contains(&BoundingBox::new(10, 10, 20, 20)));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_contains_rejects_overhang() {
        let outer = BoundingBox::new(0, 0, 100, 50);
        assert!(!outer.contains(&BoundingBox::new(10, 40, 20, 20)));
        assert!(!outer.contains(&BoundingBox::new(-1, 0, 20, 20)));
    }

    // ── Validation ───────────────────────────────────────────────────

    #[rstest]
    #[case::zero_width(BoundingBox::new(0, 0, 0, 10))]
    #[case::zero_height(BoundingBox::new(0, 0, 10, 0))]
    #[case::negative_width(BoundingBox::new(0, 0, -5, 10))]
    fn test_box_validate_rejects_degenerate(#[case] b: BoundingBox) {
        assert!(matches!(b.validate(), Err(PlacementError::InvalidInput(_))));
    }

    #[test]
    fn test_box_validate_accepts_negative_origin() {
        assert!(BoundingBox::new(-10, -10, 5, 5).validate().is_ok());
    }

    #[rstest]
    #[case::zero_width(0, 500)]
    #[case::zero_height(500, 0)]
    #[case::negative(-1, 10)]
    fn test_image_validate_rejects_non_positive(#[case] w: i32, #[case] h: i32) {
        assert!(ImageDimensions::new(w, h).validate().is_err());
    }

    #[test]
    fn test_try_from_u32_pair() {
        let dims = ImageDimensions::try_from((640u32, 480u32)).unwrap();
        assert_eq!(dims, ImageDimensions::new(640, 480));
    }

    #[test]
    fn test_try_from_u32_rejects_overflow() {
        assert!(ImageDimensions::try_from((u32::MAX, 10u32)).is_err());
    }

    #[test]
    fn test_deserialize_from_json() {
        let b: BoundingBox =
            serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();
        assert_eq!(b, BoundingBox::new(1, 2, 3, 4));
    }
}
