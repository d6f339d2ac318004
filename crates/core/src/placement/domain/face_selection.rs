use serde::{Deserialize, Serialize};

use crate::shared::bounding_box::{BoundingBox, ImageDimensions};

/// Policy for picking the one face the overlay is anchored to.
///
/// `First` trusts the detector's ordering and performs no re-ranking.
/// The other policies break ties in favour of the earlier detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceSelection {
    #[default]
    First,
    Largest,
    #[serde(rename = "centered")]
    MostCentered,
}

impl FaceSelection {
    pub const ALL: &[FaceSelection] = &[
        FaceSelection::First,
        FaceSelection::Largest,
        FaceSelection::MostCentered,
    ];

    pub fn select<'a>(
        &self,
        faces: &'a [BoundingBox],
        image: ImageDimensions,
    ) -> Option<&'a BoundingBox> {
        match self {
            FaceSelection::First => faces.first(),
            FaceSelection::Largest => first_min_by(faces, |f| -(f.area() as f64)),
            FaceSelection::MostCentered => {
                let (icx, icy) = image.center();
                first_min_by(faces, |f| {
                    let (cx, cy) = f.center();
                    (cx - icx).powi(2) + (cy - icy).powi(2)
                })
            }
        }
    }
}

/// Returns the first element with the strictly smallest key.
fn first_min_by<F>(faces: &[BoundingBox], key: F) -> Option<&BoundingBox>
where
    F: Fn(&BoundingBox) -> f64,
{
    let mut best: Option<(&BoundingBox, f64)> = None;
    for face in faces {
        let k = key(face);
        match best {
            Some((_, best_k)) if k >= best_k => {}
            _ => best = Some((face, k)),
        }
    }
    best.map(|(face, _)| face)
}

impl std::fmt::Display for FaceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceSelection::First => write!(f, "first"),
            FaceSelection::Largest => write!(f, "largest"),
            FaceSelection::MostCentered => write!(f, "centered"),
        }
    }
}

impl std::str::FromStr for FaceSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(FaceSelection::First),
            "largest" => Ok(FaceSelection::Largest),
            "centered" | "most-centered" | "most_centered" => Ok(FaceSelection::MostCentered),
            other => Err(format!(
                "Face selection must be one of: first, largest, centered, got '{other}'"
            )),
        }
    }
}
