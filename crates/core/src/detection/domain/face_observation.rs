use crate::shared::constants::MIN_OPEN_EYES;
use crate::shared::region::Region;

/// Everything derived from a single face in a single frame.
///
/// Eye and smile boxes are face-relative; only eyes accepted by the
/// upper-half filter are kept. Created fresh each frame and never
/// persisted.
#[derive(Clone, Debug)]
pub struct FaceObservation {
    pub region: Region,
    pub smiles: Vec<Region>,
    pub eyes: Vec<Region>,
    pub smiling: bool,
    pub eyes_open: bool,
}

impl FaceObservation {
    /// Derives the per-face state from raw detector output.
    ///
    /// An eye candidate counts only when its top edge sits strictly inside
    /// the upper half of the face box; a candidate exactly at half height
    /// is rejected. This is an upper-half heuristic, not an eye-state
    /// classifier: a detected eye region is taken as an open eye.
    pub fn new(region: Region, smiles: Vec<Region>, eye_candidates: Vec<Region>) -> Self {
        let eyes: Vec<Region> = eye_candidates
            .into_iter()
            .filter(|eye| in_upper_half(eye, region.height))
            .collect();
        let smiling = !smiles.is_empty();
        let eyes_open = eyes.len() >= MIN_OPEN_EYES;
        Self {
            region,
            smiles,
            eyes,
            smiling,
            eyes_open,
        }
    }
}

// 2*y < h is exact over integers for y < h/2, including odd heights.
fn in_upper_half(eye: &Region, face_height: i32) -> bool {
    2 * eye.y < face_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn face() -> Region {
        Region::new(10, 10, 100, 100)
    }

    fn eye_at(y: i32) -> Region {
        Region::new(20, y, 20, 20)
    }

    #[test]
    fn test_no_detections() {
        let obs = FaceObservation::new(face(), vec![], vec![]);
        assert!(!obs.smiling);
        assert!(!obs.eyes_open);
        assert!(obs.smiles.is_empty());
        assert!(obs.eyes.is_empty());
    }

    #[test]
    fn test_any_smile_box_sets_smiling() {
        let obs = FaceObservation::new(face(), vec![Region::new(30, 60, 30, 20)], vec![]);
        assert!(obs.smiling);
        assert_eq!(obs.smiles.len(), 1);
    }

    #[test]
    fn test_two_upper_half_eyes_open() {
        let obs = FaceObservation::new(face(), vec![], vec![eye_at(0), eye_at(10)]);
        assert!(obs.eyes_open);
        assert_eq!(obs.eyes.len(), 2);
    }

    #[test]
    fn test_single_eye_stays_closed() {
        let obs = FaceObservation::new(face(), vec![], vec![eye_at(10)]);
        assert!(!obs.eyes_open);
    }

    #[test]
    fn test_lower_half_eyes_are_dropped() {
        let obs = FaceObservation::new(face(), vec![], vec![eye_at(60), eye_at(70)]);
        assert!(!obs.eyes_open);
        assert!(obs.eyes.is_empty());
    }

    #[test]
    fn test_mixed_halves_keeps_only_upper() {
        let obs = FaceObservation::new(face(), vec![], vec![eye_at(10), eye_at(60), eye_at(20)]);
        assert!(obs.eyes_open);
        assert_eq!(obs.eyes.len(), 2);
    }

    // The half-height boundary is excluded: for a 100px face an eye at
    // y == 50 does not count, while y == 49 does. Odd heights round the
    // midline up, so y == 50 inside a 101px face still counts.
    #[rstest]
    #[case::at_midline(100, 50, false)]
    #[case::just_above(100, 49, true)]
    #[case::top_edge(100, 0, true)]
    #[case::odd_height_midline(101, 50, true)]
    #[case::odd_height_below(101, 51, false)]
    fn test_upper_half_boundary(#[case] face_height: i32, #[case] eye_y: i32, #[case] kept: bool) {
        let region = Region::new(0, 0, face_height, face_height);
        let obs = FaceObservation::new(region, vec![], vec![eye_at(eye_y)]);
        assert_eq!(obs.eyes.len() == 1, kept);
    }
}
