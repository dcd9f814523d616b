use opencv::core::Mat;

use crate::shared::region::Region;

/// Tuning parameters for one detection pass.
///
/// These are classifier-tuning constants, not values derived from input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectParams {
    pub scale_factor: f64,
    pub min_neighbors: i32,
    pub min_size: (i32, i32),
}

pub const FACE_PARAMS: DetectParams = DetectParams {
    scale_factor: 1.3,
    min_neighbors: 5,
    min_size: (30, 30),
};

pub const SMILE_PARAMS: DetectParams = DetectParams {
    scale_factor: 1.8,
    min_neighbors: 20,
    min_size: (25, 25),
};

pub const EYE_PARAMS: DetectParams = DetectParams {
    scale_factor: 1.1,
    min_neighbors: 5,
    min_size: (20, 20),
};

/// Domain interface for the detection primitive: candidate boxes for one
/// pattern class (face, eye, smile) in a grayscale image.
///
/// Implementations may be stateful, hence `&mut self`. The order of the
/// returned boxes is unspecified and must not be relied upon.
pub trait RegionDetector {
    fn detect(
        &mut self,
        gray: &Mat,
        params: &DetectParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_profile() {
        assert_eq!(FACE_PARAMS.scale_factor, 1.3);
        assert_eq!(FACE_PARAMS.min_neighbors, 5);
        assert_eq!(FACE_PARAMS.min_size, (30, 30));
    }

    #[test]
    fn test_smile_profile() {
        assert_eq!(SMILE_PARAMS.scale_factor, 1.8);
        assert_eq!(SMILE_PARAMS.min_neighbors, 20);
        assert_eq!(SMILE_PARAMS.min_size, (25, 25));
    }

    #[test]
    fn test_eye_profile() {
        assert_eq!(EYE_PARAMS.scale_factor, 1.1);
        assert_eq!(EYE_PARAMS.min_neighbors, 5);
        assert_eq!(EYE_PARAMS.min_size, (20, 20));
    }
}
