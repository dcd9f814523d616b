use std::path::Path;

use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::region_detector::{DetectParams, RegionDetector};
use crate::shared::region::Region;

/// Haar cascade adapter over `objdetect::CascadeClassifier`.
pub struct HaarCascadeDetector {
    classifier: CascadeClassifier,
}

impl HaarCascadeDetector {
    /// Loads a cascade from an XML file.
    ///
    /// A classifier that loads empty (missing or unreadable file) is an
    /// error here, at startup, rather than a silent zero-detection run.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("cascade path is not valid UTF-8: {}", path.display()))?;
        let classifier = CascadeClassifier::new(path_str)?;
        if classifier.empty()? {
            return Err(format!("cascade failed to load: {}", path.display()).into());
        }
        Ok(Self { classifier })
    }
}

impl RegionDetector for HaarCascadeDetector {
    fn detect(
        &mut self,
        gray: &Mat,
        params: &DetectParams,
    ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let mut hits = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            gray,
            &mut hits,
            params.scale_factor,
            params.min_neighbors,
            0,
            Size::new(params.min_size.0, params.min_size.1),
            Size::default(),
        )?;
        Ok(hits.iter().map(Region::from_rect).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_an_error() {
        let result = HaarCascadeDetector::from_file(Path::new("/nonexistent/cascade.xml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_cascade_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("not_a_cascade.xml");
        fs::write(&path, b"<opencv_storage></opencv_storage>").unwrap();

        let result = HaarCascadeDetector::from_file(&path);
        assert!(result.is_err());
    }
}
