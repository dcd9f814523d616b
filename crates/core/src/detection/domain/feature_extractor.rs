use opencv::core::{AlgorithmHint, Mat};
use opencv::imgproc;
use opencv::prelude::*;

use crate::detection::domain::face_observation::FaceObservation;
use crate::detection::domain::region_detector::{
    RegionDetector, EYE_PARAMS, FACE_PARAMS, SMILE_PARAMS,
};
use crate::rendering::overlay;

/// Runs the cascading face → (smile, eye) detection for one frame.
///
/// The face pass covers the full frame; the smile and eye passes run on
/// the grayscale crop of each face box. Detectors are injected so the
/// pipeline can run against scripted boxes in tests.
pub struct FeatureExtractor {
    face: Box<dyn RegionDetector>,
    eye: Box<dyn RegionDetector>,
    smile: Box<dyn RegionDetector>,
}

impl FeatureExtractor {
    pub fn new(
        face: Box<dyn RegionDetector>,
        eye: Box<dyn RegionDetector>,
        smile: Box<dyn RegionDetector>,
    ) -> Self {
        Self { face, eye, smile }
    }

    /// Detects every face with its sub-expressions and draws the
    /// detection overlay onto `frame`.
    ///
    /// Detector failure is fatal for the frame and propagates to the
    /// caller; no partial result is guessed at.
    pub fn extract(
        &mut self,
        frame: &mut Mat,
    ) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>> {
        let gray = grayscale(frame)?;
        let faces = self.face.detect(&gray, &FACE_PARAMS)?;

        let mut observations = Vec::with_capacity(faces.len());
        for face in faces {
            let crop = Mat::roi(&gray, face.to_rect())?.try_clone()?;
            let smiles = self.smile.detect(&crop, &SMILE_PARAMS)?;
            let eyes = self.eye.detect(&crop, &EYE_PARAMS)?;

            let observation = FaceObservation::new(face, smiles, eyes);
            overlay::draw_observation(frame, &observation)?;
            observations.push(observation);
        }
        Ok(observations)
    }
}

fn grayscale(frame: &Mat) -> opencv::Result<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color(
        frame,
        &mut gray,
        imgproc::COLOR_BGR2GRAY,
        0,
        AlgorithmHint::ALGO_HINT_DEFAULT,
    )?;
    Ok(gray)
}
