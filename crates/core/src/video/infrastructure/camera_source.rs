use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::video::domain::frame_source::FrameSource;

/// Webcam adapter over `videoio::VideoCapture`.
pub struct CameraSource {
    capture: VideoCapture,
}

impl CameraSource {
    /// Opens the capture device at `index`.
    ///
    /// The device buffer is capped at one frame so the loop always sees
    /// the most recent image rather than a stale queue.
    pub fn open(index: i32) -> Result<Self, Box<dyn std::error::Error>> {
        let mut capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(format!("failed to open camera {index}").into());
        }
        if !capture.set(videoio::CAP_PROP_BUFFERSIZE, 1.0)? {
            log::debug!("camera {index} does not support buffer size control");
        }
        Ok(Self { capture })
    }
}

impl FrameSource for CameraSource {
    fn next_frame(&mut self) -> Result<Option<Mat>, Box<dyn std::error::Error>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    fn close(&mut self) {
        if let Err(e) = self.capture.release() {
            log::warn!("failed to release capture device: {e}");
        }
    }
}
