use opencv::core::Mat;

/// Produces the live frame sequence for the loop.
///
/// Implementations own the capture device and block until it delivers.
/// `Ok(None)` means the device failed to produce a frame, which is fatal
/// for the run; the loop terminates rather than retrying.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Mat>, Box<dyn std::error::Error>>;

    /// Releases the capture device.
    fn close(&mut self);
}
