use opencv::core::Mat;

/// Displays composed frames and surfaces key presses.
pub trait FrameSink {
    /// Fire-and-forget display of one frame.
    fn show(&mut self, frame: &Mat) -> Result<(), Box<dyn std::error::Error>>;

    /// Polls for a pressed key, waiting at most `wait_ms` milliseconds.
    fn poll_key(&mut self, wait_ms: i32) -> Result<Option<char>, Box<dyn std::error::Error>>;

    /// Tears down the display surface.
    fn close(&mut self);
}
