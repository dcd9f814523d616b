use opencv::core::Mat;
use opencv::highgui;

use crate::video::domain::frame_sink::FrameSink;

/// On-screen window adapter over `highgui`.
pub struct WindowSink {
    name: String,
}

impl WindowSink {
    pub fn open(name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        highgui::named_window(name, highgui::WINDOW_NORMAL)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl FrameSink for WindowSink {
    fn show(&mut self, frame: &Mat) -> Result<(), Box<dyn std::error::Error>> {
        highgui::imshow(&self.name, frame)?;
        Ok(())
    }

    fn poll_key(&mut self, wait_ms: i32) -> Result<Option<char>, Box<dyn std::error::Error>> {
        let key = highgui::wait_key(wait_ms)?;
        if key < 0 {
            return Ok(None);
        }
        Ok(char::from_u32(key as u32 & 0xff))
    }

    fn close(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.name) {
            log::warn!("failed to destroy window {}: {e}", self.name);
        }
    }
}
