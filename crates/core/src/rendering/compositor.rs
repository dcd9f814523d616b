use opencv::core::{self, Mat, Point, Rect, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

use crate::interaction::guidance::InteractionState;
use crate::rendering::overlay::{put_label, TEXT_COLOR};
use crate::shared::constants::{BAND_HEIGHT, BAND_OPACITY, EXIT_KEY};

/// Frame-rate readout color (BGR yellow).
pub const FPS_TEXT_COLOR: (f64, f64, f64) = (0.0, 255.0, 255.0);
/// Message color once both conditions hold (green).
pub const SATISFIED_COLOR: (f64, f64, f64) = (0.0, 255.0, 0.0);
/// Message color while coaching (amber).
pub const COACHING_COLOR: (f64, f64, f64) = (0.0, 165.0, 255.0);

/// Lays the status interface over a processed frame: a darkened header
/// band carrying the frame rate, the robot label, and the guidance
/// message, plus the exit hint at the bottom. Purely presentational.
pub struct Compositor {
    band_height: i32,
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            band_height: BAND_HEIGHT,
        }
    }

    pub fn render(&self, frame: &mut Mat, fps: f64, state: &InteractionState) -> opencv::Result<()> {
        self.darken_band(frame)?;

        put_label(
            frame,
            &format!("FPS: {fps:.1}"),
            Point::new(10, 25),
            0.7,
            FPS_TEXT_COLOR,
            2,
        )?;
        put_label(frame, "robot:", Point::new(10, 55), 0.7, TEXT_COLOR, 2)?;
        put_label(
            frame,
            state.message,
            Point::new(10, 85),
            0.8,
            message_color(state.satisfied()),
            2,
        )?;

        let caption = format!("press '{EXIT_KEY}' to quit");
        let rows = frame.rows();
        put_label(frame, &caption, Point::new(10, rows - 10), 0.5, TEXT_COLOR, 1)
    }

    /// Blends a black band over the top of the frame: 60% band, 40%
    /// original.
    fn darken_band(&self, frame: &mut Mat) -> opencv::Result<()> {
        let mut overlay = frame.try_clone()?;
        let band = Rect::new(0, 0, frame.cols(), self.band_height.min(frame.rows()));
        imgproc::rectangle(
            &mut overlay,
            band,
            Scalar::all(0.0),
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )?;

        let mut blended = Mat::default();
        core::add_weighted(
            &overlay,
            BAND_OPACITY,
            &*frame,
            1.0 - BAND_OPACITY,
            0.0,
            &mut blended,
            -1,
        )?;
        *frame = blended;
        Ok(())
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

/// Message color: green once both conditions hold, amber while coaching.
pub fn message_color(satisfied: bool) -> (f64, f64, f64) {
    if satisfied {
        SATISFIED_COLOR
    } else {
        COACHING_COLOR
    }
}
