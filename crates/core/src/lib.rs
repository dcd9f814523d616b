//! Core pipeline for the interactive webcam greeter: cascading face,
//! eye, and smile detection, per-frame state derivation, guidance
//! message selection, and on-frame status rendering.

pub mod detection;
pub mod interaction;
pub mod pipeline;
pub mod rendering;
pub mod shared;
pub mod video;
