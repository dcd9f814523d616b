pub mod camera_source;
pub mod window_sink;
