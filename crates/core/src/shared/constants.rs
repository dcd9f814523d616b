/// Haar cascade files from the OpenCV distribution, by detection role.
pub const FACE_CASCADE_FILE: &str = "haarcascade_frontalface_default.xml";
pub const EYE_CASCADE_FILE: &str = "haarcascade_eye.xml";
pub const SMILE_CASCADE_FILE: &str = "haarcascade_smile.xml";

/// Environment override for the cascade directory.
pub const CASCADE_DIR_ENV: &str = "FACEGREET_CASCADE_DIR";

/// Directories probed for cascade files when no override is given.
pub const CASCADE_SEARCH_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
];

pub const WINDOW_NAME: &str = "Face Greeter";

/// Height of the darkened status band at the top of the frame.
pub const BAND_HEIGHT: i32 = 100;
/// Band blend weight; the remainder keeps the underlying image.
pub const BAND_OPACITY: f64 = 0.6;

/// Eye boxes in the upper half of a face needed to call the eyes open.
pub const MIN_OPEN_EYES: usize = 2;

pub const EXIT_KEY: char = 'q';
/// How long the per-frame key poll waits, in milliseconds.
pub const EXIT_KEY_WAIT_MS: i32 = 1;
