use crate::detection::domain::face_observation::FaceObservation;

/// Guidance strings shown to the user. Selection depends only on the
/// current frame's snapshot; there is no hysteresis, so a single noisy
/// frame can flip the message.
pub const MSG_NO_FACE: &str = "face not detected, move closer";
pub const MSG_SMILE_AND_OPEN_EYES: &str = "smile and open your eyes";
pub const MSG_SMILE: &str = "smile";
pub const MSG_OPEN_EYES: &str = "open your eyes";
pub const MSG_WELCOME: &str = "great, welcome!";

/// Aggregate per-frame snapshot of what the detectors saw.
///
/// Recomputed from scratch every frame; never carries state across
/// frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionState {
    pub face_detected: bool,
    pub smiling: bool,
    pub eyes_open: bool,
    pub message: &'static str,
}

impl InteractionState {
    /// Collapses the per-face observations into the frame snapshot.
    ///
    /// With several faces, `smiling` holds if any face smiles while
    /// `eyes_open` follows the face scanned last, and the message reflects
    /// that combination. Last-writer-wins, matching the historical
    /// single-message display.
    pub fn from_observations(observations: &[FaceObservation]) -> Self {
        match observations.last() {
            None => Self::no_face(),
            Some(last) => {
                let smiling = observations.iter().any(|o| o.smiling);
                let eyes_open = last.eyes_open;
                Self {
                    face_detected: true,
                    smiling,
                    eyes_open,
                    message: derive_message(true, smiling, eyes_open),
                }
            }
        }
    }

    fn no_face() -> Self {
        Self {
            face_detected: false,
            smiling: false,
            eyes_open: false,
            message: MSG_NO_FACE,
        }
    }

    /// True when the user is smiling with open eyes.
    pub fn satisfied(&self) -> bool {
        self.smiling && self.eyes_open
    }
}

/// Maps the frame snapshot to the guidance message. Pure function; these
/// five strings are the only ones ever produced.
pub fn derive_message(face_detected: bool, smiling: bool, eyes_open: bool) -> &'static str {
    if !face_detected {
        return MSG_NO_FACE;
    }
    match (smiling, eyes_open) {
        (false, false) => MSG_SMILE_AND_OPEN_EYES,
        (false, true) => MSG_SMILE,
        (true, false) => MSG_OPEN_EYES,
        (true, true) => MSG_WELCOME,
    }
}
