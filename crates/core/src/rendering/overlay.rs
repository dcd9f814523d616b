use opencv::core::{Mat, Point, Scalar};
use opencv::imgproc;

use crate::detection::domain::face_observation::FaceObservation;
use crate::shared::region::Region;

/// Box colors by detection role (BGR).
pub const FACE_BOX_COLOR: (f64, f64, f64) = (255.0, 0.0, 0.0);
pub const SMILE_BOX_COLOR: (f64, f64, f64) = (0.0, 255.0, 0.0);
pub const EYE_BOX_COLOR: (f64, f64, f64) = (0.0, 0.0, 255.0);
pub const TEXT_COLOR: (f64, f64, f64) = (255.0, 255.0, 255.0);

const BOX_THICKNESS: i32 = 2;

pub(crate) fn scalar((b, g, r): (f64, f64, f64)) -> Scalar {
    Scalar::new(b, g, r, 0.0)
}

/// Draws one face's boxes and labels onto the frame.
///
/// Eye and smile boxes arrive face-relative and are shifted into frame
/// coordinates here. Only accepted boxes are drawn; rejected eye
/// candidates never appear.
pub fn draw_observation(frame: &mut Mat, observation: &FaceObservation) -> opencv::Result<()> {
    let face = &observation.region;
    boxed_label(frame, face, "Face", FACE_BOX_COLOR, 0.6)?;

    for smile in &observation.smiles {
        boxed_label(
            frame,
            &smile.translated(face.x, face.y),
            "Smile",
            SMILE_BOX_COLOR,
            0.5,
        )?;
    }
    for eye in &observation.eyes {
        boxed_label(
            frame,
            &eye.translated(face.x, face.y),
            "Eye",
            EYE_BOX_COLOR,
            0.5,
        )?;
    }

    let status = format!(
        "Smile: {}, Eyes: {}",
        if observation.smiling { "YES" } else { "NO" },
        if observation.eyes_open { "OPEN" } else { "CLOSED" },
    );
    put_label(
        frame,
        &status,
        Point::new(face.x, face.y - 40),
        0.6,
        TEXT_COLOR,
        2,
    )
}

fn boxed_label(
    frame: &mut Mat,
    region: &Region,
    label: &str,
    color: (f64, f64, f64),
    text_scale: f64,
) -> opencv::Result<()> {
    imgproc::rectangle(
        frame,
        region.to_rect(),
        scalar(color),
        BOX_THICKNESS,
        imgproc::LINE_8,
        0,
    )?;
    put_label(
        frame,
        label,
        Point::new(region.x, region.y - 10),
        text_scale,
        color,
        2,
    )
}

pub(crate) fn put_label(
    frame: &mut Mat,
    text: &str,
    origin: Point,
    scale: f64,
    color: (f64, f64, f64),
    thickness: i32,
) -> opencv::Result<()> {
    imgproc::put_text(
        frame,
        text,
        origin,
        imgproc::FONT_HERSHEY_SIMPLEX,
        scale,
        scalar(color),
        thickness,
        imgproc::LINE_8,
        false,
    )
}
