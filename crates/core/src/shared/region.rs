use opencv::core::Rect;

/// An axis-aligned detection box in pixel coordinates.
///
/// Face boxes are relative to the full frame; eye and smile boxes are
/// relative to the face sub-region they were detected in. Immutable once
/// produced by a detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The same box shifted by `(dx, dy)`, e.g. from face-relative into
    /// frame coordinates.
    pub fn translated(&self, dx: i32, dy: i32) -> Region {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}
