use serde::{Deserialize, Serialize};

/// Width and height of a laid-out box, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true when this size fits inside `available` on both axes.
    pub fn fits_within(&self, available: Size) -> bool {
        self.width <= available.width && self.height <= available.height
    }
}
