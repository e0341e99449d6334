/// Draw origin in surface pixels, may sit left of or above the surface
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Transform moving box coordinates onto the surface
    pub fn translation(self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_translate(self.x as f32, self.y as f32)
    }
}

use std::fmt::{Display, Error as FmtError, Formatter};
impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "({}, {})", self.x, self.y)
    }
}
