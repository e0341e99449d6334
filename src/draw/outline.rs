use tiny_skia::{Path, PathBuilder};

/// Vector path of glyph contours, filled with the non-zero rule
#[derive(Clone, Debug, Default)]
pub struct Outline {
    builder: PathBuilder,
}

impl Outline {
    pub fn new() -> Self {
        Default::default()
    }

    /// Closed axis aligned rectangle
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut builder = PathBuilder::new();
        builder.move_to(x, y);
        builder.line_to(x + width, y);
        builder.line_to(x + width, y + height);
        builder.line_to(x, y + height);
        builder.close();

        Self { builder }
    }

    /// A pen that appends to this outline with every point moved by `(dx, dy)`
    pub fn pen(&mut self, dx: f32, dy: f32) -> Pen<'_> {
        Pen {
            builder: &mut self.builder,
            dx,
            dy,
        }
    }

    /// `None` while nothing was drawn
    pub fn to_path(&self) -> Option<Path> {
        self.builder.clone().finish()
    }
}

pub struct Pen<'o> {
    builder: &'o mut PathBuilder,
    dx: f32,
    dy: f32,
}

impl rusttype::OutlineBuilder for Pen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x + self.dx, y + self.dy);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x + self.dx, y + self.dy);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (dx, dy) = (self.dx, self.dy);
        self.builder.quad_to(x1 + dx, y1 + dy, x + dx, y + dy);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (dx, dy) = (self.dx, self.dy);
        self.builder
            .cubic_to(x1 + dx, y1 + dy, x2 + dx, y2 + dy, x + dx, y + dy);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
