pub mod canvas;
pub mod outline;
pub mod point;

pub use canvas::Canvas;
pub use outline::{Outline, Pen};
pub use point::Point;

use crate::color::Color;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
    #[error("failed to write png to {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Something outlines can be painted on
pub trait Surface {
    /// Reset every pixel to fully transparent
    fn clear(&mut self);

    /// Fill `outline`, shifted by `origin`
    fn fill(&mut self, outline: &Outline, origin: Point, color: Color);

    /// Stroke `outline`, shifted by `origin`, the line centered on the contour
    fn stroke(&mut self, outline: &Outline, origin: Point, color: Color, width: f32);
}

/// Persists a surface
pub trait ImageSink {
    fn write_png(&self, path: &Path) -> Result<(), SinkError>;
}
