use super::{ImageSink, Outline, Point, SinkError, Surface};
use crate::color::Color;
use crate::log::*;

use std::path::Path;
use tiny_skia::{FillRule, Paint, Pixmap};

/// Premultiplied RGBA raster backed by tiny-skia
pub struct Canvas {
    pixmap: Pixmap,
    lc: LC,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, SinkError> {
        let pixmap = Pixmap::new(width, height).ok_or(SinkError::Surface { width, height })?;

        Ok(Self {
            pixmap,
            lc: LC::compositor().child("canvas"),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

impl Surface for Canvas {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill(&mut self, outline: &Outline, origin: Point, color: Color) {
        let Some(path) = outline.to_path() else {
            debug!(self.lc, "| fill :: nothing to fill");
            return;
        };

        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            origin.translation(),
            None,
        );
    }

    fn stroke(&mut self, outline: &Outline, origin: Point, color: Color, width: f32) {
        let Some(path) = outline.to_path() else {
            debug!(self.lc, "| stroke :: nothing to stroke");
            return;
        };

        let stroke = tiny_skia::Stroke {
            width,
            ..Default::default()
        };

        self.pixmap.stroke_path(
            &path,
            &paint(color),
            &stroke,
            origin.translation(),
            None,
        );
    }
}

impl ImageSink for Canvas {
    fn write_png(&self, path: &Path) -> Result<(), SinkError> {
        info!(self.lc, "| write_png :: writing {}", path.display());

        self.pixmap
            .save_png(path)
            .map_err(|err| SinkError::Write {
                path: path.into(),
                reason: err.to_string(),
            })
    }
}
