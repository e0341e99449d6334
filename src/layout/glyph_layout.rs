use super::wrap::{self, Line};
use super::{Extent, LayoutEngine, WrapPolicy};
use crate::draw::Outline;
use crate::log::*;
use crate::options::HAlign;

use rusttype::{point, Font, Scale};

/// Pixel size used until `set_font` is called
pub const DEFAULT_SIZE: f32 = 16.0;

/// Lays text out with a single rusttype face
#[derive(Clone)]
pub struct GlyphLayout {
    font: Font<'static>,
    family: Box<str>,

    text: String,
    width: u32,
    height: u32,
    wrap: WrapPolicy,
    align: HAlign,
    size: f32,

    lc: LC,
}

impl GlyphLayout {
    /// `family` is the name `font` was resolved from
    pub fn new(font: Font<'static>, family: &str) -> Self {
        Self {
            font,
            family: family.into(),
            text: String::new(),
            width: 0,
            height: 0,
            wrap: WrapPolicy::None,
            align: HAlign::Left,
            size: DEFAULT_SIZE,
            lc: LC::layout(),
        }
    }

    fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }

    fn line_height(&self) -> f32 {
        let v_metrics = self.font.v_metrics(self.scale());
        v_metrics.ascent - v_metrics.descent + v_metrics.line_gap
    }

    /// Advance width of `text` on a single line, kerning included
    fn text_width(&self, text: &str) -> f32 {
        let scale = self.scale();

        let mut last = None;
        let mut width = 0.0;
        for c in text.chars() {
            let glyph = self.font.glyph(c).scaled(scale);
            if let Some(last) = last {
                width += self.font.pair_kerning(scale, last, glyph.id());
            }
            width += glyph.h_metrics().advance_width;
            last = Some(glyph.id());
        }
        width
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let max_width = match self.wrap {
            WrapPolicy::Word => Some(self.width as f32),
            WrapPolicy::None => None,
        };

        wrap::wrap(&self.text, max_width, |s| self.text_width(s))
    }

    /// Left edge of a line of `line_width` inside the box
    fn line_x(&self, line_width: f32) -> f32 {
        let free = self.width as f32 - line_width;
        match self.align {
            HAlign::Right => free,
            HAlign::Center => free / 2.0,
            HAlign::Left | HAlign::None | HAlign::Justified => 0.0,
        }
    }
}

impl LayoutEngine for GlyphLayout {
    fn set_text(&mut self, text: &str) {
        trace!(self.lc, "| set_text :: '{text}'");
        self.text = text.into();
    }

    fn set_box(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn set_wrap(&mut self, wrap: WrapPolicy) {
        self.wrap = wrap;
    }

    fn set_alignment(&mut self, align: HAlign) {
        self.align = align;
    }

    fn set_font(&mut self, family: &str, size: f32) {
        if family != &*self.family {
            debug!(
                self.lc,
                "| set_font :: '{family}' requested, drawing with the face of '{}'",
                self.family
            );
        }
        self.size = size;
    }

    fn measure(&self) -> Extent {
        let lines = self.lines();

        let width = lines.iter().map(|l| l.width).fold(0.0, f32::max);
        let height = lines.len() as f32 * self.line_height();

        let extent = Extent::new(width.ceil() as u32, height.ceil() as u32);
        trace!(
            self.lc,
            "| measure :: size: {}, lines: {}, extent: {extent}, box: {}x{}",
            self.size,
            lines.len(),
            self.width,
            self.height
        );
        extent
    }

    fn last_line_text(&self) -> String {
        self.lines()
            .last()
            .map(|line| line.text.to_owned())
            .unwrap_or_default()
    }

    fn outline(&self) -> Outline {
        let scale = self.scale();
        let ascent = self.font.v_metrics(scale).ascent;
        let line_height = self.line_height();

        let mut outline = Outline::new();
        for (idx, line) in self.lines().iter().enumerate() {
            let start = point(
                self.line_x(line.width),
                idx as f32 * line_height + ascent,
            );

            for glyph in self.font.layout(line.text, scale, start) {
                let pos = glyph.position();
                glyph.unpositioned().build_outline(&mut outline.pen(pos.x, pos.y));
            }
        }

        debug!(
            self.lc,
            "| outline :: bounds {:?} at size {}",
            outline.to_path().map(|path| path.bounds()),
            self.size
        );
        outline
    }
}
