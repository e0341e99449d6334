use crate::color::{self, Color};

use std::fmt::{Display, Error as FmtError, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("padding must be inside [0,100). Passed {0}")]
    Padding(u32),
    #[error("stroke width must be a positive number of pixels. Passed {0}")]
    StrokeWidth(f32),
}

/// Horizontal alignment, applied by the layout engine across the box width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HAlign {
    None,
    #[default]
    Left,
    Right,
    Center,
    /// Accepted but never laid out, the engine keeps its default.
    Justified,
}

/// Vertical alignment, applied by the compositor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl Display for HAlign {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let name = match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justified => "justified",
        };
        write!(f, "{name}")
    }
}

impl Display for VAlign {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let name = match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        };
        write!(f, "{name}")
    }
}

/// Outline painted over the glyph boundary, `width` in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Everything needed for one render. Built once and only ever borrowed.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    text: String,
    font: String,
    width: u32,
    height: u32,
    h_align: HAlign,
    v_align: VAlign,
    fpa: u32,
    text_color: Color,
    stroke: Option<Stroke>,
    filename: Option<PathBuf>,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn font(&self) -> &str {
        &self.font
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn h_align(&self) -> HAlign {
        self.h_align
    }
    pub fn v_align(&self) -> VAlign {
        self.v_align
    }
    /// Font pixel adjust, a percentage in `[0, 100)`
    pub fn fpa(&self) -> u32 {
        self.fpa
    }
    pub fn text_color(&self) -> Color {
        self.text_color
    }
    pub fn stroke(&self) -> Option<Stroke> {
        self.stroke
    }
    pub fn filename(&self) -> Option<&std::path::Path> {
        self.filename.as_deref()
    }

    /// `size - size * fpa / 100`, the size the glyphs are actually drawn at.
    pub fn fix_size(&self, size: u32) -> f32 {
        let size = size as f32;
        size - size * self.fpa as f32 / 100.0
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptionsBuilder {
    text: String,
    font: String,
    width: u32,
    height: u32,
    h_align: HAlign,
    v_align: VAlign,
    fpa: u32,
    text_color: Color,
    stroke: Option<Stroke>,
    filename: Option<PathBuf>,
}

impl Default for RenderOptionsBuilder {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: "Arial".into(),
            width: 0,
            height: 0,
            h_align: HAlign::default(),
            v_align: VAlign::default(),
            fpa: 0,
            text_color: color::BLACK,
            stroke: None,
            filename: None,
        }
    }
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    crate::builder_fields! {
        u32, width height fpa;
        HAlign, h_align;
        VAlign, v_align;
        Color, text_color;
        &str, text font;
    }

    pub fn stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Checks the ranges that cannot be represented by the field types.
    /// A zero sized box or empty text is left to the size search.
    pub fn build(self) -> Result<RenderOptions, OptionsError> {
        if self.fpa >= 100 {
            return Err(OptionsError::Padding(self.fpa));
        }
        if let Some(Stroke { width, .. }) = self.stroke {
            if !width.is_finite() || width <= 0.0 {
                return Err(OptionsError::StrokeWidth(width));
            }
        }

        Ok(RenderOptions {
            text: self.text,
            font: self.font,
            width: self.width,
            height: self.height,
            h_align: self.h_align,
            v_align: self.v_align,
            fpa: self.fpa,
            text_color: self.text_color,
            stroke: self.stroke,
            filename: self.filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = RenderOptions::builder().text("Hi").build().unwrap();

        assert_eq!(opts.font(), "Arial");
        assert_eq!(opts.h_align(), HAlign::Left);
        assert_eq!(opts.v_align(), VAlign::Center);
        assert_eq!(opts.fpa(), 0);
        assert_eq!(opts.text_color(), color::BLACK);
        assert!(opts.stroke().is_none());
        assert!(opts.filename().is_none());
    }

    #[test]
    fn padding_range() {
        assert!(RenderOptions::builder().fpa(99).build().is_ok());
        assert_eq!(
            RenderOptions::builder().fpa(100).build(),
            Err(OptionsError::Padding(100))
        );
    }

    #[test]
    fn stroke_width_range() {
        let red = Color::new(1.0, 0.0, 0.0);
        assert!(RenderOptions::builder().stroke(red, 1.5).build().is_ok());
        assert_eq!(
            RenderOptions::builder().stroke(red, 0.0).build(),
            Err(OptionsError::StrokeWidth(0.0))
        );
        assert!(RenderOptions::builder()
            .stroke(red, f32::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn fix_size() {
        let opts = RenderOptions::builder().build().unwrap();
        assert_eq!(opts.fix_size(37), 37.0);

        let opts = RenderOptions::builder().fpa(10).build().unwrap();
        assert_eq!(opts.fix_size(40), 36.0);

        let opts = RenderOptions::builder().fpa(25).build().unwrap();
        assert_eq!(opts.fix_size(10), 7.5);
    }
}
