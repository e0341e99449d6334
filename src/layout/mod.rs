pub mod glyph_layout;
pub mod wrap;

#[cfg(test)]
pub mod stub;

pub use glyph_layout::GlyphLayout;

use crate::draw::Outline;
use crate::log::*;
use crate::options::{HAlign, RenderOptions};

use std::fmt::{Display, Error as FmtError, Formatter};

/// How lines are broken once they reach the box width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrapPolicy {
    /// Never break, every paragraph is a single line.
    None,
    /// Break between words, a word wider than the box overflows.
    #[default]
    Word,
}

/// Pixel size taken up by laid out text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Display for Extent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Text shaping and line breaking, queried by the size search and the compositor.
///
/// Implementations keep whatever was last set and lay the text out again on every
/// query, nothing is cached between sizes.
pub trait LayoutEngine {
    /// Replace the text to lay out
    fn set_text(&mut self, text: &str);

    /// Set the box the text is wrapped and aligned in
    fn set_box(&mut self, width: u32, height: u32);

    /// Set how lines are broken at the box width
    fn set_wrap(&mut self, wrap: WrapPolicy);

    /// Set how every line is placed across the box width
    fn set_alignment(&mut self, align: HAlign);

    /// Select the face and its size in pixels
    fn set_font(&mut self, family: &str, size: f32);

    /// Returns the pixel size of the laid out text
    fn measure(&self) -> Extent;

    /// Returns the text of the final visual line
    fn last_line_text(&self) -> String;

    /// Returns the glyph outlines in box coordinates, y growing downwards
    fn outline(&self) -> Outline;
}

/// Loads the text, box, wrapping and alignment of `options` into the engine.
/// The font is left alone, callers pick the size.
pub fn configure<E>(engine: &mut E, options: &RenderOptions, lc: &LC)
where
    E: LayoutEngine + ?Sized,
{
    engine.set_text(options.text());
    engine.set_box(options.width(), options.height());
    engine.set_wrap(WrapPolicy::Word);

    match options.h_align() {
        HAlign::None => {}
        HAlign::Justified => {
            warn!(
                lc,
                "| configure :: justified text is not supported, keeping the default alignment"
            )
        }
        align => engine.set_alignment(align),
    }
}
