use crate::draw::{Point, Surface};
use crate::layout::{self, Extent, LayoutEngine};
use crate::log::*;
use crate::options::{RenderOptions, VAlign};

/// What was actually drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedMetrics {
    /// Size chosen by the search
    pub size: u32,
    /// Size after padding, the glyphs are drawn at this
    pub fix_size: f32,
    /// Text extent at `fix_size`
    pub extent: Extent,
    /// Where the box origin of the layout landed on the surface
    pub origin: Point,
}

/// Top of the text block inside a box `box_height` tall
pub fn origin_y(v_align: VAlign, box_height: u32, text_height: u32) -> i32 {
    let (box_height, text_height) = (box_height as i32, text_height as i32);
    match v_align {
        VAlign::Top => 0,
        VAlign::Center => box_height / 2 - text_height / 2,
        VAlign::Bottom => box_height - text_height,
    }
}

/// Lays the text out once at the padded size and paints it: fill first, then the
/// optional stroke over the same outline.
///
/// Horizontal placement is left to the engine, only the vertical offset is
/// computed here.
pub fn render<E, S>(
    engine: &mut E,
    surface: &mut S,
    size: u32,
    options: &RenderOptions,
) -> RenderedMetrics
where
    E: LayoutEngine + ?Sized,
    S: Surface + ?Sized,
{
    let lc = LC::compositor();

    let fix_size = options.fix_size(size);
    layout::configure(engine, options, &lc);
    engine.set_font(options.font(), fix_size);

    let extent = engine.measure();
    let origin = Point::new(0, origin_y(options.v_align(), options.height(), extent.height));
    debug!(
        lc,
        "| render :: size: {size}, fix_size: {fix_size}, extent: {extent}, origin: {origin}"
    );

    surface.clear();

    let outline = engine.outline();
    surface.fill(&outline, origin, options.text_color());

    if let Some(stroke) = options.stroke() {
        trace!(lc, "| render :: stroke {} px", stroke.width);
        surface.stroke(&outline, origin, stroke.color, stroke.width);
    }

    #[cfg(feature = "outlines")]
    surface.stroke(
        &crate::draw::Outline::rect(0.0, 0.0, options.width() as f32, extent.height as f32),
        origin,
        crate::color::IRIS,
        1.0,
    );

    RenderedMetrics {
        size,
        fix_size,
        extent,
        origin,
    }
}
