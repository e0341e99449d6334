use crate::compositor::{self, RenderedMetrics};
use crate::draw::{Canvas, ImageSink, SinkError};
use crate::layout::{self, Extent, LayoutEngine};
use crate::log::*;
use crate::options::RenderOptions;
use crate::search::{self, NoFit, SizeResult};

use std::fmt::{Display, Error as FmtError, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no font size fits the {width}x{height} box: {reason}")]
    NoFit {
        reason: NoFit,
        width: u32,
        height: u32,
    },
    #[error("no output filename given")]
    MissingFilename,
    #[error(transparent)]
    Sink(#[from] SinkError),
}

fn chosen_size(size: SizeResult, options: &RenderOptions) -> Result<u32, RenderError> {
    match size {
        SizeResult::Fits(size) => Ok(size),
        SizeResult::NoFit(reason) => Err(RenderError::NoFit {
            reason,
            width: options.width(),
            height: options.height(),
        }),
    }
}

/// Fits the text to the box, paints it and writes the png named in `options`.
///
/// The canvas lives only for this call, nothing is written when no size fits.
pub fn make_png<E>(engine: &mut E, options: &RenderOptions) -> Result<RenderedMetrics, RenderError>
where
    E: LayoutEngine + ?Sized,
{
    let lc = LC::compositor().child("make_png");
    let path = options.filename().ok_or(RenderError::MissingFilename)?;

    let size = chosen_size(search::find_max_size(engine, options), options)?;

    let mut canvas = Canvas::new(options.width(), options.height())?;
    let metrics = compositor::render(engine, &mut canvas, size, options);
    canvas.write_png(path)?;

    info!(
        lc,
        "| make_png :: wrote {} at size {} ({} after padding)",
        path.display(),
        metrics.size,
        metrics.fix_size
    );
    Ok(metrics)
}

/// Summary of a fit without drawing anything
#[derive(Clone, Debug, PartialEq)]
pub struct FontData {
    pub extent: Extent,
    pub font: String,
    pub size: u32,
    pub fpa: u32,
    pub v_align: crate::options::VAlign,
    pub h_align: crate::options::HAlign,
}

impl Display for FontData {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.extent, self.font, self.size, self.fpa, self.v_align, self.h_align
        )
    }
}

/// Runs the size search and measures the text at the chosen size.
pub fn font_data<E>(engine: &mut E, options: &RenderOptions) -> Result<FontData, RenderError>
where
    E: LayoutEngine + ?Sized,
{
    let size = chosen_size(search::find_max_size(engine, options), options)?;

    layout::configure(engine, options, &LC::search());
    engine.set_font(options.font(), size as f32);

    Ok(FontData {
        extent: engine.measure(),
        font: options.font().into(),
        size,
        fpa: options.fpa(),
        v_align: options.v_align(),
        h_align: options.h_align(),
    })
}
