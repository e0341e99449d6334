//! Largest font size that fits a box.
//!
//! The probe is only trusted when it fits strictly inside the box *and* its final
//! line still agrees with the final line laid out before any size was set. Wrapping
//! engines have been seen to drop trailing glyphs off the last line at some sizes,
//! a probe like that measures smaller than the text really is.

use crate::layout::{self, Extent, LayoutEngine};
use crate::log::*;
use crate::options::RenderOptions;

use std::fmt::{Display, Error as FmtError, Formatter};

/// No size is tried above this, real faces stop fitting long before.
pub const MAX_SIZE: u32 = 1 << 16;

/// Why no size could be used
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoFit {
    /// The box has no area or there is no text, nothing was probed.
    Degenerate,
    /// Even size 1 does not fit the box.
    TooSmall,
    /// The final line disagreed with the baseline at size 1.
    InconsistentWrap,
}

impl Display for NoFit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let reason = match self {
            Self::Degenerate => "the box is empty or there is no text",
            Self::TooSmall => "the text does not fit even at size 1",
            Self::InconsistentWrap => "the layout wrapped inconsistently at size 1",
        };
        write!(f, "{reason}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeResult {
    Fits(u32),
    NoFit(NoFit),
}

impl SizeResult {
    /// The chosen size, `0` when nothing fits
    pub fn size(self) -> u32 {
        match self {
            Self::Fits(size) => size,
            Self::NoFit(_) => 0,
        }
    }
}

/// One measurement of the engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutProbe {
    pub size: u32,
    pub extent: Extent,
    pub last_line: String,
}

impl Display for LayoutProbe {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            f,
            "size {}: {}, last line '{}'",
            self.size, self.extent, self.last_line
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Fits,
    TooBig,
    BadWrap,
}

/// True when one of the two lines is a suffix of the other.
pub fn wrap_is_well_formed(last_line: &str, baseline: &str) -> bool {
    let (longer, shorter) = if last_line.len() >= baseline.len() {
        (last_line, baseline)
    } else {
        (baseline, last_line)
    };
    longer.ends_with(shorter)
}

struct Search<'a, E: ?Sized> {
    engine: &'a mut E,
    options: &'a RenderOptions,
    baseline: String,
    probes: usize,
    lc: LC,
}

impl<E: LayoutEngine + ?Sized> Search<'_, E> {
    fn probe(&mut self, size: u32) -> LayoutProbe {
        self.probes += 1;
        self.engine.set_font(self.options.font(), size as f32);

        LayoutProbe {
            size,
            extent: self.engine.measure(),
            last_line: self.engine.last_line_text(),
        }
    }

    fn verdict(&mut self, size: u32) -> Verdict {
        if size > MAX_SIZE {
            return Verdict::TooBig;
        }

        let probe = self.probe(size);
        let verdict = if !wrap_is_well_formed(&probe.last_line, &self.baseline) {
            Verdict::BadWrap
        } else if probe.extent.height >= self.options.height()
            || probe.extent.width >= self.options.width()
        {
            Verdict::TooBig
        } else {
            Verdict::Fits
        };

        trace!(self.lc, "| verdict :: {probe} -> {verdict:?}");
        verdict
    }
}

/// Finds the largest integer size the text fits in `options`' box at.
///
/// Sizes double from 1 until a probe fails, then climb one at a time from the
/// last fitting size. A wrap failure while climbing gives back the size below it,
/// a bounds failure gives back the last size that fit.
pub fn find_max_size<E>(engine: &mut E, options: &RenderOptions) -> SizeResult
where
    E: LayoutEngine + ?Sized,
{
    let lc = LC::search();

    if options.width() == 0 || options.height() == 0 || options.text().is_empty() {
        debug!(
            lc,
            "| find_max_size :: nothing to fit, box: {}x{}, text length: {}",
            options.width(),
            options.height(),
            options.text().len()
        );
        return SizeResult::NoFit(NoFit::Degenerate);
    }

    layout::configure(engine, options, &lc);
    let baseline = engine.last_line_text();
    trace!(lc, "| find_max_size :: baseline last line: '{baseline}'");

    let mut search = Search {
        engine,
        options,
        baseline,
        probes: 0,
        lc: lc.child("probe"),
    };

    let mut best = 0;
    let mut size = 1;
    let stop = loop {
        match search.verdict(size) {
            Verdict::Fits => {
                best = size;
                size = size.saturating_mul(2);
            }
            failure => break failure,
        }
    };

    if best == 0 {
        debug!(lc, "| find_max_size :: size 1 failed with {stop:?}");
        return SizeResult::NoFit(match stop {
            Verdict::BadWrap => NoFit::InconsistentWrap,
            _ => NoFit::TooSmall,
        });
    }
    debug!(
        lc,
        "| find_max_size :: doubling stopped at {size} ({stop:?}), climbing from {best}"
    );

    size = best;
    let result = loop {
        match search.verdict(size) {
            Verdict::Fits => {
                best = size;
                size += 1;
            }
            Verdict::BadWrap => break size - 1,
            Verdict::TooBig => break best,
        }
    };

    info!(
        lc,
        "| find_max_size :: {result} after {} probes",
        search.probes
    );

    match result {
        0 => SizeResult::NoFit(NoFit::InconsistentWrap),
        size => SizeResult::Fits(size),
    }
}
