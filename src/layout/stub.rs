use super::{Extent, LayoutEngine, WrapPolicy};
use crate::draw::Outline;
use crate::options::HAlign;

/// Deterministic engine: `height = size`, `width = size * chars(text)`.
///
/// The final line is the whole text, from `bad_wrap_from` upwards it is garbage
/// that is no suffix of anything.
#[derive(Clone, Debug, Default)]
pub struct LinearLayout {
    pub text: String,
    pub box_size: (u32, u32),
    pub wrap: Option<WrapPolicy>,
    pub alignment: Option<HAlign>,
    pub size: Option<f32>,

    pub bad_wrap_from: Option<u32>,
    /// Every size passed to `set_font`
    pub probes: Vec<f32>,
}

impl LinearLayout {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn bad_wrap_from(mut self, size: u32) -> Self {
        self.bad_wrap_from = Some(size);
        self
    }

    fn size(&self) -> f32 {
        self.size.unwrap_or(super::glyph_layout::DEFAULT_SIZE)
    }
}

impl LayoutEngine for LinearLayout {
    fn set_text(&mut self, text: &str) {
        self.text = text.into();
    }

    fn set_box(&mut self, width: u32, height: u32) {
        self.box_size = (width, height);
    }

    fn set_wrap(&mut self, wrap: WrapPolicy) {
        self.wrap = Some(wrap);
    }

    fn set_alignment(&mut self, align: HAlign) {
        self.alignment = Some(align);
    }

    fn set_font(&mut self, _family: &str, size: f32) {
        self.probes.push(size);
        self.size = Some(size);
    }

    fn measure(&self) -> Extent {
        let size = self.size();
        let chars = self.text.chars().count() as f32;
        Extent::new((size * chars).ceil() as u32, size.ceil() as u32)
    }

    fn last_line_text(&self) -> String {
        match self.size {
            Some(size) if self.bad_wrap_from.is_some_and(|from| size as u32 >= from) => {
                "\u{fffd}garbled".into()
            }
            _ => self.text.clone(),
        }
    }

    fn outline(&self) -> Outline {
        let Extent { width, height } = self.measure();
        Outline::rect(0.0, 0.0, width as f32, height as f32)
    }
}
