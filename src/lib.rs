pub mod cli;
pub mod color;
pub mod compositor;
pub mod draw;
pub mod font;
pub mod layout;
pub mod log;
pub mod options;
pub mod render;
pub mod search;
pub mod utils;

pub use compositor::RenderedMetrics;
pub use layout::{Extent, LayoutEngine, WrapPolicy};
pub use options::{HAlign, RenderOptions, VAlign};
pub use search::{find_max_size, NoFit, SizeResult};
