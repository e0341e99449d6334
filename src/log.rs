pub use crate::{debug, error, info, trace, warn};

/// Log Context
#[derive(Clone, Debug)]
pub struct LC {
    pub name: String,
    pub should_log: bool,
}

impl LC {
    pub fn new(name: &str, should_log: bool) -> Self {
        Self {
            name: name.into(),
            should_log,
        }
    }

    pub fn child(&self, name_extention: &str) -> Self {
        Self {
            name: format!("{} > {}", self.name, name_extention),
            should_log: self.should_log,
        }
    }

    /// Context for the size search, loud with `search-logs`
    pub fn search() -> Self {
        Self::new("search", cfg!(feature = "search-logs"))
    }

    /// Context for the compositor, loud with `compositor-logs`
    pub fn compositor() -> Self {
        Self::new("compositor", cfg!(feature = "compositor-logs"))
    }

    /// Context for the glyph layout, loud with `layout-logs`
    pub fn layout() -> Self {
        Self::new("layout", cfg!(feature = "layout-logs"))
    }

    /// Context for font lookup, loud with `font-logs`
    pub fn font() -> Self {
        Self::new("font", cfg!(feature = "font-logs"))
    }
}

use ::std::fmt::{Display, Error as FmtError, Formatter};
impl Display for LC {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "[{}]", self.name)
    }
}

#[macro_export]
macro_rules! error {
    ($ctx:expr, $fmt:literal $(,$args:expr)*) => {
        ::log::error!("{} {}", $ctx, format!($fmt, $($args),*))
    }
}

#[macro_export]
macro_rules! warn {
    ($ctx:expr, $fmt:literal $(,$args:expr)*) => {
        ::log::warn!("{} {}", $ctx, format!($fmt, $($args),*))
    }
}

#[macro_export]
macro_rules! info {
    ($ctx:expr, $fmt:literal $(,$args:expr)*) => {
        if $ctx.should_log {
            ::log::info!("{} {}", $ctx, format!($fmt, $($args),*))
        }
    }
}

#[macro_export]
macro_rules! debug {
    ($ctx:expr, $fmt:literal $(,$args:expr)*) => {
        if $ctx.should_log {
            ::log::debug!("{} {}", $ctx, format!($fmt, $($args),*))
        }
    }
}

#[macro_export]
macro_rules! trace {
    ($ctx:expr, $fmt:literal $(,$args:expr)*) => {
        if $ctx.should_log {
            ::log::trace!("{} {}", $ctx, format!($fmt, $($args),*))
        }
    }
}
