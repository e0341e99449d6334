use crate::log::*;

use fontdb::{Database, Family, Query, Style, ID};
use rusttype::Font;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub static DEJAVU_SANS_FONT_DATA: &[u8] = include_bytes!("../fonts/dejavu/DejaVuSans.ttf");

/// Families tried, in order, when the requested one and the configured
/// sans-serif family are both missing.
const SANS_FALLBACKS: &[&str] = &["DejaVu Sans", "Liberation Sans", "Noto Sans", "FreeSans"];

#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{0}' is not a usable TrueType or OpenType font")]
    Invalid(String),
}

/// Installed faces, looked up by family name
pub struct FontBook {
    db: Database,
    lc: LC,
}

impl FontBook {
    /// Scans the system font directories
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        Self::with_database(db)
    }

    pub fn with_database(db: Database) -> Self {
        let lc = LC::font();
        info!(lc, "| with_database :: {} faces available", db.len());

        Self { db, lc }
    }

    /// The face compiled into the binary, used when nothing is installed
    pub fn bundled() -> Result<Font<'static>, FontError> {
        Font::try_from_bytes(DEJAVU_SANS_FONT_DATA)
            .ok_or_else(|| FontError::Invalid("bundled DejaVu Sans".into()))
    }

    /// Picks the installed face for `family`: the family itself, then the
    /// configured sans-serif family, then a common sans-serif family, then any
    /// upright face.
    fn pick(&self, family: &str) -> Option<ID> {
        let mut families = vec![Family::Name(family), Family::SansSerif];
        families.extend(SANS_FALLBACKS.iter().map(|name| Family::Name(name)));

        let query = Query {
            families: &families,
            ..Query::default()
        };

        self.db.query(&query).or_else(|| {
            self.db
                .faces()
                .filter(|face| face.style == Style::Normal)
                .min_by_key(|face| face.weight.0.abs_diff(fontdb::Weight::NORMAL.0))
                .map(|face| face.id)
        })
    }

    /// Returns the regular face of `family`, or a stand-in when the family is
    /// not installed. Falls back to the bundled face on an empty database.
    pub fn resolve(&self, family: &str) -> Result<Font<'static>, FontError> {
        let Some(id) = self.pick(family) else {
            warn!(
                self.lc,
                "| resolve :: no installed faces, drawing '{family}' with the bundled DejaVu Sans"
            );
            return Self::bundled();
        };

        if let Some(face) = self.db.face(id) {
            let found = face.families.first().map_or("", |(name, _)| name.as_str());
            if !found.eq_ignore_ascii_case(family) {
                warn!(
                    self.lc,
                    "| resolve :: '{family}' is not installed, using '{found}'"
                );
            }
            debug!(
                self.lc,
                "| resolve :: '{family}' -> '{}' (index {})",
                face.post_script_name,
                face.index
            );
        }

        self.db
            .with_face_data(id, |data, index| {
                Font::try_from_vec_and_index(data.to_vec(), index)
            })
            .flatten()
            .ok_or_else(|| FontError::Invalid(family.into()))
    }

    /// Loads the first face of a font file, skipping the family lookup
    pub fn load_file(path: &Path) -> Result<Font<'static>, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.into(),
            source,
        })?;

        Font::try_from_vec(data).ok_or_else(|| FontError::Invalid(path.display().to_string()))
    }
}
