//! Shared font database.
//!
//! Fonts are loaded once at startup and handed to every renderer behind an
//! `Arc`, so concurrent renders never touch the filesystem for glyphs.

use resvg::usvg::fontdb;
use std::path::Path;
use std::sync::Arc;

use crate::error::RenderError;

/// Family used when the database has no faces to name one.
const FALLBACK_FAMILY: &str = "sans-serif";

/// Text families tried, in order, after the generic sans-serif family.
const PREFERRED_FAMILIES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Noto Sans", "Roboto"];

/// Read-only font database plus the family the renderer asks for.
#[derive(Clone)]
pub struct FontStore {
    db: Arc<fontdb::Database>,
    family: String,
}

impl std::fmt::Debug for FontStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontStore")
            .field("faces", &self.db.len())
            .field("family", &self.family)
            .finish()
    }
}

impl FontStore {
    /// Load a single font file, or every font in a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be read or holds no usable faces.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let mut db = fontdb::Database::new();
        if path.is_dir() {
            db.load_fonts_dir(path);
        } else {
            db.load_font_file(path).map_err(|source| RenderError::FontLoad {
                path: path.to_path_buf(),
                source,
            })?;
        }
        tracing::debug!("Loaded {} font faces from {}", db.len(), path.display());
        Self::require_faces(db, &path.display().to_string())
    }

    /// Load the fonts installed on the host.
    ///
    /// # Errors
    ///
    /// Returns an error if no system fonts are found.
    pub fn system() -> Result<Self, RenderError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self::require_faces(db, "system fonts")
    }

    /// Wrap an already populated database without checking it.
    ///
    /// Text drawn with an empty database is silently dropped, which is only
    /// useful when testing cell geometry and colors.
    pub fn from_database(db: fontdb::Database) -> Self {
        let family = Self::primary_family(&db);
        Self {
            db: Arc::new(db),
            family,
        }
    }

    fn require_faces(db: fontdb::Database, searched: &str) -> Result<Self, RenderError> {
        if db.is_empty() {
            return Err(RenderError::FontMissing {
                searched: searched.to_string(),
            });
        }
        Ok(Self::from_database(db))
    }

    /// Pick a regular text family.
    ///
    /// Prefers the generic sans-serif family and a few common text faces.
    /// Otherwise takes the alphabetically first proportional family (any
    /// family as a last resort), so the choice does not depend on the order
    /// fonts were scanned in.
    fn primary_family(db: &fontdb::Database) -> String {
        let mut families = vec![fontdb::Family::SansSerif];
        families.extend(PREFERRED_FAMILIES.iter().map(|&name| fontdb::Family::Name(name)));
        let query = fontdb::Query {
            families: &families,
            ..Default::default()
        };

        db.query(&query)
            .and_then(|id| db.face(id))
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone())
            .or_else(|| Self::first_family(db, |face| !face.monospaced))
            .or_else(|| Self::first_family(db, |_| true))
            .unwrap_or_else(|| FALLBACK_FAMILY.to_string())
    }

    fn first_family(
        db: &fontdb::Database,
        keep: impl Fn(&fontdb::FaceInfo) -> bool,
    ) -> Option<String> {
        db.faces()
            .filter(|face| keep(face))
            .filter_map(|face| face.families.first())
            .map(|(name, _)| name.clone())
            .min()
    }

    /// Override the family used for all text.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontMissing`] if no loaded face belongs to
    /// `family`, since every label would otherwise be dropped.
    pub fn with_family(mut self, family: impl Into<String>) -> Result<Self, RenderError> {
        let family = family.into();
        let found = self
            .db
            .query(&fontdb::Query {
                families: &[fontdb::Family::Name(&family)],
                ..Default::default()
            })
            .is_some();
        if !found {
            return Err(RenderError::FontMissing { searched: family });
        }
        self.family = family;
        Ok(self)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub(crate) fn database(&self) -> Arc<fontdb::Database> {
        Arc::clone(&self.db)
    }
}
