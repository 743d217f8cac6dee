//! Catalog of candidate texts to overlay.
//!
//! The catalog is a `JSON` array of entries with an `arabic` text and its
//! `english` translation:
//!
//! ```json
//! [{ "arabic": "وَاصْبِرْ", "english": "And be patient." }]
//! ```
//!
//! Each entry becomes a two-line text, the original above its translation.
//! No shaping is done here, right-to-left text is given to the rasterizer as is.

use log::debug;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error when loading a text catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// We could not read the catalog file.
    #[error("Could not read text catalog '{}'", path.display())]
    Io {
        /// Source error
        source: io::Error,
        /// Path of the file we tried to read
        path: PathBuf,
    },

    /// The catalog content is not the expected `JSON`.
    #[error("Invalid text catalog content")]
    Json(#[from] serde_json::Error),
}

/// One quote of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// The quote in its original language.
    #[serde(rename = "arabic")]
    pub original: String,
    /// The translation of the quote.
    #[serde(rename = "english")]
    pub translation: String,
}

impl Entry {
    /// Text to overlay: the original on the first line, the translation on the second.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}\n{}", self.original, self.translation)
    }
}

/// A list of quotes loaded from a `JSON` resource.
#[derive(Debug, Clone, Default)]
pub struct TextCatalog {
    entries: Vec<Entry>,
}

impl TextCatalog {
    /// Load a catalog file.
    ///
    /// # Errors
    /// Will return `Io` if the file can't be read and `Json` if its content is invalid.
    #[profiling::function]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            source,
            path: path.into(),
        })?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "{} texts loaded from '{}'",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from its `JSON` content.
    ///
    /// # Errors
    /// Will return `Json` if the content is not an array of entries.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let entries = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the catalog without any entry ?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in file order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Two-line text of the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<String> {
        self.entries.get(index).map(Entry::text)
    }

    /// Two-line texts of all entries.
    pub fn texts(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(Entry::text)
    }
}
