//! Providers of source image data.
//!
//! The overlay pipeline only needs encoded bytes. Remote photo providers can
//! implement [`ImageSource`] on their side, with their own authentication and
//! retry policy.

use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error when fetching source image data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// We could not read a file.
    #[error("Could not read '{}'", path.display())]
    Io {
        /// Source error
        source: io::Error,
        /// Path of the file we tried to read
        path: PathBuf,
    },

    /// A provider specific failure.
    #[error("Image provider failed: {0}")]
    Provider(String),
}

/// Something able to provide the encoded bytes of an image.
pub trait ImageSource {
    /// Fetch the encoded image.
    ///
    /// # Errors
    /// Return the error happened during fetching.
    fn fetch_image(&self) -> Result<Vec<u8>, SourceError>;
}

/// Image read from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the file at `path`. The file is only read by `fetch_image`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileSource {
    #[profiling::function]
    fn fetch_image(&self) -> Result<Vec<u8>, SourceError> {
        let data = fs::read(&self.path).map_err(|source| SourceError::Io {
            source,
            path: self.path.clone(),
        })?;
        debug!("read {} bytes from '{}'", data.len(), self.path.display());
        Ok(data)
    }
}

/// Image already in memory.
#[derive(Debug, Clone)]
pub struct MemorySource(Vec<u8>);

impl MemorySource {
    /// Wrap encoded image data.
    #[must_use]
    pub const fn new(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl ImageSource for MemorySource {
    fn fetch_image(&self) -> Result<Vec<u8>, SourceError> {
        Ok(self.0.clone())
    }
}

impl<S: ImageSource + ?Sized> ImageSource for &S {
    fn fetch_image(&self) -> Result<Vec<u8>, SourceError> {
        (**self).fetch_image()
    }
}
