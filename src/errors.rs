//! Custom error types.

use thiserror::Error;

/// A type representing all errors that can be returned by `tempelna`.
/// Each variant wrap the error of the step that failed, so callers can tell
/// a blank line from an undecodable image or a broken font.
#[derive(Debug, Error)]
pub enum TempelnaError {
    /// Error with font loading
    #[error("Font loading failed")]
    Font(#[from] crate::font::FontError),

    /// Error during rasterization of a line
    #[error("Text rendering failed")]
    Render(#[from] crate::font::RenderError),

    /// Error during text layout, including lines without visible pixels
    #[error("Text layout failed")]
    Layout(#[from] crate::layout::LayoutError),

    /// Error during text color selection
    #[error("Text color selection failed")]
    Color(#[from] crate::color::ColorError),

    /// Error with geometry
    #[error("Invalid geometry")]
    Content(#[from] crate::content::ContentError),

    /// Error during source image decoding
    #[error("Decode source image failed")]
    Decode(#[from] crate::image::DecodeError),

    /// Error when fetching source image
    #[error("Fetch source image failed")]
    Source(#[from] crate::source::SourceError),

    /// Error when saving the result
    #[error("Save result image failed")]
    Save(#[from] crate::image::SaveError),

    /// Error with the text catalog
    #[error("Text catalog loading failed")]
    Catalog(#[from] crate::catalog::CatalogError),
}
