//! This crate draws multi-line text centered on a picture, in a color contrasting
//! with the picture under the text.
//!
//! Each line is rasterized on a scratch canvas to find its exact pixel extent,
//! the lines are stacked and centered in the frame, and the text color is the
//! complement of the average color of the picture where the text will be drawn.
//!
//! ```no_run
//! use tempelna::{FileSource, Overlay, OverlayOptions, DEFAULT_POINT_SIZE};
//!
//! let options = OverlayOptions::default();
//! let overlay = Overlay::from_font_file("font.ttf", DEFAULT_POINT_SIZE, options)?;
//! overlay.render_to_file(&FileSource::new("photo.jpg"), "وَاصْبِرْ\nAnd be patient.", "out.jpg")?;
//! # Ok::<(), tempelna::TempelnaError>(())
//! ```
//!
//! ## Contributing
//!
//! Your feedback and contributions are welcome! Please see
//! [GitHub](https://github.com/anggerdeni/tempelna) for details.

#![warn(missing_docs)]

pub mod catalog;
pub mod color;
pub mod content;
mod errors;
pub mod font;
pub mod image;
pub mod layout;
mod options;
mod overlay;
pub mod source;

#[cfg(test)]
mod test_utils;

pub use catalog::TextCatalog;
pub use errors::TempelnaError;
pub use font::{FontFace, Rasterizer};
pub use options::{OverlayOptions, TextColor};
pub use overlay::{add_centered_text, add_centered_text_with, Overlay};
pub use source::{FileSource, ImageSource, MemorySource};

/// Default point size of the overlaid text.
pub const DEFAULT_POINT_SIZE: f32 = 128.;
