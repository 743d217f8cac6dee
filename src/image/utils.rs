use image::{buffer::ConvertBuffer as _, codecs::jpeg::JpegEncoder, RgbImage, RgbaImage};
use log::info;
use std::{
    fs::{create_dir_all, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Quality used to encode `JPEG` results when nothing else is requested.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Handle Error for image save.
#[derive(Error, Debug)]
pub enum SaveError {
    /// Error with path creation
    #[error("Could not create path for result image '{}'", path.display())]
    Folder {
        /// Path of the folder
        path: PathBuf,
        /// Error source
        source: io::Error,
    },

    /// Error during file creation or write
    #[error("Could not write result image file '{}'", filename.display())]
    Write {
        /// Path of the file write failed
        filename: PathBuf,
        /// Error source
        source: io::Error,
    },

    /// Error during `JPEG` encoding
    #[error("Could not encode result image '{}'", filename.display())]
    Encode {
        /// Path of the file encoding failed
        filename: PathBuf,
        /// Error source
        source: image::ImageError,
    },
}

/// Encode `image` as `JPEG` into `writer`.
/// `JPEG` has no alpha channel, it is dropped.
///
/// # Errors
/// Forward the encoder errors.
#[profiling::function]
pub fn write_jpeg<W: Write>(
    image: &RgbaImage,
    writer: W,
    quality: u8,
) -> Result<(), image::ImageError> {
    let rgb: RgbImage = image.convert();
    JpegEncoder::new_with_quality(writer, quality.clamp(1, 100)).encode_image(&rgb)
}

/// Save `image` as a `JPEG` file, creating the parent folder if needed.
///
/// # Errors
/// Will return `Folder` if the parent folder can't be created, `Write` if the
/// file can't be created or written, and `Encode` if the encoding failed.
#[profiling::function]
pub fn save_jpeg<P: AsRef<Path>>(image: &RgbaImage, path: P, quality: u8) -> Result<(), SaveError> {
    let filename = path.as_ref();

    // create path if not exist
    if let Some(folder) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !folder.is_dir() {
            create_dir_all(folder).map_err(|source| SaveError::Folder {
                path: folder.into(),
                source,
            })?;
        }
    }

    let mkerr_write = |source| SaveError::Write {
        filename: filename.into(),
        source,
    };
    let file = File::create(filename).map_err(mkerr_write)?;
    let mut writer = BufWriter::new(file);
    write_jpeg(image, &mut writer, quality).map_err(|source| SaveError::Encode {
        filename: filename.into(),
        source,
    })?;
    writer.flush().map_err(mkerr_write)?;

    info!("Image saved to '{}'", filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::decode;
    use image::Rgba;
    use std::fs;

    #[test]
    fn jpeg_in_memory() {
        let image = RgbaImage::from_pixel(32, 16, Rgba([200, 30, 30, 128]));
        let mut data = Vec::new();
        write_jpeg(&image, &mut data, DEFAULT_JPEG_QUALITY).unwrap();

        let decoded = decode(&data).unwrap();
        assert_eq!(decoded.dimensions(), (32, 16));
        let px = decoded.get_pixel(8, 8);
        assert!(px[0] > 180 && px[1] < 60 && px[2] < 60);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn save_creates_folder() {
        let folder = tempfile::tempdir().unwrap();
        let filename = folder.path().join("nested").join("result.jpg");
        let image = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));

        save_jpeg(&image, &filename, DEFAULT_JPEG_QUALITY).unwrap();
        let data = fs::read(&filename).unwrap();
        assert_eq!(&data[..2], &[0xff, 0xd8]);
    }

    #[test]
    fn save_into_a_file_path() {
        let folder = tempfile::tempdir().unwrap();
        let file = folder.path().join("not-a-dir");
        fs::write(&file, b"").unwrap();
        let image = RgbaImage::new(4, 4);

        let err = save_jpeg(&image, file.join("result.jpg"), 90).unwrap_err();
        assert!(matches!(err, SaveError::Folder { .. }));
    }
}
