use crate::error::HeadshotError;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encode `image` as JPEG and write it to `path`, replacing any existing file.
///
/// Alpha is dropped: the image is flattened to RGB8 before encoding, so PNG
/// sources with transparency transcode cleanly.
pub fn write_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<(), HeadshotError> {
    let fail = |source: ImageError| HeadshotError::EncodeWrite {
        path: path.to_path_buf(),
        source,
    };

    let rgb = image.to_rgb8();
    let file = File::create(path).map_err(|e| fail(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    {
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        encoder
            .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
            .map_err(fail)?;
    }

    writer.flush().map_err(|e| fail(ImageError::IoError(e)))?;
    Ok(())
}
