use crate::error::HeadshotError;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Height that keeps the aspect ratio at `target_width`. Never below 1.
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = f64::from(target_width) * f64::from(height) / f64::from(width);
    (scaled.round() as u32).max(1)
}

/// Scale to `target_width` keeping the aspect ratio. No padding or letterboxing.
pub fn resize_to_width(image: &DynamicImage, target_width: u32) -> Result<DynamicImage, HeadshotError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || target_width == 0 {
        return Err(HeadshotError::InvalidImage { width, height });
    }

    if width == target_width {
        return Ok(image.clone());
    }

    let new_height = target_height(width, height, target_width);
    Ok(image.resize_exact(target_width, new_height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn blank(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::new(width, height))
    }

    #[test]
    fn height_is_rounded() {
        assert_eq!(target_height(600, 800, 300), 400);
        assert_eq!(target_height(450, 301, 300), 201); // 200.67
        assert_eq!(target_height(1000, 1, 300), 1); // 0.3 rounds to 0, floor at 1
    }

    #[test]
    fn downscale_preserves_aspect() {
        let out = resize_to_width(&blank(1234, 987), 300).unwrap();
        let (w, h) = out.dimensions();
        assert_eq!(w, 300);
        let expected = 300.0 * 987.0 / 1234.0;
        assert!((h as f64 - expected).abs() <= 1.0);
    }

    #[test]
    fn upscale_preserves_aspect() {
        let out = resize_to_width(&blank(120, 160), 300).unwrap();
        assert_eq!(out.dimensions(), (300, 400));
    }

    #[test]
    fn target_width_already_met_is_noop() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(300, 211, |x, y| {
            image::Luma([((x + y) % 256) as u8])
        }));
        let out = resize_to_width(&img, 300).unwrap();
        assert_eq!(out.dimensions(), (300, 211));
        assert_eq!(out.as_bytes(), img.as_bytes());
    }

    #[test]
    fn zero_width_is_invalid() {
        let err = resize_to_width(&blank(0, 10), 300).unwrap_err();
        assert!(matches!(err, HeadshotError::InvalidImage { width: 0, height: 10 }));
    }
}
