use crate::detector::FaceBox;
use image::{DynamicImage, GenericImageView};

/// Crop region within the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Expand `face` by `padding` of its size (plus `extra_padding` pixels) on
/// every side, clamped to `[0, image_width) x [0, image_height)`.
///
/// A face lying entirely outside the image yields an empty rectangle.
pub fn padded_crop_rect(
    face: &FaceBox,
    image_width: u32,
    image_height: u32,
    padding: f32,
    extra_padding: u32,
) -> CropRect {
    let pad_w = (padding * face.width as f32) as i64 + i64::from(extra_padding);
    let pad_h = (padding * face.height as f32) as i64 + i64::from(extra_padding);

    let (x, y) = (i64::from(face.x), i64::from(face.y));
    let (w, h) = (i64::from(face.width), i64::from(face.height));
    let (max_w, max_h) = (i64::from(image_width), i64::from(image_height));

    let left = (x - pad_w).clamp(0, max_w);
    let top = (y - pad_h).clamp(0, max_h);
    let right = (x + w + pad_w).clamp(0, max_w);
    let bottom = (y + h + pad_h).clamp(0, max_h);

    CropRect {
        x: left as u32,
        y: top as u32,
        width: (right - left).max(0) as u32,
        height: (bottom - top).max(0) as u32,
    }
}

/// Crop around `face`, or return the whole image when there is none.
/// The source image is left untouched.
pub fn crop_to_face(
    image: &DynamicImage,
    face: Option<&FaceBox>,
    padding: f32,
    extra_padding: u32,
) -> DynamicImage {
    match face {
        Some(face) => {
            let (width, height) = image.dimensions();
            let rect = padded_crop_rect(face, width, height, padding, extra_padding);
            image.crop_imm(rect.x, rect.y, rect.width, rect.height)
        }
        None => image.clone(),
    }
}
