use anyhow::{Context, Result};
use image::GrayImage;
use log::{info, warn};
use rustface::{Detector, ImageData};
use std::path::Path;

/// Default location of the SeetaFace frontal model
pub const DEFAULT_MODEL_PATH: &str = "model/seeta_fd_frontal_v1.0.bin";

/// Represents a detected face with bounding box and confidence
#[derive(Debug, Clone, PartialEq)]
pub struct FaceBox {
    pub x: i32,      // Left coordinate
    pub y: i32,      // Top coordinate
    pub width: u32,  // Width of bounding box
    pub height: u32, // Height of bounding box
    pub confidence: f32,
}

impl FaceBox {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Trait for face detector implementations
pub trait FaceDetector {
    /// Detect faces in a single-channel intensity image
    fn detect_faces(&mut self, image: &GrayImage) -> Result<Vec<FaceBox>>;

    /// Name used in diagnostics
    fn name(&self) -> &str;
}

/// Tuning for the cascade scan
#[derive(Debug, Clone)]
pub struct DetectorParams {
    /// Smallest face edge considered, in pixels
    pub min_face_size: u32,
    /// Faces scoring below this are discarded
    pub score_threshold: f64,
    pub pyramid_scale_factor: f32,
    pub slide_window_step: u32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            min_face_size: 30,
            score_threshold: 2.0,
            pyramid_scale_factor: 0.8,
            slide_window_step: 4,
        }
    }
}

/// RustFace (SeetaFace) detector implementation
pub struct RustFaceDetector {
    detector: Box<dyn Detector>,
}

impl RustFaceDetector {
    /// Load the model from `model_path`, downloading it first when `fetch`
    /// is set and the file is missing.
    pub fn load(model_path: &Path, params: &DetectorParams, fetch: bool) -> Result<Self> {
        if !model_path.exists() {
            if !fetch {
                return Err(anyhow::anyhow!(
                    "Face detection model not found at {:?}.\n\
                    Download it from https://github.com/atomashpolskiy/rustface/tree/master/model \
                    or rerun with --fetch-model",
                    model_path
                ));
            }
            download_model(model_path)?;
        } else {
            info!("Using face detection model at {:?}", model_path);
        }

        let path_str = model_path
            .to_str()
            .with_context(|| format!("Model path is not valid UTF-8: {:?}", model_path))?;
        let mut detector = rustface::create_detector(path_str)
            .with_context(|| format!("Failed to create face detector from {:?}", model_path))?;

        detector.set_min_face_size(params.min_face_size);
        detector.set_score_thresh(params.score_threshold);
        detector.set_pyramid_scale_factor(params.pyramid_scale_factor);
        detector.set_slide_window_step(params.slide_window_step, params.slide_window_step);

        Ok(Self { detector })
    }
}

impl FaceDetector for RustFaceDetector {
    fn detect_faces(&mut self, image: &GrayImage) -> Result<Vec<FaceBox>> {
        let (width, height) = image.dimensions();
        let mut image_data = ImageData::new(image.as_raw(), width, height);

        let faces = self.detector.detect(&mut image_data);

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox {
                    x: bbox.x(),
                    y: bbox.y(),
                    width: bbox.width(),
                    height: bbox.height(),
                    confidence: face.score() as f32,
                }
            })
            .collect())
    }

    fn name(&self) -> &str {
        "rustface"
    }
}

fn download_model(model_path: &Path) -> Result<()> {
    info!("Downloading face detection model to {:?}", model_path);

    if let Some(parent) = model_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create model directory {:?}", parent))?;
    }

    let model_urls = [
        "https://github.com/atomashpolskiy/rustface/raw/master/model/seeta_fd_frontal_v1.0.bin",
        "https://raw.githubusercontent.com/atomashpolskiy/rustface/master/model/seeta_fd_frontal_v1.0.bin",
    ];

    let mut last_error = None;
    for url in &model_urls {
        info!("Trying to download from: {}", url);

        match ureq::get(url).call() {
            Ok(response) => {
                let mut reader = response.into_reader();
                let mut file = std::fs::File::create(model_path)
                    .with_context(|| format!("Failed to create {:?}", model_path))?;
                std::io::copy(&mut reader, &mut file)
                    .with_context(|| format!("Failed to write {:?}", model_path))?;
                info!("Model downloaded successfully from {}", url);
                return Ok(());
            }
            Err(err) => {
                warn!("Failed to download from {}: {}", url, err);
                last_error = Some(err);
            }
        }
    }

    Err(anyhow::anyhow!(
        "Failed to download model from all sources. Last error: {:?}",
        last_error
    ))
}

/// Pick the face with the largest area; the first one wins a tie.
pub fn select_largest(faces: &[FaceBox]) -> Option<&FaceBox> {
    faces.iter().fold(None, |best: Option<&FaceBox>, face| match best {
        Some(b) if b.area() >= face.area() => Some(b),
        _ => Some(face),
    })
}

// Factory function to create detectors by name
pub fn create_detector(
    name: &str,
    model_path: &Path,
    params: &DetectorParams,
    fetch: bool,
) -> Result<Box<dyn FaceDetector>> {
    match name.to_lowercase().as_str() {
        "rustface" => Ok(Box::new(RustFaceDetector::load(model_path, params, fetch)?)),
        _ => Err(anyhow::anyhow!("Unknown detector: {}", name)),
    }
}
