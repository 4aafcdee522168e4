use crate::config::PipelineConfig;
use crate::crop::crop_to_face;
use crate::detector::{FaceBox, FaceDetector, select_largest};
use crate::error::HeadshotError;
use crate::name::PersonName;
use crate::resize::resize_to_width;
use crate::scan::scan_input_dir;
use crate::writer::write_jpeg;
use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView};
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A successfully normalized headshot
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub output: PathBuf,
    pub name: PersonName,
    /// Face the crop was centered on; `None` means the whole image was used
    pub face: Option<FaceBox>,
    pub width: u32,
    pub height: u32,
}

/// Counters for one batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Output files written
    pub written: usize,
    /// Written files that fell back to the whole image
    pub fallbacks: usize,
    /// Candidates skipped because of a file-local error
    pub skipped: usize,
    /// Input directory entries that are not image files
    pub ignored: usize,
}

/// Detect, crop and resize one decoded image. `source` only labels errors.
pub fn normalize_image(
    source: &Path,
    image: &DynamicImage,
    detector: &mut dyn FaceDetector,
    config: &PipelineConfig,
) -> Result<(DynamicImage, Option<FaceBox>), HeadshotError> {
    let gray = image.to_luma8();
    let faces = detector
        .detect_faces(&gray)
        .map_err(|err| HeadshotError::Detection {
            path: source.to_path_buf(),
            reason: format!("{:#}", err),
        })?;
    debug!("{} found {} face(s)", detector.name(), faces.len());

    let face = select_largest(&faces).cloned();
    let cropped = crop_to_face(image, face.as_ref(), config.padding, config.extra_padding);
    let resized = resize_to_width(&cropped, config.target_width)?;

    Ok((resized, face))
}

/// Run one file through parse, decode, detect, crop, resize and write.
pub fn process_file(
    path: &Path,
    detector: &mut dyn FaceDetector,
    config: &PipelineConfig,
) -> Result<FileOutcome, HeadshotError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = PersonName::parse(&file_name)?;

    let image = image::open(path).map_err(|source| HeadshotError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (resized, face) = normalize_image(path, &image, detector, config)?;

    let output = config.output_dir.join(name.output_file_name());
    write_jpeg(&resized, &output, config.jpeg_quality)?;

    let (width, height) = resized.dimensions();
    Ok(FileOutcome {
        source: path.to_path_buf(),
        output,
        name,
        face,
        width,
        height,
    })
}

/// Process every headshot in `config.input_dir`.
///
/// Only setup problems are returned as errors; per-file failures are logged
/// and counted in the summary.
pub fn run_batch(config: &PipelineConfig, detector: &mut dyn FaceDetector) -> Result<BatchSummary> {
    if !config.input_dir.is_dir() {
        anyhow::bail!("Input directory {:?} does not exist or is not a directory", config.input_dir);
    }

    // Create output directory if it doesn't exist
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", config.output_dir))?;

    info!("Scanning input directory for images: {:?}", config.input_dir);
    let scan = scan_input_dir(&config.input_dir, config)?;
    info!("Found {} images", scan.candidates.len());

    let mut summary = BatchSummary {
        ignored: scan.ignored.len(),
        ..BatchSummary::default()
    };
    for path in &scan.ignored {
        info!("Skipping non-image entry: {}", display_name(path));
    }

    if scan.candidates.is_empty() {
        warn!("No images found in input directory");
        return Ok(summary);
    }

    let start_time = Instant::now();

    for path in &scan.candidates {
        let shown = display_name(path);
        match process_file(path, detector, config) {
            Ok(outcome) => {
                if outcome.face.is_none() {
                    warn!("No face detected in {}, using whole image", shown);
                    summary.fallbacks += 1;
                }
                info!(
                    "Processed {} -> {} ({}x{})",
                    shown,
                    display_name(&outcome.output),
                    outcome.width,
                    outcome.height
                );
                summary.written += 1;
            }
            Err(err @ HeadshotError::NameParse { .. }) => {
                warn!("Skipping {}: {}", shown, err);
                summary.skipped += 1;
            }
            Err(err) => {
                error!("Skipping {} ({} failure): {}", shown, err.kind(), err);
                summary.skipped += 1;
            }
        }
    }

    info!(
        "Finished processing. Wrote {} headshots ({} without a detected face), skipped {}, ignored {} in {:.2?}",
        summary.written,
        summary.fallbacks,
        summary.skipped,
        summary.ignored,
        start_time.elapsed()
    );

    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
