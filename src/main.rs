use anyhow::{Context, Result};
use clap::Parser;
use headshot_normalizer::config::{
    DEFAULT_INPUT_DIR, DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_DIR, DEFAULT_PADDING,
    DEFAULT_TARGET_WIDTH,
};
use headshot_normalizer::detector::DEFAULT_MODEL_PATH;
use headshot_normalizer::{DetectorParams, PipelineConfig, create_detector, run_batch};
use log::info;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about = "Crop headshots around the face and save them as <First>.<Last>.jpg")]
struct Args {
    /// Input directory containing headshots
    #[clap(short, long, value_parser, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Output directory for normalized headshots
    #[clap(short, long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Output width in pixels (height keeps the aspect ratio)
    #[clap(short, long, default_value_t = DEFAULT_TARGET_WIDTH)]
    width: u32,

    /// Padding around the face as a fraction of its size
    #[clap(short, long, default_value_t = DEFAULT_PADDING)]
    padding: f32,

    /// Extra pixels added to the padding on every side
    #[clap(long, default_value_t = 0)]
    extra_padding: u32,

    /// JPEG quality (1-100)
    #[clap(short, long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Face detector to use
    #[clap(long, default_value = "rustface")]
    detector: String,

    /// Path to the face detection model
    #[clap(long, value_parser, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Download the model if it is missing
    #[clap(long)]
    fetch_model: bool,

    /// Smallest face size to detect (px)
    #[clap(long, default_value_t = 30)]
    min_face_size: u32,

    /// Minimum detector score for a face to count
    #[clap(long, default_value_t = 2.0)]
    score_threshold: f64,
}

/// Main program logic
fn run(args: Args) -> Result<()> {
    // Initialize logger; per-file diagnostics are at info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig {
        input_dir: args.input_dir,
        output_dir: args.output_dir,
        target_width: args.width,
        padding: args.padding,
        extra_padding: args.extra_padding,
        jpeg_quality: args.quality,
        ..PipelineConfig::default()
    };

    let params = DetectorParams {
        min_face_size: args.min_face_size,
        score_threshold: args.score_threshold,
        ..DetectorParams::default()
    };

    info!("Initializing face detector: {}", args.detector);
    let mut detector = create_detector(&args.detector, &args.model, &params, args.fetch_model)
        .context("Failed to initialize face detector")?;

    run_batch(&config, detector.as_mut())?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}
