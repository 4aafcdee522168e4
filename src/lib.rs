pub mod config;
pub mod crop;
pub mod detector;
pub mod error;
pub mod name;
pub mod pipeline;
pub mod resize;
pub mod scan;
pub mod writer;

// Re-export commonly used items
pub use config::PipelineConfig;
pub use detector::{DetectorParams, FaceBox, FaceDetector, RustFaceDetector, create_detector};
pub use error::HeadshotError;
pub use name::PersonName;
pub use pipeline::{BatchSummary, FileOutcome, normalize_image, process_file, run_batch};
