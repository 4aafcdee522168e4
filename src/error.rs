use std::path::PathBuf;
use thiserror::Error;

/// Per-file failures. None of these abort a batch.
#[derive(Debug, Error)]
pub enum HeadshotError {
    #[error("filename does not start with <First>.<Last>: {file_name}")]
    NameParse { file_name: String },

    #[error("failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("face detection failed for {path:?}: {reason}")]
    Detection { path: PathBuf, reason: String },

    #[error("image has degenerate dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("failed to write {path:?}: {source}")]
    EncodeWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl HeadshotError {
    /// Short label used in skip diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            HeadshotError::NameParse { .. } => "name parse",
            HeadshotError::Decode { .. } => "decode",
            HeadshotError::Detection { .. } => "detection",
            HeadshotError::InvalidImage { .. } => "invalid image",
            HeadshotError::EncodeWrite { .. } => "encode/write",
        }
    }
}
