use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "headshots";
pub const DEFAULT_OUTPUT_DIR: &str = "processed_headshots";
pub const DEFAULT_TARGET_WIDTH: u32 = 300;
pub const DEFAULT_PADDING: f32 = 0.2;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Settings for one batch run. Read-only for the duration of the run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory scanned for headshots (not recursed)
    pub input_dir: PathBuf,
    /// Directory receiving `<First>.<Last>.jpg` files
    pub output_dir: PathBuf,
    /// Output width in pixels; height follows the aspect ratio
    pub target_width: u32,
    /// Fraction of the face box added on each side before cropping
    pub padding: f32,
    /// Fixed pixel margin added on top of `padding`
    pub extra_padding: u32,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Lowercase extensions considered image candidates
    pub extensions: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            target_width: DEFAULT_TARGET_WIDTH,
            padding: DEFAULT_PADDING,
            extra_padding: 0,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl PipelineConfig {
    /// Default settings reading from `input_dir` and writing to `output_dir`.
    pub fn with_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn is_supported_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("headshots"));
        assert_eq!(config.output_dir, PathBuf::from("processed_headshots"));
        assert_eq!(config.target_width, 300);
        assert!((config.padding - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.extra_padding, 0);
    }

    #[test]
    fn extension_check_ignores_case() {
        let config = PipelineConfig::default();
        assert!(config.is_supported_extension("JPG"));
        assert!(config.is_supported_extension("jpeg"));
        assert!(config.is_supported_extension("Png"));
        assert!(!config.is_supported_extension("gif"));
        assert!(!config.is_supported_extension(""));
    }
}
