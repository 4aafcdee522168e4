use crate::config::PipelineConfig;
use anyhow::{Context, Result};
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Entries found directly inside the input directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files with a supported image extension, in file-name order
    pub candidates: Vec<PathBuf>,
    /// Everything else: other files and subdirectories
    pub ignored: Vec<PathBuf>,
}

/// List the entries directly inside `dir`, split by extension support.
/// Symlinks are followed; subdirectories are reported as ignored, never entered.
pub fn scan_input_dir(dir: &Path, config: &PipelineConfig) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err).with_context(|| format!("Failed to read input directory {:?}", dir));
            }
            Err(err) => {
                // e.g. a dangling symlink; the rest of the directory is still usable
                warn!("Skipping unreadable entry in {:?}: {}", dir, err);
                if let Some(path) = err.path() {
                    result.ignored.push(path.to_path_buf());
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            result.ignored.push(entry.into_path());
            continue;
        }

        let supported = entry
            .path()
            .extension()
            .map(|ext| config.is_supported_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if supported {
            result.candidates.push(entry.into_path());
        } else {
            result.ignored.push(entry.into_path());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn filters_by_extension_without_recursing() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "c.jpeg", "notes.txt", "README"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("Deep.Person.jpg"), b"x").unwrap();

        let scan = scan_input_dir(dir.path(), &PipelineConfig::default()).unwrap();

        assert_eq!(file_names(&scan.candidates), ["a.JPG", "b.png", "c.jpeg"]);
        assert_eq!(file_names(&scan.ignored), ["README", "nested", "notes.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_images_are_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let target = elsewhere.path().join("real.png");
        fs::write(&target, b"x").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("Link.Person.png")).unwrap();
        std::os::unix::fs::symlink(elsewhere.path().join("gone.png"), dir.path().join("Dangling.Link.png"))
            .unwrap();

        let scan = scan_input_dir(dir.path(), &PipelineConfig::default()).unwrap();

        assert_eq!(file_names(&scan.candidates), ["Link.Person.png"]);
        assert_eq!(file_names(&scan.ignored), ["Dangling.Link.png"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("headshots");
        assert!(scan_input_dir(&missing, &PipelineConfig::default()).is_err());
    }
}
