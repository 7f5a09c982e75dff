use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants;
use crate::utils::time_utils;

pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map_or(false, |ext| ext == extension)
        })
        .collect();

    // Zero-padded timestamps sort chronologically
    files.sort();

    Ok(files)
}

/// Files in `dir` whose names follow the `frame_MM_SS_mmm.png` scheme.
pub fn list_frame_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let files = list_files(dir, constants::FRAME_FILE_EXTENSION)?;
    Ok(files
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(time_utils::parse_frame_file_name)
                .is_some()
        })
        .collect())
}

/// Creates `dir` and its parents. Succeeds if the directory already exists.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dir.display()),
        ));
    }
    Ok(())
}

pub fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            constants::VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// `./frames_<stem>` for `video`.
pub fn default_output_dir(video: &Path) -> PathBuf {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    PathBuf::from(".").join(format!("{}{}", constants::OUTPUT_DIR_PREFIX, stem))
}
