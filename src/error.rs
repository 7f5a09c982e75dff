use std::path::PathBuf;
use thiserror::Error;

/// Rejected command-line input. Raised before any stream is opened.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Video file not found: {}", .0.display())]
    VideoNotFound(PathBuf),

    #[error("FPS must be a finite number greater than 0 (got {0})")]
    NonPositiveFps(f64),

    #[error("Invalid resize format '{0}'. Use WxH (e.g., 1280x720)")]
    InvalidResize(String),
}

/// Fatal conditions raised by the extraction run.
///
/// Mid-stream decode failures are not errors; they end the run and are
/// reported through [`crate::core::StopReason::DecodeFailure`].
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Cannot open video file: {}", path.display())]
    StreamOpen {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Video reports an unusable frame rate ({0}); cannot derive timestamps")]
    InvalidSourceFrameRate(f64),

    #[error("Cannot create output directory {}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resize frame {index}")]
    Resize {
        index: u64,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
