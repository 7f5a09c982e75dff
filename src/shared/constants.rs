pub const APP_NAME: &str = "frame-sampler";

pub const ERROR_LOG_FILE: &str = "frame_sampler_error.log";
pub const DEBUG_LOG_FILE: &str = "frame_sampler_debug.log";

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "webm"];

pub const DEFAULT_SAMPLE_FPS: f64 = 1.0;

pub const OUTPUT_DIR_PREFIX: &str = "frames_";
pub const FRAME_FILE_PREFIX: &str = "frame_";
pub const FRAME_FILE_EXTENSION: &str = "png";

/// Print a progress line every this many written frames.
pub const PROGRESS_INTERVAL: usize = 10;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INTERRUPTED: u8 = 130;
