use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::sampler::{ResizeDimensions, SamplingRequest};
use crate::utils::file_utils;

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub video: PathBuf,
    pub output_dir: PathBuf,
    pub request: SamplingRequest,
}

/// Non-fatal observations about `video` for the caller to print before
/// validation. Empty when the file does not exist, since that is an error.
pub fn input_warnings(video: &Path) -> Vec<String> {
    let mut warnings = Vec::new();
    if video.exists() && !file_utils::has_video_extension(video) {
        let ext = video
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        warnings.push(format!("File may not be a supported video format: {}", ext));
    }
    warnings
}

impl SamplerConfig {
    /// Validates raw command-line values without touching process state.
    ///
    /// # Errors
    /// [`ConfigError::VideoNotFound`] when `video` does not exist and
    /// [`ConfigError::NonPositiveFps`] when `fps` is not a finite positive
    /// number.
    pub fn from_args(
        video: PathBuf,
        fps: f64,
        output: Option<PathBuf>,
        resize: Option<ResizeDimensions>,
    ) -> Result<Self, ConfigError> {
        if !video.exists() {
            return Err(ConfigError::VideoNotFound(video));
        }

        if !(fps.is_finite() && fps > 0.0) {
            return Err(ConfigError::NonPositiveFps(fps));
        }

        let output_dir = output.unwrap_or_else(|| file_utils::default_output_dir(&video));

        Ok(Self {
            video,
            output_dir,
            request: SamplingRequest {
                target_fps: fps,
                resize,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, File};
    use std::path::Path;

    fn touch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("frame_sampler_config_test");
        create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_defaults_resolve_output_dir() {
        let video = touch("beach.mp4");
        let config = SamplerConfig::from_args(video.clone(), 1.0, None, None).unwrap();

        assert_eq!(config.video, video);
        assert_eq!(config.output_dir, Path::new("./frames_beach"));
        assert_eq!(config.request.target_fps, 1.0);
        assert_eq!(config.request.resize, None);
        assert!(input_warnings(&config.video).is_empty());
    }

    #[test]
    fn test_explicit_output_and_resize_are_kept() {
        let video = touch("street.MOV");
        let resize = ResizeDimensions { width: 640, height: 480 };
        let config = SamplerConfig::from_args(
            video,
            2.5,
            Some(PathBuf::from("/tmp/out")),
            Some(resize),
        )
        .unwrap();

        assert_eq!(config.output_dir, Path::new("/tmp/out"));
        assert_eq!(config.request.resize, Some(resize));
    }

    #[test]
    fn test_unknown_extension_warns_but_passes() {
        let video = touch("capture.ts");
        let warnings = input_warnings(&video);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(".ts"));
        assert!(SamplerConfig::from_args(video, 1.0, None, None).is_ok());
    }

    #[test]
    fn test_extension_warning_survives_fps_rejection() {
        let video = touch("recording.flv");
        let warnings = input_warnings(&video);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(".flv"));
        assert!(matches!(
            SamplerConfig::from_args(video, 0.0, None, None),
            Err(ConfigError::NonPositiveFps(_))
        ));
    }

    #[test]
    fn test_missing_video_has_no_extension_warning() {
        let video = std::env::temp_dir().join("frame_sampler_config_test/absent.gif");
        let _ = std::fs::remove_file(&video);
        assert!(input_warnings(&video).is_empty());
    }

    #[test]
    fn test_missing_video_is_rejected() {
        let video = std::env::temp_dir().join("frame_sampler_config_test/absent.mp4");
        let _ = std::fs::remove_file(&video);
        match SamplerConfig::from_args(video.clone(), 1.0, None, None) {
            Err(ConfigError::VideoNotFound(p)) => assert_eq!(p, video),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_fps_is_rejected() {
        let video = touch("clip.mkv");
        for fps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SamplerConfig::from_args(video.clone(), fps, None, None),
                Err(ConfigError::NonPositiveFps(_))
            ));
        }
    }
}
