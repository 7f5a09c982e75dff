use anyhow::{anyhow, Result};
use opencv::{core, prelude::*, videoio};
use std::path::{Path, PathBuf};

use super::frame_data::FrameData;
use super::{FrameSource, StreamMetadata};
use crate::error::ExtractError;

/// OpenCV-backed frame source. Frames come out in BGR order at the stream's
/// native resolution.
pub struct VideoDecoder {
    capture: videoio::VideoCapture,
    path: PathBuf,
    metadata: StreamMetadata,
    frames_read: u64,
}

impl VideoDecoder {
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let open_error = |source: anyhow::Error| ExtractError::StreamOpen {
            path: path.to_path_buf(),
            source,
        };

        let path_str = path
            .to_str()
            .ok_or_else(|| open_error(anyhow!("path is not valid UTF-8")))?;

        crate::utils::logger::debug(&format!("Opening video with OpenCV: {}", path_str));

        // CAP_ANY lets OpenCV pick the backend (AVFoundation, Media Foundation, FFmpeg, GStreamer)
        let capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)
            .map_err(|e| open_error(e.into()))?;

        if !capture.is_opened().map_err(|e| open_error(e.into()))? {
            crate::utils::logger::error(&format!("Failed to open video file: {}", path_str));
            return Err(open_error(anyhow!("no backend could open the stream")));
        }

        let fps = capture
            .get(videoio::CAP_PROP_FPS)
            .map_err(|e| open_error(e.into()))?;
        let frame_count = capture
            .get(videoio::CAP_PROP_FRAME_COUNT)
            .map_err(|e| open_error(e.into()))?;
        // Some containers report -1 or NaN when the count is unknown
        let total_frames = if frame_count.is_finite() && frame_count > 0.0 {
            frame_count as u64
        } else {
            0
        };

        crate::utils::logger::info(&format!(
            "VideoCapture opened: {} | FPS: {} | Frames: {}",
            path_str, fps, total_frames
        ));

        Ok(Self {
            capture,
            path: path.to_path_buf(),
            metadata: StreamMetadata::new(fps, total_frames),
            frames_read: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_frame(&mut self) -> Result<Option<FrameData>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? {
            return Ok(None); // EOF
        }
        if frame.empty() {
            return Ok(None);
        }

        if frame.typ() != core::CV_8UC3 {
            return Err(anyhow!(
                "Unsupported pixel format (type {}) at frame {}",
                frame.typ(),
                self.frames_read
            ));
        }

        let width = frame.cols() as u32;
        let height = frame.rows() as u32;

        let buffer = if frame.is_continuous() {
            frame.data_bytes()?.to_vec()
        } else {
            frame.try_clone()?.data_bytes()?.to_vec()
        };

        self.frames_read += 1;
        Ok(Some(FrameData::new(buffer, width, height)))
    }
}

impl FrameSource for VideoDecoder {
    fn metadata(&self) -> StreamMetadata {
        self.metadata
    }

    fn next_frame(&mut self) -> Result<Option<FrameData>> {
        self.read_frame()
    }
}

impl Drop for VideoDecoder {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            crate::utils::logger::error(&format!(
                "Failed to release {}: {}",
                self.path.display(),
                e
            ));
        } else {
            crate::utils::logger::debug(&format!(
                "Released {} after {} frames",
                self.path.display(),
                self.frames_read
            ));
        }
    }
}
