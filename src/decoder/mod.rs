pub mod frame_data;
pub mod video;

use anyhow::Result;

pub use frame_data::FrameData;
pub use video::VideoDecoder;

/// Stream properties read once when the source is opened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamMetadata {
    pub fps: f64,
    pub total_frames: u64,
}

impl StreamMetadata {
    pub fn new(fps: f64, total_frames: u64) -> Self {
        Self { fps, total_frames }
    }

    /// Nominal length in seconds; 0 when the frame rate is unusable.
    pub fn duration_secs(&self) -> f64 {
        if self.fps > 0.0 {
            self.total_frames as f64 / self.fps
        } else {
            0.0
        }
    }
}

/// Sequential, forward-only supply of decoded frames.
///
/// Dropping the source releases the underlying handle.
pub trait FrameSource {
    fn metadata(&self) -> StreamMetadata;

    /// `Ok(None)` at end of stream. An `Err` means decoding broke mid-stream.
    fn next_frame(&mut self) -> Result<Option<FrameData>>;
}
