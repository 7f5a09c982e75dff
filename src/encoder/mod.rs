pub mod png;
pub mod resize;

use anyhow::Result;
use std::path::Path;

use crate::decoder::FrameData;
use crate::sampler::ResizeDimensions;

pub use png::PngWriter;

/// Image collaborator: resamples kept frames and persists them.
pub trait FrameSink {
    /// Returns a frame of exactly `dims`, distorting if the aspect differs.
    fn resize(&mut self, frame: FrameData, dims: ResizeDimensions) -> Result<FrameData>;

    fn encode(&mut self, frame: &FrameData, path: &Path) -> Result<()>;
}
