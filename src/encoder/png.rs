use anyhow::{anyhow, Context, Result};
use opencv::{core, imgcodecs, prelude::*};
use std::path::Path;

use super::resize::FrameResizer;
use super::FrameSink;
use crate::decoder::FrameData;
use crate::sampler::ResizeDimensions;

/// Writes BGR frames as PNG through OpenCV's imgcodecs.
pub struct PngWriter {
    resizer: FrameResizer,
    params: core::Vector<i32>,
}

impl PngWriter {
    pub fn new() -> Self {
        Self {
            resizer: FrameResizer::new(),
            params: core::Vector::new(),
        }
    }

    fn to_mat(frame: &FrameData) -> Result<Mat> {
        if !frame.is_well_formed() {
            return Err(anyhow!(
                "Frame buffer holds {} bytes, expected {} for {}x{}",
                frame.buffer.len(),
                FrameData::expected_len(frame.width, frame.height),
                frame.width,
                frame.height
            ));
        }

        let mut mat = Mat::new_rows_cols_with_default(
            frame.height as i32,
            frame.width as i32,
            core::CV_8UC3,
            core::Scalar::all(0.0),
        )?;
        mat.data_bytes_mut()?.copy_from_slice(&frame.buffer);
        Ok(mat)
    }
}

impl Default for PngWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for PngWriter {
    fn resize(&mut self, frame: FrameData, dims: ResizeDimensions) -> Result<FrameData> {
        self.resizer.resize(frame, dims)
    }

    fn encode(&mut self, frame: &FrameData, path: &Path) -> Result<()> {
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow!("Output path is not valid UTF-8: {}", path.display()))?;
        let mat = Self::to_mat(frame)?;

        let written = imgcodecs::imwrite(path_str, &mat, &self.params)
            .with_context(|| format!("imwrite failed for {}", path_str))?;
        if !written {
            return Err(anyhow!("imwrite refused to write {}", path_str));
        }
        Ok(())
    }
}
