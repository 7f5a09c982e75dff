use anyhow::Result;
use fast_image_resize as fr;
use fr::images::Image;

use crate::decoder::FrameData;
use crate::sampler::ResizeDimensions;

/// Exact-size resampler. Uses a Lanczos3 convolution (SIMD when available);
/// the aspect ratio of the source is not preserved.
pub struct FrameResizer {
    resizer: fr::Resizer,
    options: fr::ResizeOptions,
}

impl FrameResizer {
    pub fn new() -> Self {
        Self {
            resizer: fr::Resizer::new(),
            options: fr::ResizeOptions::new()
                .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3)),
        }
    }

    pub fn resize(&mut self, frame: FrameData, dims: ResizeDimensions) -> Result<FrameData> {
        if frame.width == dims.width && frame.height == dims.height {
            return Ok(frame);
        }

        // Channel order is irrelevant to the filter, so BGR passes through as U8x3
        let src_image = Image::from_vec_u8(
            frame.width,
            frame.height,
            frame.buffer,
            fr::PixelType::U8x3,
        )?;
        let mut dst_image = Image::new(dims.width, dims.height, fr::PixelType::U8x3);

        self.resizer.resize(&src_image, &mut dst_image, &self.options)?;

        Ok(FrameData::new(dst_image.buffer().to_vec(), dims.width, dims.height))
    }
}

impl Default for FrameResizer {
    fn default() -> Self {
        Self::new()
    }
}
