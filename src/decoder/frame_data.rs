/// One decoded picture: tightly packed 8-bit, 3 channels per pixel, in the
/// decoder's native channel order (BGR for OpenCV).
pub struct FrameData {
    pub buffer: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl FrameData {
    pub const CHANNELS: usize = 3;

    pub fn new(buffer: Vec<u8>, width: u32, height: u32) -> Self {
        Self { buffer, width, height }
    }

    pub fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * Self::CHANNELS
    }

    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.buffer.len() == Self::expected_len(self.width, self.height)
    }
}
