pub mod scheduler;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub use scheduler::SamplingState;

/// Exact output size for `--resize`. Aspect ratio is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDimensions {
    pub width: u32,
    pub height: u32,
}

impl FromStr for ResizeDimensions {
    type Err = ConfigError;

    /// Parses `WIDTHxHEIGHT`; the separator is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidResize(s.to_string());

        let lowered = s.trim().to_ascii_lowercase();
        let (w, h) = lowered.split_once('x').ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

impl fmt::Display for ResizeDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What the caller asked for: how densely to sample and whether to resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRequest {
    pub target_fps: f64,
    pub resize: Option<ResizeDimensions>,
}
