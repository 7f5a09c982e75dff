pub mod config;
pub mod extractor;

pub use config::SamplerConfig;
pub use extractor::{extract_frames, ExtractionReport, StopReason};
