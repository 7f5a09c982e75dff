use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::config::SamplerConfig;
use crate::decoder::{FrameSource, VideoDecoder};
use crate::encoder::{FrameSink, PngWriter};
use crate::error::ExtractError;
use crate::sampler::{SamplingRequest, SamplingState};
use crate::shared::constants;
use crate::utils::{file_utils, logger, time_utils};

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndOfStream,
    /// The decoder failed mid-stream; frames written so far are kept.
    DecodeFailure,
    Interrupted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport {
    /// Frames pulled from the source, kept or not.
    pub decoded: u64,
    /// File names written into the output directory, in decode order.
    pub written: Vec<String>,
    pub stop: StopReason,
}

impl ExtractionReport {
    pub fn extracted(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// Single forward pass over a [`FrameSource`], writing the frames the
/// sampling threshold selects through a [`FrameSink`].
pub struct FrameEmitter<'a> {
    request: SamplingRequest,
    output_dir: PathBuf,
    running: Option<Arc<AtomicBool>>,
    on_progress: Option<Box<dyn FnMut(usize) + 'a>>,
}

impl<'a> FrameEmitter<'a> {
    pub fn new(request: SamplingRequest, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            request,
            output_dir: output_dir.into(),
            running: None,
            on_progress: None,
        }
    }

    /// The loop stops before the next decode once `running` turns false.
    pub fn with_running_flag(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = Some(running);
        self
    }

    /// Called with the running total after every written frame.
    pub fn with_progress(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn interrupted(&self) -> bool {
        self.running
            .as_ref()
            .map_or(false, |running| !running.load(Ordering::SeqCst))
    }

    pub fn run<S, K>(
        &mut self,
        source: &mut S,
        sink: &mut K,
    ) -> Result<ExtractionReport, ExtractError>
    where
        S: FrameSource + ?Sized,
        K: FrameSink + ?Sized,
    {
        let metadata = source.metadata();
        if !(metadata.fps.is_finite() && metadata.fps > 0.0) {
            return Err(ExtractError::InvalidSourceFrameRate(metadata.fps));
        }

        file_utils::ensure_dir(&self.output_dir).map_err(|source| ExtractError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut state = SamplingState::new(metadata.fps, self.request.target_fps);
        logger::info(&format!(
            "Sampling {} fps source at {} fps (interval {:.4} frames) into {}",
            metadata.fps,
            self.request.target_fps,
            state.frame_interval(),
            self.output_dir.display()
        ));

        let mut decoded: u64 = 0;
        let mut written = Vec::new();

        let stop = loop {
            if self.interrupted() {
                logger::info(&format!("Interrupted after {} decoded frames", decoded));
                break StopReason::Interrupted;
            }

            let frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break StopReason::EndOfStream,
                Err(e) => {
                    logger::error(&format!("Decoding error after frame {}: {:#}", decoded, e));
                    break StopReason::DecodeFailure;
                }
            };

            let index = decoded;
            decoded += 1;

            if !state.should_keep(index) {
                continue;
            }

            let name = time_utils::frame_file_name(index as f64 / metadata.fps);

            let frame = match self.request.resize {
                Some(dims) => sink
                    .resize(frame, dims)
                    .map_err(|source| ExtractError::Resize { index, source })?,
                None => frame,
            };

            let path = self.output_dir.join(&name);
            sink.encode(&frame, &path)
                .map_err(|source| ExtractError::Encode { path, source })?;

            logger::debug(&format!(
                "Kept frame {} -> {} (next threshold {:.3})",
                index,
                name,
                state.next_eligible()
            ));
            written.push(name);

            if let Some(callback) = self.on_progress.as_mut() {
                callback(written.len());
            }
        };

        logger::info(&format!(
            "Stopped ({:?}): {} decoded, {} written",
            stop,
            decoded,
            written.len()
        ));

        Ok(ExtractionReport {
            decoded,
            written,
            stop,
        })
    }
}

/// Opens `config.video`, prints the stream summary, and writes the sampled
/// frames as PNG into `config.output_dir`.
pub fn extract_frames(
    config: &SamplerConfig,
    running: Arc<AtomicBool>,
) -> Result<ExtractionReport, ExtractError> {
    // Open first: a bad stream must not leave an empty output directory behind
    let mut decoder = VideoDecoder::open(&config.video)?;
    let metadata = decoder.metadata();

    let name = decoder
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    println!("Video: {}", name);
    println!(
        "  Duration: {:.2}s | FPS: {:.2} | Total frames: {}",
        metadata.duration_secs(),
        metadata.fps,
        metadata.total_frames
    );
    println!("  Sampling at: {} fps", config.request.target_fps);
    if metadata.total_frames > 0 && metadata.fps > 0.0 {
        let expected = SamplingState::new(metadata.fps, config.request.target_fps)
            .kept_indices(metadata.total_frames)
            .count();
        println!("  Expected frames: {}", expected);
    }
    if let Some(dims) = config.request.resize {
        println!("  Resize to: {}", dims);
    }

    let mut writer = PngWriter::new();
    let mut emitter = FrameEmitter::new(config.request, &config.output_dir)
        .with_running_flag(running)
        .with_progress(|count| {
            if count % constants::PROGRESS_INTERVAL == 0 {
                print!("  Extracted {} frames...\r", count);
                let _ = std::io::Write::flush(&mut std::io::stdout());
            }
        });

    let report = emitter.run(&mut decoder, &mut writer)?;
    println!(
        "  Extracted {} frames to {}",
        report.extracted(),
        emitter.output_dir().display()
    );

    Ok(report)
}
