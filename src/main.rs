mod core;
mod decoder;
mod encoder;
mod error;
mod sampler;
mod shared;
mod utils;

use clap::Parser;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{config, extract_frames, ExtractionReport, SamplerConfig, StopReason};
use crate::sampler::ResizeDimensions;
use crate::shared::constants;
use crate::utils::{file_utils, logger};

const USAGE_EXAMPLES: &str = "\
Examples:
  frame-sampler video.mp4 --fps 1
      Extract 1 frame per second

  frame-sampler video.mp4 --fps 2 --output ./my_frames
      Extract 2 frames per second to ./my_frames

  frame-sampler video.mp4 --fps 0.5 --resize 640x480
      Extract 1 frame every 2 seconds, resized to 640x480";

/// Extract frames from a video at a specified FPS rate.
#[derive(Parser)]
#[command(author, version, about, long_about = None, after_help = USAGE_EXAMPLES)]
struct Cli {
    /// Path to input video file
    video: PathBuf,

    /// Frames to extract per second
    #[arg(
        long,
        default_value_t = constants::DEFAULT_SAMPLE_FPS,
        allow_negative_numbers = true
    )]
    fps: f64,

    /// Output directory for frames (default: ./frames_<video_name>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resize frames to WxH (e.g., 1280x720)
    #[arg(short, long)]
    resize: Option<ResizeDimensions>,

    /// Directory for the error and debug logs
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    Completed,
    NothingExtracted,
    Interrupted,
}

impl RunStatus {
    /// Interruption wins over an empty result; a decode failure that still
    /// wrote frames counts as completed.
    fn from_report(report: &ExtractionReport) -> Self {
        if report.stop == StopReason::Interrupted {
            RunStatus::Interrupted
        } else if report.is_empty() {
            RunStatus::NothingExtracted
        } else {
            RunStatus::Completed
        }
    }

    fn exit_code(self) -> u8 {
        match self {
            RunStatus::Completed => constants::EXIT_SUCCESS,
            RunStatus::NothingExtracted => constants::EXIT_FAILURE,
            RunStatus::Interrupted => constants::EXIT_INTERRUPTED,
        }
    }
}

fn run(cli: Cli) -> Result<RunStatus> {
    for warning in config::input_warnings(&cli.video) {
        println!("Warning: {}", warning);
        logger::warn(&warning);
    }

    let config = SamplerConfig::from_args(cli.video, cli.fps, cli.output, cli.resize)?;

    if config.output_dir.is_dir() {
        let existing = file_utils::list_frame_files(&config.output_dir)?;
        if !existing.is_empty() {
            println!(
                "Warning: {} already holds {} extracted frames; \
                 frames with matching timestamps will be overwritten",
                config.output_dir.display(),
                existing.len()
            );
        }
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("Failed to install Ctrl-C handler")?;

    let report = extract_frames(&config, running)?;

    logger::info(&format!(
        "Run finished: {:?}, {} of {} decoded frames written",
        report.stop,
        report.extracted(),
        report.decoded
    ));

    if report.stop == StopReason::DecodeFailure {
        eprintln!(
            "Warning: decoding stopped early after {} frames; partial output kept",
            report.decoded
        );
    }

    Ok(RunStatus::from_report(&report))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init(&cli.log_dir);

    match run(cli) {
        Ok(status) => {
            match status {
                RunStatus::Completed => {}
                RunStatus::NothingExtracted => println!("Warning: No frames were extracted"),
                RunStatus::Interrupted => println!("\nInterrupted by user"),
            }
            ExitCode::from(status.exit_code())
        }
        Err(e) => {
            logger::error(&format!("{:#}", e));
            println!("Error: {:#}", e);
            ExitCode::from(constants::EXIT_FAILURE)
        }
    }
}
