use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::format::{create_formatter, render_document};
use crate::transcribe::WhisperRunner;
use crate::transcript::load_transcript;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output subtitle format.
    pub format: OutputFormat,
    /// Directory the output file is written into.
    pub output_dir: PathBuf,
    /// Show a spinner while waiting on the transcription tool.
    pub show_progress: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output_dir: PathBuf::from("."),
            show_progress: true,
        }
    }
}

/// Statistics from a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertStats {
    /// Total time taken for the entire run.
    pub total_time: Duration,
    /// Time spent waiting on the external transcription tool.
    pub transcription_time: Duration,
    /// Number of cues written.
    pub segments: usize,
    /// Output format used.
    pub format: OutputFormat,
}

/// Result of a conversion run.
#[derive(Debug)]
pub struct ConvertResult {
    /// Path of the written output file.
    pub output_path: PathBuf,
    pub stats: ConvertStats,
}

/// Output file path for a format: `<output_dir>/output.<ext>`.
pub fn output_path(output_dir: &Path, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("output.{}", format.extension()))
}

/// Convert a transcript JSON file into the requested format.
///
/// The document is assembled in memory and written in a single operation,
/// so a failed run never leaves a partial output file behind.
pub fn convert_file(transcript_path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
    let start_time = Instant::now();

    info!("Converting {} to {}", transcript_path.display(), options.format);

    let transcript = load_transcript(transcript_path)?;

    let formatter = create_formatter(options.format);
    let document = render_document(formatter.as_ref(), &transcript.chunks);

    let output = output_path(&options.output_dir, options.format);
    fs::write(&output, &document)?;

    info!("Wrote {} cues to {}", transcript.chunks.len(), output.display());

    Ok(ConvertResult {
        output_path: output,
        stats: ConvertStats {
            total_time: start_time.elapsed(),
            transcription_time: Duration::ZERO,
            segments: transcript.chunks.len(),
            format: options.format,
        },
    })
}

/// Transcribe an audio file and convert the resulting transcript.
///
/// This is the end-to-end entry point. It:
/// 1. Runs the external transcription tool on the input audio
/// 2. Loads the transcript JSON the tool wrote
/// 3. Formats it and writes the output file
pub fn run(input: &Path, config: &Config, options: &ConvertOptions) -> Result<ConvertResult> {
    let start_time = Instant::now();

    info!("Stage 1/2: Transcribing {}", input.display());
    let transcription_start = Instant::now();

    let spinner = if options.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Transcribing with {}...", config.model));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let runner = WhisperRunner::from_config(config);
    let transcript_path = runner.transcribe(input)?;

    if let Some(pb) = spinner {
        pb.finish_with_message("✓ Transcription complete");
    }

    let transcription_time = transcription_start.elapsed();
    debug!(
        "Transcription took {:.2}s",
        transcription_time.as_secs_f64()
    );

    info!("Stage 2/2: Generating {} output", options.format);

    let mut result = convert_file(&transcript_path, options)?;

    result.stats.total_time = start_time.elapsed();
    result.stats.transcription_time = transcription_time;

    Ok(result)
}

/// Print a summary of the conversion results.
pub fn print_summary(result: &ConvertResult) {
    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("                       Conversion Complete                      ");
    println!("═══════════════════════════════════════════════════════════════");
    println!();
    println!("  Output:   {}", result.output_path.display());
    println!("  Format:   {}", result.stats.format);
    println!("  Cues:     {}", result.stats.segments);
    println!();
    println!("  Timing:");
    println!(
        "    Transcribe:  {:.2}s",
        result.stats.transcription_time.as_secs_f64()
    );
    println!(
        "    Total:       {:.2}s",
        result.stats.total_time.as_secs_f64()
    );
    println!();
    println!("═══════════════════════════════════════════════════════════════");
}
