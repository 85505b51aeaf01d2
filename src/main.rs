use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use whispersub::config::{Config, OutputFormat};
use whispersub::pipeline::{print_summary, run, ConvertOptions};

#[derive(Parser)]
#[command(name = "whispersub")]
#[command(version, about = "Transcribe audio and convert the transcript to subtitles")]
#[command(
    long_about = "Run insanely-fast-whisper on an audio file and convert its JSON transcript into txt, srt, or vtt."
)]
struct Cli {
    /// Input audio file
    input: PathBuf,

    /// Format of the output file: txt, srt, vtt
    #[arg(short = 'f', long = "output_format", default_value = "srt")]
    output_format: String,

    /// Directory where the output file is saved
    #[arg(short = 'o', long = "output_dir", default_value = ".")]
    output_dir: PathBuf,

    /// Enable verbose logging (shows each cue as it is rendered)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Parse format before touching any file
    let format: OutputFormat = cli.output_format.parse()?;

    // Validate input file exists
    if !cli.input.exists() {
        anyhow::bail!("Input file not found: {}", cli.input.display());
    }

    // Load and validate configuration
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    info!("Input:  {}", cli.input.display());
    info!("Format: {}", format);
    info!("Output: {}", cli.output_dir.display());

    let options = ConvertOptions {
        format,
        output_dir: cli.output_dir,
        show_progress: !cli.verbose,
    };

    let result = run(&cli.input, &config, &options).context("Conversion failed")?;

    print_summary(&result);

    Ok(())
}
