pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod transcribe;
pub mod transcript;

pub use config::{Config, OutputFormat};
pub use error::{Result, WhispersubError};
pub use pipeline::{
    convert_file, print_summary, run, ConvertOptions, ConvertResult, ConvertStats,
};
pub use transcript::{load_transcript, Segment, Transcript};
