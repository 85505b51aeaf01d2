use crate::error::{Result, WhispersubError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One recognized utterance with its `(start, end)` time span in seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    pub text: String,
    pub timestamp: (f64, f64),
}

impl Segment {
    pub fn start(&self) -> f64 {
        self.timestamp.0
    }

    pub fn end(&self) -> f64 {
        self.timestamp.1
    }
}

/// Parsed transcript document. Only `chunks` is consumed; any other
/// fields the transcription tool writes are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    pub chunks: Vec<Segment>,
}

/// Read and parse a transcript JSON file.
///
/// A missing `chunks` array, or a segment missing `text` or `timestamp`,
/// is a fatal parse error; no defaults are substituted.
pub fn load_transcript(path: &Path) -> Result<Transcript> {
    if !path.exists() {
        return Err(WhispersubError::FileNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)?;

    let transcript: Transcript = serde_json::from_str(&contents).map_err(|e| {
        WhispersubError::MalformedTranscript(format!("{}: {e}", path.display()))
    })?;

    debug!(
        "Loaded {} segments from {}",
        transcript.chunks.len(),
        path.display()
    );

    Ok(transcript)
}
