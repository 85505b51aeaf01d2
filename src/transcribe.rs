use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, WhispersubError};

/// Wrapper around the external transcription command.
///
/// The command is invoked synchronously and blocks until it exits; there
/// is no retry and no timeout. On success the transcript JSON is left at
/// `transcript_path` for conversion.
pub struct WhisperRunner {
    command: String,
    model: String,
    transcript_path: PathBuf,
}

impl WhisperRunner {
    pub fn new(command: String, model: String, transcript_path: PathBuf) -> Self {
        Self {
            command,
            model,
            transcript_path,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.command.clone(),
            config.model.clone(),
            config.transcript_path.clone(),
        )
    }

    pub fn transcript_path(&self) -> &Path {
        &self.transcript_path
    }

    /// Run the transcription command on an audio file.
    ///
    /// Returns the path of the transcript JSON the tool wrote.
    pub fn transcribe(&self, input: &Path) -> Result<PathBuf> {
        if !input.exists() {
            return Err(WhispersubError::FileNotFound(input.display().to_string()));
        }

        info!("Transcribing {} with {}", input.display(), self.model);
        debug!("Running {} --file-name {:?}", self.command, input);

        let status = Command::new(&self.command)
            .arg("--file-name")
            .arg(input)
            .arg("--model-name")
            .arg(&self.model)
            .arg("--transcript-path")
            .arg(&self.transcript_path)
            .status()
            .map_err(|e| {
                WhispersubError::Transcription(format!(
                    "{} not found. Please install it and ensure it's in your PATH. Error: {e}",
                    self.command
                ))
            })?;

        if !status.success() {
            return Err(WhispersubError::Transcription(format!(
                "{} exited with {status}",
                self.command
            )));
        }

        if !self.transcript_path.exists() {
            return Err(WhispersubError::Transcription(format!(
                "Transcript file {} was not created",
                self.transcript_path.display()
            )));
        }

        info!("Transcript written to {}", self.transcript_path.display());

        Ok(self.transcript_path.clone())
    }
}
