use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhispersubError {
    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Malformed transcript: {0}")]
    MalformedTranscript(String),

    #[error("Unknown output format: {0}. Use 'txt', 'srt', or 'vtt'")]
    UnknownFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WhispersubError>;
