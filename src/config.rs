use crate::error::{Result, WhispersubError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Txt,
    #[default]
    Srt,
    Vtt,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Txt => write!(f, "txt"),
            OutputFormat::Srt => write!(f, "srt"),
            OutputFormat::Vtt => write!(f, "vtt"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = WhispersubError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Txt),
            "srt" => Ok(OutputFormat::Srt),
            "vtt" => Ok(OutputFormat::Vtt),
            _ => Err(WhispersubError::UnknownFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Srt => "srt",
            OutputFormat::Vtt => "vtt",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External transcription command.
    pub command: String,
    /// Model identifier passed to the transcription command.
    pub model: String,
    /// Path where the transcription command writes its JSON transcript.
    pub transcript_path: PathBuf,
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: "insanely-fast-whisper".to_string(),
            model: "openai/whisper-large-v3".to_string(),
            transcript_path: PathBuf::from("output.json"),
            default_format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load from config file if it exists
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                if let Ok(file_config) = toml::from_str::<Config>(&contents) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables
        if let Ok(command) = std::env::var("WHISPERSUB_COMMAND") {
            config.command = command;
        }
        if let Ok(model) = std::env::var("WHISPERSUB_MODEL") {
            config.model = model;
        }
        if let Ok(path) = std::env::var("WHISPERSUB_TRANSCRIPT_PATH") {
            config.transcript_path = PathBuf::from(path);
        }
        if let Ok(format) = std::env::var("WHISPERSUB_DEFAULT_FORMAT") {
            if let Ok(f) = format.parse() {
                config.default_format = f;
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.command.is_empty() {
            return Err(WhispersubError::Config(
                "Transcription command must not be empty".to_string(),
            ));
        }

        if self.model.is_empty() {
            return Err(WhispersubError::Config(
                "Model identifier must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("whispersub").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Txt);
        assert_eq!("srt".parse::<OutputFormat>().unwrap(), OutputFormat::Srt);
        assert_eq!("vtt".parse::<OutputFormat>().unwrap(), OutputFormat::Vtt);
        assert_eq!("SRT".parse::<OutputFormat>().unwrap(), OutputFormat::Srt);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert!("json".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_unknown_format_error_message() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(OutputFormat::Txt.extension(), "txt");
        assert_eq!(OutputFormat::Srt.extension(), "srt");
        assert_eq!(OutputFormat::Vtt.extension(), "vtt");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.command, "insanely-fast-whisper");
        assert_eq!(config.model, "openai/whisper-large-v3");
        assert_eq!(config.transcript_path, PathBuf::from("output.json"));
        assert_eq!(config.default_format, OutputFormat::Srt);
    }

    #[test]
    fn test_validate_empty_command() {
        let mut config = Config::default();
        config.command = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_model() {
        let mut config = Config::default();
        config.model = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }
}
