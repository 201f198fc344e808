use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    DecodeError(#[from] std::string::FromUtf8Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rules file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Template pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl AnalyzerError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::DecodeError(_) => {
                "The input file is not plain text (UTF-8). Export the spreadsheet as CSV text."
                    .to_string()
            }
            Self::CsvError(e) => format!("Could not write a segment export: {}", e),
            Self::SerializationError(e) => format!("Could not write the report: {}", e),
            Self::TomlError(e) => format!("The rules file could not be parsed: {}", e),
            Self::PatternError(e) => format!("Template engine failed to initialize: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            Self::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the input file exists and the output directory is writable",
            Self::DecodeError(_) => "Re-export the data as a plain CSV file",
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Check free disk space and permissions on the output directory"
            }
            Self::TomlError(_) => "Compare the rules file against the documented [rules] keys",
            Self::PatternError(_) => "This is a bug in the tool; please report it",
            Self::InvalidConfigValueError { .. } => "Adjust the flagged option and run again",
            Self::ProcessingError { .. } => "Re-run with --verbose and inspect the log",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
