use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Cannot merge an empty interval list")]
    EmptyIntervals,
}

/// Data problem with a single record. Reported alongside the assembled
/// timeline instead of aborting it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RecordIssue {
    #[error("Record '{record_id}' has no start date")]
    #[serde(rename_all = "camelCase")]
    MissingStartDate { record_id: String },

    #[error("Record '{record_id}' ends ({end}) before it starts ({start})")]
    #[serde(rename_all = "camelCase")]
    InvalidRange {
        record_id: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl RecordIssue {
    pub fn record_id(&self) -> &str {
        match self {
            RecordIssue::MissingStartDate { record_id } => record_id,
            RecordIssue::InvalidRange { record_id, .. } => record_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TimelineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimelineError::IoError(_) => ErrorCategory::Io,
            TimelineError::SerializationError(_) | TimelineError::EmptyIntervals => {
                ErrorCategory::Data
            }
            TimelineError::CsvError(_) => ErrorCategory::Rendering,
            TimelineError::ConfigError { .. }
            | TimelineError::MissingConfigError { .. }
            | TimelineError::InvalidConfigValueError { .. }
            | TimelineError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TimelineError::SerializationError(_) | TimelineError::EmptyIntervals => {
                ErrorSeverity::Medium
            }
            TimelineError::ConfigError { .. }
            | TimelineError::MissingConfigError { .. }
            | TimelineError::InvalidConfigValueError { .. }
            | TimelineError::ConfigValidationError { .. }
            | TimelineError::CsvError(_) => ErrorSeverity::High,
            TimelineError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
            ErrorCategory::Configuration => "Review the command-line flags or the TOML configuration file",
            ErrorCategory::Data => "Check the record file: dates must be YYYY-MM or YYYY-MM-DD and end must not precede start",
            ErrorCategory::Rendering => "Try a different output format",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TimelineError::IoError(e) => format!("Could not read or write a file: {}", e),
            TimelineError::SerializationError(e) => format!("The record file is not valid JSON: {}", e),
            TimelineError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            TimelineError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TimelineError>;
