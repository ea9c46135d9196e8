use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown filter: {name}")]
    UnknownFilterError { name: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FilterError {
    pub fn invalid_value(field: &str, value: impl ToString, reason: &str) -> Self {
        FilterError::InvalidValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::InvalidValueError { .. }
            | FilterError::UnknownFilterError { .. }
            | FilterError::SerializationError(_) => ErrorCategory::Input,
            FilterError::MissingConfigError { .. } | FilterError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            FilterError::CsvError(_) | FilterError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
            FilterError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FilterError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            FilterError::SerializationError(_) => {
                "Make sure the input is valid JSON in the expected record shape".to_string()
            }
            FilterError::CsvError(_) => "Check the output directory and retry".to_string(),
            FilterError::InvalidValueError { field, .. } => {
                format!("Fix the value of '{}' in the input data", field)
            }
            FilterError::UnknownFilterError { .. } => format!(
                "Use one of: {}",
                crate::core::registry::FILTER_NAMES.join(", ")
            ),
            FilterError::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the config file", field)
            }
            FilterError::ConfigValidationError { field, .. } => {
                format!("Review the '{}' setting", field)
            }
            FilterError::ProcessingError { .. } => "Run again with --verbose for details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("The input could not be formatted: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
            ErrorCategory::Processing => format!("Building the report failed: {}", self),
            ErrorCategory::System => format!("A system error occurred: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
