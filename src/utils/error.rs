use thiserror::Error;

/// Localized alert shown to the user when the podium tip repeats a driver.
pub const DUPLICATE_PODIUM_ALERT: &str = "Špatně zadaný tip na podium!!!";

#[derive(Error, Debug)]
pub enum BetError {
    #[error("podium picks must be unique")]
    DuplicatePodiumEntry,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Joker limit reached: {used} of {max} already played")]
    JokerLimitExceeded { used: u32, max: u32 },

    #[error("Standings have no entry for position {position}")]
    MissingStanding { position: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BetError::DuplicatePodiumEntry | BetError::JokerLimitExceeded { .. } => {
                ErrorCategory::Validation
            }
            BetError::TomlError(_)
            | BetError::ConfigValidationError { .. }
            | BetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BetError::SerializationError(_) | BetError::MissingStanding { .. } => {
                ErrorCategory::Data
            }
            BetError::IoError(_) | BetError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Message meant for the person filling in the bet, not for logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            BetError::DuplicatePodiumEntry => DUPLICATE_PODIUM_ALERT.to_string(),
            BetError::IoError(e) => format!("Could not read or write a file: {}", e),
            BetError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            BetError::TomlError(e) => format!("Scoring config is not valid TOML: {}", e),
            BetError::CsvError(e) => format!("Could not write CSV output: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BetError::DuplicatePodiumEntry => {
                "Pick a different driver for each podium position"
            }
            BetError::IoError(_) => "Check that the file exists and is readable",
            BetError::SerializationError(_) => "Fix the JSON syntax of the input file",
            BetError::TomlError(_) => "Fix the TOML syntax of the scoring config",
            BetError::CsvError(_) => "Retry with --format json",
            BetError::JokerLimitExceeded { .. } => "Remove the joker from this tip",
            BetError::ConfigValidationError { .. } | BetError::InvalidConfigValueError { .. } => {
                "Review the scoring config against the documented defaults"
            }
            BetError::MissingStanding { .. } => {
                "Make sure the standings list every position being scored"
            }
        }
    }
}

impl ErrorSeverity {
    /// Process exit status used by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BetError>;
