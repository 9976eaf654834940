use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot read input file '{path}': {source}")]
    InputAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Row at line {line} has {found} fields but the header defines {expected}")]
    RaggedRowError {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Row at line {line} is missing field '{field}'")]
    MissingFieldError { line: u64, field: String },

    #[error("Row at line {line}: field '{field}' value {value:?} is not a base-10 integer")]
    InvalidIntegerError {
        line: u64,
        field: String,
        value: String,
    },

    #[error("Invalid configuration value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input could not be opened, decoded or parsed as delimited text.
    InputAccess,
    /// A record's `quantity` or `is_promo` could not be coerced.
    FieldCoercion,
    /// The document could not be serialized or written.
    Output,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InputAccessError { .. }
            | ConvertError::CsvError(_)
            | ConvertError::RaggedRowError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::InputAccess,
            ConvertError::MissingFieldError { .. } | ConvertError::InvalidIntegerError { .. } => {
                ErrorCategory::FieldCoercion
            }
            ConvertError::IoError(_) | ConvertError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Output => 1,
            ErrorCategory::InputAccess => 2,
            ErrorCategory::FieldCoercion => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
