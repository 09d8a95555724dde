use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("field '{field}' is not a number: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("field '{field}' must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("'{code}' is not a valid option for '{field}'")]
    OutOfDomain { field: String, code: String },
}
