use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid email: {0}")]
    InvalidEmail(String),
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}
