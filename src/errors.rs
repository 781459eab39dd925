use thiserror::Error;

/// Error produced when a locale tag cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLocaleError {
    #[error("Invalid locale tag: {0:?}")]
    InvalidTag(String),
}
