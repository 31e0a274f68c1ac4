use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidId(String),
    InvalidCategory(String),
    InvalidSeverity(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(raw) => write!(f, "invalid content id: {raw}"),
            ModelError::InvalidCategory(raw) => {
                write!(f, "invalid category key: {raw:?}")
            }
            ModelError::InvalidSeverity(raw) => {
                write!(f, "invalid severity: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
