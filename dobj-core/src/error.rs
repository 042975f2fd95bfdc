// Error types for dobj
//
// Dispatch itself cannot fail. These cover reading collections and
// configuration from JSON and writing rendered output.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised while loading data objects or configuration
#[derive(Debug)]
pub enum LoadError {
    Json(serde_json::Error),
    InvalidWidth { width: u32 },
    IntegerOutOfRange { value: i64, width: u32 },
    NonFiniteFloat { value: f64 },
    InvalidConfig { field: &'static str, value: usize },
}

/// Errors raised while writing rendered output
#[derive(Debug)]
pub enum RenderError {
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;

// Error trait implementations

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Json(e) => Some(e),
            LoadError::InvalidWidth { .. }
            | LoadError::IntegerOutOfRange { .. }
            | LoadError::NonFiniteFloat { .. }
            | LoadError::InvalidConfig { .. } => None,
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
        }
    }
}

// Display implementations

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Json(e) => write!(f, "Invalid JSON: {}", e),
            LoadError::InvalidWidth { width } => {
                write!(f, "Invalid integer width: {} bits (expected 1 to 64)", width)
            }
            LoadError::IntegerOutOfRange { value, width } => {
                write!(f, "Integer {} does not fit in {} bits", value, width)
            }
            LoadError::NonFiniteFloat { value } => {
                write!(f, "Float {} has no JSON representation", value)
            }
            LoadError::InvalidConfig { field, value } => {
                write!(
                    f,
                    "Configuration value {} for '{}' is out of range",
                    value, field
                )
            }
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

// Convenience From implementations for error composition

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        LoadError::Json(error)
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        RenderError::Io(error)
    }
}
