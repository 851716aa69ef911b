use std::fmt;

/// Result type for demolyzer-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while shaping a telemetry table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Header row lacks a required column
    MissingColumn { column: &'static str },

    /// A structural field (tick) could not be parsed
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingColumn { column } => {
                write!(f, "Missing column: table has no '{}' column", column)
            }
            Error::InvalidField { row, column, value } => {
                write!(
                    f,
                    "Invalid field: row {} has '{}' = {:?}",
                    row, column, value
                )
            }
        }
    }
}

impl std::error::Error for Error {}
