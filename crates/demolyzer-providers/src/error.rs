use std::fmt;

/// Result type for demolyzer-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// CSV reading or writing failed
    Csv(csv::Error),

    /// Table shape is invalid (missing column, bad tick)
    Table(demolyzer_types::Error),

    /// External extraction program failed
    Extraction(String),

    /// No source can handle the given recording
    Provider(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Table(err) => write!(f, "Table error: {}", err),
            Error::Extraction(msg) => write!(f, "Extraction error: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Table(err) => Some(err),
            Error::Extraction(_) | Error::Provider(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<demolyzer_types::Error> for Error {
    fn from(err: demolyzer_types::Error) -> Self {
        Error::Table(err)
    }
}
