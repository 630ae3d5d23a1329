use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// The analysis payload is not the expected JSON shape.
    InvalidAnalysis(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidAnalysis(msg) => write!(f, "invalid analysis JSON: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::InvalidAnalysis(_) => None,
        }
    }
}
