use std::fmt;
use std::path::PathBuf;

/// Result type for healthsplit-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a report
#[derive(Debug)]
pub enum Error {
    /// Report file does not exist
    InputNotFound(PathBuf),

    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InputNotFound(_) => 2,
            Error::Io(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => write!(f, "Report file not found: {}", path.display()),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InputNotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
