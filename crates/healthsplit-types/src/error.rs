use std::fmt;

/// Result type for healthsplit-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Category name did not match any known report category
    UnknownCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCategory(name) => write!(
                f,
                "Unknown category: {} (expected one of storage, services, critical, pending, ssh)",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}
