use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything in the memory and cartridge layer fails the same way: some
/// index or region fell outside the buffer. The message carries the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    OutOfRange(String),
}

impl Error {
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Error::OutOfRange(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
