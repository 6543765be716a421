use std::{error::Error, fmt::Display, io};

/// Possible errors while indexing a world directory.
#[derive(Debug)]
pub enum IndexError {
    /// I/O Error reported by the directory lister or the level metadata
    /// reader, distinct from a file simply not being a level.
    IOError { io_error: io::Error },
}

impl From<io::Error> for IndexError {
    fn from(io_error: io::Error) -> Self {
        IndexError::IOError { io_error }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IndexError::IOError { io_error } => Some(io_error),
        }
    }
}

impl Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::IOError { .. } => write!(f, "IO Error"),
        }
    }
}

/// Possible errors while splitting an indexed world into tiles.
#[derive(Debug)]
pub enum SplitError {
    /// Tile side length must be a positive number of level grid units.
    InvalidChunkSize { chunk_size: i32 },
}

impl Error for SplitError {}

impl Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitError::InvalidChunkSize { chunk_size } => {
                write!(f, "Invalid chunk size: {}", chunk_size)
            }
        }
    }
}

/// Possible errors while decoding a base-36 coordinate string.
#[derive(Debug, Eq, PartialEq)]
pub enum Base36DecodeError {
    /// Input contains no digits.
    Empty,
    /// Character outside the `0-9a-z` digit alphabet.
    InvalidDigit { character: char },
    /// Decoded value does not fit the coordinate range.
    OutOfRange,
}

impl Error for Base36DecodeError {}

impl Display for Base36DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Base36DecodeError::*;
        match self {
            Empty => write!(f, "Empty digit string"),
            InvalidDigit { character } => write!(f, "Invalid base-36 digit: {:?}", character),
            OutOfRange => write!(f, "Value out of coordinate range"),
        }
    }
}
