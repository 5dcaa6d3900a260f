//! Global error handling for dumptxt
//!
//! This module provides a centralized error type covering every way a
//! concatenation run can fail.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Global error type for dumptxt operations
#[derive(Error, Debug)]
pub enum DumpTxtError {
    /// Source directory does not exist, is not a directory, or cannot be listed
    #[error("Source directory not found or not readable: {}", path.display())]
    MissingSource { path: PathBuf },

    /// A qualifying file could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A qualifying file is not valid UTF-8 text
    #[error("File is not valid UTF-8 text {}: {source}", path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The output file could not be created, written or flushed
    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DumpTxtError {
    /// Whether this error concerns a single input file that could not be
    /// turned into text. These are the errors the skip policy tolerates.
    pub fn is_unreadable_file(&self) -> bool {
        matches!(self, Self::UnreadableFile { .. } | Self::InvalidEncoding { .. })
    }
}

/// Specialized Result type for dumptxt operations
pub type Result<T> = std::result::Result<T, DumpTxtError>;

/// Creates a DumpTxtError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpTxtError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow converting DumpTxtError to io::Error so main and the tests can stay on io::Result
impl From<DumpTxtError> for io::Error {
    fn from(err: DumpTxtError) -> Self {
        let kind = match &err {
            DumpTxtError::MissingSource { .. } => io::ErrorKind::NotFound,
            DumpTxtError::InvalidEncoding { .. } => io::ErrorKind::InvalidData,
            DumpTxtError::UnreadableFile { source, .. }
            | DumpTxtError::OutputWrite { source, .. } => source.kind(),
            DumpTxtError::Io(e) => e.kind(),
            DumpTxtError::Config(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err.to_string())
    }
}
