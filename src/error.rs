//! Error handling for the viewkit library
//!
//! Every failure in this crate is a local, synchronous caller error: a bad
//! construction argument or an index/range outside the current bounds. Map
//! lookups and UTF-8 decoding are total and never produce an error.

use thiserror::Error;

/// Main error type for the viewkit library
#[derive(Error, Debug)]
pub enum ViewkitError {
    /// I/O related errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed construction parameters
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message describing the issue
        message: String,
    },

    /// Range argument outside the valid bound
    #[error("Out of range: [{start}, {end}) with size {size}")]
    OutOfRange {
        /// Range start
        start: usize,
        /// Range end (exclusive)
        end: usize,
        /// The valid size/length
        size: usize,
    },

    /// Single-element access outside `[0, size)`
    #[error("Index out of range: index {index}, size {size}")]
    IndexOutOfRange {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Storage allocation failures
    #[error("Memory allocation failed: requested {size} elements")]
    OutOfMemory {
        /// Number of elements requested
        size: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ViewkitError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(start: usize, end: usize, size: usize) -> Self {
        Self::OutOfRange { start, end, size }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for both range and single-index bound violations
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::IndexOutOfRange { .. }
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfMemory { .. } => true,
            Self::InvalidArgument { .. } => false,
            Self::OutOfRange { .. } => false,
            Self::IndexOutOfRange { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidArgument { .. } => "argument",
            Self::OutOfRange { .. } => "range",
            Self::IndexOutOfRange { .. } => "index",
            Self::OutOfMemory { .. } => "memory",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ViewkitError>;

/// Assert that an index is within `[0, size)`
#[inline]
pub fn check_index(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(ViewkitError::index_out_of_range(index, size))
    } else {
        Ok(())
    }
}

/// Assert that `start <= end <= size`
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end || end > size {
        return Err(ViewkitError::out_of_range(start, end, size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ViewkitError::invalid_argument("length 3 > capacity 2");
        assert_eq!(err.category(), "argument");
        assert!(!err.is_recoverable());
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_index_checking() {
        assert!(check_index(5, 10).is_ok());
        assert!(check_index(10, 10).is_err());
        assert!(check_index(15, 10).is_err());
        assert!(check_index(0, 0).is_err());
        assert!(check_index(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_range_checking() {
        assert!(check_range(2, 8, 10).is_ok());
        assert!(check_range(0, 0, 0).is_ok());
        assert!(check_range(5, 5, 5).is_ok());
        assert!(check_range(8, 2, 10).is_err());
        assert!(check_range(2, 15, 10).is_err());
        assert!(check_range(usize::MAX, 0, 10).is_err());
    }

    #[test]
    fn test_index_error_is_out_of_range() {
        let index_err = check_index(3, 3).unwrap_err();
        assert!(index_err.is_out_of_range());
        assert_eq!(index_err.category(), "index");

        let range_err = check_range(1, 4, 3).unwrap_err();
        assert!(range_err.is_out_of_range());
        assert_eq!(range_err.category(), "range");
    }

    #[test]
    fn test_error_display() {
        let err = ViewkitError::index_out_of_range(10, 5);
        let display = format!("{}", err);
        assert!(display.contains("Index out of range"));
        assert!(display.contains("10"));
        assert!(display.contains("5"));

        let range = ViewkitError::out_of_range(4, 12, 10);
        assert_eq!(format!("{}", range), "Out of range: [4, 12) with size 10");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: ViewkitError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(err.is_recoverable());
        assert!(format!("{}", err).contains("I/O error"));
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(ViewkitError::out_of_memory(1024).is_recoverable());
        assert!(!ViewkitError::configuration("bad").is_recoverable());
        assert!(!ViewkitError::out_of_range(0, 1, 0).is_recoverable());
    }

    #[test]
    fn test_error_debug() {
        let err = ViewkitError::invalid_argument("debug test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidArgument"));
        assert!(debug_str.contains("debug test"));
    }
}
