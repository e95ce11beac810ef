//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::SerializationError { .. } => Self::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidKey { context } => write!(f, "Invalid key in {}", context),
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            #[cfg(feature = "std")]
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter in {}", context)
            }
            #[cfg(feature = "std")]
            Error::SerializationError { context, message } => {
                write!(f, "Serialization error in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::SerializationError { context } => {
                write!(f, "Serialization error in {}", context)
            }
            #[cfg(feature = "std")]
            Error::RandomGenerationError { context, message } => {
                write!(f, "Random generation failed in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::RandomGenerationError { context } => {
                write!(f, "Random generation failed in {}", context)
            }
            #[cfg(feature = "std")]
            Error::Other { context, message } => write!(f, "{}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Error::Other { context } => write!(f, "{}", context),
        }
    }
}
