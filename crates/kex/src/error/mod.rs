//! Error handling for key exchange operations
//!
//! The protocol layer is the only layer that reports errors to callers; the
//! arithmetic layers below it assume validated input. Every error is
//! terminal for the operation that produced it: a failed randomness fetch or
//! an invalid peer key must abort the handshake, not be retried with stale
//! state.

use ccrypt_algorithms::error::Error as PrimitiveError;
use ccrypt_api::error::Error as CoreError;
use core::fmt;

/// Error type for key exchange operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Primitive error bubbled up from the arithmetic layer
    Primitive(PrimitiveError),

    /// Key pair generation failed (e.g. the randomness source returned an
    /// error)
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// A caller-supplied buffer was malformed (wrong length, empty)
    InvalidArgument {
        context: &'static str,
        details: &'static str,
    },

    /// Our own private key failed validation
    PrivateKeyInvalid {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// The peer's public key failed validation: the point at infinity, a
    /// point off the curve, or a point in a small subgroup
    RemotePublicKeyInvalid {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        context: &'static str,
        details: &'static str,
    },
}

/// Result type for key exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::InvalidArgument { context, details } => {
                write!(f, "Invalid argument for {}: {}", context, details)
            }
            Error::PrivateKeyInvalid { algorithm, reason } => {
                write!(f, "Invalid {} private key: {}", algorithm, reason)
            }
            Error::RemotePublicKeyInvalid { algorithm, reason } => {
                write!(f, "Invalid {} peer public key: {}", algorithm, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::RandomGenerationError {
                context: algorithm,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::InvalidArgument { context, details } => CoreError::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::PrivateKeyInvalid { algorithm, reason } => CoreError::InvalidKey {
                context: algorithm,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::RemotePublicKeyInvalid { algorithm, reason } => CoreError::InvalidKey {
                context: algorithm,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
