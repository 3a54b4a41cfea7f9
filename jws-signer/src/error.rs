/// Error type definitions
use crate::algorithm::Algorithm;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwsError {
    /// The algorithm is not handled by the constructor's family,
    /// e.g. `RS256` passed to `HmacSigner::new`.
    #[error("Algorithm {0} is not supported by this family")]
    UnsupportedAlgorithm(Algorithm),

    /// A string that names no registered algorithm.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Key rejected at construction time: empty, structurally
    /// unsound, or on the wrong curve for the requested algorithm.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Single rejection class for verification. Wrong key, tampered
    /// data and malformed signature bytes all collapse into this value.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Failure inside the underlying primitive during signing.
    #[error("Signing failed: {0}")]
    SigningError(String),
}

pub type Result<T> = std::result::Result<T, JwsError>;
