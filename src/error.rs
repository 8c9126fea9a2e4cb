//! Strobe Errors

// Rust
use alloc::string::String;

// 3rd-party
use thiserror_no_std::Error;

// Local
use crate::core::flags::{Flags, Operation};

pub type Result<T> = core::result::Result<T, Error>;

/// Broad category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The instance cannot be constructed with the requested parameters.
    Configuration,
    /// The caller violated the calling contract of an operation.
    Usage,
    /// Externally supplied bytes are malformed.
    Format,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    //////////
    // Configuration
    //////////
    #[error("Unsupported security level: {0} bits (expected 128 or 256)")]
    UnsupportedSecurity(u16),

    //////////
    // Usage
    //////////
    #[error("Unknown operation '{0}'")]
    InvalidOperation(String),
    #[error("{0} requires a non-zero output length")]
    LengthRequired(Operation),
    #[error("{0} takes input data, but an output length of {1} was given")]
    UnexpectedLength(Operation, usize),
    #[error("Streamed operation does not continue the current one (expected: {expected}, found: {found})")]
    StreamMismatch { expected: Flags, found: Flags },
    #[error("MAC verification cannot be streamed")]
    StreamedVerification,

    //////////
    // Format
    //////////
    #[error("Ciphertext is shorter than the authentication tag (expected at least: {0}, found: {1})")]
    CiphertextTooShort(usize, usize),
    #[error("Serialized state has the wrong size (expected: {0}, found: {1})")]
    StateLengthMismatch(usize, usize),
    #[error("Serialized state version not supported (found: {0})")]
    StateVersion(u8),
    #[error("Serialized state is corrupt: invalid {0}")]
    CorruptState(&'static str),
    #[error("Not enough space allocated for output stream (expected: {0}, found: {1})")]
    StreamAllocationExceededOut(usize, usize),
    #[error("Not enough space allocated for input stream (expected: {0}, found: {1})")]
    StreamAllocationExceededIn(usize, usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedSecurity(_) => ErrorKind::Configuration,
            Error::InvalidOperation(_)
            | Error::LengthRequired(_)
            | Error::UnexpectedLength(..)
            | Error::StreamMismatch { .. }
            | Error::StreamedVerification => ErrorKind::Usage,
            Error::CiphertextTooShort(..)
            | Error::StateLengthMismatch(..)
            | Error::StateVersion(_)
            | Error::CorruptState(_)
            | Error::StreamAllocationExceededOut(..)
            | Error::StreamAllocationExceededIn(..) => ErrorKind::Format,
        }
    }
}
