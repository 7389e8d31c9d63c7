//! Error types returned by decoding and validation routines.

use core::fmt;

/// Errors that can occur when decoding or validating encoded key or
/// signature material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The encoded bytes do not represent a valid point on the curve, or a
    /// scalar/signature component is outside its required range.
    InvalidPoint,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidPoint => write!(f, "invalid point encoding"),
        }
    }
}

impl std::error::Error for DecodeError {}
