//! Error types

use crate::HashAlg;
use core::fmt;

/// Result type with `vihash`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Unknown algorithm.
    ///
    /// This is returned when an algorithm identifier is not in the supported
    /// set at all. Input is never hashed (or visualized) in this case.
    AlgorithmUnknown,

    /// Unsupported algorithm.
    ///
    /// This is returned when an algorithm is recognized, but the relevant
    /// crate feature to support it hasn't been enabled.
    AlgorithmUnsupported {
        /// Algorithm identifier.
        algorithm: HashAlg,
    },

    /// Unknown render mode.
    ModeUnknown,

    /// Invalid board layout.
    ///
    /// Board dimensions must both be nonzero.
    LayoutInvalid {
        /// Requested number of rows.
        rows: usize,

        /// Requested number of columns.
        cols: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlgorithmUnknown => write!(f, "unknown algorithm"),
            Error::AlgorithmUnsupported { algorithm } => {
                write!(f, "unsupported algorithm: {algorithm}")
            }
            Error::ModeUnknown => write!(f, "unknown render mode"),
            Error::LayoutInvalid { rows, cols } => {
                write!(f, "invalid board layout: {rows}x{cols}")
            }
        }
    }
}

impl core::error::Error for Error {}
