//! Digest values and their visualization.

use crate::{Art, Board, HashAlg, Layout, Mode, Result};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

/// Digest of a message, tagged with the algorithm that produced it.
///
/// A digest is immutable once produced and is only ever created by actually
/// hashing the input; an unknown or unavailable algorithm yields an error
/// rather than a value wrapping the raw input.
///
/// The [`Display`][`fmt::Display`] impl prints the digest as
/// colon-separated lowercase hex:
///
/// ```text
/// 7f:0a:d4:c9:6e:98:1b:04:12:ff:d4:df:6a:14:7e:72:...
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Digest {
    /// Hash algorithm the digest was computed with.
    algorithm: HashAlg,

    /// Raw digest output.
    bytes: Vec<u8>,
}

impl Digest {
    /// Compute the digest of the given message using the provided hash
    /// algorithm.
    pub fn new(algorithm: HashAlg, msg: &[u8]) -> Result<Self> {
        Ok(Self {
            algorithm,
            bytes: algorithm.digest(msg)?,
        })
    }

    /// Get the hash algorithm used for this digest.
    pub const fn algorithm(&self) -> HashAlg {
        self.algorithm
    }

    /// Get the raw digest output as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Walk this digest over a fresh board with the given layout.
    pub fn to_board(&self, layout: Layout) -> Board {
        Board::walk(layout, &self.bytes)
    }

    /// Format art for this digest on the canonical 8×16 board using the
    /// provided formatter.
    pub fn fmt_art(&self, mode: Mode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.to_board(Layout::default());
        fmt::Display::fmt(&Art::new(&board, mode), f)
    }

    /// Render art for this digest on the canonical 8×16 board as a string.
    ///
    /// ```text
    /// +---ViHash 1.0---+
    /// |    I  .I.      |
    /// |       .        |
    /// |                |
    /// |    II          |
    /// |     ...I       |
    /// |     I..        |
    /// |      ^         |
    /// |     .. I.      |
    /// +----------------+
    /// ```
    pub fn to_art(&self, mode: Mode) -> String {
        let board = self.to_board(Layout::default());
        Art::new(&board, mode).to_string()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }

            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}
