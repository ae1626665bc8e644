//! Hash algorithm support.

use crate::{Error, Result};
use alloc::{string::String, vec::Vec};
use core::{fmt, str};
use sha2::{Digest, Sha256, Sha512};

#[cfg(feature = "md5")]
use md5::Md5;

#[cfg(feature = "sha1")]
use sha1::Sha1;

#[cfg(feature = "sha3")]
use sha3::{Sha3_256, Sha3_512};

/// MD5 hash function
const MD5: &str = "md5";

/// SHA-1 hash function
const SHA1: &str = "sha1";

/// SHA-256 hash function
const SHA256: &str = "sha256";

/// SHA-512 hash function
const SHA512: &str = "sha512";

/// SHA3-256 hash function
const SHA3_256: &str = "sha3-256";

/// SHA3-512 hash function
const SHA3_512: &str = "sha3-512";

/// Hashing algorithms a.k.a. digest functions supported for visualization.
///
/// This type provides a registry of the digest algorithms a visualization
/// can be computed from. Every variant is always recognized by the parser;
/// actually computing a digest additionally requires the backing crate
/// feature (`md5`, `sha1`, `sha3`) to be enabled.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum HashAlg {
    /// MD5
    Md5,

    /// SHA-1
    Sha1,

    /// SHA-256
    #[default]
    Sha256,

    /// SHA-512
    Sha512,

    /// SHA3-256
    Sha3_256,

    /// SHA3-512
    Sha3_512,
}

impl HashAlg {
    /// Decode hash algorithm from the given string identifier.
    ///
    /// Identifiers are matched case-insensitively, with `_` and spaces
    /// accepted in place of `-` (e.g. `"SHA3 256"` parses as `sha3-256`).
    ///
    /// # Supported algorithms
    /// - `md5`
    /// - `sha1`
    /// - `sha256`
    /// - `sha512`
    /// - `sha3-256`
    /// - `sha3-512`
    pub fn new(id: &str) -> Result<Self> {
        id.parse()
    }

    /// Get the string identifier for this hash algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlg::Md5 => MD5,
            HashAlg::Sha1 => SHA1,
            HashAlg::Sha256 => SHA256,
            HashAlg::Sha512 => SHA512,
            HashAlg::Sha3_256 => SHA3_256,
            HashAlg::Sha3_512 => SHA3_512,
        }
    }

    /// Get the size of a digest produced by this hash function.
    pub const fn digest_size(self) -> usize {
        match self {
            HashAlg::Md5 => 16,
            HashAlg::Sha1 => 20,
            HashAlg::Sha256 | HashAlg::Sha3_256 => 32,
            HashAlg::Sha512 | HashAlg::Sha3_512 => 64,
        }
    }

    /// Is this algorithm backed by an enabled crate feature?
    pub const fn is_available(self) -> bool {
        match self {
            HashAlg::Md5 => cfg!(feature = "md5"),
            HashAlg::Sha1 => cfg!(feature = "sha1"),
            HashAlg::Sha256 | HashAlg::Sha512 => true,
            HashAlg::Sha3_256 | HashAlg::Sha3_512 => cfg!(feature = "sha3"),
        }
    }

    /// Compute a digest of the given message using this hash function.
    ///
    /// Returns [`Error::AlgorithmUnsupported`] if the backing crate feature
    /// is disabled; no digest (and in particular no raw copy of `msg`) is
    /// ever produced on that path.
    pub fn digest(self, msg: &[u8]) -> Result<Vec<u8>> {
        match self {
            #[cfg(feature = "md5")]
            HashAlg::Md5 => Ok(Md5::digest(msg).to_vec()),
            #[cfg(feature = "sha1")]
            HashAlg::Sha1 => Ok(Sha1::digest(msg).to_vec()),
            HashAlg::Sha256 => Ok(Sha256::digest(msg).to_vec()),
            HashAlg::Sha512 => Ok(Sha512::digest(msg).to_vec()),
            #[cfg(feature = "sha3")]
            HashAlg::Sha3_256 => Ok(Sha3_256::digest(msg).to_vec()),
            #[cfg(feature = "sha3")]
            HashAlg::Sha3_512 => Ok(Sha3_512::digest(msg).to_vec()),
            #[allow(unreachable_patterns)]
            _ => Err(self.unsupported_error()),
        }
    }

    /// Return an error indicating this algorithm is unsupported.
    pub(crate) const fn unsupported_error(self) -> Error {
        Error::AlgorithmUnsupported { algorithm: self }
    }
}

impl AsRef<str> for HashAlg {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HashAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for HashAlg {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        let mut normalized = String::with_capacity(id.len());

        for c in id.chars() {
            normalized.push(match c {
                '_' | ' ' => '-',
                _ => c.to_ascii_lowercase(),
            });
        }

        match normalized.as_str() {
            MD5 => Ok(HashAlg::Md5),
            SHA1 => Ok(HashAlg::Sha1),
            SHA256 => Ok(HashAlg::Sha256),
            SHA512 => Ok(HashAlg::Sha512),
            SHA3_256 => Ok(HashAlg::Sha3_256),
            SHA3_512 => Ok(HashAlg::Sha3_512),
            _ => Err(Error::AlgorithmUnknown),
        }
    }
}
