//! Error types for the Rijndael library.

use std::fmt;

/// Errors produced by the Rijndael library.
///
/// Every variant is detected immediately at the violated precondition and
/// none of them is transient: retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RijndaelError {
    /// Key length is not 16, 24 or 32 bytes.
    InvalidKey {
        /// Length of the rejected key in bytes.
        len: usize,
    },
    /// Block encrypt/decrypt input is not exactly one block long.
    InvalidBlockLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// Mode ciphertext is too short or not aligned to the block size.
    InvalidCiphertextLength {
        /// Length of the rejected ciphertext in bytes.
        len: usize,
    },
    /// Decrypted pad byte is outside `[1, 16]`.
    ///
    /// Usually means the ciphertext was corrupted or decrypted under the
    /// wrong key.
    PaddingError {
        /// The pad byte that was read from the last plaintext block.
        pad: u8,
    },
}

impl fmt::Display for RijndaelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RijndaelError::InvalidKey { len } => {
                write!(f, "Key must be 16, 24 or 32 bytes long, got {}", len)
            }
            RijndaelError::InvalidBlockLength { len } => {
                write!(f, "Block must be exactly 16 bytes long, got {}", len)
            }
            RijndaelError::InvalidCiphertextLength { len } => {
                write!(f, "Ciphertext length {} is not valid for this mode", len)
            }
            RijndaelError::PaddingError { pad } => {
                write!(f, "Invalid padding byte {:#04x}", pad)
            }
        }
    }
}

impl std::error::Error for RijndaelError {}
