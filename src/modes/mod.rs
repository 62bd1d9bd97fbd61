//! Confidentiality modes that extend the block cipher to whole messages.
//!
//! Both modes emit `IV ‖ transformed bytes`, so the receiver only needs the
//! key to decrypt.

mod cbc;
mod ctr;

pub use cbc::Cbc;
pub use ctr::{increment_counter, Ctr};

use crate::error::RijndaelError;
use crate::BLOCK_SIZE;

/// A mode of operation wrapping the block cipher.
///
/// Implementations hold only the immutable cipher, so `&self` methods may be
/// called concurrently for independent messages.
pub trait BlockMode {
    /// Encrypts `message` under `iv` and returns `iv ‖ ciphertext`.
    ///
    /// # Arguments
    ///
    /// * `iv` - One block, unique per message under a given key. Uniqueness
    ///   is not checked.
    /// * `message` - Plaintext of any length, including zero.
    fn encrypt(&self, iv: &[u8; BLOCK_SIZE], message: &[u8]) -> Vec<u8>;

    /// Decrypts `iv ‖ ciphertext` as produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// Returns:
    /// * [`RijndaelError::InvalidCiphertextLength`] when the input is not a
    ///   valid length for the mode
    /// * [`RijndaelError::PaddingError`] when a padded mode finds a corrupt pad
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, RijndaelError>;
}

/// Splits the leading IV off a mode ciphertext.
///
/// Callers check that `ciphertext` holds at least one block first.
fn split_iv(ciphertext: &[u8]) -> ([u8; BLOCK_SIZE], &[u8]) {
    let (head, body) = ciphertext.split_at(BLOCK_SIZE);
    let mut iv = [0u8; BLOCK_SIZE];
    iv.copy_from_slice(head);
    (iv, body)
}
