//! Cipher block chaining with PKCS#7-style padding.
//!
//! Every plaintext block is XORed with the previous ciphertext block (the IV
//! for the first one) before encryption. The message is always padded, so a
//! block-aligned message gains one full block of `0x10` bytes.

use super::{split_iv, BlockMode};
use crate::cipher::Rijndael;
use crate::error::RijndaelError;
use crate::utils::bytes::xor_in_place;
use crate::BLOCK_SIZE;

/// CBC mode over [`Rijndael`].
///
/// # Examples
///
/// ```
/// use rijndael::{BlockMode, Cbc};
///
/// let cbc = Cbc::new(&[0x2bu8; 16]).unwrap();
/// let iv = [0x32u8; 16];
///
/// let ciphertext = cbc.encrypt(&iv, b"attack at dawn");
/// assert_eq!(ciphertext.len(), 32);
/// assert_eq!(cbc.decrypt(&ciphertext).unwrap(), b"attack at dawn");
/// ```
#[derive(Debug, Clone)]
pub struct Cbc {
    cipher: Rijndael,
}

impl Cbc {
    /// Builds a CBC instance for `key`.
    ///
    /// # Errors
    /// Returns [`RijndaelError::InvalidKey`] if `key` is not 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, RijndaelError> {
        Ok(Self::from_cipher(Rijndael::new(key)?))
    }

    /// Wraps an already constructed cipher.
    pub fn from_cipher(cipher: Rijndael) -> Self {
        Cbc { cipher }
    }

    /// The underlying block cipher.
    pub fn cipher(&self) -> &Rijndael {
        &self.cipher
    }
}

impl BlockMode for Cbc {
    fn encrypt(&self, iv: &[u8; BLOCK_SIZE], message: &[u8]) -> Vec<u8> {
        let padded = pad(message);
        let mut output = Vec::with_capacity(BLOCK_SIZE + padded.len());
        output.extend_from_slice(iv);

        let mut chain = *iv;
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            xor_in_place(&mut block, &chain);
            chain = self.cipher.encrypt_block(&block);
            output.extend_from_slice(&chain);
        }
        output
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        let len = ciphertext.len();
        if len <= BLOCK_SIZE || !len.is_multiple_of(BLOCK_SIZE) {
            log::debug!("rejecting CBC ciphertext of {} bytes", len);
            return Err(RijndaelError::InvalidCiphertextLength { len });
        }

        let (mut chain, body) = split_iv(ciphertext);
        let mut padded = Vec::with_capacity(body.len());
        for chunk in body.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let mut plain = self.cipher.decrypt_block(&block);
            xor_in_place(&mut plain, &chain);
            padded.extend_from_slice(&plain);
            chain = block;
        }

        unpad(padded)
    }
}

/// Appends `n = 16 - len % 16` bytes of value `n`.
fn pad(message: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - message.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(message.len() + pad_len);
    padded.extend_from_slice(message);
    padded.resize(message.len() + pad_len, pad_len as u8);
    padded
}

/// Strips the pad whose length is given by the final byte.
///
/// `padded` is non-empty and block-aligned.
fn unpad(mut padded: Vec<u8>) -> Result<Vec<u8>, RijndaelError> {
    let pad = padded.last().copied().unwrap_or(0);
    if pad == 0 || pad as usize > BLOCK_SIZE {
        log::debug!("CBC pad byte {:#04x} out of range", pad);
        return Err(RijndaelError::PaddingError { pad });
    }
    padded.truncate(padded.len() - pad as usize);
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_unaligned() {
        let padded = pad(b"abc");
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(&padded[..3], b"abc");
        assert!(padded[3..].iter().all(|&b| b == 13));
    }

    #[test]
    fn test_pad_aligned_adds_full_block() {
        let padded = pad(&[0u8; BLOCK_SIZE]);
        assert_eq!(padded.len(), 2 * BLOCK_SIZE);
        assert!(padded[BLOCK_SIZE..].iter().all(|&b| b == 16));
    }

    #[test]
    fn test_pad_empty() {
        assert_eq!(pad(&[]), vec![16u8; BLOCK_SIZE]);
    }

    #[test]
    fn test_unpad_strips() {
        let mut padded = b"hello".to_vec();
        padded.resize(BLOCK_SIZE, 11);
        assert_eq!(unpad(padded).unwrap(), b"hello");
    }

    #[test]
    fn test_unpad_rejects_zero_pad() {
        let padded = vec![0u8; BLOCK_SIZE];
        assert_eq!(unpad(padded), Err(RijndaelError::PaddingError { pad: 0 }));
    }

    #[test]
    fn test_unpad_rejects_oversized_pad() {
        let padded = vec![17u8; BLOCK_SIZE];
        assert_eq!(unpad(padded), Err(RijndaelError::PaddingError { pad: 17 }));
    }

    #[test]
    fn test_chain_value_advances() {
        // Two identical plaintext blocks must encrypt differently.
        let cbc = Cbc::new(&[1u8; 16]).unwrap();
        let ciphertext = cbc.encrypt(&[0u8; BLOCK_SIZE], &[0x41u8; 2 * BLOCK_SIZE]);
        assert_eq!(ciphertext.len(), 4 * BLOCK_SIZE);
        assert_ne!(ciphertext[16..32], ciphertext[32..48]);
    }

    #[test]
    fn test_first_block_matches_manual_chaining() {
        let cbc = Cbc::new(&[9u8; 32]).unwrap();
        let iv = [0x5cu8; BLOCK_SIZE];
        let message = [0xa3u8; BLOCK_SIZE];
        let ciphertext = cbc.encrypt(&iv, &message);

        let mut block = message;
        xor_in_place(&mut block, &iv);
        assert_eq!(ciphertext[16..32], cbc.cipher().encrypt_block(&block));
    }
}
