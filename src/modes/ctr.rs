//! Counter mode: a keystream from encrypting successive counter blocks.
//!
//! The counter starts at the IV and is incremented as a 128-bit big-endian
//! integer after every block. No padding is applied; the final partial block
//! uses only the leading bytes of its keystream block. Encryption and
//! decryption are the same XOR.
//!
//! The counter wraps silently after `2^128` blocks. Keeping the keystream
//! from repeating is the caller's responsibility.

use super::{split_iv, BlockMode};
use crate::cipher::Rijndael;
use crate::error::RijndaelError;
use crate::utils::bytes::xor_in_place;
use crate::BLOCK_SIZE;

/// CTR mode over [`Rijndael`].
///
/// # Examples
///
/// ```
/// use rijndael::{BlockMode, Ctr};
///
/// let ctr = Ctr::new(&[0x2bu8; 32]).unwrap();
/// let iv = [0x32u8; 16];
///
/// let ciphertext = ctr.encrypt(&iv, b"no padding needed");
/// assert_eq!(ciphertext.len(), 16 + 17);
/// assert_eq!(ctr.decrypt(&ciphertext).unwrap(), b"no padding needed");
/// ```
#[derive(Debug, Clone)]
pub struct Ctr {
    cipher: Rijndael,
}

impl Ctr {
    /// Builds a CTR instance for `key`.
    ///
    /// # Errors
    /// Returns [`RijndaelError::InvalidKey`] if `key` is not 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, RijndaelError> {
        Ok(Self::from_cipher(Rijndael::new(key)?))
    }

    /// Wraps an already constructed cipher.
    pub fn from_cipher(cipher: Rijndael) -> Self {
        Ctr { cipher }
    }

    /// The underlying block cipher.
    pub fn cipher(&self) -> &Rijndael {
        &self.cipher
    }

    /// XORs the keystream seeded by `iv` into `data`.
    fn apply_keystream(&self, iv: &[u8; BLOCK_SIZE], data: &mut [u8]) {
        let mut counter = *iv;
        for chunk in data.chunks_mut(BLOCK_SIZE) {
            let keystream = self.cipher.encrypt_block(&counter);
            xor_in_place(chunk, &keystream);
            counter = increment_counter(&counter);
        }
    }
}

impl BlockMode for Ctr {
    fn encrypt(&self, iv: &[u8; BLOCK_SIZE], message: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(BLOCK_SIZE + message.len());
        output.extend_from_slice(iv);
        output.extend_from_slice(message);
        self.apply_keystream(iv, &mut output[BLOCK_SIZE..]);
        output
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        if ciphertext.len() < BLOCK_SIZE {
            log::debug!("rejecting CTR ciphertext of {} bytes", ciphertext.len());
            return Err(RijndaelError::InvalidCiphertextLength {
                len: ciphertext.len(),
            });
        }

        let (iv, body) = split_iv(ciphertext);
        let mut message = body.to_vec();
        self.apply_keystream(&iv, &mut message);
        Ok(message)
    }
}

/// Returns `block + 1`, treating the block as a big-endian unsigned integer.
///
/// The carry runs from the last byte leftward; an all-`0xff` block wraps to
/// all zeros. `block` itself is not modified.
///
/// # Examples
///
/// ```
/// use rijndael::increment_counter;
///
/// let mut block = [0u8; 16];
/// block[15] = 0xff;
/// let next = increment_counter(&block);
/// assert_eq!(next[14..], [0x01, 0x00]);
/// ```
pub fn increment_counter(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut next = *block;
    for byte in next.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(hex_str: &str) -> [u8; BLOCK_SIZE] {
        hex::decode(hex_str).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_increment_carries_and_is_pure() {
        let before = block("2b7e151628aed2a6abf7158809cfffff");
        let copy = before;
        assert_eq!(
            increment_counter(&before),
            block("2b7e151628aed2a6abf7158809d00000")
        );
        assert_eq!(before, copy);
    }

    #[test]
    fn test_increment_wraps_all_ones() {
        assert_eq!(increment_counter(&[0xffu8; BLOCK_SIZE]), [0u8; BLOCK_SIZE]);
    }

    #[test]
    fn test_increment_single_carry() {
        let mut before = [0x11u8; BLOCK_SIZE];
        before[15] = 0xff;
        let after = increment_counter(&before);
        assert_eq!(after[15], 0x00);
        assert_eq!(after[14], 0x12);
        assert_eq!(after[..14], before[..14]);
    }

    #[test]
    fn test_increment_no_carry() {
        let after = increment_counter(&[0u8; BLOCK_SIZE]);
        let mut expected = [0u8; BLOCK_SIZE];
        expected[15] = 1;
        assert_eq!(after, expected);
    }

    #[test]
    fn test_keystream_is_encrypted_counter() {
        let ctr = Ctr::new(&[3u8; 16]).unwrap();
        let iv = [0xfeu8; BLOCK_SIZE];
        let zeros = [0u8; 2 * BLOCK_SIZE];
        let ciphertext = ctr.encrypt(&iv, &zeros);

        let first = ctr.cipher().encrypt_block(&iv);
        let second = ctr.cipher().encrypt_block(&increment_counter(&iv));
        assert_eq!(ciphertext[16..32], first);
        assert_eq!(ciphertext[32..48], second);
    }

    #[test]
    fn test_partial_block_uses_leading_keystream() {
        let ctr = Ctr::new(&[3u8; 24]).unwrap();
        let iv = [0x01u8; BLOCK_SIZE];
        let ciphertext = ctr.encrypt(&iv, &[0u8; 5]);
        assert_eq!(ciphertext.len(), BLOCK_SIZE + 5);
        assert_eq!(ciphertext[16..], ctr.cipher().encrypt_block(&iv)[..5]);
    }

    #[test]
    fn test_decrypt_rejects_short_input() {
        let ctr = Ctr::new(&[3u8; 16]).unwrap();
        assert_eq!(
            ctr.decrypt(&[0u8; 15]),
            Err(RijndaelError::InvalidCiphertextLength { len: 15 })
        );
    }
}
