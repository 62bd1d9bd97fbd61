//! Rijndael: whole-block encryption and decryption under one key.
//!
//! Composes the key schedule with the state transforms. The schedule is
//! expanded once in [`Rijndael::new`] and only read afterwards, so a single
//! instance can be shared across threads.

use crate::error::RijndaelError;
use crate::key_schedule::{KeySchedule, KeySize};
use crate::state::State;
use crate::BLOCK_SIZE;

/// Block cipher operating on 16-byte blocks with a 128, 192 or 256-bit key.
///
/// # Examples
///
/// ```
/// use rijndael::Rijndael;
///
/// let key = [0u8; 16];
/// let cipher = Rijndael::new(&key).unwrap();
///
/// let block = *b"sixteen byte msg";
/// let encrypted = cipher.encrypt_block(&block);
/// assert_ne!(encrypted, block);
/// assert_eq!(cipher.decrypt_block(&encrypted), block);
/// ```
#[derive(Debug, Clone)]
pub struct Rijndael {
    schedule: KeySchedule,
}

impl Rijndael {
    /// Creates a cipher for `key`, expanding its round keys.
    ///
    /// # Parameters
    /// - `key`: 16, 24 or 32 raw key bytes.
    ///
    /// # Errors
    /// Returns [`RijndaelError::InvalidKey`] for any other key length.
    ///
    /// ```
    /// use rijndael::{Rijndael, RijndaelError};
    ///
    /// let result = Rijndael::new(&[0u8; 20]);
    /// assert_eq!(result.unwrap_err(), RijndaelError::InvalidKey { len: 20 });
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, RijndaelError> {
        let schedule = KeySchedule::expand(key)?;
        debug_assert_eq!(schedule.words().len(), schedule.key_size().schedule_len());
        Ok(Rijndael { schedule })
    }

    /// The key size selected at construction.
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let nr = self.schedule.rounds();
        let mut state = State::from_block(block);

        state.add_round_key(self.schedule.round_words(0));
        for round in 1..nr {
            state.sub_bytes();
            state.shift_rows();
            state.mix_columns();
            state.add_round_key(self.schedule.round_words(round));
        }
        state.sub_bytes();
        state.shift_rows();
        state.add_round_key(self.schedule.round_words(nr));

        state.to_block()
    }

    /// Decrypts one block, running the inverse transforms in reverse round order.
    pub fn decrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let nr = self.schedule.rounds();
        let mut state = State::from_block(block);

        state.add_round_key(self.schedule.round_words(nr));
        for round in (1..nr).rev() {
            state.inv_shift_rows();
            state.inv_sub_bytes();
            state.add_round_key(self.schedule.round_words(round));
            state.inv_mix_columns();
        }
        state.inv_shift_rows();
        state.inv_sub_bytes();
        state.add_round_key(self.schedule.round_words(0));

        state.to_block()
    }

    /// Encrypts a slice that must be exactly one block long.
    ///
    /// # Errors
    /// Returns [`RijndaelError::InvalidBlockLength`] if `input.len() != 16`.
    pub fn encrypt(&self, input: &[u8]) -> Result<[u8; BLOCK_SIZE], RijndaelError> {
        Ok(self.encrypt_block(as_block(input)?))
    }

    /// Decrypts a slice that must be exactly one block long.
    ///
    /// # Errors
    /// Returns [`RijndaelError::InvalidBlockLength`] if `input.len() != 16`.
    pub fn decrypt(&self, input: &[u8]) -> Result<[u8; BLOCK_SIZE], RijndaelError> {
        Ok(self.decrypt_block(as_block(input)?))
    }
}

fn as_block(input: &[u8]) -> Result<&[u8; BLOCK_SIZE], RijndaelError> {
    input
        .try_into()
        .map_err(|_| RijndaelError::InvalidBlockLength { len: input.len() })
}
