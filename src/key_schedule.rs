//! Key expansion: turns a cipher key into the per-round key words.
//!
//! The schedule is built once per key and never mutated afterwards. It is
//! wiped from memory when dropped.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::RijndaelError;
use crate::field::xtime;
use crate::sbox::substitute;
use crate::{Word, NB};

/// Round constants. Index 0 is unused; index `i` holds `{02}^(i-1)` in its
/// first byte.
const RCON: [Word; 11] = build_rcon();

const fn build_rcon() -> [Word; 11] {
    let mut rcon = [[0u8; 4]; 11];
    let mut x = 1u8;
    let mut i = 1;
    while i < rcon.len() {
        rcon[i][0] = x;
        x = xtime(x);
        i += 1;
    }
    rcon
}

/// Supported key sizes and the cipher parameters they select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Selects the key size matching a key of `len` bytes.
    ///
    /// # Returns
    /// `None` if `len` is not 16, 24 or 32.
    ///
    /// # Examples
    ///
    /// ```
    /// use rijndael::KeySize;
    ///
    /// assert_eq!(KeySize::from_key_len(24), Some(KeySize::Aes192));
    /// assert_eq!(KeySize::from_key_len(64), None);
    /// ```
    pub fn from_key_len(len: usize) -> Option<KeySize> {
        match len {
            16 => Some(KeySize::Aes128),
            24 => Some(KeySize::Aes192),
            32 => Some(KeySize::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Number of 32-bit words in the key (Nk).
    pub const fn nk(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes192 => 6,
            KeySize::Aes256 => 8,
        }
    }

    /// Number of rounds (Nr).
    pub const fn nr(self) -> usize {
        match self {
            KeySize::Aes128 => 10,
            KeySize::Aes192 => 12,
            KeySize::Aes256 => 14,
        }
    }

    /// Number of words in the expanded schedule, `Nb · (Nr + 1)`.
    pub const fn schedule_len(self) -> usize {
        NB * (self.nr() + 1)
    }
}

/// Expanded round keys for one cipher key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    #[zeroize(skip)]
    key_size: KeySize,
    words: Vec<Word>,
}

impl KeySchedule {
    /// Expands `key` into `Nb · (Nr + 1)` round-key words.
    ///
    /// # Parameters
    /// - `key`: Raw key bytes; 16, 24 or 32 bytes long.
    ///
    /// # Errors
    /// Returns [`RijndaelError::InvalidKey`] for any other key length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rijndael::KeySchedule;
    ///
    /// let schedule = KeySchedule::expand(&[0u8; 32]).unwrap();
    /// assert_eq!(schedule.words().len(), 60);
    /// ```
    pub fn expand(key: &[u8]) -> Result<Self, RijndaelError> {
        let Some(key_size) = KeySize::from_key_len(key.len()) else {
            return Err(RijndaelError::InvalidKey { len: key.len() });
        };
        let nk = key_size.nk();
        let total = key_size.schedule_len();

        let mut words: Vec<Word> = Vec::with_capacity(total);
        for chunk in key.chunks_exact(4) {
            words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = xor_word(&sub_word(&rot_word(&temp)), &RCON[i / nk]);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(&temp);
            }
            let word = xor_word(&words[i - nk], &temp);
            words.push(word);
        }

        log::debug!(
            "expanded {:?} key into {} round-key words",
            key_size,
            words.len()
        );

        Ok(KeySchedule { key_size, words })
    }

    /// The key size this schedule was expanded for.
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Number of rounds (Nr) this schedule serves.
    pub fn rounds(&self) -> usize {
        self.key_size.nr()
    }

    /// All expanded words, in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The [`NB`] words used by round `round`.
    ///
    /// # Returns
    /// `None` if `round` is past the last round (`round > Nr`).
    pub fn round_key(&self, round: usize) -> Option<&[Word]> {
        self.words.get(round * NB..(round + 1) * NB)
    }

    /// Round key for the cipher loop, which only asks for `round <= Nr`.
    pub(crate) fn round_words(&self, round: usize) -> &[Word] {
        &self.words[round * NB..(round + 1) * NB]
    }
}

// Round keys never reach the console.
impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeySchedule {{ key_size: {:?}, words: [..] }}",
            self.key_size
        )
    }
}

/// Rotates a word left by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
///
/// Returns a new word; `word` is left unchanged.
pub fn rot_word(word: &Word) -> Word {
    [word[1], word[2], word[3], word[0]]
}

/// Applies the S-box to each byte of a word.
///
/// Returns a new word; `word` is left unchanged.
pub fn sub_word(word: &Word) -> Word {
    [
        substitute(word[0]),
        substitute(word[1]),
        substitute(word[2]),
        substitute(word[3]),
    ]
}

fn xor_word(a: &Word, b: &Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}
