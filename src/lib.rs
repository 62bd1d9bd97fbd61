//! Rijndael block cipher core with CBC and CTR modes.
//!
//! Implements the FIPS 197 block cipher for 128, 192 and 256-bit keys on
//! 16-byte blocks, plus two confidentiality modes that extend it to
//! messages of any length. There is no authentication tag: these modes give
//! confidentiality only.
//!
//! # Architecture
//!
//! ```text
//! field        (GF(2^8) multiply-by-two and multiply)
//!     ↓
//! sbox         (forward / inverse substitution tables)
//!     ↓
//! State        (4×4 bytes: SubBytes, ShiftRows, MixColumns, AddRoundKey)
//! KeySchedule  (key → Nb·(Nr+1) round-key words, built once)
//!     ↓
//! Rijndael     (whole-block encrypt / decrypt)
//!     ↓
//! Cbc / Ctr    (IV ‖ ciphertext for arbitrary-length messages)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a single block:
//!
//! ```
//! use rijndael::Rijndael;
//!
//! let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
//! let cipher = Rijndael::new(&key).unwrap();
//!
//! let input: [u8; 16] = hex::decode("3243f6a8885a308d313198a2e0370734")
//!     .unwrap()
//!     .try_into()
//!     .unwrap();
//! let output = cipher.encrypt_block(&input);
//! assert_eq!(hex::encode(output), "3925841d02dc09fbdc118597196a0b32");
//! assert_eq!(cipher.decrypt_block(&output), input);
//! ```
//!
//! Encrypt a message in CBC mode. The IV travels in front of the ciphertext:
//!
//! ```
//! use rijndael::{BlockMode, Cbc};
//!
//! let cbc = Cbc::new(&[0u8; 24]).unwrap();
//! let iv = [7u8; 16];
//!
//! let ciphertext = cbc.encrypt(&iv, b"hello, world");
//! assert_eq!(&ciphertext[..16], &iv);
//! assert_eq!(cbc.decrypt(&ciphertext).unwrap(), b"hello, world");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod field;
pub mod key_schedule;
pub mod modes;
pub mod sbox;

mod cipher;
pub(crate) mod state;
pub(crate) mod utils;

pub use cipher::Rijndael;
pub use error::RijndaelError;
pub use key_schedule::{KeySchedule, KeySize};
pub use modes::{increment_counter, BlockMode, Cbc, Ctr};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of 32-bit columns in the state (Nb).
pub const NB: usize = 4;

/// A four-byte word: one state column or one round-key entry.
pub type Word = [u8; 4];
