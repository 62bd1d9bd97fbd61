//! State: the 4×4 byte matrix a block passes through during one cipher call.
//!
//! Bytes are stored column-major, matching the order in which a 16-byte block
//! is loaded: input byte `4c + r` lands in row `r` of column `c`. Every
//! transform mutates the state through `&mut self`, so one call can never
//! observe another call's working state.

use crate::field::mul;
use crate::sbox::{inv_substitute, substitute};
use crate::{Word, BLOCK_SIZE, NB};

/// Number of rows in the state (bytes per word).
const ROWS: usize = 4;

/// Working state of a single block transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct State {
    columns: [[u8; ROWS]; NB],
}

impl State {
    /// Loads a block column-major into a fresh state.
    pub(crate) fn from_block(block: &[u8; BLOCK_SIZE]) -> Self {
        let mut columns = [[0u8; ROWS]; NB];
        for (c, column) in columns.iter_mut().enumerate() {
            column.copy_from_slice(&block[c * ROWS..(c + 1) * ROWS]);
        }
        State { columns }
    }

    /// Serializes the state back into a block, column-major.
    pub(crate) fn to_block(self) -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        for (c, column) in self.columns.iter().enumerate() {
            block[c * ROWS..(c + 1) * ROWS].copy_from_slice(column);
        }
        block
    }

    /// Applies the forward S-box to every byte.
    pub(crate) fn sub_bytes(&mut self) {
        for byte in self.columns.iter_mut().flatten() {
            *byte = substitute(*byte);
        }
    }

    /// Applies the inverse S-box to every byte.
    pub(crate) fn inv_sub_bytes(&mut self) {
        for byte in self.columns.iter_mut().flatten() {
            *byte = inv_substitute(*byte);
        }
    }

    /// Rotates row `r` left by `r` positions. Row 0 is untouched.
    pub(crate) fn shift_rows(&mut self) {
        let before = self.columns;
        for (c, column) in self.columns.iter_mut().enumerate() {
            for (r, byte) in column.iter_mut().enumerate().skip(1) {
                *byte = before[(c + r) % NB][r];
            }
        }
    }

    /// Rotates row `r` right by `r` positions, undoing [`shift_rows`](Self::shift_rows).
    pub(crate) fn inv_shift_rows(&mut self) {
        let before = self.columns;
        for (c, column) in self.columns.iter_mut().enumerate() {
            for (r, byte) in column.iter_mut().enumerate().skip(1) {
                *byte = before[(c + NB - r) % NB][r];
            }
        }
    }

    /// Multiplies every column by the circulant matrix `{02, 03, 01, 01}`.
    pub(crate) fn mix_columns(&mut self) {
        for column in self.columns.iter_mut() {
            *column = mix_column(column, [0x02, 0x03, 0x01, 0x01]);
        }
    }

    /// Multiplies every column by the circulant matrix `{0e, 0b, 0d, 09}`.
    pub(crate) fn inv_mix_columns(&mut self) {
        for column in self.columns.iter_mut() {
            *column = mix_column(column, [0x0e, 0x0b, 0x0d, 0x09]);
        }
    }

    /// XORs word `c` of `round_key` into column `c`.
    ///
    /// # Parameters
    /// - `round_key`: Exactly [`NB`] words taken from the key schedule.
    pub(crate) fn add_round_key(&mut self, round_key: &[Word]) {
        debug_assert_eq!(round_key.len(), NB);
        for (column, word) in self.columns.iter_mut().zip(round_key) {
            for (byte, key_byte) in column.iter_mut().zip(word) {
                *byte ^= key_byte;
            }
        }
    }
}

/// Computes one output column of a circulant matrix product.
///
/// Row `r` of the matrix is `coefficients` rotated right by `r`, so output
/// byte `r` is `Σ coefficients[(i - r) mod 4] · column[i]`.
fn mix_column(column: &[u8; ROWS], coefficients: [u8; ROWS]) -> [u8; ROWS] {
    let mut mixed = [0u8; ROWS];
    for (r, out) in mixed.iter_mut().enumerate() {
        for (i, &byte) in column.iter().enumerate() {
            *out ^= mul(coefficients[(i + ROWS - r) % ROWS], byte);
        }
    }
    mixed
}
