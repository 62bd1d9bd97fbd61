//! Byte-slice XOR helpers.

/// XORs `mask` into `target`, byte by byte.
///
/// Only the first `min(target.len(), mask.len())` bytes are touched, which
/// lets a trailing partial block take the leading bytes of a full keystream
/// block.
///
/// # Parameters
/// - `target`: Bytes modified in place.
/// - `mask`: Bytes XORed into `target`.
pub(crate) fn xor_in_place(target: &mut [u8], mask: &[u8]) {
    for (t, m) in target.iter_mut().zip(mask) {
        *t ^= m;
    }
}
