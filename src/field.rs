//! Arithmetic in GF(2^8) under the Rijndael reduction polynomial.
//!
//! Field elements are bytes. Addition is XOR; multiplication is polynomial
//! multiplication modulo `x^8 + x^4 + x^3 + x + 1` (`0x11B`).

/// Low byte of the reduction polynomial, XORed in when a doubling overflows.
const REDUCTION: u8 = 0x1B;

/// Multiplies `a` by `x` (`{02}`) in the field.
///
/// # Parameters
/// - `a`: The field element to double.
///
/// # Returns
/// `a · {02}` reduced modulo the field polynomial.
pub const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 == 0 {
        shifted
    } else {
        shifted ^ REDUCTION
    }
}

/// Multiplies two field elements.
///
/// Walks the 8 bits of `b` from least to most significant, accumulating the
/// running doubling of `a` for every set bit.
///
/// # Parameters
/// - `a`: Left operand.
/// - `b`: Right operand.
///
/// # Returns
/// The product `a · b` in GF(2^8).
pub const fn mul(a: u8, b: u8) -> u8 {
    let mut product = 0u8;
    let mut term = a;
    let mut bits = b;
    let mut i = 0;
    while i < 8 {
        if bits & 1 != 0 {
            product ^= term;
        }
        term = xtime(term);
        bits >>= 1;
        i += 1;
    }
    product
}
