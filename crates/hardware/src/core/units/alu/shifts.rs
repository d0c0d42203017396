//! ALU shift operations.
//!
//! Implements logical shift left and logical shift right over 256-bit words.
//! A shift is performed in two passes: whole bytes are moved first, then the
//! remaining 0-7 bit offset is carried across byte boundaries. Shift amounts of
//! 256 or more produce zero.

use crate::common::constants::{XLEN, XLEN_BYTES};
use crate::common::word::WideWord;

/// Logical shift left by `n` bits.
///
/// # Arguments
///
/// * `a` - The value to be shifted.
/// * `n` - Shift amount in bits; any value of 256 or more yields zero.
pub fn shl(a: WideWord, n: usize) -> WideWord {
    if n >= XLEN {
        return WideWord::ZERO;
    }
    let src = a.to_le_bytes();
    let (byte_shift, bit_shift) = (n / 8, n % 8);

    let mut moved = [0u8; XLEN_BYTES];
    moved[byte_shift..].copy_from_slice(&src[..XLEN_BYTES - byte_shift]);
    if bit_shift == 0 {
        return WideWord::from_le_bytes(moved);
    }

    let mut out = [0u8; XLEN_BYTES];
    let mut carry = 0u8;
    for (dst, byte) in out.iter_mut().zip(moved) {
        *dst = (byte << bit_shift) | carry;
        carry = byte >> (8 - bit_shift);
    }
    WideWord::from_le_bytes(out)
}

/// Logical shift right by `n` bits.
///
/// # Arguments
///
/// * `a` - The value to be shifted.
/// * `n` - Shift amount in bits; any value of 256 or more yields zero.
pub fn shr(a: WideWord, n: usize) -> WideWord {
    if n >= XLEN {
        return WideWord::ZERO;
    }
    let src = a.to_le_bytes();
    let (byte_shift, bit_shift) = (n / 8, n % 8);

    let mut moved = [0u8; XLEN_BYTES];
    moved[..XLEN_BYTES - byte_shift].copy_from_slice(&src[byte_shift..]);
    if bit_shift == 0 {
        return WideWord::from_le_bytes(moved);
    }

    let mut out = [0u8; XLEN_BYTES];
    let mut carry = 0u8;
    for (dst, byte) in out.iter_mut().zip(moved).rev() {
        *dst = (byte >> bit_shift) | carry;
        carry = byte << (8 - bit_shift);
    }
    WideWord::from_le_bytes(out)
}
