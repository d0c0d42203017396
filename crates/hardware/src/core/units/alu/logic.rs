//! ALU logical operations.
//!
//! Bytewise AND, OR, XOR and NOT over 256-bit words. The `std::ops` bit operators on
//! [`WideWord`] delegate here.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::common::word::WideWord;

fn zip_bytes(a: WideWord, b: WideWord, f: impl Fn(u8, u8) -> u8) -> WideWord {
    let (a, b) = (a.to_le_bytes(), b.to_le_bytes());
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = f(a[i], b[i]);
    }
    WideWord::from_le_bytes(out)
}

/// Bitwise AND.
pub fn and(a: WideWord, b: WideWord) -> WideWord {
    zip_bytes(a, b, |x, y| x & y)
}

/// Bitwise OR.
pub fn or(a: WideWord, b: WideWord) -> WideWord {
    zip_bytes(a, b, |x, y| x | y)
}

/// Bitwise XOR.
pub fn xor(a: WideWord, b: WideWord) -> WideWord {
    zip_bytes(a, b, |x, y| x ^ y)
}

/// Bitwise complement.
pub fn not(a: WideWord) -> WideWord {
    zip_bytes(a, WideWord::MAX, |x, y| x ^ y)
}

impl BitAnd for WideWord {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        and(self, rhs)
    }
}

impl BitOr for WideWord {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        or(self, rhs)
    }
}

impl BitXor for WideWord {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        xor(self, rhs)
    }
}

impl Not for WideWord {
    type Output = Self;

    fn not(self) -> Self {
        not(self)
    }
}
