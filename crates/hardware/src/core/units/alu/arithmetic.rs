//! ALU arithmetic operations.
//!
//! Implements 256-bit addition with carry-in/carry-out, subtraction with
//! two's-complement borrow propagation, and unsigned magnitude comparison.
//! Results wrap modulo 2^256; the overflow bit is returned explicitly.

use std::cmp::Ordering;

use crate::common::word::WideWord;

/// Adds `a + b + carry_in`.
///
/// # Arguments
///
/// * `a` - First addend.
/// * `b` - Second addend.
/// * `carry_in` - Incoming carry bit.
///
/// # Returns
///
/// The low 256 bits of the sum and the carry out of bit 255.
pub fn add(a: WideWord, b: WideWord, carry_in: bool) -> (WideWord, bool) {
    let (a, b) = (a.to_le_bytes(), b.to_le_bytes());
    let mut out = [0u8; 32];
    let mut carry = u16::from(carry_in);
    for (i, byte) in out.iter_mut().enumerate() {
        let sum = u16::from(a[i]) + u16::from(b[i]) + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }
    (WideWord::from_le_bytes(out), carry != 0)
}

/// Subtracts `a - b - borrow_in`.
///
/// # Returns
///
/// The low 256 bits of the two's-complement difference and the borrow out of bit 255
/// (set when `a < b + borrow_in`).
pub fn sub(a: WideWord, b: WideWord, borrow_in: bool) -> (WideWord, bool) {
    let (a, b) = (a.to_le_bytes(), b.to_le_bytes());
    let mut out = [0u8; 32];
    let mut borrow = i16::from(borrow_in);
    for (i, byte) in out.iter_mut().enumerate() {
        let mut diff = i16::from(a[i]) - i16::from(b[i]) - borrow;
        if diff < 0 {
            diff += 0x100;
            borrow = 1;
        } else {
            borrow = 0;
        }
        *byte = diff as u8;
    }
    (WideWord::from_le_bytes(out), borrow != 0)
}

/// Compares two words as unsigned integers, most significant byte first.
pub fn cmp(a: WideWord, b: WideWord) -> Ordering {
    a.as_bytes()
        .iter()
        .rev()
        .cmp(b.as_bytes().iter().rev())
}
