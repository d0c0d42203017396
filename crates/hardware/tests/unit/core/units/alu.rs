//! Wide-word ALU Tests.
//!
//! Boundary vectors for add/sub/cmp/shift, plus property tests against a `u128`
//! reference for operands that fit in the low half-word.

use std::cmp::Ordering;

use bnsim_core::core::units::alu::{add, and, cmp, not, or, shl, shr, sub, xor};
use bnsim_core::WideWord;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn byte_at(idx: usize, val: u8) -> WideWord {
    let mut bytes = [0; 32];
    bytes[idx] = val;
    WideWord::from_le_bytes(bytes)
}

/// Low and high 128-bit halves.
fn halves(w: WideWord) -> (u128, u128) {
    (w.half_word(0).unwrap(), w.half_word(1).unwrap())
}

// ══════════════════════════════════════════════════════════
// Add / Sub
// ══════════════════════════════════════════════════════════

#[test]
fn add_max_plus_one_wraps_with_carry() {
    assert_eq!(add(WideWord::MAX, WideWord::ONE, false), (WideWord::ZERO, true));
}

#[test]
fn add_carry_in_counts() {
    assert_eq!(add(WideWord::ZERO, WideWord::ZERO, true), (WideWord::ONE, false));
    assert_eq!(add(WideWord::MAX, WideWord::ZERO, true), (WideWord::ZERO, true));
}

#[test]
fn sub_zero_minus_one_borrows() {
    assert_eq!(sub(WideWord::ZERO, WideWord::ONE, false), (WideWord::MAX, true));
}

#[test]
fn sub_borrow_in_counts() {
    assert_eq!(sub(WideWord::ONE, WideWord::ZERO, true), (WideWord::ZERO, false));
    assert_eq!(sub(WideWord::ZERO, WideWord::ZERO, true), (WideWord::MAX, true));
}

proptest! {
    #[test]
    fn add_matches_u128_reference(a in any::<u128>(), b in any::<u128>(), c in any::<bool>()) {
        let (sum, carry) = add(WideWord::from(a), WideWord::from(b), c);
        let (lo, ovf1) = a.overflowing_add(b);
        let (lo, ovf2) = lo.overflowing_add(u128::from(c));
        prop_assert_eq!(halves(sum), (lo, u128::from(ovf1 || ovf2)));
        prop_assert!(!carry);
    }

    #[test]
    fn sub_then_add_restores(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (WideWord::from_le_bytes(a), WideWord::from_le_bytes(b));
        let (diff, borrow) = sub(a, b, false);
        let (back, carry) = add(diff, b, false);
        prop_assert_eq!(back, a);
        prop_assert_eq!(borrow, carry);
        prop_assert_eq!(borrow, a < b);
    }

    #[test]
    fn cmp_matches_u128_reference(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(cmp(WideWord::from(a), WideWord::from(b)), a.cmp(&b));
    }

    #[test]
    fn shifts_match_u128_reference(a in any::<u64>(), n in 0usize..64) {
        let w = WideWord::from(a);
        prop_assert_eq!(halves(shl(w, n)).0, u128::from(a) << n);
        prop_assert_eq!(halves(shr(w, n)).0, u128::from(a) >> n);
    }

    #[test]
    fn logic_is_bytewise(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (x, y) = (WideWord::from_le_bytes(a), WideWord::from_le_bytes(b));
        let expect: [u8; 32] = std::array::from_fn(|i| a[i] ^ b[i]);
        prop_assert_eq!(xor(x, y).to_le_bytes(), expect);
        prop_assert_eq!(and(x, not(x)), WideWord::ZERO);
        prop_assert_eq!(or(x, not(x)), WideWord::MAX);
    }
}

// ══════════════════════════════════════════════════════════
// Compare
// ══════════════════════════════════════════════════════════

#[test]
fn cmp_starts_at_most_significant_byte() {
    assert_eq!(cmp(byte_at(31, 1), byte_at(0, 0xFF)), Ordering::Greater);
    assert_eq!(cmp(byte_at(0, 0xFF), byte_at(31, 1)), Ordering::Less);
    assert_eq!(cmp(WideWord::MAX, WideWord::MAX), Ordering::Equal);
}

// ══════════════════════════════════════════════════════════
// Shifts
// ══════════════════════════════════════════════════════════

#[test]
fn shl_by_a_byte_moves_bytes() {
    assert_eq!(shl(WideWord::ONE, 8), byte_at(1, 0x01));
}

#[test]
fn shr_msb_to_lsb() {
    assert_eq!(shr(byte_at(31, 0x80), 255), WideWord::ONE);
}

#[rstest]
#[case(256)]
#[case(300)]
#[case(usize::MAX)]
fn shifts_past_width_clear(#[case] n: usize) {
    assert_eq!(shl(WideWord::MAX, n), WideWord::ZERO);
    assert_eq!(shr(WideWord::MAX, n), WideWord::ZERO);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
#[case(9)]
#[case(128)]
#[case(255)]
fn shl_then_shr_keeps_low_bits(#[case] n: usize) {
    let back = shr(shl(WideWord::MAX, n), n);
    assert_eq!(back, shr(WideWord::MAX, n));
}

#[test]
fn operator_impls_match_functions() {
    let a = WideWord::from(0b1100u32);
    let b = WideWord::from(0b1010u32);
    assert_eq!(a & b, WideWord::from(0b1000u32));
    assert_eq!(a | b, WideWord::from(0b1110u32));
    assert_eq!(a ^ b, WideWord::from(0b0110u32));
    assert_eq!(!WideWord::ZERO, WideWord::MAX);
}
