//! 256-bit Wide Word.
//!
//! This module provides the fixed-width value type stored in every wide register and DMEM cell.
//! It provides:
//! 1. **Representation:** 32 little-endian bytes; every value is a canonical 256-bit quantity.
//! 2. **Sub-views:** Range-checked limb, half-limb, quarter-word and half-word access.
//! 3. **Carry Words:** A 257-bit view (`CarryWord`) for results that overflow by one bit.
//! 4. **Formatting:** Limb-grouped hex rendering, hex parsing and serde support.
//!
//! Arithmetic, logic and shift primitives live in [`crate::core::units::alu`]; all of them are
//! pure and return new values.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::constants::{
    HALF_LIMB_BYTES, HALF_LIMBS, HALF_WORDS, HW_BYTES, LIMB_BYTES, LIMBS, QUARTER_WORDS, QW_BYTES,
    XLEN, XLEN_BYTES,
};
use super::error::{SimError, SimResult, check_index};
use crate::core::units::alu;

/// Unsigned 256-bit value stored as 32 little-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideWord([u8; XLEN_BYTES]);

impl WideWord {
    /// The value zero.
    pub const ZERO: Self = Self([0; XLEN_BYTES]);

    /// The value one.
    pub const ONE: Self = {
        let mut bytes = [0; XLEN_BYTES];
        bytes[0] = 1;
        Self(bytes)
    };

    /// All 256 bits set.
    pub const MAX: Self = Self([0xFF; XLEN_BYTES]);

    /// Builds a word from its little-endian byte representation.
    pub const fn from_le_bytes(bytes: [u8; XLEN_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the little-endian byte representation.
    pub const fn to_le_bytes(self) -> [u8; XLEN_BYTES] {
        self.0
    }

    /// Borrows the little-endian bytes.
    pub const fn as_bytes(&self) -> &[u8; XLEN_BYTES] {
        &self.0
    }

    /// Builds a word from a byte slice that must be exactly 32 bytes long.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Range`] for any other length; the input is never truncated or padded.
    pub fn from_le_slice(bytes: &[u8]) -> SimResult<Self> {
        let arr: [u8; XLEN_BYTES] = bytes.try_into().map_err(|_| SimError::Range {
            what: format!("{}-byte buffer", bytes.len()),
            bits: XLEN,
        })?;
        Ok(Self(arr))
    }

    /// Builds a word from eight little-endian 32-bit limbs.
    pub fn from_limbs(limbs: [u32; LIMBS]) -> Self {
        let mut bytes = [0; XLEN_BYTES];
        for (chunk, limb) in bytes.chunks_exact_mut(LIMB_BYTES).zip(limbs) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        Self(bytes)
    }

    /// Returns the eight 32-bit limbs, least significant first.
    pub fn to_limbs(self) -> [u32; LIMBS] {
        let mut limbs = [0; LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(self.0.chunks_exact(LIMB_BYTES)) {
            *limb = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        limbs
    }

    /// Returns `true` when every bit is clear.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Tests bit `pos`; positions at or above 256 read as clear.
    pub fn bit(&self, pos: usize) -> bool {
        pos < XLEN && (self.0[pos / 8] >> (pos % 8)) & 1 == 1
    }

    /// Extracts 32-bit limb `idx` (0 = least significant).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..8`.
    pub fn limb(&self, idx: usize) -> SimResult<u32> {
        let idx = check_index("limb", idx, LIMBS)?;
        let off = idx * LIMB_BYTES;
        Ok(u32::from_le_bytes([
            self.0[off],
            self.0[off + 1],
            self.0[off + 2],
            self.0[off + 3],
        ]))
    }

    /// Returns a copy with limb `idx` replaced by `val`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..8`.
    pub fn with_limb(self, idx: usize, val: u32) -> SimResult<Self> {
        let idx = check_index("limb", idx, LIMBS)?;
        let mut out = self;
        let off = idx * LIMB_BYTES;
        out.0[off..off + LIMB_BYTES].copy_from_slice(&val.to_le_bytes());
        Ok(out)
    }

    /// Extracts the lower or upper 16-bit half of limb `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..8`.
    pub fn half_limb(&self, idx: usize, upper: bool) -> SimResult<u16> {
        let idx = check_index("limb", idx, LIMBS)?;
        let off = idx * LIMB_BYTES + if upper { HALF_LIMB_BYTES } else { 0 };
        Ok(u16::from_le_bytes([self.0[off], self.0[off + 1]]))
    }

    /// Returns a copy with the lower or upper half of limb `idx` replaced by `val`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..8`.
    pub fn with_half_limb(self, idx: usize, upper: bool, val: u16) -> SimResult<Self> {
        let idx = check_index("limb", idx, LIMBS)?;
        let mut out = self;
        let off = idx * LIMB_BYTES + if upper { HALF_LIMB_BYTES } else { 0 };
        out.0[off..off + HALF_LIMB_BYTES].copy_from_slice(&val.to_le_bytes());
        Ok(out)
    }

    /// Extracts 64-bit quarter-word `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..4`.
    pub fn quarter_word(&self, idx: usize) -> SimResult<u64> {
        let idx = check_index("quarter-word", idx, QUARTER_WORDS)?;
        let mut buf = [0; QW_BYTES];
        buf.copy_from_slice(&self.0[idx * QW_BYTES..(idx + 1) * QW_BYTES]);
        Ok(u64::from_le_bytes(buf))
    }

    /// Returns a copy with quarter-word `idx` replaced by `val`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..4`.
    pub fn with_quarter_word(self, idx: usize, val: u64) -> SimResult<Self> {
        let idx = check_index("quarter-word", idx, QUARTER_WORDS)?;
        let mut out = self;
        out.0[idx * QW_BYTES..(idx + 1) * QW_BYTES].copy_from_slice(&val.to_le_bytes());
        Ok(out)
    }

    /// Extracts 128-bit half-word `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not 0 or 1.
    pub fn half_word(&self, idx: usize) -> SimResult<u128> {
        let idx = check_index("half-word", idx, HALF_WORDS)?;
        let mut buf = [0; HW_BYTES];
        buf.copy_from_slice(&self.0[idx * HW_BYTES..(idx + 1) * HW_BYTES]);
        Ok(u128::from_le_bytes(buf))
    }

    /// Returns a copy with half-word `idx` replaced by `val`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not 0 or 1.
    pub fn with_half_word(self, idx: usize, val: u128) -> SimResult<Self> {
        let idx = check_index("half-word", idx, HALF_WORDS)?;
        let mut out = self;
        out.0[idx * HW_BYTES..(idx + 1) * HW_BYTES].copy_from_slice(&val.to_le_bytes());
        Ok(out)
    }

    /// Renders limb `idx` as `0x%08x`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..8`.
    pub fn limb_hex(&self, idx: usize) -> SimResult<String> {
        Ok(format!("{:#010x}", self.limb(idx)?))
    }

    /// Renders all eight limbs, most significant first, separated by spaces.
    pub fn to_limb_hex(&self) -> String {
        self.to_limbs()
            .iter()
            .rev()
            .map(|l| format!("{l:08x}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parses a hex string, with or without a `0x` prefix.
    ///
    /// Spaces and underscores are accepted as digit separators, so the output of
    /// [`WideWord::to_limb_hex`] parses back.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for non-hex characters or an empty string, and
    /// [`SimError::Range`] when the value needs more than 256 bits.
    pub fn from_hex(text: &str) -> SimResult<Self> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let digits: Vec<u8> = body
            .chars()
            .filter(|c| *c != '_' && *c != ' ')
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| SimError::InvalidOperand(format!("not a hex value: {text:?}")))
            })
            .collect::<SimResult<_>>()?;
        if digits.is_empty() {
            return Err(SimError::InvalidOperand(format!(
                "not a hex value: {text:?}"
            )));
        }
        let significant: Vec<u8> = digits.into_iter().skip_while(|&d| d == 0).collect();
        if significant.len() > XLEN / 4 {
            return Err(SimError::Range {
                what: format!("hex literal {text:?}"),
                bits: XLEN,
            });
        }
        let mut bytes = [0; XLEN_BYTES];
        for (i, digit) in significant.iter().rev().enumerate() {
            bytes[i / 2] |= digit << ((i % 2) * 4);
        }
        Ok(Self(bytes))
    }

    /// Number of 16-bit half-limb slots in a word.
    pub const fn half_limb_slots() -> usize {
        HALF_LIMBS
    }
}

impl From<u32> for WideWord {
    fn from(val: u32) -> Self {
        Self::from(u128::from(val))
    }
}

impl From<u64> for WideWord {
    fn from(val: u64) -> Self {
        Self::from(u128::from(val))
    }
}

impl From<u128> for WideWord {
    fn from(val: u128) -> Self {
        let mut bytes = [0; XLEN_BYTES];
        bytes[..HW_BYTES].copy_from_slice(&val.to_le_bytes());
        Self(bytes)
    }
}

impl From<[u8; XLEN_BYTES]> for WideWord {
    fn from(bytes: [u8; XLEN_BYTES]) -> Self {
        Self(bytes)
    }
}

impl Ord for WideWord {
    fn cmp(&self, other: &Self) -> Ordering {
        alu::cmp(*self, *other)
    }
}

impl PartialOrd for WideWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::LowerHex for WideWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for byte in self.0.iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WideWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}

impl fmt::Debug for WideWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideWord({})", self.to_limb_hex())
    }
}

impl FromStr for WideWord {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for WideWord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{self:#x}"))
    }
}

impl<'de> Deserialize<'de> for WideWord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// A 257-bit quantity: a wide word plus the bit that overflowed past bit 255.
///
/// Flag derivation consumes these because adds, shifts and compares can exceed the
/// word width by exactly one bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CarryWord {
    /// Low 256 bits.
    pub value: WideWord,
    /// Bit 256.
    pub carry: bool,
}

impl CarryWord {
    /// Combines a wide word and an overflow bit.
    pub const fn new(value: WideWord, carry: bool) -> Self {
        Self { value, carry }
    }

    /// Tests bit `pos` of the 257-bit value.
    pub fn bit(&self, pos: usize) -> bool {
        if pos == XLEN {
            self.carry
        } else {
            self.value.bit(pos)
        }
    }

    /// Returns `true` when the low 256 bits are zero (the carry is ignored).
    pub fn low_is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl From<WideWord> for CarryWord {
    fn from(value: WideWord) -> Self {
        Self {
            value,
            carry: false,
        }
    }
}

impl From<(WideWord, bool)> for CarryWord {
    fn from((value, carry): (WideWord, bool)) -> Self {
        Self { value, carry }
    }
}
