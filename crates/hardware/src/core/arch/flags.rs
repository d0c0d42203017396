//! Arithmetic Flags.
//!
//! This module implements the two flag groups of the coprocessor. Each group holds a carry
//! (`C`), LSB (`L`), MSB (`M`) and zero (`Z`) flag; the extended group mirrors them as `XC`,
//! `XL`, `XM`, `XZ`. Flags are derived from 257-bit results ([`CarryWord`]) because adds,
//! shifts and compares can overflow the word by one bit.
//!
//! Packed layout (CSR `0x7C0`):
//!
//! | bit | 0 | 1 | 2 | 3 | 4  | 5  | 6  | 7  |
//! |-----|---|---|---|---|----|----|----|----|
//! |     | C | L | M | Z | XC | XL | XM | XZ |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::constants::XLEN;
use crate::common::error::{SimError, SimResult};
use crate::common::word::CarryWord;

/// A single flag, numbered by its bit position in the packed byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Flag {
    /// Carry out of bit 255.
    C = 0,
    /// Least significant bit of the result.
    L = 1,
    /// Most significant bit (bit 255) of the result.
    M = 2,
    /// Result is zero.
    Z = 3,
    /// Extended carry.
    XC = 4,
    /// Extended LSB.
    XL = 5,
    /// Extended MSB.
    XM = 6,
    /// Extended zero.
    XZ = 7,
}

impl Flag {
    /// All flags in packed bit order.
    pub const ALL: [Self; 8] = [
        Self::C,
        Self::L,
        Self::M,
        Self::Z,
        Self::XC,
        Self::XL,
        Self::XM,
        Self::XZ,
    ];

    /// Bit mask of this flag in the packed byte.
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }

    /// Assembly name of the flag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::L => "L",
            Self::M => "M",
            Self::Z => "Z",
            Self::XC => "XC",
            Self::XL => "XL",
            Self::XM => "XM",
            Self::XZ => "XZ",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flag {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.name() == s)
            .ok_or_else(|| SimError::InvalidOperand(format!("invalid flag identifier: {s}")))
    }
}

/// Selects the base (`C L M Z`) or extended (`XC XL XM XZ`) flag group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlagGroup {
    /// `C`, `L`, `M`, `Z`.
    Base,
    /// `XC`, `XL`, `XM`, `XZ`.
    Extended,
}

impl FlagGroup {
    const fn flags(self) -> [Flag; 4] {
        match self {
            Self::Base => [Flag::C, Flag::L, Flag::M, Flag::Z],
            Self::Extended => [Flag::XC, Flag::XL, Flag::XM, Flag::XZ],
        }
    }
}

/// The eight flags, stored as their packed byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlagSet {
    bits: u8,
}

impl FlagSet {
    /// Creates a flag set with every flag clear.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Reads one flag.
    pub const fn get(&self, flag: Flag) -> bool {
        self.bits & flag.mask() != 0
    }

    /// Writes one flag.
    pub const fn set(&mut self, flag: Flag, val: bool) {
        if val {
            self.bits |= flag.mask();
        } else {
            self.bits &= !flag.mask();
        }
    }

    /// Reads a flag by name (`"C"`, `"XZ"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unknown name.
    pub fn get_by_name(&self, name: &str) -> SimResult<bool> {
        Ok(self.get(name.parse()?))
    }

    /// Writes a flag by name.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unknown name.
    pub fn set_by_name(&mut self, name: &str, val: bool) -> SimResult<()> {
        self.set(name.parse()?, val);
        Ok(())
    }

    /// All eight flags as one byte.
    pub const fn packed(&self) -> u8 {
        self.bits
    }

    /// Replaces all eight flags from one byte.
    pub const fn set_packed(&mut self, bits: u8) {
        self.bits = bits;
    }

    /// Clears every flag.
    pub const fn clear(&mut self) {
        self.bits = 0;
    }

    /// Sets `C`, `Z`, `M` and `L` of `group` from a 257-bit result.
    ///
    /// `C` is bit 256, `M` bit 255, `L` bit 0, and `Z` is set when the low 256 bits are zero.
    pub fn update_czml(&mut self, group: FlagGroup, v: CarryWord) {
        let [c, _, _, _] = group.flags();
        self.set(c, v.bit(XLEN));
        self.update_zml(group, v);
    }

    /// Sets `Z`, `M` and `L` of `group`; the carry flag is left untouched.
    pub fn update_zml(&mut self, group: FlagGroup, v: CarryWord) {
        let [_, l, m, z] = group.flags();
        self.set(z, v.low_is_zero());
        self.set(m, v.bit(XLEN - 1));
        self.set(l, v.bit(0));
    }

    /// Sets `C` and `M` of `group`.
    pub fn update_cm(&mut self, group: FlagGroup, v: CarryWord) {
        let [c, _, m, _] = group.flags();
        self.set(c, v.bit(XLEN));
        self.set(m, v.bit(XLEN - 1));
    }

    /// Sets only `L` of `group`.
    pub fn update_l(&mut self, group: FlagGroup, v: CarryWord) {
        let [_, l, _, _] = group.flags();
        self.set(l, v.bit(0));
    }

    /// Sets the base group from a 257-bit result.
    pub fn set_from_wide(&mut self, v: impl Into<CarryWord>) {
        self.update_czml(FlagGroup::Base, v.into());
    }

    /// Sets the extended group from a 257-bit result.
    pub fn setx_from_wide(&mut self, v: impl Into<CarryWord>) {
        self.update_czml(FlagGroup::Extended, v.into());
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for flag in Flag::ALL {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{flag}={}", u8::from(self.get(flag)))?;
        }
        Ok(())
    }
}
