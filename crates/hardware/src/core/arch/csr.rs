//! Control and Status Register (CSR) and Wide Status Register (WSR) decoding.
//!
//! Neither address space has storage of its own; both are views onto the flags and the
//! special wide registers. This module provides:
//! 1. **CSR Decode:** 32-bit views at `0x7C0` (flags), `0x7D0`-`0x7D7` (`mod` limbs) and
//!    `0xFC0` (limb 0 of `rnd`).
//! 2. **WSR Decode:** 256-bit views of `mod` (0) and `rnd` (1).
//!
//! The machine performs the actual access after decoding.

use crate::common::constants::{CSR_FLAG, CSR_MOD_BASE, CSR_RNG, LIMBS, WSR_MOD, WSR_RND};
use crate::common::error::{SimError, SimResult};

/// Last modulus limb address.
const CSR_MOD_LAST: u32 = CSR_MOD_BASE + LIMBS as u32 - 1;

/// A decoded CSR address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Csr {
    /// Packed flag byte.
    Flags,
    /// One 32-bit limb of the modulus register.
    ModLimb(usize),
    /// Limb 0 of the random-value register; writes are ignored.
    Rng,
}

impl Csr {
    /// Decodes a CSR address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unmapped address.
    pub fn decode(addr: u32) -> SimResult<Self> {
        match addr {
            CSR_FLAG => Ok(Self::Flags),
            CSR_RNG => Ok(Self::Rng),
            CSR_MOD_BASE..=CSR_MOD_LAST => Ok(Self::ModLimb((addr - CSR_MOD_BASE) as usize)),
            _ => Err(SimError::InvalidOperand(format!("invalid CSR: {addr:#x}"))),
        }
    }
}

/// A decoded WSR index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wsr {
    /// Modulus register.
    Mod,
    /// Random-value register; writes are ignored.
    Rnd,
}

impl Wsr {
    /// Decodes a WSR index.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unmapped index.
    pub fn decode(idx: usize) -> SimResult<Self> {
        match idx {
            WSR_MOD => Ok(Self::Mod),
            WSR_RND => Ok(Self::Rnd),
            _ => Err(SimError::InvalidOperand(format!("invalid WSR: {idx}"))),
        }
    }
}
