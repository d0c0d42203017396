//! General-Purpose Index Register File.
//!
//! This module implements the 32 scalar 32-bit registers (`x0`-`x31`). Only `x2`-`x7` own
//! storage; every other index is routed elsewhere:
//! 1. **`x0`:** Hardwired to zero; writes are discarded.
//! 2. **`x1`:** No storage; writes push the call stack and reads pop it.
//! 3. **`x8`-`x31`:** Aliases of the limbs of `rfp`, `dmp` and `lc`.
//!
//! [`GprSlot::classify`] decides the route for an index. The ranges are disjoint, so exactly
//! one route handles any index; the machine performs the access for the aliased routes
//! because it owns the call stack and the wide registers.

use crate::common::constants::{GPR_WIDTH, LIMB_BITS, LIMBS, NUM_GPRS};
use crate::common::error::{SimResult, check_index};

use super::wdr::SpecialReg;

// Each aliased index register is exactly one limb wide.
const _: () = assert!(GPR_WIDTH == LIMB_BITS);

/// First index with plain storage.
const PLAIN_BASE: usize = 2;

/// Number of plain storage registers (`x2`-`x7`).
const PLAIN_COUNT: usize = 6;

/// First index aliased onto `rfp`.
const RFP_BASE: usize = 8;

/// First index aliased onto `dmp`.
const DMP_BASE: usize = 16;

/// First index aliased onto `lc`.
const LC_BASE: usize = 24;

/// Where an index register access is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GprSlot {
    /// `x0`.
    Zero,
    /// `x1`, the call stack port.
    CallStack,
    /// `x2`-`x7`; the payload is the offset into plain storage.
    Plain(usize),
    /// `x8`-`x31`; limb `limb` of special register `reg`.
    Alias {
        /// Backing wide register.
        reg: SpecialReg,
        /// Limb within the backing register.
        limb: usize,
    },
}

impl GprSlot {
    /// Classifies index register `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`](crate::SimError::Index) if `idx` is not in `0..32`.
    pub fn classify(idx: usize) -> SimResult<Self> {
        let idx = check_index("gpr", idx, NUM_GPRS)?;
        Ok(match idx {
            0 => Self::Zero,
            1 => Self::CallStack,
            PLAIN_BASE..RFP_BASE => Self::Plain(idx - PLAIN_BASE),
            RFP_BASE..DMP_BASE => Self::alias(SpecialReg::Rfp, idx - RFP_BASE),
            DMP_BASE..LC_BASE => Self::alias(SpecialReg::Dmp, idx - DMP_BASE),
            _ => Self::alias(SpecialReg::Lc, idx - LC_BASE),
        })
    }

    const fn alias(reg: SpecialReg, limb: usize) -> Self {
        debug_assert!(limb < LIMBS);
        Self::Alias { reg, limb }
    }
}

/// Plain storage of the index register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; PLAIN_COUNT],
}

impl Gpr {
    /// Creates the plain registers, all zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; PLAIN_COUNT],
        }
    }

    /// Reads plain register at `offset` (0 is `x2`).
    pub const fn read(&self, offset: usize) -> u32 {
        self.regs[offset]
    }

    /// Writes plain register at `offset` (0 is `x2`).
    pub const fn write(&mut self, offset: usize, val: u32) {
        self.regs[offset] = val;
    }

    /// Zeroes every plain register.
    pub const fn clear(&mut self) {
        self.regs = [0; PLAIN_COUNT];
    }
}
