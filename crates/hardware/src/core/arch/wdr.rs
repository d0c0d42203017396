//! Wide Data Register File.
//!
//! This module implements the 256-bit register state of the coprocessor. It provides:
//! 1. **Storage:** 32 general wide data registers (`w0`-`w31`) and the special registers
//!    `mod`, `dmp`, `rfp`, `lc`, `rnd` and `acc`.
//! 2. **Addressing:** `RegId`, parsed from text as `"5"`, `"w5"` or a special name.
//! 3. **Validity Tracking:** Per general register, 16 half-limb flags recording which
//!    portions have been explicitly written.
//! 4. **Sub-views:** Limb, half-limb, quarter-word and half-word accessors layered over
//!    one read path and one write path.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::common::constants::{
    HALF_LIMBS, HALF_WORDS, LIMBS, NUM_REGS, QUARTER_WORDS, RND_RESET_BYTES,
};
use crate::common::error::{SimError, SimResult, check_index};
use crate::common::word::WideWord;
use crate::config::UninitPolicy;

/// Named special-purpose wide registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecialReg {
    /// Modulus register.
    Mod,
    /// DMEM pointer register; limbs alias `x16`-`x23`.
    Dmp,
    /// Register-file pointer register; limbs alias `x8`-`x15`.
    Rfp,
    /// Loop counter register; limbs alias `x24`-`x31`.
    Lc,
    /// Random-value register. Read-only.
    Rnd,
    /// Accumulator.
    Acc,
}

impl SpecialReg {
    /// Every special register, in storage order.
    pub const ALL: [Self; 6] = [Self::Mod, Self::Dmp, Self::Rfp, Self::Lc, Self::Rnd, Self::Acc];

    /// Assembly name of the register.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mod => "mod",
            Self::Dmp => "dmp",
            Self::Rfp => "rfp",
            Self::Lc => "lc",
            Self::Rnd => "rnd",
            Self::Acc => "acc",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SpecialReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpecialReg {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| SimError::InvalidOperand(format!("invalid special register: {s}")))
    }
}

/// Address of a wide register: a general register index or a special name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegId {
    /// General wide data register; the index is validated on access.
    Wdr(usize),
    /// Named special register.
    Special(SpecialReg),
}

impl From<SpecialReg> for RegId {
    fn from(reg: SpecialReg) -> Self {
        Self::Special(reg)
    }
}

impl From<usize> for RegId {
    fn from(idx: usize) -> Self {
        Self::Wdr(idx)
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wdr(idx) => write!(f, "w{idx}"),
            Self::Special(reg) => write!(f, "{reg}"),
        }
    }
}

impl FromStr for RegId {
    type Err = SimError;

    /// Parses `"5"`, `"w5"` or a special register name.
    fn from_str(s: &str) -> SimResult<Self> {
        let digits = s.strip_prefix('w').unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let idx = digits
                .parse::<usize>()
                .map_err(|_| SimError::InvalidOperand(format!("invalid register: {s}")))?;
            return Ok(Self::Wdr(check_index("register", idx, NUM_REGS)?));
        }
        s.parse::<SpecialReg>().map(Self::Special)
    }
}

/// Portion of a register covered by a read or write.
///
/// Determines which half-limb validity slots a write marks and which ones a read checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// All 256 bits.
    Full,
    /// 32-bit limb `0..8`.
    Limb(usize),
    /// 16-bit half-limb slot `0..16` (slot `2 * limb + upper`).
    HalfLimb(usize),
    /// 64-bit quarter-word `0..4`.
    QuarterWord(usize),
    /// 128-bit half-word `0..2`.
    HalfWord(usize),
}

impl Granularity {
    /// Half-limb slots covered by this portion.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if the portion index is out of bounds.
    pub fn slots(self) -> SimResult<Range<usize>> {
        let per = |what, idx, bound| -> SimResult<Range<usize>> {
            let idx = check_index(what, idx, bound)?;
            let width = HALF_LIMBS / bound;
            Ok(idx * width..(idx + 1) * width)
        };
        match self {
            Self::Full => Ok(0..HALF_LIMBS),
            Self::Limb(idx) => per("limb", idx, LIMBS),
            Self::HalfLimb(idx) => per("half-limb", idx, HALF_LIMBS),
            Self::QuarterWord(idx) => per("quarter-word", idx, QUARTER_WORDS),
            Self::HalfWord(idx) => per("half-word", idx, HALF_WORDS),
        }
    }

    fn mask(self) -> SimResult<u16> {
        Ok(self.slots()?.fold(0u16, |mask, slot| mask | (1 << slot)))
    }
}

/// Wide register file: 32 general registers plus the special registers.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    wdr: [WideWord; NUM_REGS],
    valid: [u16; NUM_REGS],
    special: [WideWord; SpecialReg::ALL.len()],
    uninit: UninitPolicy,
}

impl RegisterFile {
    /// Creates a register file with every register zero, no portion valid, and `rnd` at
    /// its reset sentinel.
    pub fn new(uninit: UninitPolicy) -> Self {
        let mut special = [WideWord::ZERO; SpecialReg::ALL.len()];
        special[SpecialReg::Rnd.slot()] = Self::rnd_reset_value();
        Self {
            wdr: [WideWord::ZERO; NUM_REGS],
            valid: [0; NUM_REGS],
            special,
            uninit,
        }
    }

    /// The fixed value `rnd` holds after reset.
    pub const fn rnd_reset_value() -> WideWord {
        WideWord::from_le_bytes(RND_RESET_BYTES)
    }

    /// Reads a whole register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a general index outside `0..32`, or
    /// [`SimError::Uninitialized`] under the strict policy.
    pub fn get(&self, id: RegId) -> SimResult<WideWord> {
        self.read(id, Granularity::Full)
    }

    /// Reads a register, applying the uninitialized-read policy to `portion` only.
    ///
    /// # Errors
    ///
    /// See [`RegisterFile::get`]; also [`SimError::Index`] for an invalid portion.
    pub fn read(&self, id: RegId, portion: Granularity) -> SimResult<WideWord> {
        match id {
            RegId::Wdr(idx) => {
                let idx = check_index("register", idx, NUM_REGS)?;
                let mask = portion.mask()?;
                self.uninit.on_read(self.valid[idx] & mask == mask, || {
                    format!("register w{idx} ({portion:?})")
                })?;
                Ok(self.wdr[idx])
            }
            RegId::Special(reg) => {
                let _ = portion.slots()?;
                Ok(self.special[reg.slot()])
            }
        }
    }

    /// Writes a register and marks the half-limb slots covered by `portion` as valid.
    ///
    /// `value` is the complete new register content; `portion` only drives validity.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad register or portion index and
    /// [`SimError::InvalidOperand`] for a write to `rnd`.
    pub fn set(&mut self, id: RegId, value: WideWord, portion: Granularity) -> SimResult<()> {
        let mask = portion.mask()?;
        match id {
            RegId::Wdr(idx) => {
                let idx = check_index("register", idx, NUM_REGS)?;
                self.wdr[idx] = value;
                self.valid[idx] |= mask;
            }
            RegId::Special(SpecialReg::Rnd) => {
                return Err(SimError::InvalidOperand("rnd is not writable".into()));
            }
            RegId::Special(reg) => self.special[reg.slot()] = value,
        }
        Ok(())
    }

    /// Current value of a special register, with no diagnostic.
    pub const fn special(&self, reg: SpecialReg) -> WideWord {
        self.special[reg.slot()]
    }

    /// Writes the accumulator.
    pub const fn set_acc(&mut self, value: WideWord) {
        self.special[SpecialReg::Acc.slot()] = value;
    }

    fn raw(&self, id: RegId) -> SimResult<WideWord> {
        match id {
            RegId::Wdr(idx) => Ok(self.wdr[check_index("register", idx, NUM_REGS)?]),
            RegId::Special(reg) => Ok(self.special(reg)),
        }
    }

    /// Reads limb `limb` of a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad register or limb index.
    pub fn limb(&self, id: RegId, limb: usize) -> SimResult<u32> {
        self.read(id, Granularity::Limb(limb))?.limb(limb)
    }

    /// Replaces limb `limb` of a register, marking both of its half-limbs valid.
    ///
    /// # Errors
    ///
    /// See [`RegisterFile::set`].
    pub fn set_limb(&mut self, id: RegId, limb: usize, val: u32) -> SimResult<()> {
        let word = self.raw(id)?.with_limb(limb, val)?;
        self.set(id, word, Granularity::Limb(limb))
    }

    /// Replaces the lower or upper half of limb `limb`, marking exactly that slot valid.
    ///
    /// # Errors
    ///
    /// See [`RegisterFile::set`].
    pub fn set_half_limb(
        &mut self,
        id: RegId,
        limb: usize,
        upper: bool,
        val: u16,
    ) -> SimResult<()> {
        let word = self.raw(id)?.with_half_limb(limb, upper, val)?;
        self.set(id, word, Granularity::HalfLimb(limb * 2 + usize::from(upper)))
    }

    /// Reads quarter-word `qw` of a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad register or quarter-word index.
    pub fn quarter_word(&self, id: RegId, qw: usize) -> SimResult<u64> {
        self.read(id, Granularity::QuarterWord(qw))?.quarter_word(qw)
    }

    /// Replaces quarter-word `qw` of a register.
    ///
    /// # Errors
    ///
    /// See [`RegisterFile::set`].
    pub fn set_quarter_word(&mut self, id: RegId, qw: usize, val: u64) -> SimResult<()> {
        let word = self.raw(id)?.with_quarter_word(qw, val)?;
        self.set(id, word, Granularity::QuarterWord(qw))
    }

    /// Reads half-word `hw` of a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad register or half-word index.
    pub fn half_word(&self, id: RegId, hw: usize) -> SimResult<u128> {
        self.read(id, Granularity::HalfWord(hw))?.half_word(hw)
    }

    /// Replaces half-word `hw` of a register.
    ///
    /// # Errors
    ///
    /// See [`RegisterFile::set`].
    pub fn set_half_word(&mut self, id: RegId, hw: usize, val: u128) -> SimResult<()> {
        let word = self.raw(id)?.with_half_word(hw, val)?;
        self.set(id, word, Granularity::HalfWord(hw))
    }

    /// Validity flags of general register `idx`, half-limb slot 0 first.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..32`.
    pub fn valid_half_limbs(&self, idx: usize) -> SimResult<[bool; HALF_LIMBS]> {
        let bits = self.valid[check_index("register", idx, NUM_REGS)?];
        Ok(std::array::from_fn(|slot| bits & (1 << slot) != 0))
    }

    /// Validity flags of every general register as bit masks (bit `n` = half-limb slot `n`).
    pub const fn valid_masks(&self) -> &[u16; NUM_REGS] {
        &self.valid
    }

    /// All 32 general registers.
    pub const fn wdrs(&self) -> &[WideWord; NUM_REGS] {
        &self.wdr
    }

    /// Marks every portion of every general register as never written.
    pub fn clear_validity(&mut self) {
        self.valid = [0; NUM_REGS];
    }

    /// Zeroes every general and special register and restores `rnd` to its reset sentinel.
    ///
    /// Validity flags are left as they are.
    pub fn clear_values(&mut self) {
        self.wdr = [WideWord::ZERO; NUM_REGS];
        self.special = [WideWord::ZERO; SpecialReg::ALL.len()];
        self.special[SpecialReg::Rnd.slot()] = Self::rnd_reset_value();
    }

    /// Changes the uninitialized-read policy.
    pub const fn set_uninit_policy(&mut self, uninit: UninitPolicy) {
        self.uninit = uninit;
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(UninitPolicy::default())
    }
}
