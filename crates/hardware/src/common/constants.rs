//! Machine ABI Constants.
//!
//! This module defines the fixed widths and layouts every other component relies on. It includes:
//! 1. **Word Geometry:** Word width and its limb, half-limb, quarter-word and half-word views.
//! 2. **Register Files:** Number of wide data registers and index registers.
//! 3. **Memories:** DMEM depth and IMEM capacity.
//! 4. **Hardware Stacks:** Loop and call stack depths.
//! 5. **Status Registers:** CSR addresses and WSR indices mapped onto the register file.

/// Simulated word width in bits (XLEN).
pub const XLEN: usize = 256;

/// Word width in bytes.
pub const XLEN_BYTES: usize = XLEN / 8;

/// Number of 32-bit limbs in a wide word.
pub const LIMBS: usize = 8;

/// Width of one limb in bits.
pub const LIMB_BITS: usize = XLEN / LIMBS;

/// Width of one limb in bytes.
pub const LIMB_BYTES: usize = LIMB_BITS / 8;

/// Number of 16-bit half-limbs in a wide word.
pub const HALF_LIMBS: usize = LIMBS * 2;

/// Width of one half-limb in bits.
pub const HALF_LIMB_BITS: usize = LIMB_BITS / 2;

/// Width of one half-limb in bytes.
pub const HALF_LIMB_BYTES: usize = HALF_LIMB_BITS / 8;

/// Number of 64-bit quarter-words in a wide word.
pub const QUARTER_WORDS: usize = 4;

/// Width of one quarter-word in bits.
pub const QW_BITS: usize = XLEN / QUARTER_WORDS;

/// Width of one quarter-word in bytes.
pub const QW_BYTES: usize = QW_BITS / 8;

/// Number of 128-bit half-words in a wide word.
pub const HALF_WORDS: usize = 2;

/// Width of one half-word in bits.
pub const HW_BITS: usize = XLEN / HALF_WORDS;

/// Width of one half-word in bytes.
pub const HW_BYTES: usize = HW_BITS / 8;

/// Number of general wide data registers (`w0`-`w31`).
pub const NUM_REGS: usize = 32;

/// Number of 32-bit index registers (`x0`-`x31`).
pub const NUM_GPRS: usize = 32;

/// Width of an index register in bits.
pub const GPR_WIDTH: usize = 32;

/// Number of 256-bit cells in data memory.
pub const DMEM_DEPTH: usize = 128;

/// Maximum number of instructions in instruction memory.
pub const IMEM_DEPTH: usize = 1024;

/// Maximum nesting depth of the hardware loop stack.
pub const LOOP_STACK_SIZE: usize = 16;

/// Maximum depth of the subroutine call stack.
pub const CALL_STACK_SIZE: usize = 16;

/// CSR address of the packed flag byte.
pub const CSR_FLAG: u32 = 0x7C0;

/// CSR base address of the eight modulus limbs (`0x7D0`-`0x7D7`).
pub const CSR_MOD_BASE: u32 = 0x7D0;

/// CSR address of the random-value limb.
pub const CSR_RNG: u32 = 0xFC0;

/// WSR index of the modulus register.
pub const WSR_MOD: usize = 0;

/// WSR index of the random-value register.
pub const WSR_RND: usize = 1;

/// Reset value of `rnd`: nibble `0x9` repeated across all 256 bits.
///
/// Stands in for "no entropy available"; the exact pattern is part of the ABI.
pub const RND_RESET_BYTES: [u8; XLEN_BYTES] = [0x99; XLEN_BYTES];

/// Default file name used when dumping data memory.
pub const DEFAULT_DUMP_FILENAME: &str = "dmem_dump.hex";
