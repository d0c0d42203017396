//! Data Memory (DMEM).
//!
//! This module implements the coprocessor's data memory. It provides:
//! 1. **Storage:** 128 cells of 256 bits, each with its own initialized flag.
//! 2. **Cell Access:** Word-addressed reads and writes; reads of never-written cells go
//!    through the uninitialized-read policy.
//! 3. **Byte Addressing:** A limb-granular view where byte address `a` selects cell
//!    `a / 32` and limb `(a % 32) / 4`.
//! 4. **Dump:** Hex rendering of the whole memory, one cell per line.

use std::io::{self, Write};

use crate::common::constants::{DMEM_DEPTH, LIMB_BYTES, XLEN_BYTES};
use crate::common::error::{SimError, SimResult, check_index};
use crate::common::word::WideWord;
use crate::config::UninitPolicy;

/// Data memory with per-cell initialization tracking.
#[derive(Clone, Debug)]
pub struct Dmem {
    /// Cell contents.
    cells: [WideWord; DMEM_DEPTH],
    /// `true` for every cell written since the last load.
    init: [bool; DMEM_DEPTH],
    /// Reaction to reads of uninitialized cells.
    uninit: UninitPolicy,
}

impl Dmem {
    /// Creates a zeroed memory with no cell initialized.
    pub const fn new(uninit: UninitPolicy) -> Self {
        Self {
            cells: [WideWord::ZERO; DMEM_DEPTH],
            init: [false; DMEM_DEPTH],
            uninit,
        }
    }

    /// Replaces the contents with `image`.
    ///
    /// Cells covered by `image` are marked initialized; the rest are zeroed and marked
    /// uninitialized.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `image` holds more than 128 cells.
    pub fn load(&mut self, image: &[WideWord]) -> SimResult<()> {
        if image.len() > DMEM_DEPTH {
            return Err(SimError::index("dmem image length", image.len(), DMEM_DEPTH + 1));
        }
        self.cells = [WideWord::ZERO; DMEM_DEPTH];
        self.init = [false; DMEM_DEPTH];
        self.cells[..image.len()].copy_from_slice(image);
        self.init[..image.len()].fill(true);
        Ok(())
    }

    /// Reads cell `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `addr` is not in `0..128`, or
    /// [`SimError::Uninitialized`] for an unwritten cell under the strict policy.
    pub fn get(&self, addr: usize) -> SimResult<WideWord> {
        let addr = check_index("dmem address", addr, DMEM_DEPTH)?;
        self.uninit.on_read(self.init[addr], || {
            format!("dmem memory address: {addr:#x}")
        })?;
        Ok(self.cells[addr])
    }

    /// Writes cell `addr` and marks it initialized.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `addr` is not in `0..128`.
    pub fn set(&mut self, addr: usize, value: WideWord) -> SimResult<()> {
        let addr = check_index("dmem address", addr, DMEM_DEPTH)?;
        self.cells[addr] = value;
        self.init[addr] = true;
        Ok(())
    }

    /// Splits a byte address into `(cell, limb)`.
    ///
    /// The address is floored to its containing limb; there is no alignment check.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if the cell is not in `0..128`.
    pub fn locate(byte_addr: usize) -> SimResult<(usize, usize)> {
        let cell = check_index("dmem address", byte_addr / XLEN_BYTES, DMEM_DEPTH)?;
        Ok((cell, (byte_addr % XLEN_BYTES) / LIMB_BYTES))
    }

    /// Reads the limb at byte address `byte_addr`.
    ///
    /// # Errors
    ///
    /// See [`Dmem::get`].
    pub fn get_limb(&self, byte_addr: usize) -> SimResult<u32> {
        let (cell, limb) = Self::locate(byte_addr)?;
        self.get(cell)?.limb(limb)
    }

    /// Writes the limb at byte address `byte_addr`, marking its cell initialized.
    ///
    /// # Errors
    ///
    /// See [`Dmem::set`].
    pub fn set_limb(&mut self, byte_addr: usize, val: u32) -> SimResult<()> {
        let (cell, limb) = Self::locate(byte_addr)?;
        let word = self.cells[cell].with_limb(limb, val)?;
        self.set(cell, word)
    }

    /// Returns `true` if cell `addr` has been written since the last load.
    ///
    /// Out-of-range addresses report `false`.
    pub fn is_initialized(&self, addr: usize) -> bool {
        self.init.get(addr).copied().unwrap_or(false)
    }

    /// All cells, address 0 first.
    pub const fn cells(&self) -> &[WideWord; DMEM_DEPTH] {
        &self.cells
    }

    /// Initialized flags of all cells.
    pub const fn init_bitmap(&self) -> &[bool; DMEM_DEPTH] {
        &self.init
    }

    /// Changes the uninitialized-read policy.
    pub const fn set_uninit_policy(&mut self, uninit: UninitPolicy) {
        self.uninit = uninit;
    }

    /// Writes every cell as one line of 64 big-endian hex digits.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from `out`.
    pub fn dump_hex<W: Write>(&self, mut out: W) -> io::Result<()> {
        for cell in &self.cells {
            writeln!(out, "{cell:x}")?;
        }
        out.flush()
    }
}

impl Default for Dmem {
    fn default() -> Self {
        Self::new(UninitPolicy::default())
    }
}
