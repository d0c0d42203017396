//! Architectural register state.
//!
//! This module contains the programmer-visible register state of the coprocessor.
//! It includes the following modules:
//! 1. **WDRs:** The 256-bit wide data register file and the special registers.
//! 2. **GPRs:** The 32-bit index registers and their routing onto stacks and wide registers.
//! 3. **Flags:** The base and extended flag groups.
//! 4. **CSRs/WSRs:** Decoding of the status register address spaces.

/// Control and Status Register (CSR) and Wide Status Register (WSR) decoding.
pub mod csr;

/// Base and extended arithmetic flags.
pub mod flags;

/// General-purpose index register file.
pub mod gpr;

/// Wide data register file and special registers.
pub mod wdr;
