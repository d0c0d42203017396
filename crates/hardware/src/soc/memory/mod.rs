//! Coprocessor memories.
//!
//! This module implements the two memories of the coprocessor. It provides:
//! 1. **DMEM:** 128 wide cells with initialization tracking and a byte-addressed view.
//! 2. **IMEM:** A read-only handle to the externally supplied program.

/// Data memory.
pub mod dmem;

/// Instruction memory.
pub mod imem;

pub use self::dmem::Dmem;
pub use self::imem::Imem;
