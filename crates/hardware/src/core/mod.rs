//! Core processor state.
//!
//! This module contains the architectural registers and the functional units that operate
//! on them. The machine that ties them together lives in [`crate::sim`].

/// Architecture-specific components (wide registers, index registers, flags, CSR/WSR decode).
pub mod arch;

/// Functional units (wide-word ALU, hardware stacks, debug triggers).
pub mod units;
