//! On-chip memories of the coprocessor.

/// Data and instruction memory.
pub mod memory;
