//! Common types used throughout the coprocessor model.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Architectural widths, depths and reset values.
//! 2. **Error Handling:** The `SimError` taxonomy and the `SimResult` alias.
//! 3. **Wide Words:** The 256-bit value type and its 257-bit carry-extended form.

/// Architectural constants.
pub mod constants;

/// Error types.
pub mod error;

/// 256-bit wide word.
pub mod word;

pub use error::{SimError, SimResult, StackKind};
pub use word::{CarryWord, WideWord};
