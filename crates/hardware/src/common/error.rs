//! Simulator Error Definitions.
//!
//! This module defines the error taxonomy of the machine core. It provides:
//! 1. **Error Kinds:** Range, index, stack, operand and jump violations reported by state operations.
//! 2. **Stack Identity:** Which hardware stack an overflow or underrun refers to.
//! 3. **Result Alias:** `SimResult<T>` used by every fallible operation in the crate.
//!
//! All errors are fail-fast: the core never retries or recovers, it hands the error to
//! the driver that called into it.

use std::fmt;

use thiserror::Error;

/// Identifies one of the two bounded hardware stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackKind {
    /// Hardware loop stack.
    Loop,
    /// Subroutine call stack.
    Call,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loop => write!(f, "loop"),
            Self::Call => write!(f, "call"),
        }
    }
}

/// Errors raised by machine state operations and the step engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// A value does not fit the bit width of its destination.
    #[error("value out of range: {what} must fit in {bits} bits")]
    Range {
        /// Description of the offending value.
        what: String,
        /// Declared width of the destination.
        bits: usize,
    },

    /// An index lies outside its declared bounds.
    #[error("{what} index {index} out of range (0 to {bound})")]
    Index {
        /// Kind of index (register, limb, DMEM address, ...).
        what: &'static str,
        /// The rejected index.
        index: usize,
        /// Exclusive upper bound.
        bound: usize,
    },

    /// A push on a full hardware stack.
    #[error("{stack} stack overflow")]
    StackOverflow {
        /// Stack that overflowed.
        stack: StackKind,
    },

    /// A pop or peek on an empty hardware stack.
    ///
    /// `StackUnderrun { stack: StackKind::Call }` is the "return with nothing to
    /// return to" condition.
    #[error("{stack} stack underrun")]
    StackUnderrun {
        /// Stack that was empty.
        stack: StackKind,
    },

    /// Unknown register name, CSR/WSR number, flag name or unresolvable label.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// A requested next program counter outside instruction memory.
    #[error("invalid jump address {target} (imem holds {imem_len} instructions)")]
    InvalidJump {
        /// Requested target address.
        target: usize,
        /// Number of instructions in IMEM.
        imem_len: usize,
    },

    /// Read of never-written state while the strict uninitialized-read policy is active.
    #[error("read of uninitialized {0}")]
    Uninitialized(String),

    /// A machine-wide operation issued from inside an executing instruction.
    #[error("{0} called while an instruction is executing")]
    Reentrant(&'static str),
}

impl SimError {
    /// Builds an [`SimError::Index`] for `index` against the exclusive `bound`.
    pub fn index(what: &'static str, index: usize, bound: usize) -> Self {
        Self::Index { what, index, bound }
    }

    /// Returns `true` for the distinguished empty-call-stack condition.
    pub fn is_call_stack_underrun(&self) -> bool {
        matches!(
            self,
            Self::StackUnderrun {
                stack: StackKind::Call
            }
        )
    }
}

/// Result type used throughout the simulator core.
pub type SimResult<T> = Result<T, SimError>;

/// Checks `index < bound`, returning an [`SimError::Index`] otherwise.
#[inline]
pub(crate) fn check_index(what: &'static str, index: usize, bound: usize) -> SimResult<usize> {
    if index < bound {
        Ok(index)
    } else {
        Err(SimError::index(what, index, bound))
    }
}
