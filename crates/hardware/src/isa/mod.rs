//! Instruction Set Architecture (ISA) Contracts.
//!
//! The core does not decode or interpret opcodes. This module defines what it expects from
//! the code that does:
//!
//! * `instruction`: The pre-decoded instruction object the step engine dispatches to.
//! * `context`: The assembler symbol tables used to resolve textual breakpoint targets.

/// Assembler context (function and label symbol tables).
pub mod context;

/// Instruction object contract and program type.
pub mod instruction;
