//! Functional units.
//!
//! This module contains the wide-word ALU primitives, the bounded hardware stacks used for
//! loops and subroutine calls, and the breakpoint triggers consulted by the step engine.

/// Wide-word arithmetic, logic and shift primitives.
pub mod alu;

/// Breakpoint table and one-shot force-break trigger.
pub mod debug;

/// Hardware loop stack and call stack.
pub mod stack;
