//! Wide-Word Arithmetic Logic Unit (ALU).
//!
//! This module implements the bit-exact 256-bit primitives that opcode implementations
//! build on. Every operation is pure: inputs are taken by value and a new word is returned.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add with carry, subtract with borrow, unsigned compare
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Logical shift left and right

/// Carry-propagating add, borrow-propagating subtract, and unsigned comparison.
pub mod arithmetic;

/// Bytewise logical operations.
pub mod logic;

/// Logical shifts (byte move followed by bit carry).
pub mod shifts;

pub use self::arithmetic::{add, cmp, sub};
pub use self::logic::{and, not, or, xor};
pub use self::shifts::{shl, shr};
