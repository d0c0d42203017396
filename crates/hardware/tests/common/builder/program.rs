//! Ready-made programs.

use bnsim_core::isa::instruction::{Instruction, Program};

use super::instruction::nop;

/// Wraps instructions as a shared program image.
pub fn program(instrs: Vec<Box<dyn Instruction>>) -> Program {
    Program::from(instrs)
}

/// `len` no-ops.
pub fn nops(len: usize) -> Vec<Box<dyn Instruction>> {
    (0..len).map(|_| nop()).collect()
}
