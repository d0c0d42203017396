//! Instruction Memory (IMEM).
//!
//! A read-only view of the externally owned program. The machine only holds a
//! reference-counted handle; instructions are never copied or modified.

use std::fmt;
use std::sync::Arc;

use crate::common::error::{SimResult, check_index};
use crate::isa::instruction::{Instruction, Program};

/// Read-only instruction memory.
#[derive(Clone)]
pub struct Imem {
    program: Program,
}

impl Imem {
    /// Wraps a program.
    pub const fn new(program: Program) -> Self {
        Self { program }
    }

    /// Creates an instruction memory holding no instructions.
    pub fn empty() -> Self {
        Self {
            program: Arc::from(Vec::new()),
        }
    }

    /// Fetches the instruction at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`](crate::SimError::Index) if `addr` is beyond the program.
    pub fn get_instruction(&self, addr: usize) -> SimResult<&dyn Instruction> {
        let addr = check_index("imem address", addr, self.program.len())?;
        Ok(self.program[addr].as_ref())
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.program.len()
    }

    /// Returns `true` if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }

    /// Shared handle to the program.
    pub fn program(&self) -> Program {
        Arc::clone(&self.program)
    }
}

impl fmt::Debug for Imem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Imem").field("len", &self.program.len()).finish()
    }
}

impl Default for Imem {
    fn default() -> Self {
        Self::empty()
    }
}
