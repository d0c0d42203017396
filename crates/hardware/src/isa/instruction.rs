//! Instruction object contract.
//!
//! Opcode semantics are supplied by the caller as pre-decoded instruction objects. The
//! step engine fetches one per step and calls [`Instruction::execute`] with the machine;
//! the instruction mutates state through the machine's public operations and reports the
//! next program counter, if it changes control flow.

use std::sync::Arc;

use crate::common::error::SimResult;
use crate::sim::machine::Machine;

/// Result of executing one instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Execution {
    /// Human-readable trace line for this execution.
    pub trace: String,
    /// Requested next program counter; `None` continues at `pc + 1`.
    pub jump: Option<usize>,
}

impl Execution {
    /// Falls through to the next instruction.
    pub fn next(trace: impl Into<String>) -> Self {
        Self {
            trace: trace.into(),
            jump: None,
        }
    }

    /// Transfers control to `target`.
    pub fn jump(trace: impl Into<String>, target: usize) -> Self {
        Self {
            trace: trace.into(),
            jump: Some(target),
        }
    }
}

/// A pre-decoded instruction.
///
/// Implementations must not call [`Machine::step`], [`Machine::reset`] or
/// [`Machine::clear_regs`] from `execute`; the machine rejects such calls with
/// [`SimError::Reentrant`](crate::SimError::Reentrant).
pub trait Instruction: Send + Sync {
    /// Cycle cost of the instruction.
    fn cycles(&self) -> u64;

    /// Encoding and assembly text (`"mnemonic operands"`).
    fn asm_str(&self) -> (u32, String);

    /// Executes the instruction against `machine`.
    ///
    /// # Errors
    ///
    /// Any [`SimError`](crate::SimError) raised by a state operation; the step aborts and
    /// the error reaches the driver unchanged.
    fn execute(&self, machine: &mut Machine) -> SimResult<Execution>;

    /// Mnemonic used as the histogram key: the first word of the assembly text.
    fn mnemonic(&self) -> String {
        let (_, asm) = self.asm_str();
        asm.split_whitespace().next().unwrap_or_default().to_owned()
    }
}

/// Shared, immutable program image; index = instruction address.
pub type Program = Arc<[Box<dyn Instruction>]>;
