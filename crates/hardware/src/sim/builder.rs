//! Machine construction.
//!
//! `MachineBuilder` collects the construction inputs of a machine and validates them
//! before anything is built:
//! 1. **Memories:** Initial DMEM image (at most 128 cells) and program (at most 1024
//!    instructions).
//! 2. **Control Flow:** Start address and optional stop address (default: last instruction).
//! 3. **Debugging:** Optional assembler context and initial breakpoints.
//! 4. **Configuration:** [`MachineConfig`] options.

use std::fmt;
use std::sync::Arc;

use crate::common::error::SimResult;
use crate::common::word::WideWord;
use crate::config::MachineConfig;
use crate::isa::context::AsmContext;
use crate::isa::instruction::{Instruction, Program};
use crate::sim::machine::Machine;

/// Builder for [`Machine`].
///
/// # Examples
///
/// ```
/// use bnsim_core::{MachineBuilder, WideWord};
///
/// let machine = MachineBuilder::new()
///     .dmem(vec![WideWord::from(7u32)])
///     .build()
///     .unwrap();
/// assert_eq!(machine.get_dmem(0).unwrap(), WideWord::from(7u32));
/// assert!(machine.dmem().is_initialized(0));
/// assert!(!machine.dmem().is_initialized(1));
/// ```
#[derive(Default)]
pub struct MachineBuilder {
    dmem: Vec<WideWord>,
    program: Option<Program>,
    start_pc: usize,
    stop_addr: Option<usize>,
    ctx: Option<Arc<dyn AsmContext>>,
    breakpoints: Vec<(String, u32)>,
    config: MachineConfig,
}

impl MachineBuilder {
    /// Starts with an empty program and DMEM image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial DMEM image.
    #[must_use]
    pub fn dmem(mut self, cells: Vec<WideWord>) -> Self {
        self.dmem = cells;
        self
    }

    /// Sets the program from a shared image.
    #[must_use]
    pub fn program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    /// Sets the program from owned instructions.
    #[must_use]
    pub fn instructions(mut self, instrs: Vec<Box<dyn Instruction>>) -> Self {
        self.program = Some(Program::from(instrs));
        self
    }

    /// Sets the initial program counter.
    #[must_use]
    pub const fn start_pc(mut self, pc: usize) -> Self {
        self.start_pc = pc;
        self
    }

    /// Sets the stop address.
    #[must_use]
    pub const fn stop_addr(mut self, addr: usize) -> Self {
        self.stop_addr = Some(addr);
        self
    }

    /// Installs an assembler context for symbolic breakpoints.
    #[must_use]
    pub fn context(mut self, ctx: Arc<dyn AsmContext>) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Adds a breakpoint that fires on every arrival.
    #[must_use]
    pub fn breakpoint(self, target: impl Into<String>) -> Self {
        self.breakpoint_with_passes(target, 1)
    }

    /// Adds a breakpoint that fires on every `passes`th arrival.
    #[must_use]
    pub fn breakpoint_with_passes(mut self, target: impl Into<String>, passes: u32) -> Self {
        self.breakpoints.push((target.into(), passes));
        self
    }

    /// Sets the run-time configuration.
    #[must_use]
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the machine.
    ///
    /// # Errors
    ///
    /// * [`SimError::Index`](crate::SimError::Index) for a DMEM image over 128 cells, a
    ///   program over 1024 instructions, a start address beyond the program, or a breakpoint
    ///   beyond IMEM capacity.
    /// * [`SimError::InvalidOperand`](crate::SimError::InvalidOperand) for an unresolvable
    ///   breakpoint target.
    pub fn build(self) -> SimResult<Machine> {
        let mut machine = Machine::new(self.config);
        machine.set_context(self.ctx);
        let program = self.program.unwrap_or_else(|| Program::from(Vec::new()));
        machine.reset(&self.dmem, program, self.start_pc, self.stop_addr, false)?;
        for (target, passes) in &self.breakpoints {
            machine.set_breakpoint(target, *passes)?;
        }
        Ok(machine)
    }
}

impl fmt::Debug for MachineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineBuilder")
            .field("dmem_len", &self.dmem.len())
            .field("program_len", &self.program.as_ref().map(|p| p.len()))
            .field("start_pc", &self.start_pc)
            .field("stop_addr", &self.stop_addr)
            .field("breakpoints", &self.breakpoints)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
