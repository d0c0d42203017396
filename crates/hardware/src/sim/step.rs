//! Step engine.
//!
//! Executes one instruction per call to [`Machine::step`]. Each step:
//! 1. **Halt Check:** Notes whether the step starts at the stop address or after `finish`.
//! 2. **Triggers:** Evaluates the force-break and the breakpoint table into one report.
//! 3. **Dispatch:** Counts the instruction in the statistics and runs it. A step that
//!    fails after dispatch is still counted.
//! 4. **Loop Tail:** At the end of the innermost hardware loop, jumps back or closes it.
//! 5. **PC Resolution:** Applies the requested jump or falls through; running off the end
//!    of IMEM ends execution.
//!
//! Breakpoint hits are reported, never acted on; pausing is the driver's decision.

use tracing::{debug, info};

use super::machine::Machine;
use crate::common::error::{SimError, SimResult};
use crate::isa::instruction::Execution;

/// Combined result of the two break triggers for one step.
///
/// Both triggers are evaluated on every step, so the breakpoint table advances its pass
/// counter even on a step where the force-break fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BreakReport {
    /// The force-break trigger fired.
    pub forced: bool,
    /// The breakpoint table fired at the step's address; carries the pass count.
    pub table_pass: Option<u32>,
}

impl BreakReport {
    /// Returns `true` if either trigger fired.
    pub const fn hit(&self) -> bool {
        self.forced || self.table_pass.is_some()
    }
}

/// Result of one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// `false` once execution has ended: the stop address was reached, the finish flag
    /// was raised, or the program ran off the end of IMEM.
    pub cont: bool,
    /// Trace line produced by the instruction.
    pub trace: String,
    /// Cycle cost of the instruction.
    pub cycles: u64,
    /// Break triggers that fired on entry to this step.
    pub brk: BreakReport,
}

impl Machine {
    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// * [`SimError::Reentrant`] if called from inside an executing instruction.
    /// * [`SimError::Index`] if the program counter is beyond IMEM.
    /// * [`SimError::InvalidJump`] if the next program counter is outside IMEM.
    /// * Any error returned by the instruction, or by the loop stack.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        self.ensure_idle("step")?;

        let halt = self.stop_addr == Some(self.pc) || self.finish;
        let brk = self.evaluate_breaks();

        let program = self.imem.program();
        let instr = program
            .get(self.pc)
            .ok_or_else(|| SimError::index("imem address", self.pc, program.len()))?;
        let cycles = instr.cycles();
        if self.config.collect_stats {
            self.stats.record_instr(&instr.mnemonic());
            self.stats.steps += 1;
            self.stats.cycles += cycles;
        }

        self.in_step = true;
        let result = instr.execute(self);
        self.in_step = false;
        let Execution { trace, mut jump } = result?;

        if self.config.trace_instructions {
            debug!(pc = self.pc, cycles, "{trace}");
        }

        if !self.loops.is_empty() && self.pc == self.loops.top_end_addr()? {
            if self.loops.decrement_top()? {
                jump = Some(self.loops.top_start_addr()?);
            } else {
                let _ = self.loops.pop()?;
                jump = None;
            }
        }

        let mut cont = true;
        match jump {
            Some(target) => {
                if target >= self.imem.len() {
                    return Err(SimError::InvalidJump {
                        target,
                        imem_len: self.imem.len(),
                    });
                }
                self.pc = target;
            }
            None if self.pc + 1 >= self.imem.len() => cont = false,
            None => self.pc += 1,
        }

        if halt {
            cont = false;
        }
        Ok(StepOutcome {
            cont,
            trace,
            cycles,
            brk,
        })
    }

    /// Runs both break triggers for the current program counter.
    fn evaluate_breaks(&mut self) -> BreakReport {
        let brk = BreakReport {
            forced: self
                .force_break
                .evaluate(self.calls.depth(), self.loops.depth()),
            table_pass: self.breakpoints.evaluate(self.pc),
        };
        if brk.hit() {
            if self.config.collect_stats {
                self.stats.breakpoint_hits += 1;
            }
            if self.config.report_breakpoints {
                match brk.table_pass {
                    Some(pass) => info!("Breakpoint hit at address {} at pass {}.", self.pc, pass),
                    None => info!("Breakpoint hit at address {}.", self.pc),
                }
            }
        }
        brk
    }
}
