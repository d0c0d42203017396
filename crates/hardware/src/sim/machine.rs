//! The coprocessor machine.
//!
//! `Machine` exclusively owns every piece of architectural state and exposes the operations
//! instruction objects use to read and modify it. It provides:
//! 1. **Registers:** Wide registers with sub-views, index registers, flags, CSR/WSR views.
//! 2. **Memory:** DMEM cell and byte-addressed access; read-only IMEM fetch.
//! 3. **Control Flow:** Program counter, stop address, finish flag, loop and call stacks.
//! 4. **Debugging:** Breakpoint table, force-break trigger, execution statistics.
//! 5. **Lifecycle:** `reset` and `clear_regs`, guarded against use from inside `execute`.
//!
//! The step engine lives in [`crate::sim::step`]; snapshots in [`crate::sim::snapshot`].

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::common::constants::{DMEM_DEPTH, IMEM_DEPTH, NUM_GPRS, XLEN_BYTES};
use crate::common::error::{SimError, SimResult, check_index};
use crate::common::word::WideWord;
use crate::config::MachineConfig;
use crate::core::arch::csr::{Csr, Wsr};
use crate::core::arch::flags::{Flag, FlagSet};
use crate::core::arch::gpr::{Gpr, GprSlot};
use crate::core::arch::wdr::{Granularity, RegId, RegisterFile, SpecialReg};
use crate::core::units::debug::{
    BreakTarget, BreakpointTable, ForceBreak, ForceBreakState, ForceCondition,
};
use crate::core::units::stack::{CallStack, LoopFrame, LoopStack};
use crate::isa::context::AsmContext;
use crate::isa::instruction::{Instruction, Program};
use crate::soc::memory::{Dmem, Imem};
use crate::stats::ExecStats;

/// Architectural state of one coprocessor.
pub struct Machine {
    pub(crate) regs: RegisterFile,
    pub(crate) gpr: Gpr,
    pub(crate) flags: FlagSet,
    pub(crate) dmem: Dmem,
    pub(crate) imem: Imem,
    pub(crate) loops: LoopStack,
    pub(crate) calls: CallStack,
    pub(crate) breakpoints: BreakpointTable,
    pub(crate) force_break: ForceBreak,
    pub(crate) ctx: Option<Arc<dyn AsmContext>>,
    pub(crate) stats: ExecStats,
    pub(crate) config: MachineConfig,
    pub(crate) pc: usize,
    pub(crate) stop_addr: Option<usize>,
    pub(crate) finish: bool,
    /// Set while an instruction's `execute` is running.
    pub(crate) in_step: bool,
}

impl Machine {
    /// Creates a machine with an empty program, zeroed DMEM and cleared registers.
    pub fn new(config: MachineConfig) -> Self {
        Self {
            regs: RegisterFile::new(config.uninit_reads),
            gpr: Gpr::new(),
            flags: FlagSet::new(),
            dmem: Dmem::new(config.uninit_reads),
            imem: Imem::empty(),
            loops: LoopStack::new(),
            calls: CallStack::new(),
            breakpoints: BreakpointTable::new(),
            force_break: ForceBreak::new(),
            ctx: None,
            stats: ExecStats::new(),
            config,
            pc: 0,
            stop_addr: None,
            finish: false,
            in_step: false,
        }
    }

    pub(crate) const fn ensure_idle(&self, op: &'static str) -> SimResult<()> {
        if self.in_step {
            Err(SimError::Reentrant(op))
        } else {
            Ok(())
        }
    }

    // ══════════════════════════════════════════════════════════
    // Wide registers
    // ══════════════════════════════════════════════════════════

    /// Reads a wide register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a general index outside `0..32`.
    pub fn get_reg(&self, id: impl Into<RegId>) -> SimResult<WideWord> {
        self.regs.get(id.into())
    }

    /// Writes a whole wide register, marking all of it valid.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad general index and [`SimError::InvalidOperand`]
    /// for `rnd`.
    pub fn set_reg(&mut self, id: impl Into<RegId>, value: WideWord) -> SimResult<()> {
        self.regs.set(id.into(), value, Granularity::Full)
    }

    /// Writes a wide register, marking only `portion` valid.
    ///
    /// # Errors
    ///
    /// See [`Machine::set_reg`].
    pub fn set_reg_portion(
        &mut self,
        id: impl Into<RegId>,
        value: WideWord,
        portion: Granularity,
    ) -> SimResult<()> {
        self.regs.set(id.into(), value, portion)
    }

    /// Reads one limb of a wide register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad register or limb index.
    pub fn get_reg_limb(&self, id: impl Into<RegId>, limb: usize) -> SimResult<u32> {
        self.regs.limb(id.into(), limb)
    }

    /// Replaces one limb of a wide register.
    ///
    /// # Errors
    ///
    /// See [`Machine::set_reg`].
    pub fn set_reg_limb(&mut self, id: impl Into<RegId>, limb: usize, val: u32) -> SimResult<()> {
        self.regs.set_limb(id.into(), limb, val)
    }

    /// Replaces the lower or upper half of one limb.
    ///
    /// # Errors
    ///
    /// See [`Machine::set_reg`].
    pub fn set_reg_half_limb(
        &mut self,
        id: impl Into<RegId>,
        limb: usize,
        upper: bool,
        val: u16,
    ) -> SimResult<()> {
        self.regs.set_half_limb(id.into(), limb, upper, val)
    }

    /// Reads one 64-bit quarter-word.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad register or quarter-word index.
    pub fn get_reg_qw(&self, id: impl Into<RegId>, qw: usize) -> SimResult<u64> {
        self.regs.quarter_word(id.into(), qw)
    }

    /// Replaces one 64-bit quarter-word.
    ///
    /// # Errors
    ///
    /// See [`Machine::set_reg`].
    pub fn set_reg_qw(&mut self, id: impl Into<RegId>, qw: usize, val: u64) -> SimResult<()> {
        self.regs.set_quarter_word(id.into(), qw, val)
    }

    /// Reads one 128-bit half-word.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for a bad register or half-word index.
    pub fn get_reg_half_word(&self, id: impl Into<RegId>, hw: usize) -> SimResult<u128> {
        self.regs.half_word(id.into(), hw)
    }

    /// Replaces one 128-bit half-word.
    ///
    /// # Errors
    ///
    /// See [`Machine::set_reg`].
    pub fn set_reg_half_word(
        &mut self,
        id: impl Into<RegId>,
        hw: usize,
        val: u128,
    ) -> SimResult<()> {
        self.regs.set_half_word(id.into(), hw, val)
    }

    /// Validity flags of general register `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `idx` is not in `0..32`.
    pub fn get_reg_valid_half_limbs(&self, idx: usize) -> SimResult<[bool; 16]> {
        self.regs.valid_half_limbs(idx)
    }

    /// Reads the accumulator.
    pub const fn get_acc(&self) -> WideWord {
        self.regs.special(SpecialReg::Acc)
    }

    /// Writes the accumulator.
    pub const fn set_acc(&mut self, value: WideWord) {
        self.regs.set_acc(value);
    }

    /// The wide register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    // ══════════════════════════════════════════════════════════
    // Index registers
    // ══════════════════════════════════════════════════════════

    /// Reads index register `idx`.
    ///
    /// Reading `x1` pops the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for `idx` outside `0..32` and
    /// `StackUnderrun { stack: Call }` when `x1` is read with an empty call stack.
    pub fn get_gpr(&mut self, idx: usize) -> SimResult<u32> {
        match GprSlot::classify(idx)? {
            GprSlot::Zero => Ok(0),
            GprSlot::CallStack => self.calls.pop(),
            GprSlot::Plain(offset) => Ok(self.gpr.read(offset)),
            GprSlot::Alias { reg, limb } => self.regs.special(reg).limb(limb),
        }
    }

    /// Writes index register `idx`.
    ///
    /// Writing `x0` is discarded; writing `x1` pushes the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for `idx` outside `0..32` and
    /// [`SimError::StackOverflow`] when `x1` is written with a full call stack.
    pub fn set_gpr(&mut self, idx: usize, val: u32) -> SimResult<()> {
        match GprSlot::classify(idx)? {
            GprSlot::Zero => Ok(()),
            GprSlot::CallStack => self.calls.push(val),
            GprSlot::Plain(offset) => {
                self.gpr.write(offset, val);
                Ok(())
            }
            GprSlot::Alias { reg, limb } => self.regs.set_limb(reg.into(), limb, val),
        }
    }

    /// Adds `delta` to index register `idx`, wrapping modulo 2^32.
    fn add_gpr(&mut self, idx: usize, delta: u32) -> SimResult<()> {
        let val = self.get_gpr(idx)?;
        self.set_gpr(idx, val.wrapping_add(delta))
    }

    /// Increments index register `idx` by one.
    ///
    /// # Errors
    ///
    /// See [`Machine::get_gpr`] and [`Machine::set_gpr`].
    pub fn inc_gpr(&mut self, idx: usize) -> SimResult<()> {
        self.add_gpr(idx, 1)
    }

    /// Increments index register `idx` by the word size in bytes (32).
    ///
    /// # Errors
    ///
    /// See [`Machine::get_gpr`] and [`Machine::set_gpr`].
    pub fn inc_gpr_wlen_bytes(&mut self, idx: usize) -> SimResult<()> {
        self.add_gpr(idx, XLEN_BYTES as u32)
    }

    /// Values of all index registers without side effects.
    ///
    /// `x1` has no storage of its own and reads as 0 here; see [`Machine::call_stack`].
    pub fn gprs(&self) -> [u32; NUM_GPRS] {
        std::array::from_fn(|idx| match GprSlot::classify(idx) {
            Ok(GprSlot::Plain(offset)) => self.gpr.read(offset),
            Ok(GprSlot::Alias { reg, limb }) => self.regs.special(reg).to_limbs()[limb],
            _ => 0,
        })
    }

    // ══════════════════════════════════════════════════════════
    // Flags and status registers
    // ══════════════════════════════════════════════════════════

    /// Reads one flag.
    pub const fn get_flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    /// Writes one flag.
    pub const fn set_flag(&mut self, flag: Flag, val: bool) {
        self.flags.set(flag, val);
    }

    /// The flag set.
    pub const fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Mutable access to the flag set, for the derived-flag updates.
    pub const fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    /// Reads a 32-bit control/status register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unmapped address.
    pub fn get_csr(&self, addr: u32) -> SimResult<u32> {
        match Csr::decode(addr)? {
            Csr::Flags => Ok(u32::from(self.flags.packed())),
            Csr::ModLimb(limb) => self.regs.special(SpecialReg::Mod).limb(limb),
            Csr::Rng => self.regs.special(SpecialReg::Rnd).limb(0),
        }
    }

    /// Writes a 32-bit control/status register.
    ///
    /// Only the low 8 bits matter for the flag CSR; writes to the random-value CSR are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unmapped address.
    pub fn set_csr(&mut self, addr: u32, val: u32) -> SimResult<()> {
        match Csr::decode(addr)? {
            Csr::Flags => {
                self.flags.set_packed(val as u8);
                Ok(())
            }
            Csr::ModLimb(limb) => self.regs.set_limb(SpecialReg::Mod.into(), limb, val),
            Csr::Rng => {
                trace!(addr, "write to read-only rnd CSR ignored");
                Ok(())
            }
        }
    }

    /// Reads a 256-bit wide status register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unmapped index.
    pub fn get_wsr(&self, idx: usize) -> SimResult<WideWord> {
        Ok(match Wsr::decode(idx)? {
            Wsr::Mod => self.regs.special(SpecialReg::Mod),
            Wsr::Rnd => self.regs.special(SpecialReg::Rnd),
        })
    }

    /// Writes a 256-bit wide status register; writes to `rnd` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unmapped index.
    pub fn set_wsr(&mut self, idx: usize, value: WideWord) -> SimResult<()> {
        match Wsr::decode(idx)? {
            Wsr::Mod => self.regs.set(SpecialReg::Mod.into(), value, Granularity::Full),
            Wsr::Rnd => {
                trace!(idx, "write to read-only rnd WSR ignored");
                Ok(())
            }
        }
    }

    // ══════════════════════════════════════════════════════════
    // Memory
    // ══════════════════════════════════════════════════════════

    /// Reads DMEM cell `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for `addr` outside `0..128`.
    pub fn get_dmem(&self, addr: usize) -> SimResult<WideWord> {
        self.dmem.get(addr)
    }

    /// Writes DMEM cell `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for `addr` outside `0..128`.
    pub fn set_dmem(&mut self, addr: usize, value: WideWord) -> SimResult<()> {
        self.dmem.set(addr, value)
    }

    /// Reads the 32-bit limb at DMEM byte address `byte_addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if the address lies beyond DMEM.
    pub fn get_dmem_limb(&self, byte_addr: usize) -> SimResult<u32> {
        self.dmem.get_limb(byte_addr)
    }

    /// Writes the 32-bit limb at DMEM byte address `byte_addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if the address lies beyond DMEM.
    pub fn set_dmem_limb(&mut self, byte_addr: usize, val: u32) -> SimResult<()> {
        self.dmem.set_limb(byte_addr, val)
    }

    /// Every DMEM cell, address 0 first.
    pub fn get_full_dmem(&self) -> Vec<WideWord> {
        self.dmem.cells().to_vec()
    }

    /// The data memory.
    pub const fn dmem(&self) -> &Dmem {
        &self.dmem
    }

    /// Writes DMEM to `path` as 64-digit hex lines.
    ///
    /// # Errors
    ///
    /// Propagates file creation and write errors.
    pub fn dump_dmem(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "dumping dmem");
        self.dmem.dump_hex(BufWriter::new(File::create(path)?))
    }

    /// Fetches the instruction at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `addr` is beyond the program.
    pub fn get_instruction(&self, addr: usize) -> SimResult<&dyn Instruction> {
        self.imem.get_instruction(addr)
    }

    /// Number of instructions in IMEM.
    pub fn imem_len(&self) -> usize {
        self.imem.len()
    }

    // ══════════════════════════════════════════════════════════
    // Control flow
    // ══════════════════════════════════════════════════════════

    /// Current program counter.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Sets the program counter, optionally clearing the finish flag.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if `addr` is beyond the program.
    pub fn set_pc(&mut self, addr: usize, clear_finish: bool) -> SimResult<()> {
        self.pc = check_index("pc", addr, self.imem.len())?;
        if clear_finish {
            self.finish = false;
        }
        Ok(())
    }

    /// Advances the program counter by one.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] if that would move past the last instruction.
    pub fn inc_pc(&mut self) -> SimResult<()> {
        self.pc = check_index("pc", self.pc + 1, self.imem.len())?;
        Ok(())
    }

    /// Address at which the step engine halts, if any.
    pub const fn stop_addr(&self) -> Option<usize> {
        self.stop_addr
    }

    /// Sets the halt address.
    pub const fn set_stop_addr(&mut self, addr: Option<usize>) {
        self.stop_addr = addr;
    }

    /// Raises the finish flag; the next step halts.
    pub const fn finish(&mut self) {
        self.finish = true;
    }

    /// Current finish flag.
    pub const fn finish_flag(&self) -> bool {
        self.finish
    }

    /// Sets or clears the finish flag.
    pub const fn set_finish_flag(&mut self, val: bool) {
        self.finish = val;
    }

    /// Opens a hardware loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackOverflow`] at 16 nested loops.
    pub fn push_loop_stack(&mut self, count: u32, end: usize, start: usize) -> SimResult<()> {
        self.loops.push(count, end, start)
    }

    /// Consumes one iteration of the innermost loop; see [`LoopStack::decrement_top`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`] if no loop is open.
    pub fn dec_top_loop_cnt(&mut self) -> SimResult<bool> {
        self.loops.decrement_top()
    }

    /// Closes the innermost loop and returns its start address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`] if no loop is open.
    pub fn pop_loop_stack(&mut self) -> SimResult<usize> {
        self.loops.pop()
    }

    /// End address of the innermost loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`] if no loop is open.
    pub fn get_top_loop_end_addr(&self) -> SimResult<usize> {
        self.loops.top_end_addr()
    }

    /// Start address of the innermost loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`] if no loop is open.
    pub fn get_top_loop_start_addr(&self) -> SimResult<usize> {
        self.loops.top_start_addr()
    }

    /// Open loops, outermost first.
    pub fn loop_stack(&self) -> &[LoopFrame] {
        self.loops.frames()
    }

    /// Pushes a return address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackOverflow`] at depth 16.
    pub fn push_call_stack(&mut self, addr: u32) -> SimResult<()> {
        self.calls.push(addr)
    }

    /// Pops a return address.
    ///
    /// # Errors
    ///
    /// Returns `StackUnderrun { stack: Call }` if empty.
    pub fn pop_call_stack(&mut self) -> SimResult<u32> {
        self.calls.pop()
    }

    /// Return addresses, oldest first.
    pub fn call_stack(&self) -> &[u32] {
        self.calls.addrs()
    }

    // ══════════════════════════════════════════════════════════
    // Debugging
    // ══════════════════════════════════════════════════════════

    fn resolve_target(&self, target: &str) -> SimResult<usize> {
        target.parse::<BreakTarget>()?.resolve(self.ctx.as_deref())
    }

    /// Toggles the breakpoint at `target` (hex, decimal, or symbol name).
    ///
    /// # Returns
    ///
    /// `true` if a breakpoint was inserted, `false` if one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for an unresolvable target or zero pass count,
    /// and [`SimError::Index`] for an address beyond IMEM capacity.
    pub fn toggle_breakpoint(&mut self, target: &str, passes: u32) -> SimResult<bool> {
        let addr = self.resolve_target(target)?;
        let inserted = self.breakpoints.toggle(addr, passes)?;
        debug!(addr, passes, inserted, "breakpoint toggled");
        Ok(inserted)
    }

    /// Sets the breakpoint at `target`, replacing any existing one.
    ///
    /// # Errors
    ///
    /// See [`Machine::toggle_breakpoint`].
    pub fn set_breakpoint(&mut self, target: &str, passes: u32) -> SimResult<()> {
        let addr = self.resolve_target(target)?;
        self.breakpoints.set(addr, passes)
    }

    /// The breakpoint table.
    pub const fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// Mutable access to the breakpoint table, for address-keyed edits.
    pub const fn breakpoints_mut(&mut self) -> &mut BreakpointTable {
        &mut self.breakpoints
    }

    /// Arms the force-break trigger.
    pub const fn arm_force_break(&mut self, cond: ForceCondition) {
        self.force_break.arm(cond);
    }

    /// Disarms the force-break trigger.
    pub const fn disarm_force_break(&mut self) {
        self.force_break.disarm();
    }

    /// Observable force-break configuration.
    pub const fn force_break_state(&self) -> ForceBreakState {
        self.force_break.state()
    }

    /// Installs or removes the assembler context.
    pub fn set_context(&mut self, ctx: Option<Arc<dyn AsmContext>>) {
        self.ctx = ctx;
    }

    /// The assembler context, if any.
    pub fn context(&self) -> Option<&dyn AsmContext> {
        self.ctx.as_deref()
    }

    /// Execution statistics.
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }

    /// Mutable access to the execution statistics.
    pub const fn stats_mut(&mut self) -> &mut ExecStats {
        &mut self.stats
    }

    /// Run-time configuration.
    pub const fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Replaces the run-time configuration.
    pub fn set_config(&mut self, config: MachineConfig) {
        self.regs.set_uninit_policy(config.uninit_reads);
        self.dmem.set_uninit_policy(config.uninit_reads);
        self.config = config;
    }

    // ══════════════════════════════════════════════════════════
    // Lifecycle
    // ══════════════════════════════════════════════════════════

    /// Reloads the machine with a new DMEM image and program.
    ///
    /// Clears the flags, register validity, both stacks and the finish flag; loads DMEM
    /// (cells past the image are zero and uninitialized); installs `program`; sets the
    /// program counter and stop address. The stop address defaults to the last instruction.
    /// With `clear_regs`, register values are cleared as by [`Machine::clear_regs`] before
    /// `start_pc` is applied.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Reentrant`] from inside an executing instruction, and
    /// [`SimError::Index`] for an oversized image or program or a `start_pc` beyond a
    /// non-empty program. A failed reset leaves the machine untouched.
    pub fn reset(
        &mut self,
        dmem: &[WideWord],
        program: Program,
        start_pc: usize,
        stop_addr: Option<usize>,
        clear_regs: bool,
    ) -> SimResult<()> {
        self.ensure_idle("reset")?;
        if program.len() > IMEM_DEPTH {
            return Err(SimError::index("imem length", program.len(), IMEM_DEPTH + 1));
        }
        if dmem.len() > DMEM_DEPTH {
            return Err(SimError::index("dmem image length", dmem.len(), DMEM_DEPTH + 1));
        }
        if !program.is_empty() {
            let _ = check_index("start pc", start_pc, program.len())?;
        }
        self.flags.clear();
        if clear_regs {
            self.clear_values();
        }
        self.regs.clear_validity();
        self.dmem.load(dmem)?;
        self.stop_addr = stop_addr.or_else(|| program.len().checked_sub(1));
        self.imem = Imem::new(program);
        self.loops.clear();
        self.calls.clear();
        self.pc = start_pc;
        self.finish = false;
        debug!(
            imem_len = self.imem.len(),
            dmem_len = dmem.len(),
            start_pc,
            stop_addr = ?self.stop_addr,
            "machine reset"
        );
        Ok(())
    }

    fn clear_values(&mut self) {
        self.regs.clear_values();
        self.gpr.clear();
        self.pc = 0;
    }

    /// Zeroes all wide registers and plain index registers, restores `rnd`, and sets the
    /// program counter to 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Reentrant`] from inside an executing instruction.
    pub fn clear_regs(&mut self) -> SimResult<()> {
        self.ensure_idle("clear_regs")?;
        self.clear_values();
        Ok(())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("pc", &self.pc)
            .field("stop_addr", &self.stop_addr)
            .field("finish", &self.finish)
            .field("flags", &self.flags)
            .field("imem", &self.imem)
            .field("loop_depth", &self.loops.depth())
            .field("call_depth", &self.calls.depth())
            .field("breakpoints", &self.breakpoints.len())
            .field("has_context", &self.ctx.is_some())
            .finish_non_exhaustive()
    }
}
