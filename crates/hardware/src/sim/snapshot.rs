//! Machine snapshots.
//!
//! A [`MachineSnapshot`] is a serializable copy of the full observable state: registers,
//! index registers, flags, stacks, DMEM with its initialization bitmap, breakpoints,
//! force-break configuration and statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use super::machine::Machine;
use crate::common::constants::NUM_GPRS;
use crate::common::word::WideWord;
use crate::core::arch::flags::Flag;
use crate::core::arch::wdr::SpecialReg;
use crate::core::units::debug::{Breakpoint, ForceBreakState};
use crate::core::units::stack::LoopFrame;
use crate::stats::ExecStats;

/// Observable state of a machine at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    /// Program counter.
    pub pc: usize,
    /// Stop address.
    pub stop_addr: Option<usize>,
    /// Finish flag.
    pub finish: bool,
    /// General wide registers `w0`-`w31`.
    pub wdrs: Vec<WideWord>,
    /// Half-limb validity masks of `w0`-`w31` (bit `n` = slot `n`).
    pub wdr_valid: Vec<u16>,
    /// Special registers by name.
    pub special: BTreeMap<&'static str, WideWord>,
    /// Index registers `x0`-`x31` (`x1` reads as 0).
    pub gprs: [u32; NUM_GPRS],
    /// Flags by name.
    pub flags: BTreeMap<&'static str, bool>,
    /// Open hardware loops, outermost first.
    pub loop_stack: Vec<LoopFrame>,
    /// Return addresses, oldest first.
    pub call_stack: Vec<u32>,
    /// DMEM cells.
    pub dmem: Vec<WideWord>,
    /// DMEM initialized flags.
    pub dmem_init: Vec<bool>,
    /// Breakpoint table.
    pub breakpoints: BTreeMap<usize, Breakpoint>,
    /// Force-break configuration.
    pub force_break: ForceBreakState,
    /// Execution statistics, including the mnemonic histogram.
    pub stats: ExecStats,
}

impl MachineSnapshot {
    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Machine {
    /// Captures the observable state.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            pc: self.pc,
            stop_addr: self.stop_addr,
            finish: self.finish,
            wdrs: self.regs.wdrs().to_vec(),
            wdr_valid: self.regs.valid_masks().to_vec(),
            special: SpecialReg::ALL
                .into_iter()
                .map(|reg| (reg.name(), self.regs.special(reg)))
                .collect(),
            gprs: self.gprs(),
            flags: Flag::ALL
                .into_iter()
                .map(|flag| (flag.name(), self.flags.get(flag)))
                .collect(),
            loop_stack: self.loops.frames().to_vec(),
            call_stack: self.calls.addrs().to_vec(),
            dmem: self.dmem.cells().to_vec(),
            dmem_init: self.dmem.init_bitmap().to_vec(),
            breakpoints: self.breakpoints.entries().clone(),
            force_break: self.force_break.state(),
            stats: self.stats.clone(),
        }
    }
}
