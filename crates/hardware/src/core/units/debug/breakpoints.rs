//! Breakpoint Table.
//!
//! Maps instruction addresses to pass-counted breakpoints. A breakpoint with pass count `n`
//! fires on the `n`th arrival at its address, then starts counting again; it does not fire
//! on every arrival.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::common::constants::IMEM_DEPTH;
use crate::common::error::{SimError, SimResult, check_index};
use crate::isa::context::AsmContext;

/// One breakpoint entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    /// Number of arrivals needed to fire.
    pub passes: u32,
    /// Arrivals counted so far, starting at 1.
    pub counter: u32,
}

impl Breakpoint {
    /// Creates a breakpoint that fires on arrival number `passes`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for a pass count of zero, which could never fire.
    pub fn new(passes: u32) -> SimResult<Self> {
        if passes == 0 {
            return Err(SimError::InvalidOperand(
                "breakpoint pass count must be at least 1".into(),
            ));
        }
        Ok(Self { passes, counter: 1 })
    }
}

/// A breakpoint location as written by a user: an address or a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreakTarget {
    /// Instruction address.
    Addr(usize),
    /// Function or label name, resolved through an [`AsmContext`].
    Symbol(String),
}

impl BreakTarget {
    /// Resolves the target to an instruction address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidOperand`] for a symbol when no context is available or the
    /// context does not know the name.
    pub fn resolve(&self, ctx: Option<&dyn AsmContext>) -> SimResult<usize> {
        match self {
            Self::Addr(addr) => Ok(*addr),
            Self::Symbol(name) => {
                let ctx = ctx.ok_or_else(|| {
                    SimError::InvalidOperand(format!(
                        "cannot resolve label {name:?} without an assembler context"
                    ))
                })?;
                ctx.resolve(name)
                    .ok_or_else(|| SimError::InvalidOperand(format!("unknown label: {name}")))
            }
        }
    }
}

impl From<usize> for BreakTarget {
    fn from(addr: usize) -> Self {
        Self::Addr(addr)
    }
}

impl FromStr for BreakTarget {
    type Err = SimError;

    /// Parses `0x`-prefixed hex, decimal, or otherwise a symbol name.
    fn from_str(s: &str) -> SimResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SimError::InvalidOperand("empty breakpoint target".into()));
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return usize::from_str_radix(hex, 16)
                .map(Self::Addr)
                .map_err(|_| SimError::InvalidOperand(format!("invalid address: {s}")));
        }
        Ok(s.parse::<usize>().map_or_else(|_| Self::Symbol(s.to_owned()), Self::Addr))
    }
}

/// Address-keyed breakpoint table.
#[derive(Clone, Debug, Default)]
pub struct BreakpointTable {
    entries: BTreeMap<usize, Breakpoint>,
}

impl BreakpointTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the breakpoint at `addr` if present, otherwise inserts one.
    ///
    /// # Returns
    ///
    /// `true` if a breakpoint was inserted, `false` if one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Index`] for an address beyond IMEM capacity and
    /// [`SimError::InvalidOperand`] for a zero pass count.
    pub fn toggle(&mut self, addr: usize, passes: u32) -> SimResult<bool> {
        let addr = check_index("breakpoint address", addr, IMEM_DEPTH)?;
        if self.entries.remove(&addr).is_some() {
            return Ok(false);
        }
        let _ = self.entries.insert(addr, Breakpoint::new(passes)?);
        Ok(true)
    }

    /// Inserts a breakpoint at `addr`, replacing any existing one and its counter.
    ///
    /// # Errors
    ///
    /// See [`BreakpointTable::toggle`].
    pub fn set(&mut self, addr: usize, passes: u32) -> SimResult<()> {
        let addr = check_index("breakpoint address", addr, IMEM_DEPTH)?;
        let _ = self.entries.insert(addr, Breakpoint::new(passes)?);
        Ok(())
    }

    /// Removes the breakpoint at `addr`, returning it if one existed.
    pub fn remove(&mut self, addr: usize) -> Option<Breakpoint> {
        self.entries.remove(&addr)
    }

    /// Registers an arrival at `addr`.
    ///
    /// # Returns
    ///
    /// The pass count if the breakpoint fired on this arrival; its counter is then reset
    /// to 1. Otherwise the counter is advanced and `None` is returned.
    pub fn evaluate(&mut self, addr: usize) -> Option<u32> {
        let bp = self.entries.get_mut(&addr)?;
        if bp.counter == bp.passes {
            bp.counter = 1;
            Some(bp.passes)
        } else {
            bp.counter += 1;
            None
        }
    }

    /// Looks up the breakpoint at `addr`.
    pub fn get(&self, addr: usize) -> Option<&Breakpoint> {
        self.entries.get(&addr)
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no breakpoint is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Breakpoints in address order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Breakpoint)> + '_ {
        self.entries.iter().map(|(&addr, bp)| (addr, bp))
    }

    /// Full table, keyed by address.
    pub const fn entries(&self) -> &BTreeMap<usize, Breakpoint> {
        &self.entries
    }

    /// Removes every breakpoint.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
