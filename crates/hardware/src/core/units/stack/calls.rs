//! Call Stack.
//!
//! Holds subroutine return addresses. It is reached through index register `x1`: a write
//! pushes, a read pops. Popping an empty stack yields
//! `SimError::StackUnderrun { stack: StackKind::Call }`, which callers can single out as a
//! return with nothing to return to.

use tracing::trace;

use super::BoundedStack;
use crate::common::constants::CALL_STACK_SIZE;
use crate::common::error::{SimResult, StackKind};

/// Return-address stack with a depth limit of 16.
#[derive(Clone, Debug)]
pub struct CallStack {
    addrs: BoundedStack<u32>,
}

impl CallStack {
    /// Creates an empty call stack.
    pub fn new() -> Self {
        Self {
            addrs: BoundedStack::new(StackKind::Call, CALL_STACK_SIZE),
        }
    }

    /// Pushes a return address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackOverflow`](crate::SimError::StackOverflow) at depth 16.
    pub fn push(&mut self, addr: u32) -> SimResult<()> {
        trace!(addr, depth = self.depth(), "call push");
        self.addrs.push(addr)
    }

    /// Pops the most recent return address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`](crate::SimError::StackUnderrun) if empty.
    pub fn pop(&mut self) -> SimResult<u32> {
        let addr = self.addrs.pop()?;
        trace!(addr, depth = self.depth(), "call pop");
        Ok(addr)
    }

    /// Number of stored return addresses.
    pub fn depth(&self) -> usize {
        self.addrs.depth()
    }

    /// Return addresses, oldest first.
    pub fn addrs(&self) -> &[u32] {
        self.addrs.as_slice()
    }

    /// Discards every return address.
    pub fn clear(&mut self) {
        self.addrs.clear();
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}
