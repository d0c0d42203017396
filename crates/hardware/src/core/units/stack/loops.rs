//! Hardware Loop Stack.
//!
//! Each active hardware loop occupies one frame holding its remaining iteration count and
//! the addresses of its first and last body instruction. The stack only maintains the
//! counters; whether to jump back or fall through is decided by the step engine, which owns
//! the program counter.

use serde::Serialize;
use tracing::trace;

use super::BoundedStack;
use crate::common::constants::LOOP_STACK_SIZE;
use crate::common::error::{SimResult, StackKind};

/// One active hardware loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LoopFrame {
    /// Iterations remaining after the current one.
    pub count: u32,
    /// Address of the last instruction of the body.
    pub end: usize,
    /// Address of the first instruction of the body.
    pub start: usize,
}

/// Loop stack with a nesting limit of 16.
#[derive(Clone, Debug)]
pub struct LoopStack {
    frames: BoundedStack<LoopFrame>,
}

impl LoopStack {
    /// Creates an empty loop stack.
    pub fn new() -> Self {
        Self {
            frames: BoundedStack::new(StackKind::Loop, LOOP_STACK_SIZE),
        }
    }

    /// Opens a loop.
    ///
    /// # Arguments
    ///
    /// * `count` - Iterations remaining after the first pass through the body.
    /// * `end` - Address of the last body instruction.
    /// * `start` - Address of the first body instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackOverflow`](crate::SimError::StackOverflow) at 16 open loops.
    pub fn push(&mut self, count: u32, end: usize, start: usize) -> SimResult<()> {
        trace!(count, end, start, depth = self.depth(), "loop push");
        self.frames.push(LoopFrame { count, end, start })
    }

    /// Consumes one iteration of the innermost loop.
    ///
    /// # Returns
    ///
    /// `true` if the count was nonzero and has been decremented; `false` if it was already
    /// zero, in which case the caller pops the loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`](crate::SimError::StackUnderrun) if no loop is open.
    pub fn decrement_top(&mut self) -> SimResult<bool> {
        let top = self.frames.top_mut()?;
        if top.count > 0 {
            top.count -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Closes the innermost loop and returns its start address.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`](crate::SimError::StackUnderrun) if no loop is open.
    pub fn pop(&mut self) -> SimResult<usize> {
        let frame = self.frames.pop()?;
        trace!(start = frame.start, depth = self.depth(), "loop pop");
        Ok(frame.start)
    }

    /// End address of the innermost loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`](crate::SimError::StackUnderrun) if no loop is open.
    pub fn top_end_addr(&self) -> SimResult<usize> {
        Ok(self.frames.top()?.end)
    }

    /// Start address of the innermost loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`](crate::SimError::StackUnderrun) if no loop is open.
    pub fn top_start_addr(&self) -> SimResult<usize> {
        Ok(self.frames.top()?.start)
    }

    /// Number of open loops.
    pub fn depth(&self) -> usize {
        self.frames.depth()
    }

    /// Returns `true` if no loop is open.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Open loops, outermost first.
    pub fn frames(&self) -> &[LoopFrame] {
        self.frames.as_slice()
    }

    /// Discards every open loop.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Default for LoopStack {
    fn default() -> Self {
        Self::new()
    }
}
