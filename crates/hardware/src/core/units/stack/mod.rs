//! Bounded hardware stacks.
//!
//! Both the loop stack and the call stack are fixed-capacity LIFO structures that report
//! overflow and underrun instead of wrapping or overwriting. The shared storage is
//! [`BoundedStack`]; [`LoopStack`] and [`CallStack`] add the per-stack operations.

/// Subroutine return-address stack.
pub mod calls;

/// Hardware loop stack.
pub mod loops;

pub use self::calls::CallStack;
pub use self::loops::{LoopFrame, LoopStack};

use crate::common::error::{SimError, SimResult, StackKind};

/// Fixed-capacity stack that fails on overflow and underrun.
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    /// Entries, bottom first.
    entries: Vec<T>,
    /// Maximum number of entries.
    capacity: usize,
    /// Which hardware stack this is, for error reporting.
    kind: StackKind,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack holding at most `capacity` entries.
    pub fn new(kind: StackKind, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            kind,
        }
    }

    /// Pushes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackOverflow`] if the stack is full.
    pub fn push(&mut self, entry: T) -> SimResult<()> {
        if self.entries.len() >= self.capacity {
            return Err(SimError::StackOverflow { stack: self.kind });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Removes and returns the top entry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`] if the stack is empty.
    pub fn pop(&mut self) -> SimResult<T> {
        self.entries
            .pop()
            .ok_or(SimError::StackUnderrun { stack: self.kind })
    }

    /// Borrows the top entry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`] if the stack is empty.
    pub fn top(&self) -> SimResult<&T> {
        self.entries
            .last()
            .ok_or(SimError::StackUnderrun { stack: self.kind })
    }

    /// Mutably borrows the top entry.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StackUnderrun`] if the stack is empty.
    pub fn top_mut(&mut self) -> SimResult<&mut T> {
        self.entries
            .last_mut()
            .ok_or(SimError::StackUnderrun { stack: self.kind })
    }

    /// Current number of entries.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is on the stack.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, bottom first.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
