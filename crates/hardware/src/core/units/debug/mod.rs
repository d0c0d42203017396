//! Debug triggers.
//!
//! Two independent evaluators run on every step. Their results are combined by the step
//! engine into one report; neither halts execution on its own.
//! 1. **Breakpoint Table:** Persistent, pass-counted address breakpoints.
//! 2. **Force-Break:** A one-shot trigger, optionally conditioned on a stack depth.

/// Pass-counted address breakpoints.
pub mod breakpoints;

/// One-shot conditional break trigger.
pub mod force_break;

pub use self::breakpoints::{BreakTarget, Breakpoint, BreakpointTable};
pub use self::force_break::{ForceBreak, ForceBreakState, ForceCondition};
