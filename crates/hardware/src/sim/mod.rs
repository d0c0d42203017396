//! Machine and step engine.
//!
//! This module ties the architectural state together. It provides:
//! 1. **Machine:** Owner of all state and the operations instructions call.
//! 2. **Builder:** Validated construction from DMEM, program and debug inputs.
//! 3. **Step Engine:** The single-step state machine.
//! 4. **Snapshots:** Serializable views of the observable state.

/// Validated machine construction.
pub mod builder;

/// Machine state and operations.
pub mod machine;

/// Serializable state snapshots.
pub mod snapshot;

/// Single-step execution.
pub mod step;

pub use self::builder::MachineBuilder;
pub use self::machine::Machine;
pub use self::snapshot::MachineSnapshot;
pub use self::step::{BreakReport, StepOutcome};
