//! Big-number coprocessor simulator core.
//!
//! This crate models the architectural state of a 256-bit big-number coprocessor and steps
//! pre-decoded instruction objects against it. It provides:
//! 1. **Wide Words:** 256-bit values with limb, half-limb, quarter-word and half-word views.
//! 2. **Registers:** 32 wide data registers with validity tracking, special registers, 32
//!    index registers, flags and CSR/WSR views.
//! 3. **Memory:** 128-cell DMEM with initialization tracking and a read-only IMEM.
//! 4. **Control Flow:** Hardware loop and call stacks, stop address and finish flag.
//! 5. **Debugging:** Pass-counted breakpoints, a one-shot force-break, and statistics.
//! 6. **Step Engine:** One-instruction steps that report breaks and ends of execution.
//!
//! # Examples
//!
//! ```
//! use bnsim_core::{Execution, Instruction, Machine, MachineBuilder, SimResult, WideWord};
//!
//! struct Inc;
//!
//! impl Instruction for Inc {
//!     fn cycles(&self) -> u64 {
//!         1
//!     }
//!     fn asm_str(&self) -> (u32, String) {
//!         (0, "inc w0".into())
//!     }
//!     fn execute(&self, m: &mut Machine) -> SimResult<Execution> {
//!         let v = m.get_reg(0usize)?;
//!         let (sum, _) = bnsim_core::core::units::alu::add(v, WideWord::ONE, false);
//!         m.set_reg(0usize, sum)?;
//!         Ok(Execution::next("w0 += 1"))
//!     }
//! }
//!
//! let mut m = MachineBuilder::new()
//!     .instructions(vec![Box::new(Inc), Box::new(Inc)])
//!     .build()
//!     .unwrap();
//! m.set_reg(0usize, WideWord::ZERO).unwrap();
//! while m.step().unwrap().cont {}
//! assert_eq!(m.get_reg(0usize).unwrap(), WideWord::from(2u32));
//! ```

/// Common types and constants (wide words, errors).
pub mod common;
/// Run-time configuration.
pub mod config;
/// Register state and functional units.
pub mod core;
/// Instruction object and assembler context contracts.
pub mod isa;
/// Machine, builder, step engine and snapshots.
pub mod sim;
/// On-chip memories.
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Error and result types.
pub use crate::common::{SimError, SimResult};
/// 256-bit value type.
pub use crate::common::WideWord;
/// Run-time configuration.
pub use crate::config::{MachineConfig, UninitPolicy};
/// Instruction contract.
pub use crate::isa::instruction::{Execution, Instruction, Program};
/// Machine and its construction.
pub use crate::sim::{Machine, MachineBuilder, StepOutcome};
