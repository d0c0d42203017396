//! `mockall` doubles for the machine's collaborators.

/// Assembler context mock.
pub mod context;
