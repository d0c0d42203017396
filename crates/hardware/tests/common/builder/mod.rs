//! Builders for test instructions and programs.


/// Ready-made programs.
pub mod program;
