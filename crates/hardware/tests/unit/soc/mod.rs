/// Data memory.
pub mod dmem;
