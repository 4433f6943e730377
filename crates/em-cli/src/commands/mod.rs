//! Menu action implementations.

pub mod add;
pub mod display;
pub mod process;
