//! calc-demo - A small recursive calculator used as a debugger target
//!
//! The library exposes the calculator itself along with the CLI plumbing
//! used by the `calc-demo` binary.

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod common;

// Re-export commonly used types for tests
pub use calculator::Calculator;
pub use common::{Error, Result};
