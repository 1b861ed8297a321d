//! TUI memory game (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_memory::{core,input,term,types}` and
//! holds the command-line configuration shared by the binary and the tests.

pub mod cli;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
