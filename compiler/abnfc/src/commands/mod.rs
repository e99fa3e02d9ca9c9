//! Command handlers for the `abnf` CLI.
//!
//! Each submodule implements one subcommand; `main.rs` only dispatches.

mod check;
mod productions;

pub use check::{check_files, run_check, write_results, FileCheck};
pub use productions::list_productions;
