//! ABNF grammar checker.
//!
//! The program around `abnf_core`: loads grammar files, picks a dialect and
//! a production, runs recognition (in parallel across files) and reports
//! how far each file got. The `abnf` binary in `main.rs` is a thin argument
//! dispatcher over [`commands`].

pub mod commands;
pub mod config;
pub mod input;
pub mod report;
pub mod tracing_setup;

pub use config::{parse_check_args, ArgsError, CheckConfig};
pub use input::{load_file, LoadError};
pub use report::{CheckReport, Location};
