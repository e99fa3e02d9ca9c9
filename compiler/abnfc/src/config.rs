//! `check` command configuration, parsed from command-line flags.

use std::path::PathBuf;

use abnf_core::{Dialect, Production, UnknownProduction};

/// How a grammar file is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// RFC 5234, or RFC 5234 plus the RFC 7405 string prefixes.
    pub dialect: Dialect,
    /// Production run at offset 0 of each file.
    pub production: Production,
    /// Fail unless the production consumes the whole file.
    pub strict: bool,
    /// Print only the recognized byte count.
    pub quiet: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            dialect: Dialect::Rfc5234,
            production: Production::RuleList,
            strict: false,
            quiet: false,
        }
    }
}

/// A `check` invocation the CLI cannot run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error(transparent)]
    UnknownProduction(#[from] UnknownProduction),

    #[error("missing grammar file path")]
    MissingPath,
}

/// Parse the arguments following `abnf check`.
///
/// Flags may appear anywhere; everything after `--` is a path.
pub fn parse_check_args(args: &[String]) -> Result<(CheckConfig, Vec<PathBuf>), ArgsError> {
    let mut config = CheckConfig::default();
    let mut paths = Vec::new();
    let mut only_paths = false;

    for arg in args {
        if only_paths || !arg.starts_with('-') || arg == "-" {
            paths.push(PathBuf::from(arg));
        } else if arg == "--" {
            only_paths = true;
        } else if let Some(name) = arg.strip_prefix("--rule=") {
            config.production = name.parse()?;
        } else if arg == "--rfc7405" {
            config.dialect = Dialect::Rfc7405;
        } else if arg == "--strict" {
            config.strict = true;
        } else if arg == "--quiet" || arg == "-q" {
            config.quiet = true;
        } else {
            return Err(ArgsError::UnknownOption(arg.clone()));
        }
    }

    if paths.is_empty() {
        return Err(ArgsError::MissingPath);
    }
    Ok((config, paths))
}
