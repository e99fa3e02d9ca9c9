//! The `check` command: recognize grammar files and report how far each got.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{load_file, CheckConfig, CheckReport, LoadError};

/// Result of checking one file that could be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCheck {
    pub report: CheckReport,
    /// Rendered source diagnostic for failed checks of UTF-8 files.
    pub diagnostic: Option<String>,
}

fn check_one(path: &Path, config: CheckConfig, color: bool) -> Result<FileCheck, LoadError> {
    let src = load_file(path)?;
    let report = CheckReport::check(path, &src, config);
    let diagnostic = report.render_diagnostic(&src, color);
    Ok(FileCheck { report, diagnostic })
}

/// Check every file in parallel. Results come back in `paths` order.
pub fn check_files(
    paths: &[PathBuf],
    config: CheckConfig,
    color: bool,
) -> Vec<Result<FileCheck, LoadError>> {
    tracing::debug!(files = paths.len(), "checking grammars");
    paths
        .par_iter()
        .map(|path| check_one(path, config, color))
        .collect()
}

/// Print results: reports to `out`, load errors and diagnostics to `err`.
///
/// Returns `true` when every file loaded and passed.
pub fn write_results(
    results: &[Result<FileCheck, LoadError>],
    config: CheckConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut all_passed = true;
    for result in results {
        match result {
            Ok(check) => {
                if config.quiet {
                    writeln!(out, "{}", check.report.recognized)?;
                } else {
                    writeln!(out, "{}", check.report)?;
                }
                if !check.report.is_success() {
                    all_passed = false;
                    if let Some(diagnostic) = &check.diagnostic {
                        write!(err, "{diagnostic}")?;
                    }
                }
            }
            Err(e) => {
                all_passed = false;
                tracing::debug!(path = %e.path().display(), "grammar not loaded");
                writeln!(err, "error: {e}")?;
            }
        }
    }
    Ok(all_passed)
}

/// Run `abnf check` against stdout/stderr. Returns `true` on success.
pub fn run_check(paths: &[PathBuf], config: CheckConfig) -> bool {
    let color = io::stderr().is_terminal();
    let results = check_files(paths, config, color);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match write_results(&results, config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(passed) => passed,
        Err(e) => {
            eprintln!("error: cannot write results: {e}");
            false
        }
    }
}
