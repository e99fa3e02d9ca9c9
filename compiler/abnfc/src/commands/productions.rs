//! The `productions` command: list every production `--rule=` accepts.

use std::io::{self, Write};

use abnf_core::Production;

/// Write one production name per line, core rules first.
///
/// With `core_only`, stop after the RFC 5234 Appendix B.1 core rules.
pub fn list_productions(out: &mut impl Write, core_only: bool) -> io::Result<()> {
    for production in Production::ALL {
        if core_only && !production.is_core() {
            continue;
        }
        writeln!(out, "{production}")?;
    }
    Ok(())
}
