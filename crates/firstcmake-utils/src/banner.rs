//! Welcome banner.

use std::io::{self, Write};

const RULE: &str = "================================";

/// Write the welcome banner for `project_name`.
pub fn write_welcome<W: Write + ?Sized>(out: &mut W, project_name: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "  Welcome to {project_name} Project")?;
    writeln!(out, "  This is a C++20 CMake example")?;
    writeln!(out, "{RULE}")
}

/// Print the welcome banner to standard output.
pub fn show_welcome(project_name: &str) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(err) = write_welcome(&mut lock, project_name) {
        tracing::warn!(%err, "failed to print welcome banner");
    }
}
