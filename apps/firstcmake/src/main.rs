//! FirstCMake console
//!
//! Greets the user, runs the arithmetic checks, and lists the showcase
//! features. Always exits with status 0.

use std::io::{self, BufRead, Write};

use firstcmake_utils::{Session, SessionSummary, ShowcaseConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so the transcript on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ShowcaseConfig::load_standard().unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring config, using defaults");
        ShowcaseConfig::default()
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(config, &mut stdin.lock(), &mut stdout.lock());
}

/// Run one session, logging any failure instead of returning it.
fn run_console<R, W>(config: ShowcaseConfig, input: &mut R, output: &mut W) -> Option<SessionSummary>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    match Session::new(config).run(input, output) {
        Ok(summary) => Some(summary),
        Err(err) => {
            tracing::error!(%err, "session aborted");
            None
        }
    }
}
