//! Titled, numbered listing of a sequence.
//!
//! Output shape:
//!
//! ```text
//!
//! <title>:
//! 1. <first>
//! 2. <second>
//! ```

use std::fmt::Display;
use std::io::{self, Write};

/// Write `title` followed by each item numbered from 1, one per line.
///
/// Items are written in iteration order with no reordering or
/// deduplication. An empty sequence writes only the title.
pub fn write_range<W, I>(out: &mut W, items: I, title: &str) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    writeln!(out)?;
    writeln!(out, "{title}:")?;

    let mut count = 0;
    for (index, item) in items.into_iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, item)?;
        count += 1;
    }
    Ok(count)
}

/// Print a titled, numbered listing to standard output.
///
/// A closed or broken stdout is logged and otherwise ignored.
pub fn print_range<I>(items: I, title: &str)
where
    I: IntoIterator,
    I::Item: Display,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(err) = write_range(&mut lock, items, title).and_then(|_| lock.flush()) {
        tracing::warn!(%err, title, "failed to print listing");
    }
}
