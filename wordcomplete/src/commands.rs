//! One-shot commands run against a loaded index.
//!
//! Each command writes to the given sink so the binary can pass stdout and
//! tests can pass a buffer.

use std::io::{self, Write};

use wordcomplete_core::{normalize_token, PrefixIndex};

use crate::LoadedIndex;

/// Print the first completion of `prefix`.
///
/// Returns `false` when nothing matches; the normalized prefix is printed
/// instead.
pub fn complete<W: Write>(index: &PrefixIndex, prefix: &str, out: &mut W) -> io::Result<bool> {
    let prefix = normalize_token(prefix);
    match index.complete(&prefix) {
        Some(word) => {
            writeln!(out, "{}", word)?;
            Ok(true)
        }
        None => {
            writeln!(out, "{}", prefix)?;
            Ok(false)
        }
    }
}

/// Print the words starting with `prefix`, at most `limit` of them.
pub fn suggest<W: Write>(
    index: &PrefixIndex,
    prefix: &str,
    limit: Option<usize>,
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    let prefix = normalize_token(prefix);
    let words = match limit {
        Some(limit) => index.suggestions(&prefix, limit),
        None => index.all_with_prefix(&prefix),
    };

    if json {
        serde_json::to_writer(&mut *out, &words)?;
        writeln!(out)?;
    } else {
        for word in &words {
            writeln!(out, "{}", word)?;
        }
    }
    Ok(())
}

pub fn stats<W: Write>(loaded: &LoadedIndex, out: &mut W) -> io::Result<()> {
    writeln!(out, "source:     {}", loaded.source)?;
    writeln!(out, "words:      {}", loaded.index.len())?;
    writeln!(out, "nodes:      {}", loaded.index.node_count())?;
    writeln!(out, "inserted:   {}", loaded.stats.inserted)?;
    writeln!(out, "duplicates: {}", loaded.stats.duplicates)?;
    writeln!(out, "skipped:    {}", loaded.stats.skipped)?;
    Ok(())
}
