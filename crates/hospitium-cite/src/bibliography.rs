//! Bibliography assembly.
//!
//! ```text
//! CitationRecord[] ─▶ process ─▶ format (bibliography mode) ─▶ assemble ─▶ text
//! ```

use crate::clock::Clock;
use crate::config::CitationConfig;
use crate::format::format_bibliography_entry;
use crate::processor::process;
use crate::record::CitationRecord;
use crate::style::CitationStyle;
use crate::{Error, Result};

/// Separator between the header and each entry.
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Join formatted entries under the style's header.
///
/// Output is `"<Header>\n\n<entry1>\n\n...\n\n<entryN>"`. Zero entries is a
/// caller error ([`Error::EmptyBibliography`]); callers with nothing to cite
/// are expected to emit nothing.
pub fn assemble<S: AsRef<str>>(entries: &[S], style: CitationStyle) -> Result<String> {
    if entries.is_empty() {
        return Err(Error::EmptyBibliography);
    }

    let mut out = String::from(style.bibliography_header());
    for entry in entries {
        out.push_str(ENTRY_SEPARATOR);
        out.push_str(entry.as_ref());
    }
    Ok(out)
}

/// Run the whole pipeline for `records` under `config`.
pub fn render_bibliography(
    records: &[CitationRecord],
    config: &CitationConfig,
    clock: &dyn Clock,
) -> Result<String> {
    let style = config.style();
    let selected = process(records, &config.processor_config());
    let entries: Vec<String> = selected
        .iter()
        .map(|record| format_bibliography_entry(record, style, clock))
        .collect();

    tracing::debug!(entries = entries.len(), %style, "assembling bibliography");
    assemble(&entries, style)
}
