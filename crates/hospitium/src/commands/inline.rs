//! Inline citation command implementation.

use anyhow::{Result, bail};
use hospitium_cite::format_inline_for;

use super::SourceArgs;

/// Execute the inline command
pub fn execute(args: SourceArgs, id: &str) -> Result<()> {
    let records = args.load_records()?;
    let style = args.resolve_config()?.style();

    let Some(citation) = format_inline_for(&records, id, style) else {
        bail!("No citation record with id '{}'", id);
    };
    println!("{}", citation);
    Ok(())
}
