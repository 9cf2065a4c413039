//! CSV export command implementation.

use anyhow::{Context, Result};
use hospitium_cite::export::write_csv;
use hospitium_cite::process;

use super::SourceArgs;

/// Execute the export command
pub fn execute(args: SourceArgs) -> Result<()> {
    let records = args.load_records()?;
    let config = args.resolve_config()?;
    let selected = process(&records, &config.processor_config());

    write_csv(&selected, std::io::stdout().lock()).context("Failed to write CSV")?;
    Ok(())
}
