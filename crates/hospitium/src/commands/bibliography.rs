//! Bibliography command implementation.

use anyhow::Result;
use hospitium_cite::{Error, SystemClock, render_bibliography};
use tracing::{info, warn};

use super::SourceArgs;

/// Execute the bibliography command
pub fn execute(args: SourceArgs) -> Result<()> {
    let records = args.load_records()?;
    let config = args.resolve_config()?;

    match render_bibliography(&records, &config, &SystemClock) {
        Ok(text) => {
            info!(style = %config.style(), "bibliography generated");
            println!("{}", text);
            Ok(())
        }
        // Nothing selected: the editor inserts nothing, so neither do we
        Err(Error::EmptyBibliography) => {
            warn!("no sources selected; nothing to print");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
