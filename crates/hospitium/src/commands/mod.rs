//! Command implementations for the Hospitium CLI
//!
//! Each command module handles the CLI interface and delegates to
//! hospitium-cite for the actual formatting.

pub mod bibliography;
pub mod export;
pub mod inline;

use std::io::Read;

use anyhow::{Context, Result};
use hospitium_cite::{CitationConfig, CitationRecord};
use tracing::debug;

/// Inputs shared by every command.
#[derive(Debug)]
pub struct SourceArgs {
    /// Records file, or "-" for stdin
    pub records: String,
    /// Optional YAML settings file
    pub config: Option<String>,
    /// Style override
    pub style: Option<String>,
    /// Sort override
    pub sort: Option<String>,
    /// Selection override; empty keeps the file's selection
    pub select: Vec<String>,
}

impl SourceArgs {
    /// Read and decode the citation records.
    pub fn load_records(&self) -> Result<Vec<CitationRecord>> {
        let text = if self.records == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read records from stdin")?;
            buf
        } else {
            std::fs::read_to_string(&self.records)
                .with_context(|| format!("Failed to read records file: {}", self.records))?
        };

        let records = CitationRecord::from_json_str(&text)
            .with_context(|| format!("Failed to decode records from {}", self.records))?;
        debug!(count = records.len(), "loaded citation records");
        Ok(records)
    }

    /// Settings file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<CitationConfig> {
        let mut config = match &self.config {
            Some(path) => CitationConfig::from_path(path)
                .with_context(|| format!("Failed to load config: {}", path))?,
            None => CitationConfig::default(),
        };

        if let Some(style) = &self.style {
            config.citation_style = style.clone();
        }
        if let Some(sort) = &self.sort {
            config.sort_order = sort.clone();
        }
        if !self.select.is_empty() {
            config = config.with_selection(self.select.iter().cloned());
        }
        Ok(config)
    }
}
