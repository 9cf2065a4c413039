//! Caller-facing citation settings.
//!
//! Settings arrive as YAML (from the manuscript's export options) with the
//! same camelCase keys the editor uses:
//!
//! ```yaml
//! citationStyle: MLA
//! sortOrder: chronological
//! includeAllSources: false
//! selectedIds: [smith2020, doe2019]
//! ```
//!
//! Style and sort strings are kept raw and resolved leniently: anything
//! outside the known values falls back to APA / alphabetical with a warning
//! rather than rejecting the whole configuration.

use crate::Result;
use crate::processor::{ProcessConfig, SortOrder};
use crate::style::CitationStyle;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CitationConfig {
    pub citation_style: String,
    pub sort_order: String,
    pub include_all_sources: bool,
    pub selected_ids: HashSet<String>,
    pub deduplicate: bool,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            citation_style: CitationStyle::default().to_string(),
            sort_order: SortOrder::default().to_string(),
            include_all_sources: true,
            selected_ids: HashSet::new(),
            deduplicate: false,
        }
    }
}

impl CitationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading citation config");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn style(&self) -> CitationStyle {
        CitationStyle::parse_or_default(&self.citation_style)
    }

    pub fn sort(&self) -> SortOrder {
        SortOrder::parse_or_default(&self.sort_order)
    }

    pub fn with_style(mut self, style: CitationStyle) -> Self {
        self.citation_style = style.to_string();
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort_order = sort.to_string();
        self
    }

    /// Restrict output to `ids` (replacing any previous selection).
    pub fn with_selection<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_all_sources = false;
        self.selected_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn processor_config(&self) -> ProcessConfig {
        ProcessConfig {
            sort_order: self.sort(),
            include_all_sources: self.include_all_sources,
            selected_ids: self.selected_ids.clone(),
            deduplicate: self.deduplicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CitationConfig::default();
        assert_eq!(config.style(), CitationStyle::Apa);
        assert_eq!(config.sort(), SortOrder::Alphabetical);
        assert!(config.include_all_sources);
        assert!(config.selected_ids.is_empty());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
citationStyle: MLA
sortOrder: reverse-chronological
includeAllSources: false
selectedIds: [a, b]
"#;
        let config = CitationConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.style(), CitationStyle::Mla);
        assert_eq!(config.sort(), SortOrder::ReverseChronological);

        let processor = config.processor_config();
        assert!(!processor.include_all_sources);
        assert!(processor.selected_ids.contains("a"));
        assert!(processor.selected_ids.contains("b"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = CitationConfig::from_yaml_str("citationStyle: Chicago\n").unwrap();
        assert_eq!(config.style(), CitationStyle::Chicago);
        assert_eq!(config.sort(), SortOrder::Alphabetical);
        assert!(config.include_all_sources);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            CitationConfig::from_yaml_str("").unwrap(),
            CitationConfig::default()
        );
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config =
            CitationConfig::from_yaml_str("citationStyle: Vancouver\nsortOrder: random\n").unwrap();
        assert_eq!(config.style(), CitationStyle::Apa);
        assert_eq!(config.sort(), SortOrder::Alphabetical);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let err = CitationConfig::from_yaml_str("selectedIds: {unclosed").unwrap_err();
        assert!(err.to_string().starts_with("Invalid citation configuration"));
    }

    #[test]
    fn test_overrides() {
        let config = CitationConfig::default()
            .with_style(CitationStyle::Mla)
            .with_sort(SortOrder::CitationCount)
            .with_selection(["x"]);
        assert_eq!(config.style(), CitationStyle::Mla);
        assert_eq!(config.sort(), SortOrder::CitationCount);
        assert!(!config.include_all_sources);
        assert_eq!(config.selected_ids.len(), 1);
    }
}
