//! Selection and ordering of citations before formatting.
//!
//! [`process`] never mutates its input. Sorting is stable: records with equal
//! keys keep their input order, so repeated calls return the same sequence.

use crate::names::apa_surname;
use crate::record::CitationRecord;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the selected citations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// First author's surname, then title, both ascending.
    #[default]
    Alphabetical,
    /// Newest first; a missing year counts as 0.
    Chronological,
    /// Oldest first; a missing year counts as 0.
    ReverseChronological,
    /// Most cited first; a missing count is 0.
    CitationCount,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Alphabetical,
        SortOrder::Chronological,
        SortOrder::ReverseChronological,
        SortOrder::CitationCount,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "alphabetical",
            SortOrder::Chronological => "chronological",
            SortOrder::ReverseChronological => "reverse-chronological",
            SortOrder::CitationCount => "citation-count",
        }
    }

    /// Parse a sort order, falling back to alphabetical for anything unrecognised.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(sort = value, "unsupported sort order, using alphabetical");
            SortOrder::default()
        })
    }

    /// Compare two records under this ordering.
    pub fn compare(self, a: &CitationRecord, b: &CitationRecord) -> Ordering {
        match self {
            SortOrder::Alphabetical => alphabetical_key(a).cmp(&alphabetical_key(b)),
            SortOrder::Chronological => year_key(b).cmp(&year_key(a)),
            SortOrder::ReverseChronological => year_key(a).cmp(&year_key(b)),
            SortOrder::CitationCount => count_key(b).cmp(&count_key(a)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "alphabetical" => Ok(SortOrder::Alphabetical),
            "chronological" => Ok(SortOrder::Chronological),
            "reverse-chronological" => Ok(SortOrder::ReverseChronological),
            "citation-count" => Ok(SortOrder::CitationCount),
            _ => Err(Error::UnsupportedSortOrder {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to [`process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub sort_order: SortOrder,
    /// When false, only records whose id is in `selected_ids` are kept.
    pub include_all_sources: bool,
    pub selected_ids: HashSet<String>,
    /// Drop later records whose id was already seen.
    pub deduplicate: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self::all(SortOrder::default())
    }
}

impl ProcessConfig {
    /// Keep every source, ordered by `sort_order`.
    pub fn all(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            include_all_sources: true,
            selected_ids: HashSet::new(),
            deduplicate: false,
        }
    }

    /// Keep only the given ids, ordered by `sort_order`.
    pub fn selected<I, S>(sort_order: SortOrder, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sort_order,
            include_all_sources: false,
            selected_ids: ids.into_iter().map(Into::into).collect(),
            deduplicate: false,
        }
    }

    fn keeps(&self, record: &CitationRecord) -> bool {
        self.include_all_sources || self.selected_ids.contains(&record.id)
    }
}

/// Filter and order `citations` for formatting.
pub fn process(citations: &[CitationRecord], config: &ProcessConfig) -> Vec<CitationRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut selected: Vec<CitationRecord> = citations
        .iter()
        .filter(|r| config.keeps(r))
        .filter(|r| !config.deduplicate || seen.insert(r.id.as_str()))
        .cloned()
        .collect();

    // Vec::sort_by is stable
    selected.sort_by(|a, b| config.sort_order.compare(a, b));

    tracing::debug!(
        input = citations.len(),
        selected = selected.len(),
        sort = %config.sort_order,
        "processed citations"
    );
    selected
}

fn alphabetical_key(record: &CitationRecord) -> (String, &str) {
    // No authors sorts as "Unknown", the same as a blank name
    let surname = apa_surname(record.first_author().unwrap_or_default());
    (surname, record.title.as_deref().unwrap_or_default())
}

fn year_key(record: &CitationRecord) -> i32 {
    record.year.unwrap_or(0)
}

fn count_key(record: &CitationRecord) -> i64 {
    record.citation_count.unwrap_or(0)
}
