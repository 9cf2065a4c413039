//! Citation styles and output modes.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the supported citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CitationStyle {
    #[default]
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "MLA")]
    Mla,
    #[serde(rename = "Chicago")]
    Chicago,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 3] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
    ];

    /// Largest author count listed in full in a bibliography entry.
    pub fn max_authors(self) -> usize {
        3
    }

    /// Heading placed above an assembled bibliography.
    pub fn bibliography_header(self) -> &'static str {
        match self {
            CitationStyle::Mla => "Works Cited",
            CitationStyle::Apa | CitationStyle::Chicago => "References",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
            CitationStyle::Chicago => "Chicago",
        }
    }

    /// Parse a style name, falling back to APA for anything unrecognised.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(style = value, "unsupported citation style, using APA");
            CitationStyle::default()
        })
    }
}

impl FromStr for CitationStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apa" => Ok(CitationStyle::Apa),
            "mla" => Ok(CitationStyle::Mla),
            "chicago" => Ok(CitationStyle::Chicago),
            _ => Err(Error::UnsupportedStyle {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a citation is rendered in running text or as a reference-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    Inline,
    Bibliography,
}
