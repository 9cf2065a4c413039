//! Citation records as supplied by the data-access layer.
//!
//! Records arrive as JSON produced by the manuscript/publication query. The
//! decoder is lenient in the same places that query output is: ids may be
//! strings or integers, years may be strings, and authors may come as an
//! array or as one unsplit string.

use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// A single bibliographic source available for citing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationRecord {
    /// Opaque unique identifier.
    #[serde(deserialize_with = "deserialize_string_or_int")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author names in "Given [Middle] Family" form, in citation order.
    #[serde(default, deserialize_with = "deserialize_authors")]
    pub authors: Vec<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of times this source is referenced inside the manuscript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i64>,
}

impl CitationRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = Some(journal.into());
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = Some(issue.into());
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = Some(pages.into());
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_citation_count(mut self, count: i64) -> Self {
        self.citation_count = Some(count);
        self
    }

    /// Decode a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Vec<CitationRecord>> {
        Ok(serde_json::from_str(json)?)
    }

    /// The first author as written, if any.
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

/// Split an unsplit author string such as `"A, B and C"` into names.
///
/// Commas, `" and "` and `" & "` all separate names; an Oxford comma before
/// the final conjunction is tolerated.
pub fn parse_author_list(authors: &str) -> Vec<String> {
    authors
        .split(',')
        .flat_map(|part| part.split(" and "))
        .flat_map(|part| part.split(" & "))
        .map(|name| {
            let name = name.trim();
            // "A, and B" leaves a leading conjunction on the last chunk
            name.strip_prefix("and ")
                .or_else(|| name.strip_prefix("& "))
                .unwrap_or(name)
                .trim()
        })
        .filter(|name| !name.is_empty() && *name != "and" && *name != "&")
        .map(str::to_string)
        .collect()
}

fn deserialize_string_or_int<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::custom("expected string or number for id")),
    }
}

fn deserialize_authors<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Authors {
        List(Vec<Option<String>>),
        Unsplit(String),
    }

    Ok(match Option::<Authors>::deserialize(deserializer)? {
        // Null entries are dropped rather than failing the whole payload
        Some(Authors::List(list)) => list.into_iter().flatten().collect(),
        Some(Authors::Unsplit(s)) => parse_author_list(&s),
        None => Vec::new(),
    })
}

fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Deserialize::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(|y| i32::try_from(y).ok())
            .map(Some)
            .ok_or_else(|| Error::custom(format!("year out of range: {}", n))),
        // Free-text years from imports ("", "in press") are treated as absent
        Some(serde_json::Value::String(s)) => Ok(s.trim().parse().ok()),
        Some(other) => Err(Error::custom(format!("expected year, found {}", other))),
    }
}

fn deserialize_opt_string_or_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Deserialize::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}
