//! Per-style rendering of a single citation.
//!
//! Two modes are supported for each [`CitationStyle`]:
//!
//! - **Inline**: the short in-text marker, e.g. `(Smith et al., 2022)`.
//! - **Bibliography**: the full reference-list entry.
//!
//! Rendering is total. Missing authors, titles and years degrade to
//! `Unknown Author`, `Untitled` and `n.d.`; optional venue fields are
//! rendered through each style's [`Clause`] list.
//!
//! ```text
//! APA      Authors. (Year). Title. *Journal*, *Volume*(Issue), Pages. https://doi.org/DOI
//! MLA      Authors. "Title" *Journal*, vol. Volume, no. Issue, Year, pp. Pages. Web. 5 Mar 2024.
//! Chicago  Authors. "Title" *Journal* Volume, no. Issue (Year): Pages. https://doi.org/DOI
//! ```

use crate::clause::{Clause, field, render_clauses};
use crate::clock::{Clock, SystemClock, format_access_date};
use crate::names::{
    NameForm, UNKNOWN_AUTHOR, UNKNOWN_NAME, apa_surname, format_author_list, format_name,
    surname_of,
};
use crate::record::CitationRecord;
use crate::style::{CitationStyle, FormatMode};

/// Placeholder for a missing title.
pub const UNTITLED: &str = "Untitled";

/// Placeholder for a missing year.
pub const NO_DATE: &str = "n.d.";

const DOI_PREFIX: &str = "https://doi.org/";

const APA_VENUE: &[Clause] = &[
    Clause::new("journal", "", |r| field(r.journal.as_deref(), |j| format!("*{}*", j))),
    Clause::new("volume", ", ", |r| field(r.volume.as_deref(), |v| format!("*{}*", v))),
    Clause::new("issue", "", |r| field(r.issue.as_deref(), |i| format!("({})", i))),
    Clause::new("pages", ", ", |r| field(r.pages.as_deref(), str::to_string)),
];

const MLA_CONTAINER: &[Clause] = &[
    Clause::new("journal", "", |r| field(r.journal.as_deref(), |j| format!("*{}*", j))),
    Clause::new("volume", ", ", |r| field(r.volume.as_deref(), |v| format!("vol. {}", v))),
    Clause::new("issue", ", ", |r| field(r.issue.as_deref(), |i| format!("no. {}", i))),
    Clause::new("year", ", ", |r| r.year.map(|y| y.to_string())),
    Clause::new("pages", ", ", |r| field(r.pages.as_deref(), |p| format!("pp. {}", p))),
];

const CHICAGO_CONTAINER: &[Clause] = &[
    Clause::new("journal", "", |r| field(r.journal.as_deref(), |j| format!("*{}*", j))),
    Clause::new("volume", " ", |r| field(r.volume.as_deref(), str::to_string)),
    Clause::new("issue", ", ", |r| field(r.issue.as_deref(), |i| format!("no. {}", i))),
    Clause::new("year", " ", |r| Some(format!("({})", year_text(r)))),
    Clause::new("pages", ": ", |r| field(r.pages.as_deref(), str::to_string)),
];

impl CitationStyle {
    /// The ordered venue clauses of this style's bibliography entries.
    pub fn venue_clauses(self) -> &'static [Clause] {
        match self {
            CitationStyle::Apa => APA_VENUE,
            CitationStyle::Mla => MLA_CONTAINER,
            CitationStyle::Chicago => CHICAGO_CONTAINER,
        }
    }

    /// Render `citation` in this style.
    pub fn format(self, citation: &CitationRecord, mode: FormatMode, clock: &dyn Clock) -> String {
        format_with_clock(citation, mode, self, clock)
    }
}

/// Render one citation using the system clock for MLA access dates.
pub fn format(citation: &CitationRecord, mode: FormatMode, style: CitationStyle) -> String {
    format_with_clock(citation, mode, style, &SystemClock)
}

/// Render one citation with an explicit clock.
pub fn format_with_clock(
    citation: &CitationRecord,
    mode: FormatMode,
    style: CitationStyle,
    clock: &dyn Clock,
) -> String {
    tracing::trace!(id = %citation.id, %style, ?mode, "formatting citation");
    match mode {
        FormatMode::Inline => format_inline(citation, style),
        FormatMode::Bibliography => format_bibliography_entry(citation, style, clock),
    }
}

/// Render the in-text marker for one citation.
pub fn format_inline(citation: &CitationRecord, style: CitationStyle) -> String {
    match style {
        CitationStyle::Apa => {
            let names = match citation.authors.as_slice() {
                [] => UNKNOWN_AUTHOR.to_string(),
                [only] => apa_surname(only),
                [first, second] => format!("{}, & {}", apa_surname(first), apa_surname(second)),
                [first, ..] => format!("{} et al.", apa_surname(first)),
            };
            format!("({}, {})", names, year_text(citation))
        }
        CitationStyle::Mla => {
            let name = citation.first_author().map_or_else(
                || UNKNOWN_AUTHOR.to_string(),
                |a| surname_of(&format_name(a, NameForm::Inverted)).to_string(),
            );
            match present(citation.pages.as_deref()) {
                Some(pages) => format!("({} {})", name, pages),
                None => format!("({})", name),
            }
        }
        CitationStyle::Chicago => {
            let name = match citation.first_author() {
                Some(a) => a.split_whitespace().last().unwrap_or(UNKNOWN_NAME),
                None => UNKNOWN_AUTHOR,
            };
            let year = year_text(citation);
            match present(citation.pages.as_deref()) {
                Some(pages) => format!("({} {}, {})", name, year, pages),
                None => format!("({} {})", name, year),
            }
        }
    }
}

/// Render the reference-list entry for one citation.
pub fn format_bibliography_entry(
    citation: &CitationRecord,
    style: CitationStyle,
    clock: &dyn Clock,
) -> String {
    let authors = format_author_list(&citation.authors, style);
    let title = title_text(citation);
    let venue = render_clauses(style.venue_clauses(), citation);

    match style {
        CitationStyle::Apa => {
            let mut entry = format!("{}. ({}). {}.", authors, year_text(citation), title);
            if let Some(venue) = venue {
                entry.push(' ');
                entry.push_str(&venue);
                entry.push('.');
            }
            if let Some(link) = doi_or_url(citation) {
                entry.push(' ');
                entry.push_str(&link);
            }
            entry
        }
        CitationStyle::Mla => {
            let mut entry = format!("{}. \"{}\"", authors, title);
            if let Some(venue) = venue {
                entry.push(' ');
                entry.push_str(&venue);
            }
            entry.push('.');
            if let Some(doi) = present(citation.doi.as_deref()) {
                entry.push_str(&format!(" {}{}.", DOI_PREFIX, doi));
            }
            // The access date follows the URL field, whether or not a DOI exists
            if present(citation.url.as_deref()).is_some() {
                entry.push_str(&format!(" Web. {}.", format_access_date(clock.today())));
            }
            entry
        }
        CitationStyle::Chicago => {
            let mut entry = format!("{}. \"{}\"", authors, title);
            if let Some(venue) = venue {
                entry.push(' ');
                entry.push_str(&venue);
            }
            entry.push('.');
            if let Some(link) = doi_or_url(citation) {
                entry.push(' ');
                entry.push_str(&link);
            }
            entry
        }
    }
}

/// Look up `id` among `records` and render its inline marker.
pub fn format_inline_for(
    records: &[CitationRecord],
    id: &str,
    style: CitationStyle,
) -> Option<String> {
    records
        .iter()
        .find(|r| r.id == id)
        .map(|r| format_inline(r, style))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn year_text(citation: &CitationRecord) -> String {
    citation
        .year
        .map_or_else(|| NO_DATE.to_string(), |y| y.to_string())
}

fn title_text(citation: &CitationRecord) -> &str {
    present(citation.title.as_deref()).unwrap_or(UNTITLED)
}

/// DOI link, or the raw URL when there is no DOI.
fn doi_or_url(citation: &CitationRecord) -> Option<String> {
    present(citation.doi.as_deref())
        .map(|doi| format!("{}{}", DOI_PREFIX, doi))
        .or_else(|| present(citation.url.as_deref()).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
    }

    fn full_record() -> CitationRecord {
        CitationRecord::new("smith2020")
            .with_title("Signals in Noise")
            .with_authors(["Jane A Smith", "John Doe"])
            .with_year(2020)
            .with_journal("Nature")
            .with_volume("12")
            .with_issue("3")
            .with_pages("45-67")
            .with_doi("10.1000/xyz")
    }

    #[test]
    fn test_apa_single_author_minimal() {
        let record = CitationRecord::new("a")
            .with_title("Gene X")
            .with_authors(["Jane A Smith"])
            .with_year(2023);
        assert_eq!(
            format_bibliography_entry(&record, CitationStyle::Apa, &clock()),
            "Smith, J. A.. (2023). Gene X."
        );
    }

    #[test]
    fn test_apa_full_entry() {
        assert_eq!(
            format_bibliography_entry(&full_record(), CitationStyle::Apa, &clock()),
            "Smith, J. A., & Doe, J.. (2020). Signals in Noise. *Nature*, *12*(3), 45-67. https://doi.org/10.1000/xyz"
        );
    }

    #[test]
    fn test_apa_url_used_without_doi() {
        let record = CitationRecord::new("a")
            .with_title("T")
            .with_authors(["Ann Lee"])
            .with_url("https://example.org/t");
        assert_eq!(
            format_bibliography_entry(&record, CitationStyle::Apa, &clock()),
            "Lee, A.. (n.d.). T. https://example.org/t"
        );
    }

    #[test]
    fn test_mla_full_entry() {
        assert_eq!(
            format_bibliography_entry(&full_record(), CitationStyle::Mla, &clock()),
            "Smith, Jane A, and John Doe. \"Signals in Noise\" *Nature*, vol. 12, no. 3, 2020, pp. 45-67. https://doi.org/10.1000/xyz."
        );
    }

    #[test]
    fn test_mla_access_date_follows_url() {
        let record = full_record().with_url("https://example.org/s");
        let entry = format_bibliography_entry(&record, CitationStyle::Mla, &clock());
        assert!(entry.ends_with("https://doi.org/10.1000/xyz. Web. 5 Mar 2024."), "{}", entry);
    }

    #[test]
    fn test_mla_without_venue() {
        let record = CitationRecord::new("a");
        assert_eq!(
            format_bibliography_entry(&record, CitationStyle::Mla, &clock()),
            "Unknown Author. \"Untitled\"."
        );
    }

    #[test]
    fn test_chicago_full_entry() {
        assert_eq!(
            format_bibliography_entry(&full_record(), CitationStyle::Chicago, &clock()),
            "Smith, Jane A and John Doe. \"Signals in Noise\" *Nature* 12, no. 3 (2020): 45-67. https://doi.org/10.1000/xyz"
        );
    }

    #[test]
    fn test_chicago_missing_year() {
        let record = CitationRecord::new("a").with_title("T").with_authors(["Bo Chen"]);
        assert_eq!(
            format_bibliography_entry(&record, CitationStyle::Chicago, &clock()),
            "Chen, Bo. \"T\" (n.d.)."
        );
    }

    #[test]
    fn test_inline_apa() {
        let record = full_record();
        assert_eq!(format_inline(&record, CitationStyle::Apa), "(Smith, & Doe, 2020)");

        let single = CitationRecord::new("b").with_authors(["Amy Lee"]);
        assert_eq!(format_inline(&single, CitationStyle::Apa), "(Lee, n.d.)");

        let none = CitationRecord::new("c").with_year(2001);
        assert_eq!(format_inline(&none, CitationStyle::Apa), "(Unknown Author, 2001)");
    }

    #[test]
    fn test_inline_mla() {
        assert_eq!(format_inline(&full_record(), CitationStyle::Mla), "(Smith 45-67)");
        let no_pages = CitationRecord::new("b").with_authors(["Amy Lee"]).with_year(1999);
        assert_eq!(format_inline(&no_pages, CitationStyle::Mla), "(Lee)");
    }

    #[test]
    fn test_inline_chicago() {
        assert_eq!(
            format_inline(&full_record(), CitationStyle::Chicago),
            "(Smith 2020, 45-67)"
        );
        let no_pages = CitationRecord::new("b").with_authors(["Amy Lee"]);
        assert_eq!(format_inline(&no_pages, CitationStyle::Chicago), "(Lee n.d.)");
    }

    #[test]
    fn test_inline_never_shows_title() {
        let record = full_record();
        for style in CitationStyle::ALL {
            assert!(!format_inline(&record, style).contains("Signals"));
        }
    }

    #[test]
    fn test_format_inline_for_unknown_id() {
        let records = vec![full_record()];
        assert_eq!(format_inline_for(&records, "missing", CitationStyle::Apa), None);
        assert_eq!(
            format_inline_for(&records, "smith2020", CitationStyle::Chicago).as_deref(),
            Some("(Smith 2020, 45-67)")
        );
    }

    #[test]
    fn test_style_method_dispatch() {
        let record = full_record();
        for style in CitationStyle::ALL {
            assert_eq!(
                style.format(&record, FormatMode::Bibliography, &clock()),
                format_bibliography_entry(&record, style, &clock())
            );
        }
    }
}
