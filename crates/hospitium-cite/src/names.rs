//! Author name rendering.
//!
//! Names are treated as whitespace-separated "Given [Middle...] Family"
//! strings: the last token is the surname and every earlier token is a
//! given name. Suffixes ("Jr.", "III") and multi-word surnames
//! ("de la Cruz") are therefore split incorrectly. That heuristic is kept
//! as-is so output stays stable for existing manuscripts.

use crate::style::CitationStyle;

/// Placeholder for an empty author name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Placeholder for a record with no authors at all.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// How a single name is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    /// `Surname, I. I.`
    Initials,
    /// `Surname, Given Middle`
    Inverted,
    /// The name exactly as written.
    FirstNameFirst,
}

impl NameForm {
    /// The form used for the first (or only) author of a style.
    pub fn primary(style: CitationStyle) -> Self {
        match style {
            CitationStyle::Apa => NameForm::Initials,
            CitationStyle::Mla | CitationStyle::Chicago => NameForm::Inverted,
        }
    }

    /// The form used for every author after the first.
    pub fn subsequent(style: CitationStyle) -> Self {
        match style {
            CitationStyle::Apa => NameForm::Initials,
            CitationStyle::Mla | CitationStyle::Chicago => NameForm::FirstNameFirst,
        }
    }
}

/// Render one author name in the requested form.
pub fn format_name(author: &str, form: NameForm) -> String {
    let tokens: Vec<&str> = author.split_whitespace().collect();
    let Some((surname, given)) = tokens.split_last() else {
        return UNKNOWN_NAME.to_string();
    };
    if given.is_empty() {
        // Single-word names and organisations pass through
        return (*surname).to_string();
    }

    match form {
        NameForm::Initials => {
            let initials = given
                .iter()
                .filter_map(|g| g.chars().next())
                .map(|c| format!("{}.", c))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}, {}", surname, initials)
        }
        NameForm::Inverted => format!("{}, {}", surname, given.join(" ")),
        NameForm::FirstNameFirst => author.to_string(),
    }
}

/// Render one author in the style's primary (first-author) form.
pub fn format_author(author: &str, style: CitationStyle) -> String {
    format_name(author, NameForm::primary(style))
}

/// The surname of a primary-form name: everything before the first comma.
///
/// Used for inline citations and alphabetical ordering.
pub fn surname_of(formatted: &str) -> &str {
    formatted.split(',').next().unwrap_or(formatted)
}

/// The APA surname of a raw author name.
pub fn apa_surname(author: &str) -> String {
    surname_of(&format_name(author, NameForm::Initials)).to_string()
}

/// Compose the author list for a bibliography entry.
///
/// Up to [`CitationStyle::max_authors`] names are listed with the style's
/// conjunction; beyond that only the first author is kept, followed by
/// "et al.".
pub fn format_author_list(authors: &[String], style: CitationStyle) -> String {
    let Some((first, rest)) = authors.split_first() else {
        return UNKNOWN_AUTHOR.to_string();
    };
    let first = format_name(first, NameForm::primary(style));

    if authors.len() > style.max_authors() {
        return match style {
            CitationStyle::Apa => format!("{}, et al.", first),
            CitationStyle::Mla | CitationStyle::Chicago => format!("{} et al.", first),
        };
    }

    let subsequent = NameForm::subsequent(style);
    let mut names: Vec<String> = Vec::with_capacity(authors.len());
    names.push(first);
    names.extend(rest.iter().map(|a| format_name(a, subsequent)));

    match names.as_slice() {
        [only] => only.clone(),
        [a, b] => match style {
            CitationStyle::Apa => format!("{}, & {}", a, b),
            CitationStyle::Mla => format!("{}, and {}", a, b),
            CitationStyle::Chicago => format!("{} and {}", a, b),
        },
        [leading @ .., last] => {
            let leading = leading.join(", ");
            match style {
                CitationStyle::Apa => format!("{}, & {}", leading, last),
                CitationStyle::Mla => format!("{}, and {}", leading, last),
                CitationStyle::Chicago => format!("{} and {}", leading, last),
            }
        }
        [] => UNKNOWN_AUTHOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_name_is_unknown() {
        assert_eq!(format_name("", NameForm::Initials), "Unknown");
        assert_eq!(format_name("   ", NameForm::Inverted), "Unknown");
    }

    #[test]
    fn test_single_token_passes_through() {
        for form in [NameForm::Initials, NameForm::Inverted, NameForm::FirstNameFirst] {
            assert_eq!(format_name("UNESCO", form), "UNESCO");
        }
    }

    #[test]
    fn test_apa_initials() {
        assert_eq!(format_name("Jane A Smith", NameForm::Initials), "Smith, J. A.");
        assert_eq!(format_name("John Doe", NameForm::Initials), "Doe, J.");
    }

    #[test]
    fn test_inverted_keeps_given_names() {
        assert_eq!(
            format_name("Jane Anne Smith", NameForm::Inverted),
            "Smith, Jane Anne"
        );
    }

    #[test]
    fn test_first_name_first_is_unchanged() {
        assert_eq!(
            format_name("Jane  Anne Smith", NameForm::FirstNameFirst),
            "Jane  Anne Smith"
        );
    }

    #[test]
    fn test_naive_surname_heuristic_is_preserved() {
        assert_eq!(
            format_name("Martin Luther King Jr.", NameForm::Inverted),
            "Jr., Martin Luther King"
        );
        assert_eq!(
            format_name("Juan de la Cruz", NameForm::Initials),
            "Cruz, J. d. l."
        );
    }

    #[test]
    fn test_primary_form_per_style() {
        assert_eq!(format_author("Jane A Smith", CitationStyle::Apa), "Smith, J. A.");
        assert_eq!(format_author("Jane A Smith", CitationStyle::Mla), "Smith, Jane A");
        assert_eq!(format_author("Jane A Smith", CitationStyle::Chicago), "Smith, Jane A");
    }

    #[test]
    fn test_surname_extraction() {
        assert_eq!(apa_surname("Jane A Smith"), "Smith");
        assert_eq!(apa_surname("UNESCO"), "UNESCO");
        assert_eq!(apa_surname(""), "Unknown");
    }

    #[test]
    fn test_author_list_apa() {
        let style = CitationStyle::Apa;
        assert_eq!(format_author_list(&[], style), "Unknown Author");
        assert_eq!(format_author_list(&names(&["Jane Smith"]), style), "Smith, J.");
        assert_eq!(
            format_author_list(&names(&["Jane Smith", "John Doe"]), style),
            "Smith, J., & Doe, J."
        );
        assert_eq!(
            format_author_list(&names(&["Jane Smith", "John Doe", "Amy Lee"]), style),
            "Smith, J., Doe, J., & Lee, A."
        );
        assert_eq!(
            format_author_list(
                &names(&["Jane Smith", "John Doe", "Amy Lee", "Bo Chen"]),
                style
            ),
            "Smith, J., et al."
        );
    }

    #[test]
    fn test_author_list_mla() {
        let style = CitationStyle::Mla;
        assert_eq!(
            format_author_list(&names(&["Jane Smith", "John Doe"]), style),
            "Smith, Jane, and John Doe"
        );
        assert_eq!(
            format_author_list(&names(&["Jane Smith", "John Doe", "Amy Lee"]), style),
            "Smith, Jane, John Doe, and Amy Lee"
        );
        assert_eq!(
            format_author_list(
                &names(&["Jane Smith", "John Doe", "Amy Lee", "Bo Chen"]),
                style
            ),
            "Smith, Jane et al."
        );
    }

    #[test]
    fn test_author_list_chicago() {
        let style = CitationStyle::Chicago;
        assert_eq!(
            format_author_list(&names(&["Jane Smith", "John Doe"]), style),
            "Smith, Jane and John Doe"
        );
        assert_eq!(
            format_author_list(&names(&["Jane Smith", "John Doe", "Amy Lee"]), style),
            "Smith, Jane, John Doe and Amy Lee"
        );
        assert_eq!(
            format_author_list(
                &names(&["Jane Smith", "John Doe", "Amy Lee", "Bo Chen"]),
                style
            ),
            "Smith, Jane et al."
        );
    }

    #[test]
    fn test_author_list_does_not_mutate_input() {
        let authors = names(&["Jane Smith", "John Doe"]);
        let before = authors.clone();
        let _ = format_author_list(&authors, CitationStyle::Mla);
        assert_eq!(authors, before);
    }
}
