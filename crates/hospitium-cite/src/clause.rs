//! Optional clauses of a bibliography entry.
//!
//! Each style describes its venue block (journal, volume, issue, pages, ...)
//! as an ordered list of [`Clause`]s. A clause renders only when its field is
//! present; the separator of the first rendered clause is dropped so an
//! absent journal never leaves a dangling comma.

use crate::record::CitationRecord;

/// One conditionally rendered piece of an entry.
#[derive(Clone, Copy)]
pub struct Clause {
    /// Field name, reported when the clause is skipped.
    pub name: &'static str,
    /// Text placed before this clause when an earlier clause rendered.
    pub separator: &'static str,
    /// Renders the clause, or `None` when the field is absent.
    pub render: fn(&CitationRecord) -> Option<String>,
}

impl Clause {
    pub const fn new(
        name: &'static str,
        separator: &'static str,
        render: fn(&CitationRecord) -> Option<String>,
    ) -> Self {
        Self {
            name,
            separator,
            render,
        }
    }
}

impl std::fmt::Debug for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clause")
            .field("name", &self.name)
            .field("separator", &self.separator)
            .finish()
    }
}

/// Render a clause list, joining present clauses with their separators.
///
/// Returns `None` when no clause is present.
pub fn render_clauses(clauses: &[Clause], record: &CitationRecord) -> Option<String> {
    let mut out = String::new();
    for clause in clauses {
        let Some(text) = (clause.render)(record) else {
            tracing::trace!(id = %record.id, clause = clause.name, "clause absent");
            continue;
        };
        if !out.is_empty() {
            out.push_str(clause.separator);
        }
        out.push_str(&text);
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Helper for clauses that wrap an optional string field.
pub fn field(value: Option<&str>, render: impl FnOnce(&str) -> String) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(render)
}
