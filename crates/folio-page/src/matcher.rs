/// Pure filter predicate over the project catalog.
///
/// A project is visible when the normalized query is a contiguous substring
/// of its haystack (title, description, tags, category) AND the category
/// selector accepts it. Filtering never reorders the catalog.
use crate::model::Project;

/// Case-fold and trim a control value or text field.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// The category selector value: `All` passes every project, anything else
/// must equal the project's stored category exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// Interpret a raw selector value; "all" is the pass-everything sentinel.
    pub fn from_selection(raw: &str) -> Self {
        if raw == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(raw.to_string())
        }
    }

    fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted == category,
        }
    }
}

/// The concatenated, normalized text a query is matched against.
pub fn haystack(project: &Project) -> String {
    normalize(&format!(
        "{} {} {} {}",
        project.title,
        project.description,
        project.tags.join(" "),
        project.category
    ))
}

/// True when `project` satisfies both the query and category predicates.
/// `query` must already be normalized; an empty query matches everything.
pub fn matches(project: &Project, query: &str, filter: &CategoryFilter) -> bool {
    let ok_query = query.is_empty() || haystack(project).contains(query);
    ok_query && filter.accepts(&project.category)
}
