//! Live query parameters driving the filter engine.

/// Label of the sentinel category that admits every record.
pub const ALL_CATEGORIES: &str = "All";

/// Category half of the query: everything, or one concrete label.
///
/// A label that no record carries is valid and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "All" sentinel.
    #[default]
    All,
    /// Exact match on one category label.
    Only(String),
}

impl CategoryFilter {
    /// Parses a display label, mapping `"All"` to the sentinel.
    ///
    /// ```
    /// use promptfolio::domain::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::from_label("Backend"),
    ///     CategoryFilter::Only("Backend".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(label) => label,
        }
    }

    /// Whether a record with the given category passes this filter.
    #[must_use]
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => label == category,
        }
    }
}

/// Search text plus category: the two inputs of the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Raw search text as typed. Matching is case-insensitive.
    pub search_text: String,
    /// Active category filter.
    pub category: CategoryFilter,
}
