//! The validated, immutable prompt collection.

use crate::domain::{Prompt, PromptId, PromptfolioError, Result, ALL_CATEGORIES};
use std::collections::HashSet;

/// Immutable ordered collection of prompts plus its derived category list.
///
/// Built once per session through [`Catalog::new`], which rejects duplicate ids,
/// blank required fields and empty datasets. The default value is the empty
/// "not loaded yet" catalog whose only category is `"All"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Prompt>,
    categories: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
        }
    }
}

impl Catalog {
    /// Validates `records` and builds the catalog.
    ///
    /// # Errors
    ///
    /// - [`PromptfolioError::EmptyDataset`] when `records` is empty
    /// - [`PromptfolioError::MissingField`] when id, title, content or category is blank
    /// - [`PromptfolioError::DuplicateId`] when two records share an id
    pub fn new(records: Vec<Prompt>) -> Result<Self> {
        if records.is_empty() {
            return Err(PromptfolioError::EmptyDataset);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            validate_record(position, record)?;
            if !seen.insert(record.id.as_str()) {
                return Err(PromptfolioError::DuplicateId(record.id.to_string()));
            }
        }

        let categories = derive_categories(&records);
        Ok(Self {
            records,
            categories,
        })
    }

    /// All records in load order.
    #[must_use]
    pub fn all_records(&self) -> &[Prompt] {
        &self.records
    }

    /// `"All"` followed by every distinct category in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &PromptId) -> Option<&Prompt> {
        self.records.iter().find(|record| &record.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(position: usize, record: &Prompt) -> Result<()> {
    if record.id.as_str().trim().is_empty() {
        return Err(PromptfolioError::MissingField {
            id: format!("#{position}"),
            field: "id",
        });
    }

    let required = [
        ("title", &record.title),
        ("content", &record.content),
        ("category", &record.category),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(PromptfolioError::MissingField {
                id: record.id.to_string(),
                field,
            });
        }
    }

    Ok(())
}

fn derive_categories(records: &[Prompt]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for record in records {
        if !categories.iter().any(|c| c == &record.category) {
            categories.push(record.category.clone());
        }
    }
    categories
}
