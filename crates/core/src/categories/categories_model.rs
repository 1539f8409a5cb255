//! Category domain models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The type a category was created with. A transaction's own type stays
/// authoritative when the two disagree, since categories can be deleted or
/// re-typed after transactions reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Income,
    Expense,
}

/// Domain model representing a transaction category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// Id → category lookup built once per computation pass.
///
/// Resolves display names and degrades gracefully for orphaned references:
/// a category id with no matching category resolves to the raw id itself.
#[derive(Debug)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<&'a str, &'a Category>,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        CategoryIndex {
            by_id: categories.iter().map(|c| (c.id.as_str(), c)).collect(),
        }
    }

    /// Look up a category by id.
    pub fn get(&self, category_id: &str) -> Option<&'a Category> {
        self.by_id.get(category_id).copied()
    }

    /// Display name for a category id, falling back to the raw id when the
    /// category no longer exists.
    pub fn display_name(&self, category_id: &'a str) -> &'a str {
        self.get(category_id)
            .map(|c| c.name.as_str())
            .unwrap_or(category_id)
    }
}
