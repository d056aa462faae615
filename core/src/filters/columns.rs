//! Column source for the column picker
//!
//! The controller never validates against this list; hosts use it for labels
//! and for warning about unknown ids.

use serde::{Deserialize, Serialize};

/// Selectable column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOption {
    pub id: String,
    pub label: String,
}

impl ColumnOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Parse `id` or `id:label`; a missing label reuses the id
    pub fn parse(entry: &str) -> Option<Self> {
        let (id, label) = match entry.split_once(':') {
            Some((id, label)) => (id.trim(), label.trim()),
            None => (entry.trim(), entry.trim()),
        };
        if id.is_empty() {
            return None;
        }
        let label = if label.is_empty() { id } else { label };
        Some(Self::new(id, label))
    }
}

/// Ordered set of columns offered to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnCatalog {
    columns: Vec<ColumnOption>,
}

impl ColumnCatalog {
    /// Build from options in display order; later duplicates of an id are dropped
    pub fn new(options: impl IntoIterator<Item = ColumnOption>) -> Self {
        let mut columns: Vec<ColumnOption> = Vec::new();
        for option in options {
            if option.id.is_empty() {
                continue;
            }
            if columns.iter().any(|c| c.id == option.id) {
                tracing::debug!(id = %option.id, "Duplicate column id ignored");
                continue;
            }
            columns.push(option);
        }
        Self { columns }
    }

    /// Parse a comma-separated `id[:label]` list
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(',').filter_map(ColumnOption::parse))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnOption> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
