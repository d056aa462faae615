//! Clause storage
//!
//! Holds the draft clause list and applies index-addressed mutations.
//! The list lives behind an `Arc`: mutations go through `Arc::make_mut`, so a
//! snapshot handed out earlier keeps its contents after any later edit.

use std::sync::Arc;

use crate::error::FilterError;

use super::types::{FilterClause, OperatorKind};

/// Immutable view of the clause list at one point in time
pub type ClauseSnapshot = Arc<Vec<FilterClause>>;

/// Ordered list of filter clauses (draft state)
#[derive(Debug, Clone, Default)]
pub struct FilterClauseStore {
    clauses: ClauseSnapshot,
}

impl FilterClauseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FilterClause> {
        self.clauses.get(index)
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// Share the current list; later mutations copy instead of writing through it
    pub fn snapshot(&self) -> ClauseSnapshot {
        Arc::clone(&self.clauses)
    }

    /// Replace the column of the clause at `index`
    pub fn set_column(
        &mut self,
        index: usize,
        column_id: impl Into<String>,
    ) -> Result<(), FilterError> {
        let clause = self.clause_mut(index)?;
        clause.column_id = column_id.into();
        tracing::trace!(index, column = %clause.column_id, "Clause column set");
        Ok(())
    }

    /// Replace the operator; the stored value is kept even for unary operators
    pub fn set_operation(
        &mut self,
        index: usize,
        operation: OperatorKind,
    ) -> Result<(), FilterError> {
        let clause = self.clause_mut(index)?;
        clause.operation = operation;
        tracing::trace!(index, operation = %operation, "Clause operator set");
        Ok(())
    }

    /// Replace the operator by name
    ///
    /// The index is checked before the name, so an out-of-range row reports
    /// an index error even when the name is also invalid.
    pub fn set_operation_named(&mut self, index: usize, name: &str) -> Result<(), FilterError> {
        self.check_index(index)?;
        let operation = name.parse::<OperatorKind>()?;
        self.set_operation(index, operation)
    }

    /// Replace the value regardless of the current operator
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), FilterError> {
        let clause = self.clause_mut(index)?;
        clause.value = value.into();
        tracing::trace!(index, "Clause value set");
        Ok(())
    }

    /// Push an unset `contains` clause at the end
    pub fn append(&mut self) {
        Arc::make_mut(&mut self.clauses).push(FilterClause::default());
        tracing::trace!(len = self.clauses.len(), "Clause appended");
    }

    /// Remove the clause at `index`; later clauses shift left in order
    pub fn remove_at(&mut self, index: usize) -> Result<FilterClause, FilterError> {
        self.check_index(index)?;
        let removed = Arc::make_mut(&mut self.clauses).remove(index);
        tracing::trace!(index, len = self.clauses.len(), "Clause removed");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        if !self.clauses.is_empty() {
            self.clauses = Arc::new(Vec::new());
        }
        tracing::trace!("Clauses cleared");
    }

    fn check_index(&self, index: usize) -> Result<(), FilterError> {
        if index < self.clauses.len() {
            Ok(())
        } else {
            Err(FilterError::index_out_of_range(index, self.clauses.len()))
        }
    }

    fn clause_mut(&mut self, index: usize) -> Result<&mut FilterClause, FilterError> {
        self.check_index(index)?;
        Ok(&mut Arc::make_mut(&mut self.clauses)[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(columns: &[&str]) -> FilterClauseStore {
        let mut store = FilterClauseStore::new();
        for (i, column) in columns.iter().enumerate() {
            store.append();
            store.set_column(i, *column).unwrap();
        }
        store
    }

    #[test]
    fn starts_empty() {
        let store = FilterClauseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(0).is_none());
    }

    #[test]
    fn append_adds_default_clause_at_end() {
        let mut store = store_with(&["age"]);
        store.append();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(&FilterClause::default()));
        assert_eq!(store.get(0).unwrap().column_id, "age");
    }

    #[test]
    fn set_column_leaves_operator_and_value() {
        let mut store = store_with(&["age"]);
        store.set_operation(0, OperatorKind::GreaterThan).unwrap();
        store.set_value(0, "30").unwrap();

        store.set_column(0, "height").unwrap();

        assert_eq!(
            store.get(0),
            Some(&FilterClause::new("height", OperatorKind::GreaterThan, "30"))
        );
    }

    #[test]
    fn set_operation_keeps_value_for_unary() {
        let mut store = store_with(&["name"]);
        store.set_value(0, "bob").unwrap();

        store.set_operation(0, OperatorKind::IsEmpty).unwrap();
        assert_eq!(store.get(0).unwrap().value, "bob");

        store.set_operation(0, OperatorKind::Contains).unwrap();
        assert_eq!(store.get(0).unwrap().value, "bob");
    }

    #[test]
    fn set_value_ignores_operator() {
        let mut store = store_with(&["name"]);
        store.set_operation(0, OperatorKind::IsNotEmpty).unwrap();
        store.set_value(0, "x").unwrap();
        assert_eq!(store.get(0).unwrap().value, "x");
    }

    #[test]
    fn setters_reject_out_of_range_index() {
        let mut store = store_with(&["a"]);
        let expected = Err(FilterError::index_out_of_range(1, 1));

        assert_eq!(store.set_column(1, "b"), expected);
        assert_eq!(store.set_operation(1, OperatorKind::Equals), expected);
        assert_eq!(store.set_value(1, "v"), expected);
        assert_eq!(store.remove_at(1).map(|_| ()), expected);
        assert_eq!(store.clauses(), &[FilterClause::new("a", OperatorKind::Contains, "")]);
    }

    #[test]
    fn set_operation_named_checks_index_then_name() {
        let mut store = store_with(&["a"]);

        assert_eq!(
            store.set_operation_named(5, "bogus"),
            Err(FilterError::index_out_of_range(5, 1))
        );
        assert_eq!(
            store.set_operation_named(0, "bogus"),
            Err(FilterError::invalid_operator("bogus"))
        );
        assert_eq!(store.get(0).unwrap().operation, OperatorKind::Contains);

        store.set_operation_named(0, "gte").unwrap();
        assert_eq!(store.get(0).unwrap().operation, OperatorKind::GreaterOrEqual);
    }

    #[test]
    fn remove_shifts_later_clauses_in_order() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        store.set_value(2, "keep").unwrap();

        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed.column_id, "b");
        let columns: Vec<_> = store.clauses().iter().map(|c| c.column_id.as_str()).collect();
        assert_eq!(columns, vec!["a", "c", "d"]);
        assert_eq!(store.get(1).unwrap().value, "keep");
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let mut store = store_with(&["a", "b"]);
        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn snapshot_is_not_affected_by_later_mutations() {
        let mut store = store_with(&["a", "b"]);
        let before = store.snapshot();

        store.set_value(0, "changed").unwrap();
        store.remove_at(1).unwrap();
        store.append();

        assert_eq!(before.len(), 2);
        assert_eq!(before[0], FilterClause::new("a", OperatorKind::Contains, ""));
        assert_eq!(before[1].column_id, "b");
        assert_eq!(store.get(0).unwrap().value, "changed");
    }

    #[test]
    fn snapshot_survives_clear() {
        let mut store = store_with(&["a"]);
        let before = store.snapshot();
        store.clear();
        assert_eq!(before.len(), 1);
        assert!(store.is_empty());
    }
}
