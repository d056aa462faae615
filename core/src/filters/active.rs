//! Active filter set derivation

use std::ops::Deref;

use serde::Serialize;

use super::types::{FilterClause, Predicate};

/// Clauses with a selected column, in list order
///
/// Always rebuilt from the full clause list; never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveFilterSet {
    clauses: Vec<FilterClause>,
}

impl ActiveFilterSet {
    /// Project a clause list onto its active clauses
    pub fn from_clauses(clauses: &[FilterClause]) -> Self {
        Self {
            clauses: clauses
                .iter()
                .filter(|clause| clause.is_active())
                .cloned()
                .collect(),
        }
    }

    /// Predicate views with operands suppressed for unary operators
    pub fn predicates(&self) -> impl Iterator<Item = Predicate<'_>> {
        self.clauses.iter().map(FilterClause::predicate)
    }

    pub fn into_vec(self) -> Vec<FilterClause> {
        self.clauses
    }
}

impl Deref for ActiveFilterSet {
    type Target = [FilterClause];

    fn deref(&self) -> &Self::Target {
        &self.clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::OperatorKind;

    fn clause(column: &str) -> FilterClause {
        FilterClause::new(column, OperatorKind::Contains, "")
    }

    #[test]
    fn empty_list_projects_to_empty_set() {
        assert!(ActiveFilterSet::from_clauses(&[]).is_empty());
    }

    #[test]
    fn keeps_only_clauses_with_columns_in_order() {
        let clauses = vec![
            clause(""),
            clause("b"),
            clause(""),
            clause("a"),
            clause("c"),
            clause(""),
        ];
        let active = ActiveFilterSet::from_clauses(&clauses);

        let columns: Vec<_> = active.iter().map(|c| c.column_id.as_str()).collect();
        assert_eq!(columns, vec!["b", "a", "c"]);
    }

    #[test]
    fn projection_is_idempotent() {
        let clauses = vec![clause("x"), clause(""), clause("y")];
        let once = ActiveFilterSet::from_clauses(&clauses);
        let twice = ActiveFilterSet::from_clauses(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn projection_matches_filter_over_many_shapes() {
        // Every unset/set pattern of length 5
        for mask in 0u32..32 {
            let clauses: Vec<_> = (0..5)
                .map(|i| {
                    if mask & (1 << i) != 0 {
                        clause(&format!("col{}", i))
                    } else {
                        clause("")
                    }
                })
                .collect();

            let active = ActiveFilterSet::from_clauses(&clauses);
            let expected: Vec<_> = clauses
                .iter()
                .filter(|c| !c.column_id.is_empty())
                .cloned()
                .collect();
            assert_eq!(active.len(), mask.count_ones() as usize);
            assert_eq!(active.into_vec(), expected);
        }
    }

    #[test]
    fn serializes_as_clause_array() {
        let active = ActiveFilterSet::from_clauses(&[clause(""), clause("age")]);
        let json = serde_json::to_value(&active).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"columnId": "age", "operation": "contains", "value": ""}])
        );
    }

    #[test]
    fn predicates_hide_unary_operands() {
        let active = ActiveFilterSet::from_clauses(&[
            FilterClause::new("a", OperatorKind::IsEmpty, "old"),
            FilterClause::new("b", OperatorKind::Equals, "1"),
        ]);
        let values: Vec<_> = active.predicates().map(|p| p.value).collect();
        assert_eq!(values, vec![None, Some("1")]);
    }
}
