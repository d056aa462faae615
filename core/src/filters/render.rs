//! Plain-text rendering of a clause list

use std::fmt::Write;

use super::columns::ColumnCatalog;
use super::types::{Connector, FilterClause};

/// Text shown when there are no clauses
pub const EMPTY_FILTERS_TEXT: &str = "no filters yet.";

/// Column placeholder for clauses without a selected column
pub const UNSET_COLUMN_TEXT: &str = "(unset)";

/// Render clauses as `where Age contains "x" and Name is empty`
///
/// Column ids are replaced by catalog labels when known. Operands are quoted
/// verbatim; unary operators omit them.
pub fn describe(clauses: &[FilterClause], catalog: &ColumnCatalog) -> String {
    if clauses.is_empty() {
        return EMPTY_FILTERS_TEXT.to_string();
    }

    let mut out = String::new();
    for (index, clause) in clauses.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let column = if clause.is_active() {
            catalog
                .label_for(&clause.column_id)
                .unwrap_or(clause.column_id.as_str())
        } else {
            UNSET_COLUMN_TEXT
        };
        let _ = write!(
            out,
            "{} {} {}",
            Connector::for_index(index),
            column,
            clause.operation.label()
        );
        if let Some(value) = clause.operand() {
            let _ = write!(out, " \"{}\"", value);
        }
    }
    out
}
