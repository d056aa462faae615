//! In-memory filter-criteria controller for interactive table filter panels.

pub mod error;
pub mod filters;

pub use error::FilterError;
pub use filters::{
    ActiveFilterSet, ColumnCatalog, ColumnOption, CountChange, FilterClause, FilterController,
    FilterHandle, OperatorKind,
};
