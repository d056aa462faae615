//! Filter panel state
//!
//! Keeps an ordered conjunction of column/operator/value clauses and
//! synchronizes the active subset with the host.
//!
//! ## Usage
//!
//! ```
//! use gridfilter::filters::{ActiveFilterSet, CountChange, FilterController, OperatorKind};
//!
//! let mut controller = FilterController::new(
//!     |active: &ActiveFilterSet| println!("apply {} filters", active.len()),
//!     |change: CountChange| println!("{} -> {}", change.previous, change.current),
//! );
//! controller.append();
//! controller.set_column(0, "age").unwrap();
//! controller.set_operation(0, OperatorKind::GreaterThan).unwrap();
//! controller.set_value(0, "30").unwrap();
//! assert_eq!(controller.active_count(), 1);
//! ```

mod active;
mod columns;
mod controller;
mod handle;
mod render;
mod sink;
mod store;
mod types;

pub use active::ActiveFilterSet;
pub use columns::{ColumnCatalog, ColumnOption};
pub use controller::FilterController;
pub use handle::FilterHandle;
pub use render::{EMPTY_FILTERS_TEXT, UNSET_COLUMN_TEXT, describe};
pub use sink::{ChangeNotifier, CommitSink, CountChange, Discard, DismissSignal};
pub use store::{ClauseSnapshot, FilterClauseStore};
pub use types::{Connector, FilterClause, OperatorKind, Predicate};
