//! Filter controller
//!
//! Wraps the clause store and keeps the host in sync. After every successful
//! mutation the active set is rebuilt and committed; the change notifier only
//! fires when the active clause count moves.

use std::fmt;

use crate::error::FilterError;

use super::active::ActiveFilterSet;
use super::sink::{ChangeNotifier, CommitSink, CountChange, Discard, DismissSignal};
use super::store::{ClauseSnapshot, FilterClauseStore};
use super::types::{FilterClause, OperatorKind};

/// One filter panel session: draft clauses plus the host callbacks
pub struct FilterController {
    store: FilterClauseStore,
    active: ActiveFilterSet,
    /// Active count as of the last notification (0 before any)
    notified_count: usize,
    commit: Box<dyn CommitSink + Send>,
    notifier: Box<dyn ChangeNotifier + Send>,
    dismiss: Box<dyn DismissSignal + Send>,
}

impl FilterController {
    pub fn new(
        commit: impl CommitSink + Send + 'static,
        notifier: impl ChangeNotifier + Send + 'static,
    ) -> Self {
        Self {
            store: FilterClauseStore::new(),
            active: ActiveFilterSet::default(),
            notified_count: 0,
            commit: Box::new(commit),
            notifier: Box::new(notifier),
            dismiss: Box::new(Discard),
        }
    }

    /// Controller whose callbacks all do nothing
    pub fn detached() -> Self {
        Self::new(Discard, Discard)
    }

    /// Set the receiver of the panel-closed signal
    pub fn with_dismiss(mut self, dismiss: impl DismissSignal + Send + 'static) -> Self {
        self.dismiss = Box::new(dismiss);
        self
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FilterClause> {
        self.store.get(index)
    }

    /// Current draft list, unaffected by later mutations
    pub fn clauses(&self) -> ClauseSnapshot {
        self.store.snapshot()
    }

    /// Active set as of the last mutation
    pub fn active(&self) -> &ActiveFilterSet {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn set_column(
        &mut self,
        index: usize,
        column_id: impl Into<String>,
    ) -> Result<(), FilterError> {
        self.store.set_column(index, column_id)?;
        self.sync();
        Ok(())
    }

    pub fn set_operation(
        &mut self,
        index: usize,
        operation: OperatorKind,
    ) -> Result<(), FilterError> {
        self.store.set_operation(index, operation)?;
        self.sync();
        Ok(())
    }

    pub fn set_operation_named(&mut self, index: usize, name: &str) -> Result<(), FilterError> {
        self.store.set_operation_named(index, name)?;
        self.sync();
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), FilterError> {
        self.store.set_value(index, value)?;
        self.sync();
        Ok(())
    }

    pub fn append(&mut self) {
        self.store.append();
        self.sync();
    }

    pub fn remove_at(&mut self, index: usize) -> Result<(), FilterError> {
        self.store.remove_at(index)?;
        self.sync();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.sync();
    }

    /// Forward the panel-closed signal; clause state is untouched
    pub fn hide_panel(&mut self) {
        tracing::debug!(total = self.store.len(), "Filter panel dismissed");
        self.dismiss.hide_panel();
    }

    /// Rebuild the active set, commit it, and notify on count transitions
    fn sync(&mut self) {
        self.active = ActiveFilterSet::from_clauses(self.store.clauses());

        tracing::debug!(
            active = self.active.len(),
            total = self.store.len(),
            "Committing active filters"
        );
        self.commit.apply(&self.active);

        let current = self.active.len();
        if current != self.notified_count {
            let change = CountChange {
                previous: self.notified_count,
                current,
            };
            self.notified_count = current;
            tracing::debug!(
                previous = change.previous,
                current = change.current,
                "Active filter count changed"
            );
            self.notifier.filters_changed(change);
        }
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for FilterController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterController")
            .field("clauses", &self.store.clauses())
            .field("active", &self.active.len())
            .field("notified_count", &self.notified_count)
            .finish_non_exhaustive()
    }
}
