//! Collaborator interfaces
//!
//! The controller talks to its host through three synchronous callbacks.
//! Implementations must not call back into the controller that invoked them.

use super::active::ActiveFilterSet;

/// Active clause count before and after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountChange {
    pub previous: usize,
    pub current: usize,
}

/// Receives the recomputed active set after every mutation
pub trait CommitSink {
    fn apply(&mut self, active: &ActiveFilterSet);
}

/// Told when the number of active clauses changes
pub trait ChangeNotifier {
    fn filters_changed(&mut self, change: CountChange);
}

/// Told when the user closes the filter panel
pub trait DismissSignal {
    fn hide_panel(&mut self);
}

impl<F> CommitSink for F
where
    F: FnMut(&ActiveFilterSet),
{
    fn apply(&mut self, active: &ActiveFilterSet) {
        self(active)
    }
}

impl<F> ChangeNotifier for F
where
    F: FnMut(CountChange),
{
    fn filters_changed(&mut self, change: CountChange) {
        self(change)
    }
}

impl<F> DismissSignal for F
where
    F: FnMut(),
{
    fn hide_panel(&mut self) {
        self()
    }
}

/// Collaborator that ignores every call
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl CommitSink for Discard {
    fn apply(&mut self, _active: &ActiveFilterSet) {}
}

impl ChangeNotifier for Discard {
    fn filters_changed(&mut self, _change: CountChange) {}
}

impl DismissSignal for Discard {
    fn hide_panel(&mut self) {}
}
