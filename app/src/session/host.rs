//! Host side of a filter session
//!
//! The controller callbacks run inside the session task; they only render and
//! queue events, which the command loop prints after each command.

use gridfilter::filters::{ActiveFilterSet, CountChange, FilterController, describe};
use gridfilter::{ColumnCatalog, OperatorKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::core::{AppConfig, OutputFormat};

/// Something the controller told the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Rendered active set handed to the filtering engine
    Committed(String),
    FiltersChanged(CountChange),
    PanelClosed,
}

impl HostEvent {
    pub fn to_line(&self) -> String {
        match self {
            HostEvent::Committed(rendered) => format!("apply: {}", rendered),
            HostEvent::FiltersChanged(change) => {
                format!("filters changed: {} -> {}", change.previous, change.current)
            }
            HostEvent::PanelClosed => "panel closed".to_string(),
        }
    }
}

/// Build a controller whose callbacks queue events on `events`
pub fn session_controller(
    config: &AppConfig,
    events: UnboundedSender<HostEvent>,
) -> FilterController {
    let format = config.output;
    let catalog = config.columns.clone();
    let commit_tx = events.clone();
    let change_tx = events.clone();
    let dismiss_tx = events;

    FilterController::new(
        move |active: &ActiveFilterSet| {
            let rendered = render_commit(active, format, &catalog);
            let _ = commit_tx.send(HostEvent::Committed(rendered));
        },
        move |change: CountChange| {
            tracing::info!(
                previous = change.previous,
                current = change.current,
                "Filters changed"
            );
            let _ = change_tx.send(HostEvent::FiltersChanged(change));
        },
    )
    .with_dismiss(move || {
        let _ = dismiss_tx.send(HostEvent::PanelClosed);
    })
}

/// Render an active set in the configured output format
pub fn render_commit(active: &ActiveFilterSet, format: OutputFormat, catalog: &ColumnCatalog) -> String {
    match format {
        OutputFormat::Json => {
            let predicates: Vec<_> = active.predicates().collect();
            match serde_json::to_string(&predicates) {
                Ok(json) => json,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to serialize active filters");
                    "[]".to_string()
                }
            }
        }
        OutputFormat::Text => describe(active, catalog),
    }
}

/// Operator table: canonical name, label, and a marker for unary operators
pub fn operator_lines() -> Vec<String> {
    OperatorKind::ALL
        .iter()
        .map(|op| {
            let marker = if op.is_unary() { "  (no value)" } else { "" };
            format!("{:<16}{}{}", op.as_str(), op.label(), marker)
        })
        .collect()
}

/// Column table: id and label
pub fn column_lines(catalog: &ColumnCatalog) -> Vec<String> {
    if catalog.is_empty() {
        return vec!["(no columns configured)".to_string()];
    }
    catalog
        .iter()
        .map(|c| format!("{:<16}{}", c.id, c.label))
        .collect()
}
