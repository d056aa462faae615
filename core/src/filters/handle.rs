//! Single-owner task for a filter controller
//!
//! Moves the controller into a tokio task and funnels every mutation through
//! one channel, so callers on any task see mutations applied in send order.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::FilterError;

use super::active::ActiveFilterSet;
use super::controller::FilterController;
use super::store::ClauseSnapshot;
use super::types::OperatorKind;

/// Command channel capacity
const COMMAND_BUFFER: usize = 64;

type Reply<T> = oneshot::Sender<Result<T, FilterError>>;

enum Command {
    Append(Reply<()>),
    SetColumn(usize, String, Reply<()>),
    SetOperation(usize, OperatorKind, Reply<()>),
    SetOperationNamed(usize, String, Reply<()>),
    SetValue(usize, String, Reply<()>),
    RemoveAt(usize, Reply<()>),
    Clear(Reply<()>),
    HidePanel(Reply<()>),
    Snapshot(Reply<(ClauseSnapshot, ActiveFilterSet)>),
}

/// Cloneable handle to a controller owned by a background task
#[derive(Clone)]
pub struct FilterHandle {
    tx: mpsc::Sender<Command>,
}

impl FilterHandle {
    /// Spawn the owning task; it ends once every handle is dropped
    pub fn spawn(controller: FilterController) -> (Self, JoinHandle<FilterController>) {
        let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);

        let task = tokio::spawn(async move {
            let mut controller = controller;
            while let Some(command) = rx.recv().await {
                Self::dispatch(&mut controller, command);
            }
            tracing::debug!(total = controller.len(), "Filter session task finished");
            controller
        });

        (Self { tx }, task)
    }

    fn dispatch(controller: &mut FilterController, command: Command) {
        // A dropped reply receiver only means the caller stopped waiting
        match command {
            Command::Append(reply) => {
                controller.append();
                let _ = reply.send(Ok(()));
            }
            Command::SetColumn(index, column_id, reply) => {
                let _ = reply.send(controller.set_column(index, column_id));
            }
            Command::SetOperation(index, operation, reply) => {
                let _ = reply.send(controller.set_operation(index, operation));
            }
            Command::SetOperationNamed(index, name, reply) => {
                let _ = reply.send(controller.set_operation_named(index, &name));
            }
            Command::SetValue(index, value, reply) => {
                let _ = reply.send(controller.set_value(index, value));
            }
            Command::RemoveAt(index, reply) => {
                let _ = reply.send(controller.remove_at(index));
            }
            Command::Clear(reply) => {
                controller.clear();
                let _ = reply.send(Ok(()));
            }
            Command::HidePanel(reply) => {
                controller.hide_panel();
                let _ = reply.send(Ok(()));
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(Ok((controller.clauses(), controller.active().clone())));
            }
        }
    }

    async fn request<T>(&self, build: impl FnOnce(Reply<T>) -> Command) -> Result<T, FilterError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(build(reply_tx))
            .await
            .map_err(|_| FilterError::SessionClosed)?;
        reply_rx.await.map_err(|_| FilterError::SessionClosed)?
    }

    pub async fn append(&self) -> Result<(), FilterError> {
        self.request(Command::Append).await
    }

    pub async fn set_column(
        &self,
        index: usize,
        column_id: impl Into<String>,
    ) -> Result<(), FilterError> {
        let column_id = column_id.into();
        self.request(|reply| Command::SetColumn(index, column_id, reply))
            .await
    }

    pub async fn set_operation(
        &self,
        index: usize,
        operation: OperatorKind,
    ) -> Result<(), FilterError> {
        self.request(|reply| Command::SetOperation(index, operation, reply))
            .await
    }

    pub async fn set_operation_named(
        &self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), FilterError> {
        let name = name.into();
        self.request(|reply| Command::SetOperationNamed(index, name, reply))
            .await
    }

    pub async fn set_value(
        &self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FilterError> {
        let value = value.into();
        self.request(|reply| Command::SetValue(index, value, reply))
            .await
    }

    pub async fn remove_at(&self, index: usize) -> Result<(), FilterError> {
        self.request(|reply| Command::RemoveAt(index, reply)).await
    }

    pub async fn clear(&self) -> Result<(), FilterError> {
        self.request(Command::Clear).await
    }

    pub async fn hide_panel(&self) -> Result<(), FilterError> {
        self.request(Command::HidePanel).await
    }

    /// Draft clause list and active set at this point in the sequence
    pub async fn snapshot(&self) -> Result<(ClauseSnapshot, ActiveFilterSet), FilterError> {
        self.request(Command::Snapshot).await
    }
}
