//! Interactive filter session
//!
//! Reads one command per line, applies it through a [`FilterHandle`], and
//! prints whatever the controller reported back.

mod command;
mod host;

use anyhow::{Context, Result};
use gridfilter::filters::{ClauseSnapshot, describe};
use gridfilter::{ActiveFilterSet, FilterError, FilterHandle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::core::AppConfig;
use crate::core::constants::PROMPT;

pub use command::{CommandError, HELP_TEXT, SessionCommand};
pub use host::{HostEvent, column_lines, operator_lines, render_commit, session_controller};

/// State left when the session ended
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub clauses: ClauseSnapshot,
    pub active: ActiveFilterSet,
    /// Whether the user closed the panel (as opposed to quit/EOF)
    pub closed: bool,
}

enum Flow {
    Continue,
    Stop,
}

struct Session<'a, W> {
    config: &'a AppConfig,
    handle: FilterHandle,
    events: UnboundedReceiver<HostEvent>,
    output: &'a mut W,
    closed: bool,
}

/// Run one filter session until `quit`, `close`, or end of input
pub async fn run_session<R, W>(
    config: &AppConfig,
    mut input: R,
    output: &mut W,
) -> Result<SessionOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (handle, task) = FilterHandle::spawn(session_controller(config, events_tx));

    let mut session = Session {
        config,
        handle,
        events: events_rx,
        output,
        closed: false,
    };

    tracing::debug!(columns = config.columns.len(), "Filter session started");

    let mut buf = Vec::new();
    loop {
        if config.prompt {
            session.output.write_all(PROMPT.as_bytes()).await?;
            session.output.flush().await?;
        }

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::warn!(bytes = read, "Discarded input line with invalid UTF-8");
            session.write_line("error: invalid UTF-8 input").await?;
            continue;
        };

        let command = match SessionCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                session.write_line(&format!("error: {}", e)).await?;
                continue;
            }
        };

        tracing::trace!(command = ?command, "Session command");
        let flow = session.execute(command).await?;
        session.drain_events().await?;

        if matches!(flow, Flow::Stop) || session.closed {
            break;
        }
    }

    let Session { handle, closed, .. } = session;
    drop(handle);
    let controller = task.await.context("Filter session task failed")?;

    tracing::debug!(
        total = controller.len(),
        active = controller.active_count(),
        closed,
        "Filter session ended"
    );

    Ok(SessionOutcome {
        clauses: controller.clauses(),
        active: controller.active().clone(),
        closed,
    })
}

impl<W: AsyncWrite + Unpin> Session<'_, W> {
    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.write_line(line).await?;
        }
        Ok(())
    }

    async fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        let result = match command {
            SessionCommand::Add => self.handle.append().await,
            SessionCommand::Column { index, column_id } => {
                let result = self.handle.set_column(index, column_id.clone()).await;
                if result.is_ok() {
                    self.warn_unknown_column(&column_id).await?;
                }
                result
            }
            SessionCommand::Operation { index, name } => {
                self.handle.set_operation_named(index, name).await
            }
            SessionCommand::Value { index, value } => self.handle.set_value(index, value).await,
            SessionCommand::Remove { index } => self.handle.remove_at(index).await,
            SessionCommand::Clear => self.handle.clear().await,
            SessionCommand::Show => {
                self.show().await?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Columns => {
                self.write_lines(&column_lines(&self.config.columns)).await?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Operators => {
                self.write_lines(&operator_lines()).await?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Close => self.handle.hide_panel().await,
            SessionCommand::Help => {
                self.write_line(HELP_TEXT).await?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Quit => return Ok(Flow::Stop),
        };

        match result {
            Ok(()) => Ok(Flow::Continue),
            Err(FilterError::SessionClosed) => Err(FilterError::SessionClosed.into()),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected filter command");
                self.write_line(&format!("error: {}", e)).await?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn show(&mut self) -> Result<()> {
        let (clauses, active) = self.handle.snapshot().await?;
        let text = describe(&clauses, &self.config.columns);
        self.write_line(&text).await?;
        self.write_line(&format!(
            "{} clauses, {} active",
            clauses.len(),
            active.len()
        ))
        .await
    }

    /// Unknown ids are accepted; the column list is advisory
    async fn warn_unknown_column(&mut self, column_id: &str) -> Result<()> {
        let columns = &self.config.columns;
        if column_id.is_empty() || columns.is_empty() || columns.contains(column_id) {
            return Ok(());
        }
        tracing::warn!(column = %column_id, "Column not in configured column list");
        self.write_line(&format!(
            "warning: column '{}' is not in the column list",
            column_id
        ))
        .await
    }

    async fn drain_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            if event == HostEvent::PanelClosed {
                self.closed = true;
            }
            self.write_line(&event.to_line()).await?;
        }
        Ok(())
    }
}
