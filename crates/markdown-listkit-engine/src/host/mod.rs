//! The engine's boundary with the embedding editor.
//!
//! The embedder registers the three [`Command`]s under their string ids,
//! implements [`EditorHost`] over its live buffer, and forwards invocations
//! to [`run`] (or [`run_command_id`] when dispatching by id). The engine
//! never touches the buffer itself; it hands back a batch of [`EditOp`]s for
//! the host to apply in one atomic edit.

pub mod scratch;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editing::{EditOp, MarkerKind, Selection, rewrite};

pub use scratch::ScratchBuffer;

/// The three host-invokable commands, one per marker kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    AddOrderedList,
    AddUnorderedList,
    AddBlockQuote,
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::AddOrderedList,
        Command::AddUnorderedList,
        Command::AddBlockQuote,
    ];

    /// Stable identifier the host registers this command under.
    pub const fn id(self) -> &'static str {
        match self {
            Command::AddOrderedList => "markdownListHelper.addOrderedList",
            Command::AddUnorderedList => "markdownListHelper.addUnorderedList",
            Command::AddBlockQuote => "markdownListHelper.addBlockQuote",
        }
    }

    /// Looks a command up by its string identifier.
    pub fn from_id(id: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }

    pub const fn marker_kind(self) -> MarkerKind {
        match self {
            Command::AddOrderedList => MarkerKind::Ordered,
            Command::AddUnorderedList => MarkerKind::Unordered,
            Command::AddBlockQuote => MarkerKind::Blockquote,
        }
    }
}

/// Snapshot of the focused buffer at the moment a command fires: its lines
/// (without terminators) and the current selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveContext {
    pub lines: Vec<String>,
    pub selections: Vec<Selection>,
}

/// What the engine needs from the embedding editor.
pub trait EditorHost {
    /// The focused buffer and its selections, or `None` when no buffer has
    /// focus. Failure modes of the lookup collapse to `None`; a command with
    /// no context is a silent no-op, not an error.
    fn active_context(&self) -> Option<ActiveContext>;

    /// Applies a rewrite batch to the buffer in one atomic edit. Ops are
    /// independent per line, so order does not matter, but intermediate
    /// states should not be visible.
    fn apply(&mut self, batch: &[EditOp]) -> anyhow::Result<()>;
}

/// Failure modes of command dispatch. The transform itself is total; only
/// the seams can fail.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command id: {0:?}")]
    UnknownCommand(String),
    #[error("failed to apply edit batch")]
    Apply(#[from] anyhow::Error),
}

/// Runs one command against the host's focused buffer.
///
/// No focused buffer is a no-op, and so is an empty batch (nothing selected
/// or selections out of range); the host is only called when there are edits
/// to apply.
pub fn run(host: &mut impl EditorHost, command: Command) -> Result<(), CommandError> {
    let Some(context) = host.active_context() else {
        return Ok(());
    };

    let batch = rewrite(&context.lines, &context.selections, command.marker_kind());
    if batch.is_empty() {
        return Ok(());
    }

    host.apply(&batch)?;
    Ok(())
}

/// Dispatches a command by its string identifier.
pub fn run_command_id(host: &mut impl EditorHost, id: &str) -> Result<(), CommandError> {
    let command =
        Command::from_id(id).ok_or_else(|| CommandError::UnknownCommand(id.to_string()))?;
    run(host, command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_ids_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_id(command.id()), Some(command));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(Command::from_id("markdownListHelper.addTable"), None);
    }

    #[test]
    fn kind_per_command() {
        assert_eq!(Command::AddOrderedList.marker_kind(), MarkerKind::Ordered);
        assert_eq!(
            Command::AddUnorderedList.marker_kind(),
            MarkerKind::Unordered
        );
        assert_eq!(Command::AddBlockQuote.marker_kind(), MarkerKind::Blockquote);
    }
}
